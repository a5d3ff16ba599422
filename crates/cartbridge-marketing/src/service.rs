//! Service wrapper dispatching classified sync requests.

use std::sync::Arc;
use std::time::Duration;

use cartbridge_entities::marketing::{
    CatalogItemJobRequest, CatalogVariantJobRequest, JobStatus, ProfileRequest,
};
use tracing::{info, warn};

use crate::client::MarketingApi;
use crate::error::{MarketingApiError, MarketingResult};
use crate::types::{JobHandle, SyncRequest};

/// Status checks before a bulk job is considered stuck
const JOB_POLL_ATTEMPTS: u32 = 30;
const JOB_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Dispatches sync requests to the marketing API.
///
/// Stateless apart from the client handle; every call is an independent
/// invocation. The only local recovery is the documented conflict case on
/// profile creation.
pub struct MarketingService {
    api: Arc<dyn MarketingApi>,
}

impl MarketingService {
    pub fn new(api: Arc<dyn MarketingApi>) -> Self {
        Self { api }
    }

    /// Execute one sync request against the marketing platform.
    pub async fn send(&self, request: SyncRequest) -> MarketingResult<()> {
        info!("Sending {} request to marketing platform", request.kind());

        match request {
            SyncRequest::CreateProfile(body) => self.create_profile(body).await,
            SyncRequest::UpdateProfile(body) => self.update_profile(body).await,
            SyncRequest::TrackEvent(body) => self.api.create_event(&body).await,
            SyncRequest::CreateCatalogItem(body) => self.api.create_catalog_item(&body).await,
            SyncRequest::UpdateCatalogItem(body) => {
                let id = body.data.id.clone().ok_or(MarketingApiError::MissingIdentifier {
                    resource: "catalog item",
                })?;
                self.api.update_catalog_item(&id, &body).await
            }
            SyncRequest::DeleteCatalogItem(body) => self.api.delete_catalog_item(&body).await,
            SyncRequest::UpdateCatalogVariant(body) => {
                let id = body.data.id.clone().ok_or(MarketingApiError::MissingIdentifier {
                    resource: "catalog variant",
                })?;
                self.api.update_catalog_variant(&id, &body).await
            }
            SyncRequest::CreateCatalogCategory(body) => {
                self.api.create_catalog_category(&body).await
            }
            SyncRequest::UpdateCatalogCategory(body) => {
                let id = body.data.id.clone().ok_or(MarketingApiError::MissingIdentifier {
                    resource: "catalog category",
                })?;
                self.api.update_catalog_category(&id, &body).await
            }
            SyncRequest::DeleteCatalogCategory(body) => {
                self.api.delete_catalog_category(&body).await
            }
            SyncRequest::RunItemJob(body) => self.run_item_job(body).await,
            SyncRequest::RunVariantJob(body) => self.run_variant_job(body).await,
        }
    }

    /// Create a profile, converting a duplicate-profile conflict into a
    /// single follow-up update when the response names the existing profile.
    async fn create_profile(&self, body: ProfileRequest) -> MarketingResult<()> {
        match self.api.create_profile(&body).await {
            Ok(()) => Ok(()),
            Err(error) => match error.duplicate_profile_id() {
                Some(existing_id) => {
                    info!(
                        "Profile already exists as {}, retrying as update",
                        existing_id
                    );
                    let mut update = body;
                    update.data.id = Some(existing_id.clone());
                    self.api.update_profile(&existing_id, &update).await
                }
                None => Err(error),
            },
        }
    }

    /// Update a profile. The marketing-platform id is resolved from the
    /// external id when the request does not carry it; a profile that does
    /// not exist yet is created instead.
    async fn update_profile(&self, body: ProfileRequest) -> MarketingResult<()> {
        if let Some(id) = body.data.id.clone() {
            return self.api.update_profile(&id, &body).await;
        }

        match self
            .api
            .find_profile_id(&body.data.attributes.external_id)
            .await?
        {
            Some(existing_id) => {
                let mut update = body;
                update.data.id = Some(existing_id.clone());
                self.api.update_profile(&existing_id, &update).await
            }
            None => {
                info!(
                    "No profile found for external id {}, creating instead",
                    body.data.attributes.external_id
                );
                self.create_profile(body).await
            }
        }
    }

    async fn run_item_job(&self, body: CatalogItemJobRequest) -> MarketingResult<()> {
        if body.data.attributes.items.is_empty() {
            warn!("Skipping catalog item job with no items");
            return Ok(());
        }
        let handle = self.api.spawn_item_job(&body).await?;
        self.await_job(handle).await
    }

    async fn run_variant_job(&self, body: CatalogVariantJobRequest) -> MarketingResult<()> {
        if body.data.attributes.variants.is_empty() {
            warn!("Skipping catalog variant job with no variants");
            return Ok(());
        }
        let handle = self.api.spawn_variant_job(&body).await?;
        self.await_job(handle).await
    }

    /// Poll a spawned job until it reaches a terminal status. This is a
    /// bounded completion check, not a retry mechanism: a request that
    /// failed is never re-sent.
    async fn await_job(&self, handle: JobHandle) -> MarketingResult<()> {
        for attempt in 0..JOB_POLL_ATTEMPTS {
            match self.api.job_status(&handle).await? {
                JobStatus::Complete => {
                    info!("Bulk job {} completed", handle.id);
                    return Ok(());
                }
                JobStatus::Failed => {
                    return Err(MarketingApiError::JobFailed {
                        job_id: handle.id,
                    });
                }
                JobStatus::Queued | JobStatus::Processing => {
                    if attempt + 1 < JOB_POLL_ATTEMPTS {
                        tokio::time::sleep(JOB_POLL_INTERVAL).await;
                    }
                }
            }
        }

        Err(MarketingApiError::JobTimedOut {
            job_id: handle.id,
            attempts: JOB_POLL_ATTEMPTS,
        })
    }
}
