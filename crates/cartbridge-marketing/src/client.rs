//! HTTP client for the marketing platform's JSON:API endpoints.

use std::time::Duration;

use async_trait::async_trait;
use cartbridge_core::settings::MarketingSettings;
use cartbridge_entities::marketing::{
    CatalogCategoryRequest, CatalogItemJobRequest, CatalogItemRequest, CatalogVariantJobRequest,
    CatalogVariantRequest, DeleteRequest, EventRequest, JobResponse, JobStatus, ProfileRequest,
};
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{MarketingApiError, MarketingResult};
use crate::types::JobHandle;

/// Calls the service wrapper makes against the marketing platform.
///
/// Kept behind a trait so the service can be exercised against a fake in
/// tests; `RestMarketingClient` is the production implementation.
#[async_trait]
pub trait MarketingApi: Send + Sync {
    async fn create_profile(&self, request: &ProfileRequest) -> MarketingResult<()>;
    async fn update_profile(&self, id: &str, request: &ProfileRequest) -> MarketingResult<()>;
    /// Resolve the platform's profile id for an external (commerce) id
    async fn find_profile_id(&self, external_id: &str) -> MarketingResult<Option<String>>;
    async fn create_event(&self, request: &EventRequest) -> MarketingResult<()>;
    async fn create_catalog_item(&self, request: &CatalogItemRequest) -> MarketingResult<()>;
    async fn update_catalog_item(
        &self,
        id: &str,
        request: &CatalogItemRequest,
    ) -> MarketingResult<()>;
    async fn delete_catalog_item(&self, request: &DeleteRequest) -> MarketingResult<()>;
    async fn update_catalog_variant(
        &self,
        id: &str,
        request: &CatalogVariantRequest,
    ) -> MarketingResult<()>;
    async fn create_catalog_category(
        &self,
        request: &CatalogCategoryRequest,
    ) -> MarketingResult<()>;
    async fn update_catalog_category(
        &self,
        id: &str,
        request: &CatalogCategoryRequest,
    ) -> MarketingResult<()>;
    async fn delete_catalog_category(&self, request: &DeleteRequest) -> MarketingResult<()>;
    async fn spawn_item_job(&self, request: &CatalogItemJobRequest) -> MarketingResult<JobHandle>;
    async fn spawn_variant_job(
        &self,
        request: &CatalogVariantJobRequest,
    ) -> MarketingResult<JobHandle>;
    async fn job_status(&self, handle: &JobHandle) -> MarketingResult<JobStatus>;
}

#[derive(serde::Deserialize)]
struct ProfileListResponse {
    #[serde(default)]
    data: Vec<ProfileListEntry>,
}

#[derive(serde::Deserialize)]
struct ProfileListEntry {
    id: String,
}

/// Production client speaking to the marketing platform over HTTPS
pub struct RestMarketingClient {
    base_url: String,
    api_key: String,
    revision: String,
    client: Client,
}

impl RestMarketingClient {
    /// Build a client from the connector settings.
    pub fn new(settings: &MarketingSettings) -> MarketingResult<Self> {
        if url::Url::parse(&settings.api_url).is_err() {
            return Err(MarketingApiError::InvalidConfiguration(format!(
                "invalid marketing API URL: {}",
                settings.api_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Cartbridge/1.0")
            .build()?;

        Ok(Self {
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            revision: settings.revision.clone(),
            client,
        })
    }

    async fn execute<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> MarketingResult<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Revision", &self.revision);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Marketing API returned {} for {}: {}", status, url, body);
            return Err(MarketingApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn spawn_job<B: Serialize + Sync>(
        &self,
        collection: &'static str,
        request: &B,
    ) -> MarketingResult<JobHandle> {
        let response = self
            .execute(Method::POST, &format!("api/{}", collection), Some(request))
            .await?;
        let job: JobResponse = response.json().await?;
        Ok(JobHandle {
            collection,
            id: job.data.id,
        })
    }
}

#[async_trait]
impl MarketingApi for RestMarketingClient {
    async fn create_profile(&self, request: &ProfileRequest) -> MarketingResult<()> {
        self.execute(Method::POST, "api/profiles", Some(request))
            .await?;
        Ok(())
    }

    async fn update_profile(&self, id: &str, request: &ProfileRequest) -> MarketingResult<()> {
        self.execute(Method::PATCH, &format!("api/profiles/{}", id), Some(request))
            .await?;
        Ok(())
    }

    async fn find_profile_id(&self, external_id: &str) -> MarketingResult<Option<String>> {
        let filter = format!("equals(external_id,\"{}\")", external_id);
        let response = self
            .execute::<()>(
                Method::GET,
                &format!("api/profiles?filter={}", urlencoding::encode(&filter)),
                None,
            )
            .await?;
        let listing: ProfileListResponse = response.json().await?;
        Ok(listing.data.into_iter().next().map(|entry| entry.id))
    }

    async fn create_event(&self, request: &EventRequest) -> MarketingResult<()> {
        self.execute(Method::POST, "api/events", Some(request))
            .await?;
        Ok(())
    }

    async fn create_catalog_item(&self, request: &CatalogItemRequest) -> MarketingResult<()> {
        self.execute(Method::POST, "api/catalog-items", Some(request))
            .await?;
        Ok(())
    }

    async fn update_catalog_item(
        &self,
        id: &str,
        request: &CatalogItemRequest,
    ) -> MarketingResult<()> {
        self.execute(
            Method::PATCH,
            &format!("api/catalog-items/{}", id),
            Some(request),
        )
        .await?;
        Ok(())
    }

    async fn delete_catalog_item(&self, request: &DeleteRequest) -> MarketingResult<()> {
        self.execute(
            Method::DELETE,
            &format!("api/catalog-items/{}", request.data.id),
            Some(request),
        )
        .await?;
        Ok(())
    }

    async fn update_catalog_variant(
        &self,
        id: &str,
        request: &CatalogVariantRequest,
    ) -> MarketingResult<()> {
        self.execute(
            Method::PATCH,
            &format!("api/catalog-variants/{}", id),
            Some(request),
        )
        .await?;
        Ok(())
    }

    async fn create_catalog_category(
        &self,
        request: &CatalogCategoryRequest,
    ) -> MarketingResult<()> {
        self.execute(Method::POST, "api/catalog-categories", Some(request))
            .await?;
        Ok(())
    }

    async fn update_catalog_category(
        &self,
        id: &str,
        request: &CatalogCategoryRequest,
    ) -> MarketingResult<()> {
        self.execute(
            Method::PATCH,
            &format!("api/catalog-categories/{}", id),
            Some(request),
        )
        .await?;
        Ok(())
    }

    async fn delete_catalog_category(&self, request: &DeleteRequest) -> MarketingResult<()> {
        self.execute(
            Method::DELETE,
            &format!("api/catalog-categories/{}", request.data.id),
            Some(request),
        )
        .await?;
        Ok(())
    }

    async fn spawn_item_job(&self, request: &CatalogItemJobRequest) -> MarketingResult<JobHandle> {
        self.spawn_job(request.data.kind.collection(), request).await
    }

    async fn spawn_variant_job(
        &self,
        request: &CatalogVariantJobRequest,
    ) -> MarketingResult<JobHandle> {
        self.spawn_job(request.data.kind.collection(), request).await
    }

    async fn job_status(&self, handle: &JobHandle) -> MarketingResult<JobStatus> {
        let response = self
            .execute::<()>(
                Method::GET,
                &format!("api/{}/{}", handle.collection, handle.id),
                None,
            )
            .await?;
        let job: JobResponse = response.json().await?;
        Ok(job.data.attributes.status)
    }
}
