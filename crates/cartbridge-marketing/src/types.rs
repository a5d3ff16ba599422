//! Classified sync requests consumed by the service wrapper.

use cartbridge_entities::marketing::{
    CatalogCategoryRequest, CatalogItemJobRequest, CatalogItemRequest, CatalogVariantJobRequest,
    CatalogVariantRequest, DeleteRequest, EventRequest, ProfileRequest,
};

/// One fully-mapped call against the marketing platform.
///
/// Produced by the dispatcher from an inbound commerce message, executed by
/// [`crate::MarketingService`], and discarded. Requests addressing an
/// existing resource carry the composite id inside their body.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncRequest {
    CreateProfile(ProfileRequest),
    UpdateProfile(ProfileRequest),
    TrackEvent(EventRequest),
    CreateCatalogItem(CatalogItemRequest),
    UpdateCatalogItem(CatalogItemRequest),
    DeleteCatalogItem(DeleteRequest),
    UpdateCatalogVariant(CatalogVariantRequest),
    CreateCatalogCategory(CatalogCategoryRequest),
    UpdateCatalogCategory(CatalogCategoryRequest),
    DeleteCatalogCategory(DeleteRequest),
    RunItemJob(CatalogItemJobRequest),
    RunVariantJob(CatalogVariantJobRequest),
}

impl SyncRequest {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateProfile(_) => "profile.create",
            Self::UpdateProfile(_) => "profile.update",
            Self::TrackEvent(_) => "event.track",
            Self::CreateCatalogItem(_) => "catalog-item.create",
            Self::UpdateCatalogItem(_) => "catalog-item.update",
            Self::DeleteCatalogItem(_) => "catalog-item.delete",
            Self::UpdateCatalogVariant(_) => "catalog-variant.update",
            Self::CreateCatalogCategory(_) => "catalog-category.create",
            Self::UpdateCatalogCategory(_) => "catalog-category.update",
            Self::DeleteCatalogCategory(_) => "catalog-category.delete",
            Self::RunItemJob(_) => "catalog-item.bulk-job",
            Self::RunVariantJob(_) => "catalog-variant.bulk-job",
        }
    }
}

/// Handle for a spawned bulk job: the collection it was spawned against and
/// the id to poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub collection: &'static str,
    pub id: String,
}
