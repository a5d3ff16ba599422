//! Marketing platform request bodies (JSON:API style), produced per call
//! and discarded once the request completes.

mod catalog;
mod errors;
mod event;
mod identifiers;
mod jobs;
mod profile;

pub use catalog::{
    CatalogCategoryAttributes, CatalogCategoryData, CatalogCategoryRequest, CatalogItemAttributes,
    CatalogItemData, CatalogItemRequest, CatalogVariantAttributes, CatalogVariantData,
    CatalogVariantRequest, CustomMetadata, DeleteData, DeleteRequest, Relationship,
    RelationshipData, Relationships,
};
pub use errors::extract_duplicate_profile_id;
pub use event::{EventAttributes, EventData, EventRequest, Metric};
pub use identifiers::{composite_id, CATALOG_TYPE, INTEGRATION_TYPE};
pub use jobs::{
    CatalogItemJobAttributes, CatalogItemJobData, CatalogItemJobRequest, CatalogVariantJobAttributes,
    CatalogVariantJobData, CatalogVariantJobRequest, ItemJobType, JobResponse, JobResponseData,
    JobStatus, JobStatusAttributes, VariantJobType,
};
pub use profile::{ProfileAttributes, ProfileData, ProfileLocation, ProfileRequest};
