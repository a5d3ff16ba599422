//! Bulk catalog job request and status bodies.

use serde::{Deserialize, Serialize};

use super::catalog::{CatalogItemData, CatalogVariantData};

/// Bulk job kinds for catalog items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemJobType {
    #[serde(rename = "catalog-item-bulk-create-job")]
    Create,
    #[serde(rename = "catalog-item-bulk-update-job")]
    Update,
}

impl ItemJobType {
    /// API collection the job is spawned against and polled from
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Create => "catalog-item-bulk-create-jobs",
            Self::Update => "catalog-item-bulk-update-jobs",
        }
    }
}

/// Bulk job kinds for catalog variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantJobType {
    #[serde(rename = "catalog-variant-bulk-create-job")]
    Create,
    #[serde(rename = "catalog-variant-bulk-update-job")]
    Update,
    #[serde(rename = "catalog-variant-bulk-delete-job")]
    Delete,
}

impl VariantJobType {
    /// API collection the job is spawned against and polled from
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Create => "catalog-variant-bulk-create-jobs",
            Self::Update => "catalog-variant-bulk-update-jobs",
            Self::Delete => "catalog-variant-bulk-delete-jobs",
        }
    }
}

/// Request wrapper for a catalog item bulk job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemJobRequest {
    pub data: CatalogItemJobData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemJobData {
    #[serde(rename = "type")]
    pub kind: ItemJobType,
    pub attributes: CatalogItemJobAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemJobAttributes {
    pub items: Vec<CatalogItemData>,
}

/// Request wrapper for a catalog variant bulk job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariantJobRequest {
    pub data: CatalogVariantJobData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariantJobData {
    #[serde(rename = "type")]
    pub kind: VariantJobType,
    pub attributes: CatalogVariantJobAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariantJobAttributes {
    pub variants: Vec<CatalogVariantData>,
}

/// Job resource returned by spawn and status calls
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobResponse {
    pub data: JobResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobResponseData {
    pub id: String,
    pub attributes: JobStatusAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobStatusAttributes {
    pub status: JobStatus,
}

/// Lifecycle of a bulk job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Processing,
    Complete,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serializes_to_wire_name() {
        let json = serde_json::to_string(&ItemJobType::Create).unwrap();
        assert_eq!(json, "\"catalog-item-bulk-create-job\"");
    }

    #[test]
    fn test_job_response_parses_status() {
        let response: JobResponse = serde_json::from_value(serde_json::json!({
            "data": {"id": "job-1", "attributes": {"status": "processing"}}
        }))
        .unwrap();
        assert_eq!(response.data.attributes.status, JobStatus::Processing);
        assert!(!response.data.attributes.status.is_terminal());
    }
}
