//! Catalog item, variant, and category request bodies.
//!
//! The same variant body type serves both the full upsert and the narrow
//! inventory patch; every attribute the patch does not carry is optional and
//! omitted from the serialized JSON.

use serde::{Deserialize, Serialize};

/// Request wrapper for a single catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemRequest {
    pub data: CatalogItemData,
}

/// Catalog item resource object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemData {
    #[serde(rename = "type")]
    pub kind: String,
    /// Composite id; present on updates, absent on creates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: CatalogItemAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

/// Catalog item attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItemAttributes {
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_full_url: Option<String>,
    pub price: f64,
    pub custom_metadata: CustomMetadata,
}

/// Localized and price metadata carried as pre-serialized JSON strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMetadata {
    pub title_json: String,
    pub slug_json: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_json: Option<String>,
}

/// Request wrapper for a single catalog variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariantRequest {
    pub data: CatalogVariantData,
}

/// Catalog variant resource object; bulk-delete entries carry only
/// `type` and `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariantData {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CatalogVariantAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

/// Catalog variant attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogVariantAttributes {
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_full_url: Option<String>,
    /// Absent signals "no applicable inventory", distinct from zero stock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_metadata: Option<CustomMetadata>,
}

/// Request wrapper for a catalog category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategoryRequest {
    pub data: CatalogCategoryData,
}

/// Catalog category resource object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategoryData {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: CatalogCategoryAttributes,
}

/// Catalog category attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategoryAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub name: String,
}

/// Relationship sets attached to catalog resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Relationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Relationship>,
}

/// A list of related resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub data: Vec<RelationshipData>,
}

/// Reference to one related resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipData {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Deletion body addressing a resource by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub data: DeleteData,
}

/// The id payload of a deletion body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteData {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_optionals_are_omitted_from_json() {
        let data = CatalogVariantData {
            kind: "catalog-variant".to_string(),
            id: Some("$custom:::$default:::SKU-1".to_string()),
            attributes: None,
            relationships: None,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "catalog-variant", "id": "$custom:::$default:::SKU-1"})
        );
    }

    #[test]
    fn test_inventory_patch_keeps_quantity_absence() {
        let attributes = CatalogVariantAttributes {
            published: true,
            inventory_policy: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&attributes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"published": true, "inventory_policy": 1})
        );
    }
}
