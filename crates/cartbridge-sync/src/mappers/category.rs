//! Category mapping.

use std::sync::Arc;

use cartbridge_core::settings::SyncSettings;
use cartbridge_entities::commerce::Category;
use cartbridge_entities::marketing::{
    composite_id, CatalogCategoryAttributes, CatalogCategoryData, CatalogCategoryRequest,
    DeleteData, DeleteRequest, CATALOG_TYPE, INTEGRATION_TYPE,
};

/// Maps commerce categories to catalog category bodies.
///
/// The external id is the commerce category id, matching the references
/// embedded in catalog item relationships.
pub struct CategoryMapper {
    settings: Arc<SyncSettings>,
}

impl CategoryMapper {
    pub fn new(settings: Arc<SyncSettings>) -> Self {
        Self { settings }
    }

    pub fn catalog_category(&self, category: &Category, update: bool) -> CatalogCategoryRequest {
        CatalogCategoryRequest {
            data: CatalogCategoryData {
                kind: "catalog-category".to_string(),
                id: update.then(|| composite_id(&category.id)),
                attributes: CatalogCategoryAttributes {
                    integration_type: (!update).then(|| INTEGRATION_TYPE.to_string()),
                    catalog_type: (!update).then(|| CATALOG_TYPE.to_string()),
                    external_id: (!update).then(|| category.id.clone()),
                    name: category
                        .name
                        .resolve(self.settings.default_locale.as_deref())
                        .to_string(),
                },
            },
        }
    }

    pub fn delete_category(&self, category_id: &str) -> DeleteRequest {
        DeleteRequest {
            data: DeleteData {
                id: composite_id(category_id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        serde_json::from_value(serde_json::json!({
            "id": "cat-1",
            "name": {"en-US": "Footwear"}
        }))
        .unwrap()
    }

    fn mapper() -> CategoryMapper {
        CategoryMapper::new(Arc::new(SyncSettings::default()))
    }

    #[test]
    fn test_create_carries_external_id_and_no_composite() {
        let request = mapper().catalog_category(&category(), false);

        assert!(request.data.id.is_none());
        assert_eq!(request.data.attributes.external_id.as_deref(), Some("cat-1"));
        assert_eq!(
            request.data.attributes.integration_type.as_deref(),
            Some("$custom")
        );
        assert_eq!(request.data.attributes.name, "Footwear");
    }

    #[test]
    fn test_update_carries_composite_id_only() {
        let request = mapper().catalog_category(&category(), true);

        assert_eq!(
            request.data.id.as_deref(),
            Some("$custom:::$default:::cat-1")
        );
        assert!(request.data.attributes.external_id.is_none());
        assert!(request.data.attributes.integration_type.is_none());
    }

    #[test]
    fn test_delete_addresses_composite_id() {
        let request = mapper().delete_category("cat-9");
        assert_eq!(request.data.id, "$custom:::$default:::cat-9");
    }
}
