//! Message classification end to end.

use std::sync::Arc;

use cartbridge_core::settings::SyncSettings;
use cartbridge_entities::commerce::CommerceMessage;
use cartbridge_marketing::SyncRequest;
use cartbridge_sync::EventDispatcher;

fn dispatcher() -> EventDispatcher {
    EventDispatcher::new(Arc::new(SyncSettings {
        inventory_channel: Some("warehouse-eu".to_string()),
        ..Default::default()
    }))
}

fn message(value: serde_json::Value) -> CommerceMessage {
    serde_json::from_value(value).unwrap()
}

fn product_payload() -> serde_json::Value {
    serde_json::json!({
        "id": "prod-1",
        "masterData": {
            "current": {
                "name": {"en-US": "Shoes"},
                "slug": {"en-US": "shoes"},
                "masterVariant": {"id": 1, "sku": "SHOE-42"},
                "variants": [{"id": 2, "sku": "SHOE-43"}]
            }
        }
    })
}

#[test]
fn test_product_created_yields_item_create_and_variant_job() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "ProductCreated",
        "product": product_payload()
    })));

    assert_eq!(requests.len(), 2);
    assert!(matches!(requests[0], SyncRequest::CreateCatalogItem(_)));
    match &requests[1] {
        SyncRequest::RunVariantJob(job) => {
            assert_eq!(job.data.attributes.variants.len(), 2);
        }
        other => panic!("expected variant job, got {:?}", other.kind()),
    }
}

#[test]
fn test_product_published_yields_update_requests() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "ProductPublished",
        "product": product_payload()
    })));

    assert_eq!(requests.len(), 2);
    match &requests[0] {
        SyncRequest::UpdateCatalogItem(item) => {
            assert_eq!(item.data.id.as_deref(), Some("$custom:::$default:::shoes"));
        }
        other => panic!("expected item update, got {:?}", other.kind()),
    }
}

#[test]
fn test_unpublished_product_classifies_to_nothing() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "ProductCreated",
        "product": {"id": "prod-2", "masterData": {}}
    })));
    assert!(requests.is_empty());
}

#[test]
fn test_product_deleted_addresses_item_by_slug() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "ProductDeleted",
        "slug": {"en-US": "shoes"}
    })));

    match &requests[0] {
        SyncRequest::DeleteCatalogItem(request) => {
            assert_eq!(request.data.id, "$custom:::$default:::shoes");
        }
        other => panic!("expected item delete, got {:?}", other.kind()),
    }
}

#[test]
fn test_inventory_message_without_matching_channel_omits_quantity() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "InventoryQuantitySet",
        "inventoryEntry": {
            "id": "inv-1",
            "sku": "SHOE-42",
            "availableQuantity": 3,
            "supplyChannel": {"typeId": "channel", "id": "warehouse-us"}
        }
    })));

    match &requests[0] {
        SyncRequest::UpdateCatalogVariant(request) => {
            let attributes = request.data.attributes.as_ref().unwrap();
            assert_eq!(attributes.inventory_quantity, None);
            assert_eq!(attributes.inventory_policy, Some(1));
            assert_eq!(
                request.data.id.as_deref(),
                Some("$custom:::$default:::SHOE-42")
            );
        }
        other => panic!("expected variant update, got {:?}", other.kind()),
    }
}

#[test]
fn test_inventory_message_with_matching_channel_carries_quantity() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "InventoryQuantitySet",
        "inventoryEntry": {
            "id": "inv-1",
            "sku": "SHOE-42",
            "availableQuantity": 3,
            "supplyChannel": {"typeId": "channel", "id": "warehouse-eu"}
        }
    })));

    match &requests[0] {
        SyncRequest::UpdateCatalogVariant(request) => {
            assert_eq!(
                request.data.attributes.as_ref().unwrap().inventory_quantity,
                Some(3)
            );
        }
        other => panic!("expected variant update, got {:?}", other.kind()),
    }
}

#[test]
fn test_variant_deleted_runs_a_bulk_delete_job() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "ProductVariantDeleted",
        "variant": {"id": 2, "sku": "SHOE-43"}
    })));

    match &requests[0] {
        SyncRequest::RunVariantJob(job) => {
            let entry = &job.data.attributes.variants[0];
            assert_eq!(entry.id.as_deref(), Some("$custom:::$default:::SHOE-43"));
            assert!(entry.attributes.is_none());
        }
        other => panic!("expected variant job, got {:?}", other.kind()),
    }
}

#[test]
fn test_variant_deleted_without_sku_classifies_to_nothing() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "ProductVariantDeleted",
        "variant": {"id": 2}
    })));
    assert!(requests.is_empty());
}

#[test]
fn test_customer_messages_map_to_profile_requests() {
    let created = dispatcher().classify(&message(serde_json::json!({
        "type": "CustomerCreated",
        "customer": {"id": "c-1", "email": "jan@example.com"}
    })));
    assert!(matches!(created[0], SyncRequest::CreateProfile(_)));

    let updated = dispatcher().classify(&message(serde_json::json!({
        "type": "CustomerUpdated",
        "customer": {"id": "c-1", "email": "jan@example.com"}
    })));
    assert!(matches!(updated[0], SyncRequest::UpdateProfile(_)));
}

#[test]
fn test_order_created_tracks_one_event_per_line_plus_order() {
    let requests = dispatcher().classify(&message(serde_json::json!({
        "type": "OrderCreated",
        "order": {
            "id": "order-1",
            "customerEmail": "jan@example.com",
            "totalPrice": {"currencyCode": "EUR", "centAmount": 5998},
            "lineItems": [
                {"id": "l1", "name": {"en-US": "Shoes"}, "quantity": 1,
                 "totalPrice": {"currencyCode": "EUR", "centAmount": 4999}},
                {"id": "l2", "name": {"en-US": "Socks"}, "quantity": 2,
                 "totalPrice": {"currencyCode": "EUR", "centAmount": 999}}
            ],
            "orderState": "Open",
            "createdAt": "2024-05-01T12:00:00Z"
        }
    })));

    assert_eq!(requests.len(), 3);
    assert!(requests
        .iter()
        .all(|r| matches!(r, SyncRequest::TrackEvent(_))));
}

#[test]
fn test_category_lifecycle_maps_to_catalog_category_calls() {
    let created = dispatcher().classify(&message(serde_json::json!({
        "type": "CategoryCreated",
        "category": {"id": "cat-1", "name": {"en-US": "Footwear"}}
    })));
    assert!(matches!(created[0], SyncRequest::CreateCatalogCategory(_)));

    let deleted = dispatcher().classify(&message(serde_json::json!({
        "type": "CategoryDeleted",
        "resource": {"typeId": "category", "id": "cat-1"}
    })));
    match &deleted[0] {
        SyncRequest::DeleteCatalogCategory(request) => {
            assert_eq!(request.data.id, "$custom:::$default:::cat-1");
        }
        other => panic!("expected category delete, got {:?}", other.kind()),
    }
}

#[test]
fn test_catalog_import_builds_item_job_and_per_product_variant_jobs() {
    let products = vec![
        serde_json::from_value(product_payload()).unwrap(),
        serde_json::from_value(serde_json::json!({"id": "prod-2", "masterData": {}})).unwrap(),
    ];

    let requests = dispatcher().catalog_import(&products, false);

    // One item job plus a variant job for the single publishable product
    assert_eq!(requests.len(), 2);
    match &requests[0] {
        SyncRequest::RunItemJob(job) => assert_eq!(job.data.attributes.items.len(), 1),
        other => panic!("expected item job, got {:?}", other.kind()),
    }
    assert!(matches!(requests[1], SyncRequest::RunVariantJob(_)));
}
