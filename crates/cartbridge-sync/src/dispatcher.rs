//! Classification of inbound commerce messages into sync requests.

use std::sync::Arc;

use cartbridge_core::settings::SyncSettings;
use cartbridge_entities::commerce::{CommerceMessage, Product};
use cartbridge_entities::marketing::{ItemJobType, VariantJobType};
use cartbridge_marketing::SyncRequest;
use tracing::debug;

use crate::mappers::{CategoryMapper, CustomerMapper, OrderMapper, ProductMapper};

/// Turns one decoded commerce message into the ordered list of marketing
/// calls it implies.
///
/// Classification is pure: no network access, no clock, no state. Messages
/// whose entity carries nothing to sync (an unpublished product, an order
/// without a customer email) classify to an empty list.
pub struct EventDispatcher {
    products: ProductMapper,
    customers: CustomerMapper,
    orders: OrderMapper,
    categories: CategoryMapper,
}

impl EventDispatcher {
    pub fn new(settings: Arc<SyncSettings>) -> Self {
        Self {
            products: ProductMapper::new(settings.clone()),
            customers: CustomerMapper::new(),
            orders: OrderMapper::new(settings.clone()),
            categories: CategoryMapper::new(settings),
        }
    }

    pub fn classify(&self, message: &CommerceMessage) -> Vec<SyncRequest> {
        let requests = match message {
            CommerceMessage::ProductCreated { product } => {
                let mut requests = Vec::new();
                if let Some(item) = self.products.catalog_item(product, false) {
                    requests.push(SyncRequest::CreateCatalogItem(item));
                }
                if let Some(job) = self
                    .products
                    .catalog_variant_job(product, VariantJobType::Create)
                {
                    requests.push(SyncRequest::RunVariantJob(job));
                }
                requests
            }
            CommerceMessage::ProductPublished { product } => {
                let mut requests = Vec::new();
                if let Some(item) = self.products.catalog_item(product, true) {
                    requests.push(SyncRequest::UpdateCatalogItem(item));
                }
                if let Some(job) = self
                    .products
                    .catalog_variant_job(product, VariantJobType::Update)
                {
                    requests.push(SyncRequest::RunVariantJob(job));
                }
                requests
            }
            CommerceMessage::ProductDeleted { slug } => {
                vec![SyncRequest::DeleteCatalogItem(
                    self.products.delete_item(slug),
                )]
            }
            CommerceMessage::ProductVariantDeleted { variant } => match variant.sku.clone() {
                Some(sku) => vec![SyncRequest::RunVariantJob(
                    self.products.catalog_variant_delete_job(&[sku]),
                )],
                // A variant that never had a sku was never synced
                None => Vec::new(),
            },
            CommerceMessage::InventoryQuantitySet { inventory_entry } => {
                vec![SyncRequest::UpdateCatalogVariant(
                    self.products.inventory_update(inventory_entry),
                )]
            }
            CommerceMessage::CustomerCreated { customer } => {
                vec![SyncRequest::CreateProfile(self.customers.profile(customer))]
            }
            CommerceMessage::CustomerUpdated { customer } => {
                vec![SyncRequest::UpdateProfile(self.customers.profile(customer))]
            }
            CommerceMessage::OrderCreated { order } => self
                .orders
                .placed_order_events(order)
                .into_iter()
                .map(SyncRequest::TrackEvent)
                .collect(),
            CommerceMessage::OrderStateChanged { order } => self
                .orders
                .state_change_events(order)
                .into_iter()
                .map(SyncRequest::TrackEvent)
                .collect(),
            CommerceMessage::CategoryCreated { category } => {
                vec![SyncRequest::CreateCatalogCategory(
                    self.categories.catalog_category(category, false),
                )]
            }
            CommerceMessage::CategoryUpdated { category } => {
                vec![SyncRequest::UpdateCatalogCategory(
                    self.categories.catalog_category(category, true),
                )]
            }
            CommerceMessage::CategoryDeleted { resource } => {
                vec![SyncRequest::DeleteCatalogCategory(
                    self.categories.delete_category(&resource.id),
                )]
            }
        };

        debug!(
            "Classified {} message into {} sync request(s)",
            message.type_name(),
            requests.len()
        );
        requests
    }

    /// Build the requests for a bulk catalog import: one item job over all
    /// products plus one variant job per product.
    pub fn catalog_import(&self, products: &[Product], update: bool) -> Vec<SyncRequest> {
        let item_job_type = if update {
            ItemJobType::Update
        } else {
            ItemJobType::Create
        };
        let variant_job_type = if update {
            VariantJobType::Update
        } else {
            VariantJobType::Create
        };

        let mut requests = vec![SyncRequest::RunItemJob(
            self.products.catalog_item_job(products, item_job_type),
        )];
        requests.extend(
            products
                .iter()
                .filter_map(|product| self.products.catalog_variant_job(product, variant_job_type))
                .map(SyncRequest::RunVariantJob),
        );
        requests
    }
}
