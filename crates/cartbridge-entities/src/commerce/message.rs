//! Inbound change messages.
//!
//! Messages are tagged by `type` and carry the affected entity inline. A
//! payload with an unrecognized `type` fails deserialization; the intake
//! layer surfaces that as an unsupported-event error rather than dropping it.

use serde::{Deserialize, Serialize};

use super::customer::Customer;
use super::inventory::InventoryEntry;
use super::order::Order;
use super::product::{Category, Product, ProductVariant};
use super::types::{LocalizedString, Reference};

/// A change message emitted by the commerce platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommerceMessage {
    ProductCreated {
        product: Product,
    },
    ProductPublished {
        product: Product,
    },
    /// Carries the last-known slug because the product itself is gone
    ProductDeleted {
        slug: LocalizedString,
    },
    ProductVariantDeleted {
        variant: ProductVariant,
    },
    InventoryQuantitySet {
        #[serde(rename = "inventoryEntry")]
        inventory_entry: InventoryEntry,
    },
    CustomerCreated {
        customer: Customer,
    },
    CustomerUpdated {
        customer: Customer,
    },
    OrderCreated {
        order: Order,
    },
    OrderStateChanged {
        order: Order,
    },
    CategoryCreated {
        category: Category,
    },
    CategoryUpdated {
        category: Category,
    },
    CategoryDeleted {
        resource: Reference,
    },
}

impl CommerceMessage {
    /// The wire name of the message type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ProductCreated { .. } => "ProductCreated",
            Self::ProductPublished { .. } => "ProductPublished",
            Self::ProductDeleted { .. } => "ProductDeleted",
            Self::ProductVariantDeleted { .. } => "ProductVariantDeleted",
            Self::InventoryQuantitySet { .. } => "InventoryQuantitySet",
            Self::CustomerCreated { .. } => "CustomerCreated",
            Self::CustomerUpdated { .. } => "CustomerUpdated",
            Self::OrderCreated { .. } => "OrderCreated",
            Self::OrderStateChanged { .. } => "OrderStateChanged",
            Self::CategoryCreated { .. } => "CategoryCreated",
            Self::CategoryUpdated { .. } => "CategoryUpdated",
            Self::CategoryDeleted { .. } => "CategoryDeleted",
        }
    }
}
