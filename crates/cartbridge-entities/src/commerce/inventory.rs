//! Inventory entry shape.

use serde::{Deserialize, Serialize};

use super::types::Reference;

/// Stock record for a single sku, optionally scoped to a supply channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    pub id: String,
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_channel: Option<Reference>,
}
