//! Order shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::Address;
use super::types::{LocalizedString, Money};

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub total_price: Money,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub order_state: OrderState,
    pub created_at: DateTime<Utc>,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: LocalizedString,
    pub quantity: i64,
    pub total_price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Order lifecycle state as reported by the commerce platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderState {
    Open,
    Confirmed,
    Complete,
    Cancelled,
    Unknown,
}

// States the platform may add later must not break message decoding, so
// anything unrecognized lands on `Unknown` instead of an error.
impl<'de> Deserialize<'de> for OrderState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let state = String::deserialize(deserializer)?;
        Ok(match state.as_str() {
            "Open" => Self::Open,
            "Confirmed" => Self::Confirmed,
            "Complete" => Self::Complete,
            "Cancelled" => Self::Cancelled,
            _ => Self::Unknown,
        })
    }
}
