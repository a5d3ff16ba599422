//! Event (metric) request bodies.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request wrapper for a tracked event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub data: EventData,
}

/// Event resource object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: EventAttributes,
}

/// Event attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAttributes {
    /// Profile identifiers, e.g. `$email`, `$first_name`
    pub profile: BTreeMap<String, String>,
    pub metric: Metric,
    pub properties: serde_json::Value,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub unique_id: String,
}

/// Named metric an event is tracked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
}
