//! Shared value types used across commerce entities.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A locale-keyed string, e.g. `{"en-US": "Shoes", "de-DE": "Schuhe"}`.
///
/// The map is ordered so flattening is deterministic for identical input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString(pub BTreeMap<String, String>);

impl LocalizedString {
    /// Flatten to a single string: the preferred locale when present,
    /// otherwise the first entry, otherwise the empty string.
    pub fn resolve(&self, preferred_locale: Option<&str>) -> &str {
        if let Some(locale) = preferred_locale {
            if let Some(text) = self.0.get(locale) {
                return text;
            }
        }
        self.0.values().next().map(String::as_str).unwrap_or("")
    }

    /// The locale key the value resolves through, if any
    pub fn resolved_locale<'a>(&'a self, preferred_locale: Option<&'a str>) -> Option<&'a str> {
        if let Some(locale) = preferred_locale {
            if self.0.contains_key(locale) {
                return Some(locale);
            }
        }
        self.0.keys().next().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedString {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Reference to another commerce resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub type_id: String,
    pub id: String,
}

/// A monetary amount in minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub currency_code: String,
    pub cent_amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_digits: Option<u32>,
}

/// A price candidate attached to a product variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub value: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// A hosted product image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_configured_locale() {
        let name = LocalizedString::from([("de-DE", "Schuhe"), ("en-US", "Shoes")]);
        assert_eq!(name.resolve(Some("en-US")), "Shoes");
    }

    #[test]
    fn test_resolve_falls_back_to_first_entry() {
        let name = LocalizedString::from([("de-DE", "Schuhe"), ("en-US", "Shoes")]);
        assert_eq!(name.resolve(Some("fr-FR")), "Schuhe");
        assert_eq!(name.resolve(None), "Schuhe");
    }

    #[test]
    fn test_resolve_empty_map() {
        assert_eq!(LocalizedString::default().resolve(None), "");
    }
}
