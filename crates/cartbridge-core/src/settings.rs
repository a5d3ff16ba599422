//! Connector settings read from the environment.

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Default revision header value sent to the marketing API
pub const DEFAULT_API_REVISION: &str = "2023-02-22";

/// Settings controlling mapping output and the marketing API connection.
///
/// All mapping options are optional; an unset option disables the
/// corresponding behavior rather than falling back to a guess.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyncSettings {
    /// Currency code preferred by price selection
    pub preferred_currency: Option<String>,
    /// Inventory channel id used by the channel-priority chain.
    /// Unset disables channel inventory entirely; an empty value is a
    /// configured-but-blank channel and is treated differently by the chain.
    pub inventory_channel: Option<String>,
    /// Product URL template with `{{productSlug}}` / `{{productName}}` placeholders
    pub product_url_template: Option<String>,
    /// Locale key preferred when flattening localized strings
    pub default_locale: Option<String>,
    /// Marketing platform connection
    pub marketing: MarketingSettings,
}

/// Marketing platform connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingSettings {
    pub api_url: String,
    pub api_key: String,
    pub revision: String,
}

impl Default for MarketingSettings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            revision: DEFAULT_API_REVISION.to_string(),
        }
    }
}

impl SyncSettings {
    /// Read settings from the environment.
    ///
    /// Mapping options are optional; the marketing API URL and key are
    /// required because the connector cannot do anything without them.
    pub fn from_env() -> ServiceResult<Self> {
        let marketing = MarketingSettings {
            api_url: require_env("MARKETING_API_URL")?,
            api_key: require_env("MARKETING_API_KEY")?,
            revision: optional_env("MARKETING_API_REVISION")
                .unwrap_or_else(|| DEFAULT_API_REVISION.to_string()),
        };

        Ok(Self {
            preferred_currency: optional_env("PREFERRED_CURRENCY"),
            inventory_channel: optional_env("INVENTORY_CHANNEL"),
            product_url_template: optional_env("PRODUCT_URL_TEMPLATE"),
            default_locale: optional_env("DEFAULT_LOCALE"),
            marketing,
        })
    }
}

fn require_env(name: &str) -> ServiceResult<String> {
    std::env::var(name).map_err(|_| ServiceError::Configuration {
        message: format!("{} is not set", name),
    })
}

// An empty value is kept as Some("") so that "configured but blank" stays
// distinguishable from "not configured".
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SyncSettings::default();
        assert!(settings.preferred_currency.is_none());
        assert!(settings.inventory_channel.is_none());
        assert!(settings.product_url_template.is_none());
        assert_eq!(settings.marketing.revision, DEFAULT_API_REVISION);
    }

    #[test]
    fn test_settings_from_json_uses_defaults_for_missing_fields() {
        let settings: SyncSettings =
            serde_json::from_value(serde_json::json!({"preferred_currency": "EUR"})).unwrap();
        assert_eq!(settings.preferred_currency.as_deref(), Some("EUR"));
        assert!(settings.inventory_channel.is_none());
    }
}
