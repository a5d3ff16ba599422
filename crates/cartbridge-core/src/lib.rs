//! Core utilities and types shared across all Cartbridge crates

pub mod currency;
pub mod error;
pub mod plugin;
pub mod problemdetails;
pub mod settings;
pub mod text;

pub use currency::to_major_units;
pub use error::{ServiceError, ServiceResult};
pub use problemdetails::Problem;
pub use settings::{MarketingSettings, SyncSettings};
pub use text::{clean_text, strip_non_ascii};

// Re-export external dependencies
pub use anyhow;
pub use chrono;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;
pub use uuid;
