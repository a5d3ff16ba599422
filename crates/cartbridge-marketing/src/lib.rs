//! # cartbridge-marketing
//!
//! Thin wrapper around the marketing platform's HTTP API.
//!
//! `RestMarketingClient` performs the actual network calls;
//! `MarketingService` dispatches classified sync requests to the right call
//! and handles the one documented conflict case: a duplicate profile on
//! creation is retried as an update when the response names the existing
//! profile.

mod client;
mod error;
mod service;
mod types;

pub use client::{MarketingApi, RestMarketingClient};
pub use error::{MarketingApiError, MarketingResult};
pub use service::MarketingService;
pub use types::{JobHandle, SyncRequest};
