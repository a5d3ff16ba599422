//! # cartbridge-api
//!
//! HTTP intake for the connector: receives commerce change messages,
//! classifies them, and executes the resulting marketing calls. Also exposes
//! the bulk catalog import and a liveness endpoint.

mod handlers;
mod plugin;

pub use handlers::{
    configure_routes, CatalogImportRequest, HealthResponse, ImportMode, SyncAcceptedResponse,
    SyncApiDoc, SyncState,
};
pub use plugin::SyncPlugin;
