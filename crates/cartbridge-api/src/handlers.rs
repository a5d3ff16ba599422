//! HTTP handlers for the sync intake API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use cartbridge_core::problemdetails::{self, Problem};
use cartbridge_entities::commerce::{CommerceMessage, Product};
use cartbridge_marketing::{MarketingApiError, MarketingService};
use cartbridge_sync::EventDispatcher;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{OpenApi, ToSchema};

/// Shared state for sync handlers
pub struct SyncState {
    pub dispatcher: Arc<EventDispatcher>,
    pub marketing: Arc<MarketingService>,
}

impl SyncState {
    pub fn new(dispatcher: Arc<EventDispatcher>, marketing: Arc<MarketingService>) -> Self {
        Self {
            dispatcher,
            marketing,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(receive_event, import_catalog, health),
    components(schemas(SyncAcceptedResponse, HealthResponse)),
    info(
        title = "Sync API",
        description = "Commerce change intake and catalog import endpoints",
        version = "1.0.0"
    ),
    tags(
        (name = "Sync", description = "Commerce-to-marketing synchronization endpoints")
    )
)]
pub struct SyncApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Acknowledgement returned once every implied marketing call has been made
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncAcceptedResponse {
    /// The classified message type
    #[schema(example = "ProductPublished")]
    pub message_type: String,
    /// Number of marketing API calls the message produced
    pub requests_sent: usize,
}

/// Batch catalog import payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CatalogImportRequest {
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub mode: ImportMode,
}

/// Whether the import creates new catalog entries or updates existing ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    #[default]
    Create,
    Update,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Receive one commerce change message
#[utoipa::path(
    post,
    path = "/sync/events",
    responses(
        (status = 202, description = "Message processed", body = SyncAcceptedResponse),
        (status = 422, description = "Unsupported or undecodable message"),
        (status = 502, description = "Marketing API call failed")
    ),
    tag = "Sync"
)]
async fn receive_event(
    State(state): State<Arc<SyncState>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, Problem> {
    let message: CommerceMessage = serde_json::from_value(payload).map_err(|e| {
        warn!("Rejecting unsupported commerce message: {}", e);
        problemdetails::new(StatusCode::UNPROCESSABLE_ENTITY)
            .with_title("Unsupported event type")
            .with_detail(e.to_string())
    })?;

    let requests = state.dispatcher.classify(&message);
    let total = requests.len();

    for request in requests {
        state
            .marketing
            .send(request)
            .await
            .map_err(vendor_problem)?;
    }

    info!(
        "Processed {} message, {} marketing call(s) made",
        message.type_name(),
        total
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(SyncAcceptedResponse {
            message_type: message.type_name().to_string(),
            requests_sent: total,
        }),
    ))
}

/// Import a batch of products into the marketing catalog
#[utoipa::path(
    post,
    path = "/sync/catalog",
    responses(
        (status = 202, description = "Import jobs completed", body = SyncAcceptedResponse),
        (status = 502, description = "Marketing API call failed")
    ),
    tag = "Sync"
)]
async fn import_catalog(
    State(state): State<Arc<SyncState>>,
    Json(request): Json<CatalogImportRequest>,
) -> Result<impl IntoResponse, Problem> {
    let update = matches!(request.mode, ImportMode::Update);
    let requests = state.dispatcher.catalog_import(&request.products, update);
    let total = requests.len();

    for request in requests {
        state
            .marketing
            .send(request)
            .await
            .map_err(vendor_problem)?;
    }

    info!(
        "Imported {} product(s) through {} bulk job(s)",
        request.products.len(),
        total
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(SyncAcceptedResponse {
            message_type: "CatalogImport".to_string(),
            requests_sent: total,
        }),
    ))
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Sync"
)]
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

fn vendor_problem(error: MarketingApiError) -> Problem {
    error!("Marketing API call failed: {}", error);
    let mut problem = problemdetails::new(StatusCode::BAD_GATEWAY)
        .with_title("Marketing API call failed")
        .with_detail(error.to_string());
    if let Some(status) = error.status() {
        problem = problem.with_value("vendor_status", status);
    }
    problem
}

/// Build the sync router; state is attached by the plugin.
pub fn configure_routes() -> Router<Arc<SyncState>> {
    Router::new()
        .route("/sync/events", post(receive_event))
        .route("/sync/catalog", post(import_catalog))
        .route("/health", get(health))
}
