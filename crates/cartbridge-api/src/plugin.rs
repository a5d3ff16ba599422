//! Sync plugin wiring services and routes into the plugin system.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use cartbridge_core::plugin::{
    CartbridgePlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use cartbridge_core::settings::SyncSettings;
use cartbridge_marketing::{MarketingApi, MarketingService, RestMarketingClient};
use cartbridge_sync::EventDispatcher;
use tracing::debug;
use utoipa::openapi::OpenApi;
use utoipa::OpenApi as OpenApiTrait;

use crate::handlers::{configure_routes, SyncApiDoc, SyncState};

/// Plugin providing the event dispatcher, the marketing service, and the
/// HTTP intake routes
pub struct SyncPlugin;

impl SyncPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SyncPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl CartbridgePlugin for SyncPlugin {
    fn name(&self) -> &'static str {
        "sync"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let settings = context.require_service::<SyncSettings>();

            let client = RestMarketingClient::new(&settings.marketing)
                .map_err(|e| PluginError::InitializationFailed(e.to_string()))?;
            let api: Arc<dyn MarketingApi> = Arc::new(client);
            context.register_service(api.clone());

            let marketing = Arc::new(MarketingService::new(api));
            context.register_service(marketing.clone());

            let dispatcher = Arc::new(EventDispatcher::new(settings.clone()));
            context.register_service(dispatcher.clone());

            let state = Arc::new(SyncState::new(dispatcher, marketing));
            context.register_service(state);

            debug!("Sync plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let state = context.require_service::<SyncState>();
        Some(PluginRoutes::new(configure_routes().with_state(state)))
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(<SyncApiDoc as OpenApiTrait>::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_plugin_name() {
        assert_eq!(SyncPlugin::new().name(), "sync");
    }
}
