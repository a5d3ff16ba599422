//! Serve command: run the HTTP intake server.

use std::sync::Arc;

use cartbridge_api::SyncPlugin;
use cartbridge_core::plugin::PluginManager;
use cartbridge_core::settings::SyncSettings;
use clap::Args;
use tracing::info;

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:8080", env = "CARTBRIDGE_ADDRESS")]
    pub address: String,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        let settings = Arc::new(SyncSettings::from_env()?);

        let mut manager = PluginManager::new();
        // Core services are registered before plugin initialization
        manager.service_context().register_service(settings);
        manager.register_plugin(Box::new(SyncPlugin::new()));
        manager.initialize_plugins().await?;

        let openapi = manager.get_unified_openapi()?;
        let app = manager.build_application()?.route(
            "/api/openapi.json",
            axum::routing::get(move || {
                let document = openapi.clone();
                async move { axum::Json(document) }
            }),
        );

        let listener = tokio::net::TcpListener::bind(&self.address).await?;
        info!("Cartbridge listening on {}", self.address);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
