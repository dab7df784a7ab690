use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::data::{DataStore, SiteData};
use crate::services::rendering::PageRenderer;

pub struct ServerService {
    config: AppConfig,
}

impl ServerService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(build_state(&self.config)?);

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Loads the site data once; every request renders from it afresh.
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    info!("Loading site data from {}", config.data.data_dir.display());
    let data = SiteData::load(&DataStore::new(&config.data.data_dir))?;

    Ok(AppState {
        renderer: PageRenderer::new(data, config.tables.clone()),
        config: config.clone(),
    })
}
