//! Local HTTP layer re-serving upstream charts with dashboard-side filtering
//! applied.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{client::ApiClient, config::Settings};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub client: ApiClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/charts/diagnosis-icicle", get(routes::diagnosis_icicle))
        .route(
            "/charts/medications-sunburst",
            get(routes::medications_sunburst),
        )
        .route(
            "/charts/hospital-transfers-chord",
            get(routes::hospital_transfers_chord),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let client = ApiClient::new(&settings)?;
    let state = AppState {
        settings: settings.clone(),
        client,
    };
    let app = router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, upstream = %settings.api_base_url, "serving mimic-insight API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
