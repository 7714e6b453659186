pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::utils::constants::{
    ROUTE_HEALTH, ROUTE_INDEX, ROUTE_LINES_BY_MODE, ROUTE_MAP, ROUTE_OPTIONS, ROUTE_TOP_STATIONS,
};
pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROUTE_INDEX, get(handlers::index))
        .route(ROUTE_LINES_BY_MODE, get(handlers::lines_by_mode))
        .route(ROUTE_TOP_STATIONS, get(handlers::top_stations))
        .route(ROUTE_OPTIONS, get(handlers::options))
        .route(ROUTE_MAP, get(handlers::map))
        .route(ROUTE_HEALTH, get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until the process is stopped
pub async fn serve(state: AppState, bind_address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!(address = %listener.local_addr()?, "dashboard listening");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
