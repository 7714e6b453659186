//! HTTP request handlers for the dashboard page and its callbacks.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use crate::charts::Figure;
use crate::error::{DashboardError, Result};
use crate::server::state::AppState;

/// Raw query pairs, so a repeated key is not a deserialization error
pub type QueryPairs = Vec<(String, String)>;

/// The last value given for `key`, as the last dropdown change wins
fn last_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub networks: Vec<String>,
    pub default_network: String,
    pub modes: Vec<String>,
    pub default_mode: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub stations: usize,
    pub gares: usize,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.dashboard.render_page()?))
}

/// Flow A. A missing `mode` falls back to the default selection; when
/// repeated, the last one is used.
#[instrument(skip(state))]
pub async fn lines_by_mode(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<Figure> {
    let dashboard = &state.dashboard;
    let mode = last_value(&pairs, "mode")
        .unwrap_or_else(|| dashboard.options().default_mode.clone());
    Json(dashboard.lines_by_mode_figure(&mode))
}

/// Flow B. A missing `network` falls back to the default selection.
#[instrument(skip(state))]
pub async fn top_stations(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Json<Figure> {
    let dashboard = &state.dashboard;
    let network = last_value(&pairs, "network")
        .unwrap_or_else(|| dashboard.options().default_network.clone());
    Json(dashboard.top_stations_figure(&network))
}

pub async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let dashboard = &state.dashboard;
    Json(OptionsResponse {
        networks: dashboard.network_options(),
        default_network: dashboard.options().default_network.clone(),
        modes: dashboard.mode_options(),
        default_mode: dashboard.options().default_mode.clone(),
    })
}

pub async fn map(State(state): State<AppState>) -> Html<String> {
    Html(state.dashboard.map_html().to_string())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        stations: state.dashboard.stations().len(),
        gares: state.dashboard.gares().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_last_value() {
        let query = pairs(&[("mode", "RER"), ("other", "x"), ("mode", "Bateau")]);
        assert_eq!(last_value(&query, "mode").as_deref(), Some("Bateau"));
        assert_eq!(last_value(&query, "network"), None);
        assert_eq!(last_value(&[], "mode"), None);
    }
}
