//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, Uri},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::domain::Station;
use crate::stations::{StationFilter, list_stations};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Message returned when the query string cannot be decoded.
pub(super) const INVALID_QUERY_MESSAGE: &str = "query string could not be decoded";

/// Create the application router.
///
/// Every resource answers `GET` (and `HEAD`); other methods get a 405 and
/// unknown paths a 404, both with a JSON error body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/stations", get(get_stations).fallback(method_not_allowed))
        .route("/hello", get(hello).fallback(method_not_allowed))
        .route("/test", get(test_page).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// List stations, optionally filtered by city and code.
async fn get_stations(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Station>>, AppError> {
    let Query(pairs) = pairs.map_err(|e| {
        tracing::debug!(error = %e, "undecodable query string");
        AppError::BadRequest {
            message: INVALID_QUERY_MESSAGE.to_string(),
        }
    })?;
    let query = StationQuery::from_pairs(pairs);

    let filter = StationFilter::from_params(query.city.as_deref(), query.code.as_deref());
    let stations = list_stations(state.stations.as_ref(), &filter)?;

    Ok(Json(stations))
}

/// Greeting endpoint, used as a liveness check.
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello, world!".to_string(),
    })
}

/// Plain-text smoke test endpoint.
async fn test_page() -> &'static str {
    "this is a test"
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}
