//! Temperature statistics endpoint handlers.
//!
//! `/api/v1.0/<start>` and `/api/v1.0/<start>/<end>` both answer with a
//! one-element array holding TMIN, TAVG and TMAX for the requested dates.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;

const START_ENDPOINT: &str = "/api/v1.0/:start";
const RANGE_ENDPOINT: &str = "/api/v1.0/:start/:end";

/// Handle GET /api/v1.0/:start requests
pub async fn temperature_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    temperature_stats(&state, START_ENDPOINT, &start, None).await
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    temperature_stats(&state, RANGE_ENDPOINT, &start, Some(&end)).await
}

async fn temperature_stats(
    state: &AppState,
    endpoint: &str,
    start: &str,
    end: Option<&str>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        start = start,
        end = end.unwrap_or("none"),
        "Processing temperature statistics request"
    );

    match state.queries.temperature_stats_for_range(start, end).await {
        Ok(stats) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Temperature statistics request successful"
            );
            Json(stats).into_response()
        }
        Err(error) => {
            let params = match end {
                Some(end) => format!("start={}, end={}", start, end),
                None => format!("start={}", start),
            };
            error_response(error, endpoint, &request_id, Some(&params))
        }
    }
}
