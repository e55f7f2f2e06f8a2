//! Precipitation endpoint handler.
//!
//! Returns a JSON object mapping each date in the most recent year of data to
//! its precipitation value.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match state.queries.most_recent_year_precipitation().await {
        Ok(precipitation) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                date_count = precipitation.len(),
                "Precipitation request successful"
            );
            Json(precipitation).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
