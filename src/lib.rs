//! # surfsup
//!
//! A read-only JSON climate API over a historical weather dataset.
//!
//! The dataset is a SQLite file with two tables: `measurement` (daily
//! precipitation and temperature per station) and `station`. The server
//! answers four fixed queries over it:
//!
//! - precipitation for the most recent year of data
//! - the list of stations
//! - the last year of temperature observations at the most active station
//! - min/avg/max temperature from a start date, optionally up to an end date
//!
//! ## Architecture
//!
//! - **Dataset Layer**: opens the SQLite file read-only behind a connection pool
//! - **Query Layer**: one pooled connection per operation, released on return
//! - **API Layer**: axum routes that serialize query results to JSON

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod queries;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{Result, SurfsUpError};
pub use handlers::create_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats,
    log_request_error, log_timed_operation,
};
pub use models::{
    DatasetSummary, Measurement, PrecipitationByDate, Station, TemperatureObservation,
    TemperatureStats,
};
pub use queries::ClimateQueries;
pub use state::AppState;
