//! SQLite dataset access.
//!
//! This module opens the weather dataset read-only behind a connection pool,
//! checks that it carries the tables the query service reads, and builds the
//! application state around it.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{Config, DataConfig};
use crate::error::{Result, SurfsUpError};
use crate::logging::{log_dataset_stats, log_timed_operation};
use crate::models::DatasetSummary;
use crate::queries::ClimateQueries;
use crate::state::AppState;

/// Tables the query service depends on
pub const REQUIRED_TABLES: [&str; 2] = ["measurement", "station"];

/// Open the dataset and create the application state
pub async fn load_dataset(path: &Path, config: Config) -> Result<AppState> {
    let pool = log_timed_operation("dataset_open", connect(path, &config.data)).await?;

    let summary = log_timed_operation("dataset_summary", summarize(&pool)).await?;
    log_dataset_stats(&path.display().to_string(), &summary);

    Ok(AppState::new(config, path.to_path_buf(), ClimateQueries::new(pool)))
}

/// Open a read-only connection pool onto the dataset and verify its schema
pub async fn connect(path: &Path, data: &DataConfig) -> Result<SqlitePool> {
    if !path.exists() {
        return Err(SurfsUpError::DatasetUnavailable {
            path: path.to_path_buf(),
            message: "file not found".to_string(),
        });
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(data.max_connections)
        .acquire_timeout(Duration::from_secs(data.acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(|e| SurfsUpError::DatasetUnavailable {
            path: path.to_path_buf(),
            message: format!("failed to open: {}", e),
        })?;

    info!("Opened dataset: {}", path.display());

    verify_schema(&pool, path).await?;

    Ok(pool)
}

/// Ensure both dataset tables are present
async fn verify_schema(pool: &SqlitePool, path: &Path) -> Result<()> {
    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(pool)
            .await
            .map_err(|e| SurfsUpError::DatasetUnavailable {
                path: path.to_path_buf(),
                message: format!("failed to read schema: {}", e),
            })?;

    debug!("Dataset tables: {:?}", tables);

    let missing: Vec<&str> = REQUIRED_TABLES
        .iter()
        .copied()
        .filter(|required| !tables.iter().any(|t| t == required))
        .collect();

    if !missing.is_empty() {
        return Err(SurfsUpError::DatasetUnavailable {
            path: path.to_path_buf(),
            message: format!("missing tables: {}", missing.join(", ")),
        });
    }

    Ok(())
}

/// Count rows and find the date coverage of the dataset
pub async fn summarize(pool: &SqlitePool) -> Result<DatasetSummary> {
    let mut conn = pool.acquire().await?;

    let station_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
        .fetch_one(&mut *conn)
        .await?;

    let (measurement_count, first_date, last_date): (i64, Option<String>, Option<String>) =
        sqlx::query_as("SELECT COUNT(*), MIN(date), MAX(date) FROM measurement")
            .fetch_one(&mut *conn)
            .await?;

    Ok(DatasetSummary {
        station_count,
        measurement_count,
        first_date,
        last_date,
    })
}
