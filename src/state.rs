//! Application state management for surfsup.
//!
//! The state shared by all handlers is immutable: configuration, the dataset
//! location, and the query service holding the connection pool.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::queries::ClimateQueries;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Location of the SQLite dataset
    pub database_path: PathBuf,
    /// Query service over the dataset
    pub queries: ClimateQueries,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, database_path: PathBuf, queries: ClimateQueries) -> Self {
        Self {
            config,
            database_path,
            queries,
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(
        config: Config,
        database_path: PathBuf,
        queries: ClimateQueries,
    ) -> Arc<Self> {
        Arc::new(Self::new(config, database_path, queries))
    }
}
