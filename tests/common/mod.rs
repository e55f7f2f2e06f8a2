//! Common test utilities for surfsup.
//!
//! This module provides shared utilities for testing the surfsup server.

pub mod http_client;
pub mod test_data;
