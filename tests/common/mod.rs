//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - Test server construction

pub mod auth_helpers;
pub mod database;

use axum_test::TestServer;

use crate::common::database::TestDatabase;

/// Build a test server around a fresh application wired to the test
/// database
pub fn create_test_server(db: &TestDatabase) -> TestServer {
    let app = conduit::server::init::create_app(db.pool().clone());
    TestServer::new(app).expect("failed to build test server")
}
