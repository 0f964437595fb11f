//! API integration tests
//!
//! Contract tests for all API endpoints, run against a real PostgreSQL
//! database. Tests share one database and therefore run serially.

mod comments_test;
mod profiles_test;
mod tags_test;
mod users_test;
