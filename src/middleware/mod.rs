//! Request-level plumbing: authenticated-user extractors.

pub mod auth;

pub use auth::{AuthUser, OptionalAuthUser};
