//! API Error Module
//!
//! This module defines the error type shared by all HTTP handlers and the
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations (IntoResponse, sqlx)
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, allowing handlers to
//! return it directly. Validation errors render the RealWorld field-level
//! error body; everything else renders a single error message with the
//! mapped status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, FieldErrors};
