//! Authentication primitives: JWT issuance/verification and password
//! hashing. The HTTP-facing extractors live in `middleware/auth.rs`.

pub mod password;
pub mod tokens;

pub use tokens::{create_token, verify_token, Claims};
