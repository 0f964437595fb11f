//! Public profiles and the follow relationship.
//!
//! Routes:
//! - `GET /api/profiles/{username}` - fetch a profile
//! - `POST /api/profiles/{username}/follow` - follow
//! - `DELETE /api/profiles/{username}/follow` - unfollow

pub mod handlers;
pub mod repo;
pub mod types;

pub use handlers::{follow_profile, get_profile, unfollow_profile};
pub use types::Profile;
