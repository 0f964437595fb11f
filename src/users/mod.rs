//! User registration, authentication and account updates.
//!
//! Routes:
//! - `POST /api/users` - register
//! - `POST /api/users/login` - login
//! - `GET /api/user` - current user
//! - `PUT /api/user` - update current user

pub mod handlers;
pub mod repo;
pub mod types;

pub use handlers::{current_user, login, register, update_user};
