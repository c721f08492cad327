//! Middleware for the plastics production tracking service

mod auth;

pub use auth::{auth_middleware, require_admin, AuthUser, Claims, CurrentUser};
