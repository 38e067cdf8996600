//! # HTTP Request Handlers
//!
//! Each handler processes one route.
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `articles`: Index page, article view and article creation
//! - `users`: Login, logout and registration
//! - `forms`: Decoded bodies of the `POST` routes
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract what they need (state, [`AuthStatus`](crate::middleware::auth::AuthStatus),
//!    headers, path params, form body)
//! 2. Call the stores
//! 3. Hand a page to [`crate::render`], which picks HTML, JSON or XML
//!
//! Handlers never check login state themselves; the route guards in
//! [`crate::middleware::guards`] have already done so by the time they run.

pub mod articles;
pub mod forms;
pub mod health;
pub mod users;
