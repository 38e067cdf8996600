//! # Middleware Module
//!
//! Request interceptors that run before the route handlers.
//!
//! ## Our Middleware
//! - `auth`: Turns the `token` cookie into a typed [`auth::AuthStatus`] on
//!   every request
//! - `guards`: Per-route checks on that status that either let the request
//!   through or stop it with `401 Unauthorized`
//!
//! Ordering matters: `auth::set_user_status` is layered on the whole router,
//! so it has always run by the time a guard or handler reads the status.

pub mod auth;
pub mod guards;
