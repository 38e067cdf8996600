//! # Store Module
//!
//! In-memory data stores, one submodule per concept:
//! - `models`: Data structures (User, Article) and the demo seed data
//! - `users`: Registered users, credential checks and registration
//! - `articles`: Published articles, lookup and creation
//!
//! Each store owns its list behind a lock and is shared through
//! [`crate::state::AppState`]. Nothing here is persisted; the data lives as
//! long as the process.

pub mod articles;
pub mod models;
pub mod users;
