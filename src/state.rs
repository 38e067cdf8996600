//! # Application State
//!
//! The shared state every request handler can reach through axum's `State`
//! extractor.
//!
//! ## The State Pattern
//! The stores are created once at startup, wrapped in `Arc`, and handed to the
//! router. Axum clones `AppState` for each request, which only copies the
//! pointers. Handlers never reach for a global list; whatever they read or
//! write is injected here.

use crate::config::Config;
use crate::store::articles::ArticleStore;
use crate::store::models::{demo_articles, demo_users};
use crate::store::users::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// ## Thread Safety
/// Each store serializes access internally with a read/write lock, so the
/// `Arc`s can be shared freely across request tasks.
#[derive(Clone)]
pub struct AppState {
    /// Registered members, used by login and registration
    pub users: Arc<UserStore>,

    /// Published articles, used by the index, article view and creation routes
    pub articles: Arc<ArticleStore>,

    /// Max-age handed out with the `token` cookie
    pub token_max_age: time::Duration,
}

impl AppState {
    /// Build the state from configuration
    ///
    /// With `seed_demo_data` the stores start with the three demo accounts and
    /// two demo articles; otherwise they start empty.
    pub fn new(config: &Config) -> Self {
        let (users, articles) = if config.seed_demo_data {
            (
                UserStore::with_users(demo_users()),
                ArticleStore::with_articles(demo_articles()),
            )
        } else {
            (UserStore::new(), ArticleStore::new())
        };

        AppState {
            users: Arc::new(users),
            articles: Arc::new(articles),
            token_max_age: time::Duration::seconds(config.token_max_age_secs),
        }
    }
}
