//! # Article Board
//!
//! A small server-rendered article site: anyone can read articles, members
//! log in (or register) to write new ones. Every page is available as HTML,
//! JSON or XML depending on the request's `Accept` header.
//!
//! ## Key Concepts
//! - **Login state**: a `token` cookie marks a browser as logged in; a
//!   middleware turns it into a typed flag on every request
//! - **Route guards**: member-only and guest-only routes are checked before
//!   their handlers run
//! - **In-memory stores**: users and articles live for the process lifetime

mod config;      // Configuration management (environment variables, settings)
mod error;       // Error handling and custom error types
mod handlers;    // HTTP request handlers (routes)
mod middleware;  // Login-state middleware and route guards
mod render;      // HTML/JSON/XML content negotiation and page templates
mod routes;      // Path table and middleware ordering
mod state;       // Shared application state
mod store;       // In-memory user and article stores

use crate::config::Config;
use crate::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Builds the shared stores
/// 4. Wires the router and starts the HTTP server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app.
    // Can be overridden with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,article_board=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config);
    tracing::info!(
        users = app_state.users.len(),
        articles = app_state.articles.get_all_articles().len(),
        "Application state initialized"
    );

    let app = routes::router(app_state);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
