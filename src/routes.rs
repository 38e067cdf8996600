//! # Router
//!
//! Path table and middleware ordering.
//!
//! Request flow, outermost first:
//! 1. `TraceLayer` logs the request/response
//! 2. `set_user_status` attaches the caller's `AuthStatus`
//! 3. the route's guard chain (if any) admits or rejects
//! 4. the handler runs and renders its page

use crate::handlers::articles::*;
use crate::handlers::health::health_check;
use crate::handlers::users::*;
use crate::middleware::auth::set_user_status;
use crate::middleware::guards::{enforce, Guard, GuardChain};
use crate::state::AppState;
use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let members_only = from_fn_with_state(GuardChain::new([Guard::RequireAuthenticated]), enforce);
    let guests_only = from_fn_with_state(GuardChain::new([Guard::RequireNotAuthenticated]), enforce);

    let user_routes = Router::new()
        .route("/login", get(show_login_page).post(perform_login))
        .route("/register", get(show_registration_page).post(register))
        .route_layer(guests_only)
        .merge(
            Router::new()
                .route("/logout", get(logout))
                .route_layer(members_only.clone()),
        );

    let article_routes = Router::new()
        .route(
            "/create",
            get(show_article_creation_page).post(create_article),
        )
        .route_layer(members_only)
        .route("/view/:article_id", get(get_article));

    Router::new()
        .route("/", get(show_index_page))
        .route("/health", get(health_check))
        .nest("/u", user_routes)
        .nest("/article", article_routes)
        .layer(from_fn(set_user_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
