//! # Route Guards
//!
//! Guards decide, from the request's [`AuthStatus`], whether a route may run.
//! A guard either lets the request continue (`Ok(())`) or halts it with a
//! [`GuardRejection`], which always carries `401 Unauthorized`.
//!
//! Routes attach an ordered [`GuardChain`] through [`enforce`]:
//!
//! ```rust,ignore
//! Router::new()
//!     .route("/create", get(show_article_creation_page))
//!     .route_layer(from_fn_with_state(
//!         GuardChain::new([Guard::RequireAuthenticated]),
//!         enforce,
//!     ));
//! ```

use crate::error::AppError;
use crate::middleware::auth::AuthStatus;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Only logged-in callers may continue (logout, article creation)
    RequireAuthenticated,
    /// Only logged-out callers may continue (login, registration)
    RequireNotAuthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    NotAuthenticated,
    AlreadyAuthenticated,
}

impl GuardRejection {
    pub fn status(self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn message(self) -> &'static str {
        match self {
            GuardRejection::NotAuthenticated => "Not authenticated",
            GuardRejection::AlreadyAuthenticated => "Already authenticated",
        }
    }
}

impl From<GuardRejection> for AppError {
    fn from(rejection: GuardRejection) -> Self {
        AppError::Unauthorized(rejection.message().to_string())
    }
}

impl Guard {
    pub fn check(self, status: AuthStatus) -> Result<(), GuardRejection> {
        match (self, status.is_logged_in) {
            (Guard::RequireAuthenticated, false) => Err(GuardRejection::NotAuthenticated),
            (Guard::RequireNotAuthenticated, true) => Err(GuardRejection::AlreadyAuthenticated),
            _ => Ok(()),
        }
    }
}

/// Ordered list of guards evaluated before a route's handler
#[derive(Debug, Clone)]
pub struct GuardChain {
    guards: Arc<[Guard]>,
}

impl GuardChain {
    pub fn new(guards: impl Into<Arc<[Guard]>>) -> Self {
        Self {
            guards: guards.into(),
        }
    }

    /// Runs the guards in order; the first rejection wins.
    pub fn evaluate(&self, status: AuthStatus) -> Result<(), GuardRejection> {
        self.guards.iter().try_for_each(|guard| guard.check(status))
    }
}

pub async fn enforce(
    State(chain): State<GuardChain>,
    auth: AuthStatus,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(rejection) = chain.evaluate(auth) {
        tracing::debug!(
            path = %request.uri().path(),
            status = %rejection.status(),
            ?rejection,
            "request halted by route guard"
        );
        return Err(rejection.into());
    }

    Ok(next.run(request).await)
}
