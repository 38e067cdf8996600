use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

/// Name of the cookie that marks a browser as logged in
pub const TOKEN_COOKIE: &str = "token";

/// Per-request login state
///
/// Inserted into the request extensions by [`set_user_status`] and read back by
/// the guards and handlers through the extractor impl below. A request that
/// never passed through the middleware reads as logged out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_logged_in: bool,
}

impl AuthStatus {
    pub const LOGGED_IN: AuthStatus = AuthStatus { is_logged_in: true };
    pub const LOGGED_OUT: AuthStatus = AuthStatus { is_logged_in: false };

    /// Presence of the `token` cookie is all that is checked; its value is
    /// not looked up anywhere.
    pub fn from_cookies(jar: &CookieJar) -> Self {
        AuthStatus {
            is_logged_in: jar.get(TOKEN_COOKIE).is_some(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthStatus
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthStatus>()
            .copied()
            .unwrap_or_default())
    }
}

pub async fn set_user_status(jar: CookieJar, mut request: Request, next: Next) -> Response {
    let status = AuthStatus::from_cookies(&jar);
    request.extensions_mut().insert(status);

    next.run(request).await
}
