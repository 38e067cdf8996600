use crate::error::{AppError, AppResult};
use crate::handlers::forms::CredentialsForm;
use crate::middleware::auth::{AuthStatus, TOKEN_COOKIE};
use crate::render::views::{FormStatus, LoginPage, LoginSuccessfulPage, RegisterPage};
use crate::render::{render, render_with_status};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

pub async fn show_login_page(auth: AuthStatus, headers: HeaderMap) -> AppResult<Response> {
    render(auth, &headers, &LoginPage::new())
}

pub async fn perform_login(
    State(state): State<AppState>,
    auth: AuthStatus,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    if !state.users.is_user_valid(&form.username, &form.password) {
        tracing::warn!(username = %form.username, "login rejected");

        let page = LoginPage::failed(FormStatus::failed(
            "Login Failed",
            "Invalid credentials provided",
        ));
        return render_with_status(StatusCode::BAD_REQUEST, auth, &headers, &page);
    }

    tracing::info!(username = %form.username, "user logged in");

    let jar = jar.add(session_cookie(&state));
    let page = LoginSuccessfulPage::new("Successful Login", form.username);
    let response = render(AuthStatus::LOGGED_IN, &headers, &page)?;

    Ok((jar, response).into_response())
}

pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));

    (jar, Redirect::temporary("/"))
}

pub async fn show_registration_page(auth: AuthStatus, headers: HeaderMap) -> AppResult<Response> {
    render(auth, &headers, &RegisterPage::new())
}

pub async fn register(
    State(state): State<AppState>,
    auth: AuthStatus,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<CredentialsForm>,
) -> AppResult<Response> {
    let user = match state.users.register_new_user(&form.username, &form.password) {
        Ok(user) => user,
        Err(AppError::Validation(message)) => {
            tracing::debug!(username = %form.username, %message, "registration rejected");

            let page = RegisterPage::failed(FormStatus::failed("Registration Failed", message));
            return render_with_status(StatusCode::BAD_REQUEST, auth, &headers, &page);
        }
        Err(e) => return Err(e),
    };

    tracing::info!(username = %user.username, "user registered");

    let jar = jar.add(session_cookie(&state));
    let page = LoginSuccessfulPage::new("Successful registration & Login", user.username);
    let response = render(AuthStatus::LOGGED_IN, &headers, &page)?;

    Ok((jar, response).into_response())
}

fn session_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, Uuid::new_v4().simple().to_string()))
        .path("/")
        .http_only(true)
        .max_age(state.token_max_age)
        .build()
}
