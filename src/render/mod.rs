//! # Rendering
//!
//! Every page can be served three ways. The request's `Accept` header picks
//! one:
//!
//! | `Accept`           | Response                                   |
//! |--------------------|--------------------------------------------|
//! | `application/json` | the page payload as JSON                   |
//! | `application/xml`  | the page payload as XML                    |
//! | anything else      | the page's HTML template inside the layout |
//!
//! The header value is compared verbatim; `text/html,application/json;q=0.9`
//! is served as HTML.
//!
//! Only the HTML form sees the caller's login state (it decides which menu
//! entries the layout shows). JSON and XML carry the payload alone.

pub mod views;

use crate::error::AppResult;
use crate::middleware::auth::AuthStatus;
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Response encoding chosen from the `Accept` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
    Xml,
}

impl Format {
    pub fn negotiate(headers: &HeaderMap) -> Self {
        match headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
            Some("application/json") => Format::Json,
            Some("application/xml") => Format::Xml,
            _ => Format::Html,
        }
    }
}

/// A renderable page
///
/// Implementors supply the data for each representation: a payload for
/// JSON/XML and an HTML body for the template. Each page type is one named
/// template.
pub trait View {
    type Payload: Serialize;

    /// Template name, used in logs
    const TEMPLATE: &'static str;

    /// Root element name when the payload is encoded as XML
    const XML_ROOT: &'static str;

    fn title(&self) -> &str;

    fn payload(&self) -> &Self::Payload;

    /// Page-specific HTML, placed inside the shared layout
    fn body(&self) -> String;

    fn xml(&self) -> AppResult<String> {
        Ok(quick_xml::se::to_string_with_root(
            Self::XML_ROOT,
            self.payload(),
        )?)
    }
}

/// Render `view` with `200 OK`
pub fn render<V: View>(auth: AuthStatus, headers: &HeaderMap, view: &V) -> AppResult<Response> {
    render_with_status(StatusCode::OK, auth, headers, view)
}

/// Render `view` with an explicit status, e.g. `400` when a form submission
/// is sent back with an error message
pub fn render_with_status<V: View>(
    status: StatusCode,
    auth: AuthStatus,
    headers: &HeaderMap,
    view: &V,
) -> AppResult<Response> {
    let format = Format::negotiate(headers);
    tracing::trace!(template = V::TEMPLATE, ?format, %status, "rendering page");

    let response = match format {
        Format::Json => (status, Json(view.payload())).into_response(),
        Format::Xml => (
            status,
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            view.xml()?,
        )
            .into_response(),
        Format::Html => (
            status,
            Html(views::layout(view.title(), auth, &view.body())),
        )
            .into_response(),
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::{demo_articles, Article};
    use axum::http::HeaderValue;
    use super::views::{ArticlePage, IndexPage};

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[test]
    fn negotiate_matches_exact_values_only() {
        assert_eq!(Format::negotiate(&accept("application/json")), Format::Json);
        assert_eq!(Format::negotiate(&accept("application/xml")), Format::Xml);
        assert_eq!(Format::negotiate(&accept("text/html")), Format::Html);
        assert_eq!(
            Format::negotiate(&accept("text/html,application/json;q=0.9")),
            Format::Html
        );
        assert_eq!(Format::negotiate(&HeaderMap::new()), Format::Html);
    }

    #[tokio::test]
    async fn json_renders_payload_only() {
        let page = ArticlePage::new(Article::new(7, "Title", "Body"));
        let resp = render(AuthStatus::LOGGED_IN, &accept("application/json"), &page).unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("application/json"));

        let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "title": "Title", "content": "Body" })
        );
    }

    #[tokio::test]
    async fn xml_uses_page_root_element() {
        let page = ArticlePage::new(Article::new(7, "Title", "Body"));
        let resp = render(AuthStatus::LOGGED_OUT, &accept("application/xml"), &page).unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("application/xml"));

        let body = body_string(resp).await;
        assert!(body.starts_with("<article>"), "unexpected xml: {body}");
        assert!(body.contains("<id>7</id>"));
        assert!(body.contains("<title>Title</title>"));
    }

    #[tokio::test]
    async fn xml_article_list_is_wrapped() {
        let page = IndexPage::new(demo_articles());
        let resp = render(AuthStatus::LOGGED_OUT, &accept("application/xml"), &page).unwrap();

        let body = body_string(resp).await;
        assert!(body.starts_with("<articles>"), "unexpected xml: {body}");
        assert_eq!(body.matches("<article>").count(), 2);
    }

    #[tokio::test]
    async fn html_shows_login_state_in_menu() {
        let page = IndexPage::new(demo_articles());

        let logged_in = render(AuthStatus::LOGGED_IN, &HeaderMap::new(), &page).unwrap();
        assert!(content_type(&logged_in).starts_with("text/html"));
        let html = body_string(logged_in).await;
        assert!(html.contains("<title>Home Page</title>"));
        assert!(html.contains("/u/logout"));
        assert!(!html.contains("/u/login"));

        let logged_out = render(AuthStatus::LOGGED_OUT, &HeaderMap::new(), &page).unwrap();
        let html = body_string(logged_out).await;
        assert!(html.contains("/u/login"));
        assert!(!html.contains("/u/logout"));
    }

    #[tokio::test]
    async fn explicit_status_is_kept() {
        let page = ArticlePage::new(Article::new(1, "t", "c"));
        let resp = render_with_status(
            StatusCode::BAD_REQUEST,
            AuthStatus::LOGGED_OUT,
            &accept("application/json"),
            &page,
        )
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
