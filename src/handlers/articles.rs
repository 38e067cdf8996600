use crate::error::{AppError, AppResult};
use crate::handlers::forms::ArticleForm;
use crate::middleware::auth::AuthStatus;
use crate::render::views::{ArticlePage, CreateArticlePage, IndexPage, SubmissionSuccessfulPage};
use crate::render::render;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
    Form,
};

pub async fn show_index_page(
    State(state): State<AppState>,
    auth: AuthStatus,
    headers: HeaderMap,
) -> AppResult<Response> {
    let articles = state.articles.get_all_articles();

    render(auth, &headers, &IndexPage::new(articles))
}

// The id is taken as text so a malformed id is a 404 like an unknown one,
// rather than the extractor's 400.
pub async fn get_article(
    State(state): State<AppState>,
    auth: AuthStatus,
    headers: HeaderMap,
    Path(article_id): Path<String>,
) -> AppResult<Response> {
    let id: u64 = article_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Invalid article id '{}'", article_id)))?;

    let article = state.articles.get_article_by_id(id)?;

    render(auth, &headers, &ArticlePage::new(article))
}

pub async fn show_article_creation_page(
    auth: AuthStatus,
    headers: HeaderMap,
) -> AppResult<Response> {
    render(auth, &headers, &CreateArticlePage::new())
}

pub async fn create_article(
    State(state): State<AppState>,
    auth: AuthStatus,
    headers: HeaderMap,
    Form(form): Form<ArticleForm>,
) -> AppResult<Response> {
    let article = state
        .articles
        .create_new_article(&form.title, &form.content)?;

    tracing::info!(id = article.id, title = %article.title, "article created");

    render(auth, &headers, &SubmissionSuccessfulPage::new(article))
}
