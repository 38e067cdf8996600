//! HTML templates and the page types handed to the renderer.

use super::View;
use crate::error::AppResult;
use crate::middleware::auth::AuthStatus;
use crate::store::models::Article;
use serde::Serialize;
use std::fmt::Write;

/// Error banner shown above a form after a failed submission
///
/// Also the JSON/XML payload of the form pages, so API clients see the same
/// error the HTML page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FormStatus {
    pub fn failed(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_title: Some(title.into()),
            error_message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub username: String,
}

pub struct IndexPage {
    articles: Vec<Article>,
}

impl IndexPage {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl View for IndexPage {
    type Payload = Vec<Article>;
    const TEMPLATE: &'static str = "index";
    const XML_ROOT: &'static str = "articles";

    fn title(&self) -> &str {
        "Home Page"
    }

    fn payload(&self) -> &Vec<Article> {
        &self.articles
    }

    fn body(&self) -> String {
        let mut html = String::new();
        for article in &self.articles {
            let _ = write!(
                html,
                "<a href=\"/article/view/{}\"><h2>{}</h2></a><p>{}</p>",
                article.id,
                escape(&article.title),
                escape(&article.content),
            );
        }
        html
    }

    // A bare sequence has no single root, so the list is nested as
    // <articles><article>..</article>..</articles>
    fn xml(&self) -> AppResult<String> {
        #[derive(Serialize)]
        struct Feed<'a> {
            article: &'a [Article],
        }

        Ok(quick_xml::se::to_string_with_root(
            Self::XML_ROOT,
            &Feed {
                article: &self.articles,
            },
        )?)
    }
}

pub struct ArticlePage {
    article: Article,
}

impl ArticlePage {
    pub fn new(article: Article) -> Self {
        Self { article }
    }
}

impl View for ArticlePage {
    type Payload = Article;
    const TEMPLATE: &'static str = "article";
    const XML_ROOT: &'static str = "article";

    fn title(&self) -> &str {
        &self.article.title
    }

    fn payload(&self) -> &Article {
        &self.article
    }

    fn body(&self) -> String {
        format!(
            "<h1>{}</h1><p>{}</p>",
            escape(&self.article.title),
            escape(&self.article.content),
        )
    }
}

pub struct LoginPage {
    form: FormStatus,
}

impl LoginPage {
    pub fn new() -> Self {
        Self {
            form: FormStatus::default(),
        }
    }

    pub fn failed(form: FormStatus) -> Self {
        Self { form }
    }
}

impl View for LoginPage {
    type Payload = FormStatus;
    const TEMPLATE: &'static str = "login";
    const XML_ROOT: &'static str = "login";

    fn title(&self) -> &str {
        "Login"
    }

    fn payload(&self) -> &FormStatus {
        &self.form
    }

    fn body(&self) -> String {
        credentials_form(&self.form, "/u/login", "Login")
    }
}

pub struct RegisterPage {
    form: FormStatus,
}

impl RegisterPage {
    pub fn new() -> Self {
        Self {
            form: FormStatus::default(),
        }
    }

    pub fn failed(form: FormStatus) -> Self {
        Self { form }
    }
}

impl View for RegisterPage {
    type Payload = FormStatus;
    const TEMPLATE: &'static str = "register";
    const XML_ROOT: &'static str = "register";

    fn title(&self) -> &str {
        "Register"
    }

    fn payload(&self) -> &FormStatus {
        &self.form
    }

    fn body(&self) -> String {
        credentials_form(&self.form, "/u/register", "Register")
    }
}

/// Shown after both a successful login and a successful registration
pub struct LoginSuccessfulPage {
    title: &'static str,
    account: Account,
}

impl LoginSuccessfulPage {
    pub fn new(title: &'static str, username: impl Into<String>) -> Self {
        Self {
            title,
            account: Account {
                username: username.into(),
            },
        }
    }
}

impl View for LoginSuccessfulPage {
    type Payload = Account;
    const TEMPLATE: &'static str = "login-successful";
    const XML_ROOT: &'static str = "session";

    fn title(&self) -> &str {
        self.title
    }

    fn payload(&self) -> &Account {
        &self.account
    }

    fn body(&self) -> String {
        format!(
            "<h1>Welcome, {}</h1><p>You have successfully logged in.</p>",
            escape(&self.account.username),
        )
    }
}

pub struct CreateArticlePage {
    form: FormStatus,
}

impl CreateArticlePage {
    pub fn new() -> Self {
        Self {
            form: FormStatus::default(),
        }
    }
}

impl View for CreateArticlePage {
    type Payload = FormStatus;
    const TEMPLATE: &'static str = "create-article";
    const XML_ROOT: &'static str = "article-form";

    fn title(&self) -> &str {
        "Create New Article"
    }

    fn payload(&self) -> &FormStatus {
        &self.form
    }

    fn body(&self) -> String {
        "<h1>Create New Article</h1>\
         <form action=\"/article/create\" method=\"POST\">\
         <label for=\"title\">Title</label>\
         <input type=\"text\" name=\"title\" id=\"title\">\
         <label for=\"content\">Content</label>\
         <textarea name=\"content\" id=\"content\"></textarea>\
         <button type=\"submit\">Submit</button>\
         </form>"
            .to_string()
    }
}

pub struct SubmissionSuccessfulPage {
    article: Article,
}

impl SubmissionSuccessfulPage {
    pub fn new(article: Article) -> Self {
        Self { article }
    }
}

impl View for SubmissionSuccessfulPage {
    type Payload = Article;
    const TEMPLATE: &'static str = "submission-successful";
    const XML_ROOT: &'static str = "article";

    fn title(&self) -> &str {
        "Submission Successful"
    }

    fn payload(&self) -> &Article {
        &self.article
    }

    fn body(&self) -> String {
        format!(
            "<h1>The article was successfully submitted.</h1>\
             <a href=\"/article/view/{}\">{}</a>",
            self.article.id,
            escape(&self.article.title),
        )
    }
}

/// Shared page chrome: document head plus a menu that depends on whether the
/// caller is logged in
pub fn layout(title: &str, auth: AuthStatus, body: &str) -> String {
    let menu = if auth.is_logged_in {
        "<li><a href=\"/article/create\">Create Article</a></li>\
         <li><a href=\"/u/logout\">Logout</a></li>"
    } else {
        "<li><a href=\"/u/register\">Register</a></li>\
         <li><a href=\"/u/login\">Login</a></li>"
    };

    format!(
        "<!DOCTYPE html>\
         <html><head><meta charset=\"utf-8\"><title>{}</title></head>\
         <body><nav><a href=\"/\">Home</a><ul>{}</ul></nav>\
         <main>{}</main></body></html>",
        escape(title),
        menu,
        body,
    )
}

fn credentials_form(form: &FormStatus, action: &str, submit: &str) -> String {
    let mut html = String::new();

    if let Some(title) = &form.error_title {
        let _ = write!(
            html,
            "<div class=\"alert\"><strong>{}</strong> {}</div>",
            escape(title),
            escape(form.error_message.as_deref().unwrap_or_default()),
        );
    }

    let _ = write!(
        html,
        "<form action=\"{action}\" method=\"POST\">\
         <label for=\"username\">Username</label>\
         <input type=\"text\" name=\"username\" id=\"username\">\
         <label for=\"password\">Password</label>\
         <input type=\"password\" name=\"password\" id=\"password\">\
         <button type=\"submit\">{submit}</button>\
         </form>"
    );

    html
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
