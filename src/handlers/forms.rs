//! # Form Types
//!
//! Bodies of the `POST` routes. Browsers submit them as
//! `application/x-www-form-urlencoded`; axum's `Form` extractor decodes them.
//! A field the browser left out decodes as an empty string, which the
//! stores then reject or accept on their own terms.

use serde::Deserialize;

/// Body of `POST /u/login` and `POST /u/register`
///
/// ## Example body
/// ```text
/// username=alice&password=pw1
/// ```
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /article/create`
#[derive(Debug, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
