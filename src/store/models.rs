//! # Store Models
//!
//! The records held by the in-memory stores. Both are created once and never
//! mutated or deleted afterwards.

use serde::{Deserialize, Serialize};

/// Registered member
///
/// Usernames are unique and compared case-sensitively ("user1" and "User1" are
/// different accounts). The password is kept as plain text and compared
/// verbatim; it is never serialized into a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,

    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Published article
///
/// ## Example JSON
/// ```json
/// { "id": 1, "title": "Article 1", "content": "Article 1 body" }
/// ```
///
/// ## Example XML
/// ```xml
/// <article><id>1</id><title>Article 1</title><content>Article 1 body</content></article>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Position-derived identifier: one more than the number of articles that
    /// existed when this one was created
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Article {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Accounts available when the server starts with `SEED_DEMO_DATA=true`
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("user1", "pass1"),
        User::new("user2", "pass2"),
        User::new("user3", "pass3"),
    ]
}

/// Articles available when the server starts with `SEED_DEMO_DATA=true`
pub fn demo_articles() -> Vec<Article> {
    vec![
        Article::new(1, "Article 1", "Article 1 body"),
        Article::new(2, "Article 2", "Article 2 body"),
    ]
}
