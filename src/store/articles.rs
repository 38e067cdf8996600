use crate::error::{AppError, AppResult};
use crate::store::models::Article;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        Self {
            articles: RwLock::new(articles.into_iter().collect()),
        }
    }

    /// Snapshot of every article, in creation order
    pub fn get_all_articles(&self) -> Vec<Article> {
        self.articles.read().clone()
    }

    pub fn get_article_by_id(&self, id: u64) -> AppResult<Article> {
        self.articles
            .read()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
    }

    /// The new id is the current count plus one. Counting and appending share
    /// one write lock, so ids stay unique under concurrent creation.
    pub fn create_new_article(&self, title: &str, content: &str) -> AppResult<Article> {
        let mut articles = self.articles.write();

        let article = Article::new(articles.len() as u64 + 1, title, content);
        articles.push(article.clone());

        Ok(article)
    }
}
