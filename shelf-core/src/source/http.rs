//! HTTP book source

use super::{parse_book_list, BookSource, LoadResult};
use crate::error::LoadError;
use crate::types::BookRecord;
use async_trait::async_trait;

/// Fetches the book list with a GET request
pub struct HttpBookSource {
    url: String,
    http: reqwest::Client,
}

impl HttpBookSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Use a preconfigured client (timeouts, proxies)
    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BookSource for HttpBookSource {
    async fn fetch(&self) -> LoadResult<Vec<BookRecord>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_book_list(&body)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
