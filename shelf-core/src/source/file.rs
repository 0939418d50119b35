//! Local file book source

use super::{parse_book_list, BookSource, LoadResult};
use crate::error::LoadError;
use crate::types::BookRecord;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the same `{ "books": [...] }` document from disk
pub struct FileBookSource {
    path: PathBuf,
}

impl FileBookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BookSource for FileBookSource {
    async fn fetch(&self) -> LoadResult<Vec<BookRecord>> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Network(format!("{}: {}", self.path.display(), e)))?;
        parse_book_list(&body)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
