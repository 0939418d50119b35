//! Application state

use anyhow::{Context, Result};
use shelf_core::{BookList, BookRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state
///
/// The catalog is read once at startup and never changes.
#[derive(Clone)]
pub struct AppState {
    /// Catalog served at `/books.json`
    pub catalog: Arc<BookList>,
}

/// Load a catalog from a JSON file
///
/// A missing file is an empty catalog; any other failure is an error.
pub async fn load_catalog(path: &Path) -> Result<BookList> {
    match tokio::fs::read_to_string(path).await {
        Ok(data) => serde_json::from_str(&data)
            .with_context(|| format!("Invalid catalog file {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BookList::default()),
        Err(e) => Err(e.into()),
    }
}

impl AppState {
    /// Create application state from the environment
    pub async fn new() -> Result<Self> {
        let catalog_path =
            std::env::var("SHELF_CATALOG_PATH").unwrap_or_else(|_| "./books.json".to_string());
        let catalog_path = PathBuf::from(catalog_path);

        let catalog = load_catalog(&catalog_path).await?;
        if catalog.is_empty() {
            tracing::warn!("Catalog {} is empty or missing", catalog_path.display());
        } else {
            tracing::info!(
                "Loaded {} books from {}",
                catalog.len(),
                catalog_path.display()
            );
        }

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// State serving a fixed list, with no backing file
    pub fn with_books(books: Vec<BookRecord>) -> Self {
        Self {
            catalog: Arc::new(BookList::new(books)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_catalog_is_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = load_catalog(&dir.path().join("books.json")).await.unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        tokio::fs::write(
            &path,
            r#"{"books":[{"title":"Emma","author":"Jane Austen","publicationYear":1815}]}"#,
        )
        .await
        .unwrap();

        let catalog = load_catalog(&path).await.unwrap();
        assert_eq!(catalog.books, vec![BookRecord::new("Emma", "Jane Austen", 1815)]);
    }

    #[tokio::test]
    async fn test_invalid_catalog_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        tokio::fs::write(&path, "{\"books\": 3}").await.unwrap();

        let err = load_catalog(&path).await.unwrap_err();
        assert!(err.to_string().contains("Invalid catalog file"));
    }
}
