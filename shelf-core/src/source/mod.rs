//! Book sources: where the view loads its list from

mod file;
mod http;
mod memory;

pub use file::FileBookSource;
pub use http::HttpBookSource;
pub use memory::MemoryBookSource;

use crate::error::LoadError;
use crate::types::BookRecord;
use async_trait::async_trait;
use serde::Deserialize;

/// Result type for source operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Abstract book source
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Fetch the full book list
    async fn fetch(&self) -> LoadResult<Vec<BookRecord>>;

    /// Human-readable location, used in logs
    fn location(&self) -> String;
}

/// Parse a `{ "books": [...] }` body
///
/// Invalid JSON is a [`LoadError::Decode`]; valid JSON without a usable `books`
/// array is a [`LoadError::Shape`].
pub fn parse_book_list(body: &[u8]) -> LoadResult<Vec<BookRecord>> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| LoadError::Decode(e.to_string()))?;

    let books = value
        .get("books")
        .ok_or_else(|| LoadError::Shape("missing `books` field".to_string()))?;

    Vec::<BookRecord>::deserialize(books).map_err(|e| LoadError::Shape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_body() {
        let body = br#"{"books":[
            {"title":"Da Vinci Code","author":"Dan Brown","publicationYear":2003},
            {"title":"Emma","author":"Jane Austen","publicationYear":1815}
        ]}"#;
        let books = parse_book_list(body).unwrap();
        assert_eq!(
            books,
            vec![
                BookRecord::new("Da Vinci Code", "Dan Brown", 2003),
                BookRecord::new("Emma", "Jane Austen", 1815),
            ]
        );
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_book_list(br#"{"books":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_book_list(b"{\"books\": [").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_parse_missing_books_field() {
        let err = parse_book_list(br#"{"items":[]}"#).unwrap_err();
        assert_eq!(err, LoadError::Shape("missing `books` field".to_string()));
    }

    #[test]
    fn test_parse_top_level_array() {
        let err = parse_book_list(br#"[{"title":"Emma"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Shape(_)));
    }

    #[test]
    fn test_parse_record_missing_field() {
        let err = parse_book_list(br#"{"books":[{"title":"Emma","author":"Jane Austen"}]}"#)
            .unwrap_err();
        match err {
            LoadError::Shape(msg) => assert!(msg.contains("publicationYear")),
            other => panic!("expected shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_integral_float_year() {
        let books = parse_book_list(
            br#"{"books":[{"title":"Emma","author":"Jane Austen","publicationYear":1815.0}]}"#,
        )
        .unwrap();
        assert_eq!(books, vec![BookRecord::new("Emma", "Jane Austen", 1815)]);
    }

    #[test]
    fn test_parse_fractional_year() {
        let err = parse_book_list(
            br#"{"books":[{"title":"Emma","author":"Jane Austen","publicationYear":1815.5}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Shape(_)));
    }

    #[test]
    fn test_parse_wrong_year_type() {
        let err = parse_book_list(
            br#"{"books":[{"title":"Emma","author":"Jane Austen","publicationYear":"1815"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Shape(_)));
    }
}
