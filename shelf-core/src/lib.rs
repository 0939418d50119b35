//! Shelf Core Library
//!
//! This crate provides the book list model and the view-state logic behind the Shelf
//! library view. A [`LibraryView`] fetches books from a [`BookSource`], keeps the current
//! [`ViewState`], and applies search and sort operations to it. Renderers subscribe to the
//! state and redraw on every change.

pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod source;
pub mod state;
pub mod types;
pub mod view;

pub use config::{SearchMode, ViewConfig};
pub use engine::SortOrder;
pub use error::{ConfigError, LoadError, Result, ShelfError};
pub use source::{BookSource, FileBookSource, HttpBookSource, MemoryBookSource};
pub use state::ViewState;
pub use types::{BookList, BookRecord};
pub use view::LibraryView;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = BookRecord::new("Emma", "Jane Austen", 1815);
        assert_eq!(book.title, "Emma");
        assert_eq!(book.author, "Jane Austen");
        assert_eq!(book.publication_year, 1815);
    }
}
