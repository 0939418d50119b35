//! Plain-text rendering of the library view

use crate::state::ViewState;
use crate::types::BookRecord;
use std::fmt::Write;

pub const HEADING: &str = "Library";
pub const LOADING: &str = "Loading...";
pub const EMPTY: &str = "No books to show.";

/// Two-line row for one book
pub fn render_book(book: &BookRecord) -> String {
    format!(
        "{}\n  Published by {} in {}",
        book.title, book.author, book.publication_year
    )
}

/// Render the whole view: heading, search text, loading or error line, then one row per book
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str(HEADING);
    out.push('\n');

    if !state.query.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", state.query);
    }
    if state.loading {
        out.push_str(LOADING);
        out.push('\n');
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    for book in &state.books {
        out.push_str(&render_book(book));
        out.push('\n');
    }

    if state.books.is_empty() && !state.loading && state.error.is_none() {
        out.push_str(EMPTY);
        out.push('\n');
    }

    out
}
