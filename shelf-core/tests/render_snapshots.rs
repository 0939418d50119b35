//! Snapshot tests for the text renderer using insta

use insta::{assert_json_snapshot, assert_snapshot};
use shelf_core::render::render;
use shelf_core::{BookList, BookRecord, LoadError, SearchMode, SortOrder, ViewState};

fn sample_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new("Da Vinci Code", "Dan Brown", 2003),
        BookRecord::new("Emma", "Jane Austen", 1815),
    ]
}

fn loaded() -> ViewState {
    ViewState::initial()
        .begin_operation()
        .apply_loaded(sample_books())
}

#[test]
fn snapshot_loaded_view() {
    assert_snapshot!(render(&loaded()), @r"
Library
Da Vinci Code
  Published by Dan Brown in 2003
Emma
  Published by Jane Austen in 1815
");
}

#[test]
fn snapshot_sorted_view_while_loading() {
    let state = loaded()
        .begin_operation()
        .apply_sort(SortOrder::Ascending)
        .begin_operation();
    assert_snapshot!(render(&state), @r"
Library
Loading...
Emma
  Published by Jane Austen in 1815
Da Vinci Code
  Published by Dan Brown in 2003
");
}

#[test]
fn snapshot_search_view() {
    let state = loaded()
        .begin_operation()
        .apply_search("DA VincI", SearchMode::Cumulative);
    assert_snapshot!(render(&state), @r#"
Library
Search: "DA VincI"
Da Vinci Code
  Published by Dan Brown in 2003
"#);
}

#[test]
fn snapshot_error_view() {
    let state = ViewState::initial()
        .begin_operation()
        .apply_failed(LoadError::Shape("missing `books` field".to_string()));
    assert_snapshot!(render(&state), @r"
Library
Error: Shape error: missing `books` field
");
}

#[test]
fn snapshot_wire_document() {
    let list = BookList::new(vec![BookRecord::new("Emma", "Jane Austen", 1815)]);
    assert_json_snapshot!(list, @r#"
{
  "books": [
    {
      "title": "Emma",
      "author": "Jane Austen",
      "publicationYear": 1815
    }
  ]
}
"#);
}
