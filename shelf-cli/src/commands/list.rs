//! List command implementation

use super::{loading_spinner, open_view};
use crate::SourceArgs;
use anyhow::{bail, Result};
use shelf_core::render::render;
use shelf_core::{BookList, SortOrder, ViewState};

/// Load the library, apply an optional search and sort, and print the result
pub async fn list(
    args: &SourceArgs,
    search: Option<&str>,
    sort: Option<SortOrder>,
    json: bool,
) -> Result<()> {
    let view = open_view(args)?;
    let spinner = loading_spinner();

    view.mount();
    let mut state = view.settled().await?;

    if state.error.is_none() {
        if let Some(query) = search.filter(|q| !q.is_empty()) {
            view.on_search_change(query);
        }
        if let Some(order) = sort {
            view.on_sort(order);
        }
        state = view.settled().await?;
    }

    spinner.finish_and_clear();
    view.unmount();

    print_state(&state, json)?;

    if let Some(error) = state.error {
        bail!("Failed to load books: {}", error);
    }
    Ok(())
}

fn print_state(state: &ViewState, json: bool) -> Result<()> {
    if json {
        let list = BookList::new(state.books.clone());
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print!("{}", render(state));
    }
    Ok(())
}
