//! CLI command implementations

mod list;
mod view;

pub use list::list;
pub use view::view;

use crate::SourceArgs;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use shelf_core::{
    BookSource, FileBookSource, HttpBookSource, LibraryView, SearchMode, ViewConfig,
};
use std::sync::Arc;
use std::time::Duration;

/// Build a library view from environment config and command-line overrides
fn open_view(args: &SourceArgs) -> Result<LibraryView> {
    let mut config = ViewConfig::from_env().context("Invalid SHELF_* configuration")?;
    if let Some(url) = &args.url {
        config.books_url = url.clone();
    }
    if args.pristine {
        config.search_mode = SearchMode::Pristine;
    }
    if args.no_delay {
        config = config.without_delays();
    }

    let source: Arc<dyn BookSource> = match &args.file {
        Some(path) => Arc::new(FileBookSource::new(path)),
        None => Arc::new(HttpBookSource::new(config.books_url.clone())),
    };
    tracing::debug!(source = %source.location(), mode = %config.search_mode, "opening view");

    Ok(LibraryView::new(source, config))
}

/// Spinner standing in for the loading indicator
fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(shelf_core::render::LOADING);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
