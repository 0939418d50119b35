//! View state and the pure update functions that advance it
//!
//! Every update takes the current state by reference and returns the next one. The
//! load controller in [`crate::view`] decides *when* an update runs; this module only
//! decides *what* it does.

use crate::config::SearchMode;
use crate::engine::{self, SortOrder};
use crate::error::LoadError;
use crate::types::BookRecord;

/// What the library view currently displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Books to render, in display order
    pub books: Vec<BookRecord>,

    /// True while at least one fetch or sort is outstanding
    pub loading: bool,

    /// Terminal error from the most recent load
    pub error: Option<LoadError>,

    /// Current search field text
    pub query: String,

    /// Last applied sort, reapplied to lists that land afterwards
    pub order: Option<SortOrder>,

    /// Last fetched list, filtered in [`SearchMode::Pristine`]
    catalog: Vec<BookRecord>,

    /// Operations begun but not yet applied or discarded
    in_flight: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}

impl ViewState {
    /// State before anything has loaded: empty and showing the loading indicator
    pub fn initial() -> Self {
        Self {
            books: Vec::new(),
            loading: true,
            error: None,
            query: String::new(),
            order: None,
            catalog: Vec::new(),
            in_flight: 0,
        }
    }

    /// Number of outstanding operations
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// A fetch or sort has started
    pub fn begin_operation(&self) -> Self {
        Self {
            loading: true,
            in_flight: self.in_flight + 1,
            ..self.clone()
        }
    }

    /// An outstanding operation finished without changing the list
    pub fn settle(&self) -> Self {
        let in_flight = self.in_flight.saturating_sub(1);
        Self {
            loading: in_flight > 0,
            in_flight,
            ..self.clone()
        }
    }

    /// Every outstanding operation was abandoned; the list stays as it is
    pub fn cancel_pending(&self) -> Self {
        Self {
            loading: false,
            in_flight: 0,
            ..self.clone()
        }
    }

    /// A fetch succeeded
    ///
    /// The fetched list replaces the catalog; the current query and sort are
    /// applied to it before display.
    pub fn apply_loaded(&self, books: Vec<BookRecord>) -> Self {
        let mut catalog = books;
        if let Some(order) = self.order {
            engine::sort_by_year(&mut catalog, order);
        }
        let books = if self.query.is_empty() {
            catalog.clone()
        } else {
            engine::search(&catalog, &self.query)
        };

        Self {
            books,
            error: None,
            catalog,
            ..self.settle()
        }
    }

    /// A fetch failed; show the error instead of a list
    pub fn apply_failed(&self, error: LoadError) -> Self {
        Self {
            books: Vec::new(),
            error: Some(error),
            catalog: Vec::new(),
            ..self.settle()
        }
    }

    /// Filter by `query`
    pub fn apply_search(&self, query: &str, mode: SearchMode) -> Self {
        let base = match mode {
            SearchMode::Cumulative => &self.books,
            SearchMode::Pristine => &self.catalog,
        };
        Self {
            books: engine::search(base, query),
            query: query.to_string(),
            ..self.settle()
        }
    }

    /// The search field was emptied; the list itself is refreshed by a reload
    pub fn clear_search(&self) -> Self {
        Self {
            query: String::new(),
            ..self.clone()
        }
    }

    /// Sort the displayed list and the catalog by publication year
    ///
    /// The controller drops a sort when anything else was invoked during its delay, so
    /// the displayed list differs from the one the sort was invoked on only when an
    /// earlier fetch landed in the meantime.
    pub fn apply_sort(&self, order: SortOrder) -> Self {
        Self {
            books: engine::sorted_by_year(&self.books, order),
            catalog: engine::sorted_by_year(&self.catalog, order),
            order: Some(order),
            ..self.settle()
        }
    }
}
