//! The library view: load controller and view-state store
//!
//! [`LibraryView`] owns a `tokio::sync::watch` channel holding the current
//! [`ViewState`]. Renderers subscribe to it and redraw on every change; user input
//! comes back through [`LibraryView::on_search_change`],
//! [`LibraryView::on_sort_ascending`] and [`LibraryView::on_sort_descending`].
//!
//! Fetches and sorts run as spawned tasks and carry sequence numbers. A load result is
//! applied unless a newer load has started. A sort result is applied unless any newer
//! operation (load, search or sort) has started during its delay. Nothing is applied
//! once the view is unmounted, and unmounting (or dropping) aborts every pending task.
//!
//! All methods that start work must be called from within a tokio runtime.

use crate::config::ViewConfig;
use crate::engine::SortOrder;
use crate::error::{Result, ShelfError};
use crate::source::BookSource;
use crate::state::ViewState;
use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRESH: u8 = 0;
const MOUNTED: u8 = 1;
const UNMOUNTED: u8 = 2;

/// State shared between the view and its spawned tasks
struct Shared {
    state: watch::Sender<ViewState>,
    lifecycle: AtomicU8,
    /// Ticket of the newest load
    load_seq: AtomicU64,
    /// Ticket of the newest load, search or sort
    op_seq: AtomicU64,
}

impl Shared {
    fn is_mounted(&self) -> bool {
        self.lifecycle.load(Ordering::SeqCst) == MOUNTED
    }

    fn next_op(&self) -> u64 {
        self.op_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn begin_operation(&self) {
        self.state.send_modify(|state| *state = state.begin_operation());
    }

    /// Apply `update` if `seq` is still the newest ticket in `counter`
    ///
    /// Stale results only settle their loading slot. Nothing is written once the
    /// view is unmounted.
    fn commit<F>(&self, counter: &AtomicU64, seq: u64, kind: &str, update: F) -> bool
    where
        F: FnOnce(&ViewState) -> ViewState,
    {
        let mut applied = false;
        self.state.send_if_modified(|state| {
            if !self.is_mounted() {
                tracing::debug!(seq, kind, "view unmounted, dropping result");
                return false;
            }
            if counter.load(Ordering::SeqCst) == seq {
                *state = update(state);
                applied = true;
            } else {
                tracing::debug!(seq, kind, "discarding stale result");
                *state = state.settle();
            }
            true
        });
        applied
    }
}

/// A mounted book list with its load controller
pub struct LibraryView {
    source: Arc<dyn BookSource>,
    config: ViewConfig,
    shared: Arc<Shared>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl LibraryView {
    /// Create an unmounted view; nothing is fetched until [`LibraryView::mount`]
    pub fn new(source: Arc<dyn BookSource>, config: ViewConfig) -> Self {
        let (state, _) = watch::channel(ViewState::initial());
        Self {
            source,
            config,
            shared: Arc::new(Shared {
                state,
                lifecycle: AtomicU8::new(FRESH),
                load_seq: AtomicU64::new(0),
                op_seq: AtomicU64::new(0),
            }),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ViewState {
        (*self.shared.state.borrow()).clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.is_mounted()
    }

    /// First display: fetch the book list after the configured initial delay
    ///
    /// Only the first call has any effect.
    pub fn mount(&self) {
        if self
            .shared
            .lifecycle
            .compare_exchange(FRESH, MOUNTED, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("mount ignored, view already mounted or torn down");
            return;
        }
        tracing::debug!(source = %self.source.location(), "mounting library view");
        self.start_load(self.config.initial_delay);
    }

    /// Fetch the book list again, replacing whatever is displayed
    pub fn reload(&self) {
        if !self.is_mounted() {
            return;
        }
        self.start_load(Duration::ZERO);
    }

    /// Search field changed
    ///
    /// Non-empty text filters the list right away. Emptying the field re-fetches.
    pub fn on_search_change(&self, text: &str) {
        if !self.is_mounted() {
            return;
        }
        if text.is_empty() {
            self.shared
                .state
                .send_modify(|state| *state = state.clear_search());
            self.reload();
            return;
        }

        let mode = self.config.search_mode;
        self.shared.next_op();
        self.shared.begin_operation();
        self.shared
            .state
            .send_modify(|state| *state = state.apply_search(text, mode));
        let matches = self.shared.state.borrow().books.len();
        tracing::debug!(query = text, matches, "search applied");
    }

    /// Oldest first, after the sort delay
    pub fn on_sort_ascending(&self) {
        self.start_sort(SortOrder::Ascending);
    }

    /// Newest first, after the sort delay
    pub fn on_sort_descending(&self) {
        self.start_sort(SortOrder::Descending);
    }

    pub fn on_sort(&self, order: SortOrder) {
        self.start_sort(order);
    }

    /// Tear the view down: pending timers and fetches are aborted and late results dropped
    ///
    /// The aborted operations are settled, so the last published state is not loading.
    pub fn unmount(&self) {
        let previous = self.shared.lifecycle.swap(UNMOUNTED, Ordering::SeqCst);
        self.abort_tasks();
        if previous != UNMOUNTED {
            tracing::debug!("unmounting library view");
            self.shared
                .state
                .send_modify(|state| *state = state.cancel_pending());
        }
    }

    /// Wait until nothing is loading and return that state
    pub async fn settled(&self) -> Result<ViewState> {
        let mut rx = self.subscribe();
        let state = rx
            .wait_for(|state| !state.loading)
            .await
            .map_err(|_| ShelfError::ViewClosed)?;
        Ok((*state).clone())
    }

    fn start_load(&self, delay: Duration) {
        let seq = self.shared.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.next_op();
        self.shared.begin_operation();

        let shared = Arc::clone(&self.shared);
        let source = Arc::clone(&self.source);
        self.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            tracing::debug!(seq, source = %source.location(), "fetching books");
            match source.fetch().await {
                Ok(books) => {
                    let count = books.len();
                    if shared.commit(&shared.load_seq, seq, "load", |state| {
                        state.apply_loaded(books)
                    }) {
                        tracing::info!(seq, count, "books loaded");
                    }
                }
                Err(e) => {
                    tracing::warn!(seq, "failed to load books: {}", e);
                    shared.commit(&shared.load_seq, seq, "load", |state| {
                        state.apply_failed(e)
                    });
                }
            }
        });
    }

    fn start_sort(&self, order: SortOrder) {
        if !self.is_mounted() {
            return;
        }
        let seq = self.shared.next_op();
        self.shared.begin_operation();

        let shared = Arc::clone(&self.shared);
        let delay = self.config.sort_delay;
        self.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if shared.commit(&shared.op_seq, seq, "sort", |state| state.apply_sort(order)) {
                tracing::debug!(seq, %order, "sort applied");
            }
        });
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|h| !h.is_finished());
        tasks.push(handle);
    }

    fn abort_tasks(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in tasks.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for LibraryView {
    fn drop(&mut self) {
        self.shared.lifecycle.store(UNMOUNTED, Ordering::SeqCst);
        self.abort_tasks();
    }
}
