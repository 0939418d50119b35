//! In-memory book source

use super::{BookSource, LoadResult};
use crate::error::LoadError;
use crate::types::BookRecord;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Serves a canned response and counts how often it was fetched
pub struct MemoryBookSource {
    response: Mutex<LoadResult<Vec<BookRecord>>>,
    latency: Duration,
    fetches: AtomicUsize,
}

impl MemoryBookSource {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self::with_response(Ok(books))
    }

    /// A source whose every fetch fails with `error`
    pub fn failing(error: LoadError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: LoadResult<Vec<BookRecord>>) -> Self {
        Self {
            response: Mutex::new(response),
            latency: Duration::ZERO,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace what subsequent fetches return
    pub fn set_response(&self, response: LoadResult<Vec<BookRecord>>) {
        *self.response.lock().unwrap_or_else(PoisonError::into_inner) = response;
    }

    /// Number of fetches started so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookSource for MemoryBookSource {
    async fn fetch(&self) -> LoadResult<Vec<BookRecord>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let response = self
            .response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        response
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
