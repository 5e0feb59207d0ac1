//! Debounced search input.
//!
//! Each keystroke cancels the pending search. Only the last query typed within
//! the debounce window runs.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

/// Queries shorter than this (after trimming) clear the results instead of
/// searching.
pub const MIN_QUERY_CHARS: usize = 2;

type SearchFn = dyn Fn(String) + Send + Sync;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Query too short; results should be cleared.
    Cleared,
    /// A search for this query will run once the debounce delay passes.
    Scheduled(String),
}

pub struct SearchDebouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    on_search: Arc<SearchFn>,
}

impl SearchDebouncer {
    /// Debouncer whose searches only log the query. There is no search
    /// backend.
    pub fn new(delay: Duration) -> Self {
        Self::with_handler(delay, perform_search)
    }

    pub fn with_handler<F>(delay: Duration, on_search: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self {
            delay,
            pending: Mutex::new(None),
            on_search: Arc::new(on_search),
        }
    }

    /// Feeds the current contents of the search box.
    pub async fn input(&self, raw: &str) -> SearchInput {
        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let query = raw.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return SearchInput::Cleared;
        }

        let query = query.to_string();
        let on_search = Arc::clone(&self.on_search);
        let delay = self.delay;
        let scheduled = query.clone();
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_search(scheduled);
        }));

        SearchInput::Scheduled(query)
    }

    /// Drops any search that has not fired yet.
    pub async fn cancel(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

pub fn perform_search(query: String) {
    info!("Searching for: {}", query);
}
