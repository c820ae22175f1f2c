//! Search query coordinator
//!
//! Holds the query text and the committed filters, and turns changes to them
//! into a single `ReloadRequested` signal. The values given at construction
//! are initialization and never trigger a reload; every later change resets
//! the page size to its configured default before signalling.

use crate::config::PagingConfig;
use crate::events::{EventQueue, SearchEvent};
use crate::selection::{self, SelectedFilters};

/// Fields changed together in one logical update
///
/// `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub query: Option<String>,
    pub selected_filters: Option<SelectedFilters>,
}

impl ParamChanges {
    /// Change only the query
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            selected_filters: None,
        }
    }

    /// Change only the committed filters
    #[must_use]
    pub fn selected_filters(filters: SelectedFilters) -> Self {
        Self {
            query: None,
            selected_filters: Some(filters),
        }
    }

    /// Also change the query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Also change the committed filters
    #[must_use]
    pub fn with_selected_filters(mut self, filters: SelectedFilters) -> Self {
        self.selected_filters = Some(filters);
        self
    }
}

/// Last state reported by the external data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ResultsState {
    item_count: usize,
    has_more: bool,
    loading: bool,
}

/// Owns query and committed filters; derives paging and reload signals
#[derive(Debug)]
pub struct QueryCoordinator {
    query: String,
    selected_filters: SelectedFilters,
    paging: PagingConfig,
    page_size: usize,
    results: ResultsState,
    events: EventQueue,
}

impl QueryCoordinator {
    /// Establish the initial state. Emits nothing.
    #[must_use]
    pub fn new(
        query: impl Into<String>,
        selected_filters: SelectedFilters,
        paging: PagingConfig,
    ) -> Self {
        Self {
            query: query.into(),
            selected_filters,
            page_size: paging.page_size,
            paging,
            results: ResultsState::default(),
            events: EventQueue::new(),
        }
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current committed filters
    #[must_use]
    pub const fn selected_filters(&self) -> &SelectedFilters {
        &self.selected_filters
    }

    /// Number of results currently requested
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the query. Returns `true` if a reload was requested.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.apply_changes(ParamChanges::query(query))
    }

    /// Replace the committed filters. Returns `true` if a reload was requested.
    pub fn set_selected_filters(&mut self, filters: SelectedFilters) -> bool {
        self.apply_changes(ParamChanges::selected_filters(filters))
    }

    /// Apply several field changes as one update
    ///
    /// Emits at most one `ReloadRequested`, and none when every field already
    /// holds the given value. Returns `true` if a reload was requested.
    pub fn apply_changes(&mut self, changes: ParamChanges) -> bool {
        let mut changed = false;

        if let Some(query) = changes.query
            && query != self.query
        {
            self.query = query;
            changed = true;
        }

        if let Some(filters) = changes.selected_filters {
            changed |= filters != self.selected_filters;
            self.selected_filters = filters;
        }

        if changed {
            self.page_size = self.paging.page_size;
            tracing::info!(
                query = %self.query,
                filters = selection::selected_count(&self.selected_filters),
                "Search parameters changed, requesting reload"
            );
            self.events.push(SearchEvent::ReloadRequested);
        }
        changed
    }

    /// Grow the page size by one increment and request a reload
    ///
    /// Query and filters are left untouched. The page size stops growing at
    /// `usize::MAX`.
    pub fn load_more(&mut self) {
        self.page_size = self.page_size.saturating_add(self.paging.increment);
        tracing::debug!("Page size increased to {}", self.page_size);
        self.events.push(SearchEvent::ReloadRequested);
    }

    /// Number shown on the filter badge
    #[must_use]
    pub fn badge_count(&self) -> usize {
        selection::selected_count(&self.selected_filters)
    }

    /// Mark a fetch as in flight
    pub const fn begin_loading(&mut self) {
        self.results.loading = true;
    }

    /// Record what the data source returned for the last reload
    pub const fn receive_results(&mut self, item_count: usize, has_more: bool) {
        self.results = ResultsState {
            item_count,
            has_more,
            loading: false,
        };
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.results.loading
    }

    /// Number of items currently loaded
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.results.item_count
    }

    /// Whether the data source reported more items than are loaded
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.results.has_more
    }

    /// Whether the "no results" text is shown
    #[must_use]
    pub const fn show_empty_state(&self) -> bool {
        !self.results.loading && self.results.item_count == 0
    }

    /// Move pending events into `queue`
    pub fn drain_events_into(&mut self, queue: &mut EventQueue) {
        queue.append(&mut self.events);
    }

    /// Take pending events
    pub fn take_events(&mut self) -> Vec<SearchEvent> {
        self.events.drain()
    }
}
