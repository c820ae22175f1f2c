//! Typed signals emitted to the host application
//!
//! Components never call back into the host. Each mutation pushes zero or more
//! `SearchEvent`s into an outbox, and the host drains it after the call
//! returns. Payloads carry only what consumers need: `Apply` carries the new
//! committed map, `ReloadRequested` carries nothing because the consumer
//! re-reads query, filters and page size from the panel.

use crate::selection::SelectedFilters;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// A signal emitted by the search bar, filter dialog or panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum SearchEvent {
    /// The filter dialog was asked to open
    FilterDialogOpened,
    /// The draft was applied; carries the new committed filters
    Apply(SelectedFilters),
    /// The user reset the draft inside the dialog
    #[serde(rename = "reset-request")]
    ResetRequested,
    /// The user submitted the query (Enter)
    SearchSubmitted(String),
    /// The user cleared the query
    ClearRequested,
    /// Results must be re-fetched with the current parameters
    ReloadRequested,
    /// The user asked for the next page
    LoadMoreRequested,
}

impl SearchEvent {
    /// Stable event name, matching the serialized tag
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FilterDialogOpened => "filter-dialog-opened",
            Self::Apply(_) => "apply",
            Self::ResetRequested => "reset-request",
            Self::SearchSubmitted(_) => "search-submitted",
            Self::ClearRequested => "clear-requested",
            Self::ReloadRequested => "reload-requested",
            Self::LoadMoreRequested => "load-more-requested",
        }
    }
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// FIFO outbox of pending events
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<SearchEvent>,
}

impl EventQueue {
    /// Create an empty queue
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Queue an event
    pub fn push(&mut self, event: SearchEvent) {
        tracing::trace!("Queued event {event}");
        self.pending.push_back(event);
    }

    /// Move every event from `other` to the back of this queue
    pub fn append(&mut self, other: &mut Self) {
        self.pending.append(&mut other.pending);
    }

    /// Take all pending events in emission order
    pub fn drain(&mut self) -> Vec<SearchEvent> {
        self.pending.drain(..).collect()
    }

    /// Number of pending events
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order() {
        let mut queue = EventQueue::new();
        queue.push(SearchEvent::ClearRequested);
        queue.push(SearchEvent::ReloadRequested);

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.drain(),
            vec![SearchEvent::ClearRequested, SearchEvent::ReloadRequested]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_append_moves_events() {
        let mut first = EventQueue::new();
        let mut second = EventQueue::new();
        second.push(SearchEvent::ResetRequested);

        first.append(&mut second);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_event_json() {
        let mut filters = SelectedFilters::new();
        filters.set("age", ["teen"]);

        let json = serde_json::to_string(&SearchEvent::Apply(filters)).unwrap();
        assert_eq!(json, r#"{"event":"apply","payload":{"age":["teen"]}}"#);

        let json = serde_json::to_string(&SearchEvent::ReloadRequested).unwrap();
        assert_eq!(json, r#"{"event":"reload-requested"}"#);

        let json = serde_json::to_string(&SearchEvent::ResetRequested).unwrap();
        assert_eq!(json, r#"{"event":"reset-request"}"#);
    }

    #[test]
    fn test_event_display_matches_name() {
        assert_eq!(
            SearchEvent::SearchSubmitted("q".into()).to_string(),
            "search-submitted"
        );
    }
}
