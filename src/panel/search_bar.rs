//! Search bar model
//!
//! The query input with its clear button and the filter button with its
//! badge. Rendering is left to the frontend; this type only tracks the text,
//! the button flags, and the signals produced by user input.

use crate::error::{FacetError, Result};
use crate::events::{EventQueue, SearchEvent};

/// Query input plus filter button state
#[derive(Debug)]
pub struct SearchBar {
    query: String,
    placeholder: String,
    hide_filter_button: bool,
    disable_filter_button: bool,
    badge_count: usize,
    events: EventQueue,
}

impl SearchBar {
    /// Create a search bar with an initial query
    #[must_use]
    pub fn new(query: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            placeholder: placeholder.into(),
            hide_filter_button: false,
            disable_filter_button: false,
            badge_count: 0,
            events: EventQueue::new(),
        }
    }

    /// Hide the filter button entirely
    #[must_use]
    pub const fn hide_filter_button(mut self, hide: bool) -> Self {
        self.hide_filter_button = hide;
        self
    }

    /// Show the filter button but make it inert
    #[must_use]
    pub const fn disable_filter_button(mut self, disable: bool) -> Self {
        self.disable_filter_button = disable;
        self
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Placeholder shown while the query is empty
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the query text (typing). Returns `true` if it changed.
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.query {
            return false;
        }
        self.query = text;
        true
    }

    /// Empty the query and emit `ClearRequested`
    pub fn clear(&mut self) {
        self.query.clear();
        self.events.push(SearchEvent::ClearRequested);
    }

    /// Emit `SearchSubmitted` with the current query (Enter)
    pub fn submit(&mut self) {
        tracing::debug!("Search submitted: {:?}", self.query);
        self.events.push(SearchEvent::SearchSubmitted(self.query.clone()));
    }

    /// Press the filter button, emitting `FilterDialogOpened`
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` if the button is hidden or disabled.
    pub fn tap_filter(&mut self) -> Result<()> {
        if !self.filter_button_enabled() {
            tracing::warn!("Filter button pressed while hidden or disabled");
            return Err(FacetError::invalid_state(
                "the filter button is hidden or disabled",
            ));
        }
        self.events.push(SearchEvent::FilterDialogOpened);
        Ok(())
    }

    /// Update the number shown on the filter badge
    pub const fn set_badge_count(&mut self, count: usize) {
        self.badge_count = count;
    }

    /// Number shown on the filter badge
    #[must_use]
    pub const fn badge_count(&self) -> usize {
        self.badge_count
    }

    /// Badge is invisible while nothing is selected
    #[must_use]
    pub const fn show_badge(&self) -> bool {
        !self.hide_filter_button && self.badge_count > 0
    }

    /// Clear button is shown only while there is text
    #[must_use]
    pub fn show_clear_button(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether the filter button is rendered at all
    #[must_use]
    pub const fn filter_button_visible(&self) -> bool {
        !self.hide_filter_button
    }

    /// Whether pressing the filter button does anything
    #[must_use]
    pub const fn filter_button_enabled(&self) -> bool {
        !self.hide_filter_button && !self.disable_filter_button
    }

    /// Move pending events into `queue`
    pub fn drain_events_into(&mut self, queue: &mut EventQueue) {
        queue.append(&mut self.events);
    }
}
