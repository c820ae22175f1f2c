//! Filter dialog controller
//!
//! A two-page state machine layered on the draft operations in
//! `crate::selection`: a category list page and a value list page for the
//! category that is open.
//!
//! # Workflow
//!
//! ```text
//! Unmounted --mount--> Closed --open--> Opening --tick--> CategoryList
//!                        ^                                  |    ^
//!                        |            select_category(c)    v    | back (commits c into draft)
//!                        |                               ValueList(c)
//!                        |
//!                        +--- apply (commit draft, emit Apply) / close (discard) / any state
//! ```
//!
//! Only `apply` changes state that is visible outside the dialog. The draft is
//! cloned from the committed filters passed to the deferred show, so an
//! assignment made while the dialog is opening is part of the draft. Changes
//! go back solely through the `Apply` event (and the return value of `apply`).

use super::deferred::{DeferredAction, DeferredToken};
use crate::catalog::{FilterCatalog, FilterCategory};
use crate::config::Labels;
use crate::error::{FacetError, Result};
use crate::events::{EventQueue, SearchEvent};
use crate::selection::{self, DraftValue, SelectedFilters};
use serde::Serialize;
use std::fmt;

/// Observable phase of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialogPhase {
    /// Not attached to the host surface yet
    Unmounted,
    /// Mounted and idle
    Closed,
    /// Open requested, waiting for the deferred show
    Opening,
    /// Showing the list of categories
    CategoryList,
    /// Showing the values of one category
    ValueList,
}

impl DialogPhase {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Unmounted => "unmounted",
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::CategoryList => "category list",
            Self::ValueList => "value list",
        }
    }
}

impl fmt::Display for DialogPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    /// Selected value names, or the no-values label
    pub summary: String,
}

#[derive(Debug)]
enum DialogState {
    Unmounted,
    Closed,
    Opening,
    CategoryList {
        draft: SelectedFilters,
    },
    ValueList {
        draft: SelectedFilters,
        category_id: String,
        values: Vec<DraftValue>,
    },
}

impl DialogState {
    const fn phase(&self) -> DialogPhase {
        match self {
            Self::Unmounted => DialogPhase::Unmounted,
            Self::Closed => DialogPhase::Closed,
            Self::Opening => DialogPhase::Opening,
            Self::CategoryList { .. } => DialogPhase::CategoryList,
            Self::ValueList { .. } => DialogPhase::ValueList,
        }
    }
}

/// Modal filter-selection dialog
#[derive(Debug)]
pub struct FilterDialog {
    catalog: FilterCatalog,
    labels: Labels,
    state: DialogState,
    show: DeferredAction,
    events: EventQueue,
}

impl FilterDialog {
    /// Create an unmounted dialog over `catalog`
    #[must_use]
    pub fn new(catalog: FilterCatalog, labels: Labels) -> Self {
        Self {
            catalog,
            labels,
            state: DialogState::Unmounted,
            show: DeferredAction::new(),
            events: EventQueue::new(),
        }
    }

    /// Text labels used by the dialog
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> DialogPhase {
        self.state.phase()
    }

    /// Whether a dialog session exists (opening or showing a page)
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(
            self.state,
            DialogState::Opening
                | DialogState::CategoryList { .. }
                | DialogState::ValueList { .. }
        )
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach the dialog to the host surface
    ///
    /// Mounting an already mounted dialog changes nothing.
    pub fn mount(&mut self) {
        if matches!(self.state, DialogState::Unmounted) {
            tracing::debug!("Filter dialog mounted");
            self.state = DialogState::Closed;
        }
    }

    /// Detach the dialog, discarding any session and cancelling a pending show
    pub fn unmount(&mut self) {
        if self.show.cancel() {
            tracing::debug!("Cancelled pending dialog show on unmount");
        }
        self.state = DialogState::Unmounted;
    }

    /// Request the dialog to open
    ///
    /// The dialog becomes visible once the returned token fires (see
    /// [`FilterDialog::fire`] and [`FilterDialog::tick`]).
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` if the dialog is not mounted or a
    /// session is already open.
    pub fn open(&mut self) -> Result<DeferredToken> {
        if !matches!(self.state, DialogState::Closed) {
            return Err(self.reject("open"));
        }

        self.state = DialogState::Opening;
        tracing::debug!("Filter dialog opening");
        Ok(self.show.schedule())
    }

    /// Run the deferred show identified by `token`
    ///
    /// The draft starts as a copy of `committed` as it is at this moment.
    /// Returns `false` without touching any state when the token is stale,
    /// was cancelled by `close`/`unmount`, or already fired.
    pub fn fire(&mut self, token: DeferredToken, committed: &SelectedFilters) -> bool {
        if !self.show.fire(token) {
            return false;
        }

        match std::mem::replace(&mut self.state, DialogState::Closed) {
            DialogState::Opening => {
                self.state = DialogState::CategoryList {
                    draft: selection::begin_edit(committed),
                };
                tracing::debug!("Filter dialog shown");
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Run whatever show is pending (next scheduler tick)
    pub fn tick(&mut self, committed: &SelectedFilters) -> bool {
        self.show
            .pending()
            .is_some_and(|token| self.fire(token, committed))
    }

    /// Close the dialog without applying
    ///
    /// Discards the draft and cancels a pending show. Committed filters are
    /// never touched. Returns `true` if a session was discarded.
    pub fn close(&mut self) -> bool {
        self.show.cancel();
        if self.is_open() {
            tracing::debug!("Filter dialog closed from {}", self.phase());
            self.state = DialogState::Closed;
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Navigation and editing
    // =========================================================================

    /// Open the value page of a category
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` unless the category page is shown,
    /// and `FacetError::UnknownCategory` if the id is not in the catalog.
    pub fn select_category(&mut self, category_id: &str) -> Result<&[DraftValue]> {
        if !matches!(self.state, DialogState::CategoryList { .. }) {
            return Err(self.reject("select a category"));
        }
        let category = self.catalog.require(category_id)?;

        let DialogState::CategoryList { draft } =
            std::mem::replace(&mut self.state, DialogState::Closed)
        else {
            unreachable!("phase checked above");
        };

        let values = selection::select_category(&draft, category);
        tracing::debug!("Opened category '{category_id}' ({} values)", values.len());
        self.state = DialogState::ValueList {
            draft,
            category_id: category.id.clone(),
            values,
        };

        Ok(self.active_values().unwrap_or_default())
    }

    /// Toggle one value of the open category
    ///
    /// Returns the value's new selection flag.
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` unless a value page is shown, and
    /// `FacetError::UnknownValue` if the category has no value with this id.
    pub fn toggle_value(&mut self, value_id: &str) -> Result<bool> {
        let DialogState::ValueList {
            category_id,
            values,
            ..
        } = &mut self.state
        else {
            return Err(self.reject("toggle a value"));
        };

        if !selection::toggle_value(values, value_id) {
            return Err(FacetError::UnknownValue {
                category: category_id.clone(),
                value: value_id.to_string(),
            });
        }

        Ok(values
            .iter()
            .any(|draft| draft.id() == value_id && draft.selected))
    }

    /// Return to the category page, keeping the toggles in the draft
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` unless a value page is shown.
    pub fn back(&mut self) -> Result<()> {
        if !matches!(self.state, DialogState::ValueList { .. }) {
            return Err(self.reject("go back"));
        }

        let DialogState::ValueList {
            mut draft,
            category_id,
            values,
        } = std::mem::replace(&mut self.state, DialogState::Closed)
        else {
            unreachable!("phase checked above");
        };

        selection::commit_category(&mut draft, &category_id, &values);
        tracing::debug!("Committed category '{category_id}' into draft");
        self.state = DialogState::CategoryList { draft };
        Ok(())
    }

    /// Clear every selection in the draft, keeping the dialog open
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` unless the category page is shown.
    pub fn reset(&mut self) -> Result<()> {
        let DialogState::CategoryList { draft } = &mut self.state else {
            return Err(self.reject("reset"));
        };

        *draft = selection::reset_draft();
        self.events.push(SearchEvent::ResetRequested);
        tracing::debug!("Filter draft reset");
        Ok(())
    }

    /// Commit the draft and close the dialog
    ///
    /// Emits `SearchEvent::Apply` with the new committed filters and returns them.
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` unless the category page is shown.
    pub fn apply(&mut self) -> Result<SelectedFilters> {
        if !matches!(self.state, DialogState::CategoryList { .. }) {
            return Err(self.reject("apply"));
        }

        let DialogState::CategoryList { draft } =
            std::mem::replace(&mut self.state, DialogState::Closed)
        else {
            unreachable!("phase checked above");
        };

        let committed = selection::apply_draft(&draft);
        tracing::info!(
            "Applied filters: {} selected value(s)",
            selection::selected_count(&committed)
        );
        self.events.push(SearchEvent::Apply(committed.clone()));
        Ok(committed)
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    /// The draft being edited, if a session is shown
    #[must_use]
    pub const fn draft(&self) -> Option<&SelectedFilters> {
        match &self.state {
            DialogState::CategoryList { draft } | DialogState::ValueList { draft, .. } => {
                Some(draft)
            }
            _ => None,
        }
    }

    /// The category whose values are shown
    #[must_use]
    pub fn active_category(&self) -> Option<&FilterCategory> {
        match &self.state {
            DialogState::ValueList { category_id, .. } => self.catalog.get(category_id),
            _ => None,
        }
    }

    /// Draft values of the open category
    #[must_use]
    pub fn active_values(&self) -> Option<&[DraftValue]> {
        match &self.state {
            DialogState::ValueList { values, .. } => Some(values),
            _ => None,
        }
    }

    /// Rows of the category page, summarising the draft
    ///
    /// Empty when no session is shown.
    #[must_use]
    pub fn category_rows(&self) -> Vec<CategoryRow> {
        let Some(draft) = self.draft() else {
            return Vec::new();
        };

        self.catalog
            .categories()
            .iter()
            .map(|category| CategoryRow {
                id: category.id.clone(),
                name: category.name.clone(),
                summary: selection::selected_value_names(category, draft, &self.labels.no_values),
            })
            .collect()
    }

    /// Whether the reset button is shown (the draft has any selection)
    #[must_use]
    pub fn show_reset_button(&self) -> bool {
        self.draft().is_some_and(selection::has_any_selection)
    }

    /// Move pending events into `queue`
    pub fn drain_events_into(&mut self, queue: &mut EventQueue) {
        queue.append(&mut self.events);
    }

    /// Take pending events
    pub fn take_events(&mut self) -> Vec<SearchEvent> {
        self.events.drain()
    }

    fn reject(&self, action: &str) -> FacetError {
        let phase = self.phase();
        tracing::warn!("Rejected dialog transition: cannot {action} while {phase}");
        FacetError::invalid_state(format!("cannot {action} while the filter dialog is {phase}"))
    }
}
