//! Search panel composition
//!
//! `SearchPanel` owns the committed state and wires the search bar, the
//! filter dialog and the query coordinator together. The dialog only sees a
//! snapshot of the committed filters and returns changes through `apply`.
//!
//! # Workflow
//!
//! ```text
//! build() --> mount() --> open_filters() --> tick() --> select/toggle/back --> apply_filters()
//!                                                                                  |
//!               input_query() / clear_query() / restore() / load_more()            v
//!                                      \-------------------------------> ReloadRequested
//! ```
//!
//! Every call leaves its signals in the panel outbox; drain them with
//! [`SearchPanel::take_events`].

use super::coordinator::{ParamChanges, QueryCoordinator};
use super::search_bar::SearchBar;
use crate::catalog::FilterCatalog;
use crate::config::PanelConfig;
use crate::dialog::{CategoryRow, DeferredToken, DialogPhase, FilterDialog};
use crate::error::{FacetError, Result};
use crate::events::{EventQueue, SearchEvent};
use crate::selection::{DraftValue, SelectedFilters};
use serde::{Deserialize, Serialize};

/// Persistable committed state of a panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub selected_filters: SelectedFilters,
}

/// Everything a frontend needs to render the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub query: String,
    pub placeholder: String,
    pub show_clear_button: bool,
    pub filter_button_visible: bool,
    pub filter_button_enabled: bool,
    pub badge_count: usize,
    pub show_badge: bool,
    pub page_size: usize,
    pub loading: bool,
    pub item_count: usize,
    /// Set when the empty-results text is shown
    pub empty_text: Option<String>,
    /// Set when the "load more" button is shown
    pub more_label: Option<String>,
    pub dialog: DialogView,
}

/// Render state of the filter dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub phase: DialogPhase,
    pub title: Option<String>,
    pub rows: Vec<CategoryRow>,
    pub values: Vec<DraftValue>,
    /// Set when the reset button is shown
    pub reset_label: Option<String>,
    pub apply_label: String,
}

/// A search bar, filter dialog and results area over one committed state
#[derive(Debug)]
pub struct SearchPanel {
    config: PanelConfig,
    bar: SearchBar,
    dialog: FilterDialog,
    coordinator: QueryCoordinator,
    events: EventQueue,
}

impl SearchPanel {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> SearchPanelBuilder {
        SearchPanelBuilder::new()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to the host surface; the filter dialog can be opened afterwards
    pub fn mount(&mut self) {
        self.dialog.mount();
    }

    /// Detach from the host surface, cancelling any pending dialog show
    pub fn unmount(&mut self) {
        self.dialog.unmount();
    }

    /// Run the pending deferred dialog show, if any
    ///
    /// The draft starts from the filters committed at this point.
    pub fn tick(&mut self) -> bool {
        self.dialog.tick(self.coordinator.selected_filters())
    }

    /// Run a specific deferred dialog show
    pub fn fire(&mut self, token: DeferredToken) -> bool {
        self.dialog.fire(token, self.coordinator.selected_filters())
    }

    // =========================================================================
    // Search bar
    // =========================================================================

    /// The user typed into the search input
    pub fn input_query(&mut self, text: impl Into<String>) {
        if self.bar.input(text) {
            self.coordinator.set_query(self.bar.query().to_string());
        }
        self.collect();
    }

    /// The user pressed the clear button
    pub fn clear_query(&mut self) {
        self.bar.clear();
        self.coordinator.set_query(String::new());
        self.collect();
    }

    /// The user pressed Enter
    pub fn submit(&mut self) {
        self.bar.submit();
        self.collect();
    }

    // =========================================================================
    // Filter dialog
    // =========================================================================

    /// The user pressed the filter button
    ///
    /// # Errors
    ///
    /// Returns `FacetError::InvalidState` if the filter button is hidden or
    /// disabled, the panel is not mounted, or the dialog is already open.
    pub fn open_filters(&mut self) -> Result<DeferredToken> {
        if !self.bar.filter_button_enabled() {
            return Err(FacetError::invalid_state(
                "the filter button is hidden or disabled",
            ));
        }

        let token = self.dialog.open()?;
        self.bar.tap_filter()?;
        self.collect();
        Ok(token)
    }

    /// Open the value page of a category
    ///
    /// # Errors
    ///
    /// See [`FilterDialog::select_category`].
    pub fn select_category(&mut self, category_id: &str) -> Result<&[DraftValue]> {
        self.dialog.select_category(category_id)
    }

    /// Toggle a value of the open category
    ///
    /// # Errors
    ///
    /// See [`FilterDialog::toggle_value`].
    pub fn toggle_value(&mut self, value_id: &str) -> Result<bool> {
        self.dialog.toggle_value(value_id)
    }

    /// Return to the category page
    ///
    /// # Errors
    ///
    /// See [`FilterDialog::back`].
    pub fn back(&mut self) -> Result<()> {
        self.dialog.back()
    }

    /// Clear the draft
    ///
    /// # Errors
    ///
    /// See [`FilterDialog::reset`].
    pub fn reset_filters(&mut self) -> Result<()> {
        self.dialog.reset()?;
        self.collect();
        Ok(())
    }

    /// Commit the draft as the new committed filters
    ///
    /// # Errors
    ///
    /// See [`FilterDialog::apply`].
    pub fn apply_filters(&mut self) -> Result<()> {
        let applied = self.dialog.apply()?;
        self.coordinator.set_selected_filters(applied);
        self.sync_badge();
        self.collect();
        Ok(())
    }

    /// Dismiss the dialog without applying
    pub fn close_filters(&mut self) -> bool {
        self.dialog.close()
    }

    // =========================================================================
    // External assignment and data source
    // =========================================================================

    /// Replace the query from outside the search bar
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.apply_changes(ParamChanges::query(query));
    }

    /// Replace the committed filters from outside the dialog
    pub fn set_selected_filters(&mut self, filters: SelectedFilters) {
        self.apply_changes(ParamChanges::selected_filters(filters));
    }

    /// Apply several changes as one update (at most one reload)
    pub fn apply_changes(&mut self, changes: ParamChanges) {
        if let Some(query) = &changes.query {
            self.bar.input(query.clone());
        }
        self.coordinator.apply_changes(changes);
        self.sync_badge();
        self.collect();
    }

    /// Capture the committed state
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            query: self.coordinator.query().to_string(),
            selected_filters: self.coordinator.selected_filters().clone(),
        }
    }

    /// Restore a saved committed state
    ///
    /// Counts as one external update: a reload is requested if anything differs.
    pub fn restore(&mut self, snapshot: PanelSnapshot) {
        tracing::debug!("Restoring panel snapshot");
        self.apply_changes(
            ParamChanges::query(snapshot.query).with_selected_filters(snapshot.selected_filters),
        );
    }

    /// The user pressed "load more"
    pub fn load_more(&mut self) {
        self.events.push(SearchEvent::LoadMoreRequested);
        self.coordinator.load_more();
        self.collect();
    }

    /// The data source started fetching
    pub const fn begin_loading(&mut self) {
        self.coordinator.begin_loading();
    }

    /// The data source finished fetching
    pub const fn receive_results(&mut self, item_count: usize, has_more: bool) {
        self.coordinator.receive_results(item_count, has_more);
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Current query text
    #[must_use]
    pub fn query(&self) -> &str {
        self.coordinator.query()
    }

    /// Committed filters
    #[must_use]
    pub const fn selected_filters(&self) -> &SelectedFilters {
        self.coordinator.selected_filters()
    }

    /// Number of results currently requested
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.coordinator.page_size()
    }

    /// Number shown on the filter badge
    #[must_use]
    pub fn badge_count(&self) -> usize {
        self.coordinator.badge_count()
    }

    /// Whether any results are loaded
    #[must_use]
    pub const fn has_items(&self) -> bool {
        self.coordinator.item_count() > 0
    }

    /// Whether the empty-results text is shown
    #[must_use]
    pub const fn show_empty_state(&self) -> bool {
        self.coordinator.show_empty_state()
    }

    /// Whether the "load more" button is shown
    #[must_use]
    pub const fn show_more(&self) -> bool {
        self.coordinator.has_more()
    }

    /// The filter dialog
    #[must_use]
    pub const fn dialog(&self) -> &FilterDialog {
        &self.dialog
    }

    /// The search bar
    #[must_use]
    pub const fn search_bar(&self) -> &SearchBar {
        &self.bar
    }

    /// Snapshot of everything a frontend renders
    #[must_use]
    pub fn view(&self) -> PanelView {
        let labels = &self.config.labels;
        let dialog = &self.dialog;

        PanelView {
            query: self.query().to_string(),
            placeholder: self.bar.placeholder().to_string(),
            show_clear_button: self.bar.show_clear_button(),
            filter_button_visible: self.bar.filter_button_visible(),
            filter_button_enabled: self.bar.filter_button_enabled(),
            badge_count: self.bar.badge_count(),
            show_badge: self.bar.show_badge(),
            page_size: self.page_size(),
            loading: self.coordinator.is_loading(),
            item_count: self.coordinator.item_count(),
            empty_text: self
                .show_empty_state()
                .then(|| labels.no_results.clone()),
            more_label: self.show_more().then(|| labels.more_button.clone()),
            dialog: DialogView {
                phase: dialog.phase(),
                title: dialog.active_category().map(|c| c.name.clone()),
                rows: if dialog.active_category().is_some() {
                    Vec::new()
                } else {
                    dialog.category_rows()
                },
                values: dialog.active_values().map(<[_]>::to_vec).unwrap_or_default(),
                reset_label: dialog
                    .show_reset_button()
                    .then(|| dialog.labels().reset_button.clone()),
                apply_label: dialog.labels().save_button.clone(),
            },
        }
    }

    /// Take every pending event in emission order
    pub fn take_events(&mut self) -> Vec<SearchEvent> {
        self.collect();
        self.events.drain()
    }

    fn sync_badge(&mut self) {
        self.bar.set_badge_count(self.coordinator.badge_count());
    }

    fn collect(&mut self) {
        self.bar.drain_events_into(&mut self.events);
        self.dialog.drain_events_into(&mut self.events);
        self.coordinator.drain_events_into(&mut self.events);
    }
}

/// Builder for `SearchPanel`
///
/// ```
/// use facetr::catalog::FilterCatalog;
/// use facetr::panel::SearchPanel;
///
/// let mut panel = SearchPanel::builder()
///     .catalog(FilterCatalog::empty())
///     .query("tea")
///     .build()
///     .unwrap();
///
/// assert!(panel.take_events().is_empty());
/// assert!(!panel.search_bar().filter_button_enabled());
/// ```
#[derive(Debug, Default)]
pub struct SearchPanelBuilder {
    catalog: Option<FilterCatalog>,
    config: Option<PanelConfig>,
    snapshot: PanelSnapshot,
}

impl SearchPanelBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter catalog (required)
    #[must_use]
    pub fn catalog(mut self, catalog: FilterCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the panel configuration
    #[must_use]
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the initial query
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.snapshot.query = query.into();
        self
    }

    /// Set the initial committed filters
    #[must_use]
    pub fn selected_filters(mut self, filters: SelectedFilters) -> Self {
        self.snapshot.selected_filters = filters;
        self
    }

    /// Start from a saved snapshot
    #[must_use]
    pub fn snapshot(mut self, snapshot: PanelSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Build the `SearchPanel`
    ///
    /// The initial query and filters are initialization: no events are emitted.
    ///
    /// # Errors
    ///
    /// Returns `FacetError::Configuration` if no catalog was given or the
    /// configuration is invalid.
    pub fn build(self) -> Result<SearchPanel> {
        let catalog = self.catalog.ok_or_else(|| {
            FacetError::Configuration("a filter catalog is required".to_string())
        })?;
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let PanelSnapshot {
            query,
            selected_filters,
        } = self.snapshot;

        let mut bar = SearchBar::new(query.clone(), config.labels.placeholder.clone())
            .hide_filter_button(config.hide_filter_button)
            .disable_filter_button(catalog.is_empty());
        let coordinator = QueryCoordinator::new(query, selected_filters, config.paging);
        bar.set_badge_count(coordinator.badge_count());

        let dialog = FilterDialog::new(catalog, config.labels.clone());

        Ok(SearchPanel {
            config,
            bar,
            dialog,
            coordinator,
            events: EventQueue::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{filters, sample_catalog};

    fn mounted_panel() -> SearchPanel {
        let mut panel = SearchPanel::builder()
            .catalog(sample_catalog())
            .query("a")
            .build()
            .unwrap();
        panel.mount();
        panel
    }

    #[test]
    fn test_builder_requires_catalog() {
        let result = SearchPanel::builder().build();
        assert!(matches!(result, Err(FacetError::Configuration(_))));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let mut config = PanelConfig::default();
        config.paging.page_size = 0;
        let result = SearchPanel::builder()
            .catalog(sample_catalog())
            .config(config)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_emits_nothing() {
        let mut panel = mounted_panel();
        assert!(panel.take_events().is_empty());
    }

    #[test]
    fn test_clear_query_order() {
        let mut panel = mounted_panel();
        panel.clear_query();
        assert_eq!(
            panel.take_events(),
            vec![SearchEvent::ClearRequested, SearchEvent::ReloadRequested]
        );
        assert_eq!(panel.query(), "");
    }

    #[test]
    fn test_clear_empty_query_does_not_reload() {
        let mut panel = mounted_panel();
        panel.set_query("");
        panel.take_events();

        panel.clear_query();
        assert_eq!(panel.take_events(), vec![SearchEvent::ClearRequested]);
    }

    #[test]
    fn test_open_filters_before_mount_rejected() {
        let mut panel = SearchPanel::builder()
            .catalog(sample_catalog())
            .build()
            .unwrap();

        assert!(matches!(
            panel.open_filters(),
            Err(FacetError::InvalidState(_))
        ));
        assert!(panel.take_events().is_empty());
    }

    #[test]
    fn test_open_filters_with_empty_catalog_rejected() {
        let mut panel = SearchPanel::builder()
            .catalog(FilterCatalog::empty())
            .build()
            .unwrap();
        panel.mount();

        assert!(panel.open_filters().is_err());
        assert_eq!(panel.dialog().phase(), DialogPhase::Closed);
    }

    #[test]
    fn test_apply_updates_badge_and_reloads() {
        let mut panel = mounted_panel();
        panel.open_filters().unwrap();
        panel.tick();
        panel.select_category("color").unwrap();
        panel.toggle_value("red").unwrap();
        panel.toggle_value("blue").unwrap();
        panel.back().unwrap();
        panel.apply_filters().unwrap();

        let expected = filters(&[("color", &["red", "blue"])]);
        assert_eq!(
            panel.take_events(),
            vec![
                SearchEvent::FilterDialogOpened,
                SearchEvent::Apply(expected.clone()),
                SearchEvent::ReloadRequested,
            ]
        );
        assert_eq!(panel.selected_filters(), &expected);
        assert_eq!(panel.badge_count(), 2);
        assert!(panel.view().show_badge);
    }

    #[test]
    fn test_apply_without_changes_does_not_reload() {
        let mut panel = mounted_panel();
        panel.open_filters().unwrap();
        panel.tick();
        panel.apply_filters().unwrap();

        let events = panel.take_events();
        assert_eq!(events.len(), 2);
        assert!(!events.contains(&SearchEvent::ReloadRequested));
    }

    #[test]
    fn test_assignment_while_opening_reaches_draft() {
        let mut panel = mounted_panel();
        panel.open_filters().unwrap();
        panel.set_selected_filters(filters(&[("age", &["teen"])]));
        assert!(panel.tick());

        assert_eq!(panel.dialog().draft(), Some(&filters(&[("age", &["teen"])])));
        panel.apply_filters().unwrap();
        assert_eq!(panel.selected_filters(), &filters(&[("age", &["teen"])]));
        assert_eq!(panel.badge_count(), 1);
    }

    #[test]
    fn test_restore_while_opening_reaches_draft() {
        let mut panel = mounted_panel();
        let token = panel.open_filters().unwrap();
        panel.restore(PanelSnapshot {
            query: "b".to_string(),
            selected_filters: filters(&[("color", &["red"])]),
        });
        assert!(panel.fire(token));
        panel.take_events();

        panel.apply_filters().unwrap();
        assert_eq!(panel.selected_filters(), &filters(&[("color", &["red"])]));
        assert!(!panel.take_events().contains(&SearchEvent::ReloadRequested));
    }

    #[test]
    fn test_restore_coalesces_into_one_reload() {
        let mut panel = mounted_panel();
        panel.restore(PanelSnapshot {
            query: "b".to_string(),
            selected_filters: filters(&[("age", &["teen"])]),
        });

        assert_eq!(panel.take_events(), vec![SearchEvent::ReloadRequested]);
        assert_eq!(panel.search_bar().query(), "b");
        assert_eq!(panel.snapshot().selected_filters, filters(&[("age", &["teen"])]));
    }

    #[test]
    fn test_load_more_signals() {
        let mut panel = mounted_panel();
        panel.load_more();
        assert_eq!(
            panel.take_events(),
            vec![SearchEvent::LoadMoreRequested, SearchEvent::ReloadRequested]
        );
        assert_eq!(panel.page_size(), 40);
    }

    #[test]
    fn test_view_reflects_results() {
        let mut panel = mounted_panel();
        let view = panel.view();
        assert_eq!(view.empty_text.as_deref(), Some("No matching results found."));
        assert!(view.more_label.is_none());

        panel.begin_loading();
        assert!(panel.view().empty_text.is_none());

        panel.receive_results(20, true);
        let view = panel.view();
        assert!(panel.has_items());
        assert_eq!(view.more_label.as_deref(), Some("More"));
        assert_eq!(view.item_count, 20);
    }

    #[test]
    fn test_view_uses_configured_labels() {
        let mut config = PanelConfig::default();
        config.labels.save_button = "Apply".to_string();
        config.labels.no_results = "Nothing".to_string();
        let panel = SearchPanel::builder()
            .catalog(sample_catalog())
            .config(config)
            .build()
            .unwrap();

        let view = panel.view();
        assert_eq!(view.dialog.apply_label, "Apply");
        assert_eq!(view.empty_text.as_deref(), Some("Nothing"));
    }

    #[test]
    fn test_view_shows_value_page() {
        let mut panel = mounted_panel();
        panel.open_filters().unwrap();
        panel.tick();
        panel.select_category("age").unwrap();

        let view = panel.view();
        assert_eq!(view.dialog.phase, DialogPhase::ValueList);
        assert_eq!(view.dialog.title.as_deref(), Some("Age"));
        assert_eq!(view.dialog.values.len(), 3);
        assert!(view.dialog.rows.is_empty());
    }
}
