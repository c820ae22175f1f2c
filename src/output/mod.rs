//! Output formatting for CLI display
//!
//! Human-readable (colored) rendering of events, panel views and catalogs,
//! plus JSON rendering for scripting.

use crate::catalog::FilterCatalog;
use crate::driver::{StepOutcome, StepReport};
use crate::error::Result;
use crate::events::SearchEvent;
use crate::panel::PanelView;
use colored::Colorize;
use serde::Serialize;

/// Format one event for display
#[must_use]
pub fn format_event(event: &SearchEvent) -> String {
    let name = event.name().cyan();
    match event {
        SearchEvent::Apply(filters) => {
            let entries: Vec<String> = filters
                .iter()
                .map(|(category, values)| format!("{category}=[{}]", values.join(", ")))
                .collect();
            format!("{name} {{{}}}", entries.join("; "))
        }
        SearchEvent::SearchSubmitted(query) => format!("{name} {query:?}"),
        _ => name.to_string(),
    }
}

/// Format a panel view as an indented block, one line per element
#[must_use]
pub fn format_view(view: &PanelView) -> String {
    let mut lines = Vec::new();

    let query = if view.query.is_empty() {
        view.placeholder.dimmed().to_string()
    } else {
        view.query.bold().to_string()
    };
    let clear = if view.show_clear_button { " [x]" } else { "" };
    lines.push(format!("  search: {query}{clear}"));

    let filter_button = match (view.filter_button_visible, view.filter_button_enabled) {
        (false, _) => "hidden".dimmed().to_string(),
        (true, false) => "disabled".yellow().to_string(),
        (true, true) if view.show_badge => format!("filters ({})", view.badge_count).green().to_string(),
        (true, true) => "filters".to_string(),
    };
    lines.push(format!("  filter button: {filter_button}"));

    let results = if view.loading {
        "loading...".yellow().to_string()
    } else if let Some(text) = &view.empty_text {
        text.dimmed().to_string()
    } else {
        format!("{} item(s)", view.item_count)
    };
    lines.push(format!("  results: {results} (page size {})", view.page_size));
    if let Some(more) = &view.more_label {
        lines.push(format!("  [{more}]"));
    }

    let dialog = &view.dialog;
    lines.push(format!("  dialog: {}", dialog.phase.to_string().magenta()));
    if let Some(title) = &dialog.title {
        lines.push(format!("    {}", title.bold()));
        lines.extend(dialog.values.iter().map(|value| {
            let mark = if value.selected { "[x]".green() } else { "[ ]".normal() };
            format!("    {mark} {}", value.value.display_label())
        }));
    }
    lines.extend(
        dialog
            .rows
            .iter()
            .map(|row| format!("    {}: {}", row.name.bold(), row.summary)),
    );
    if !dialog.rows.is_empty() {
        let reset = dialog
            .reset_label
            .as_deref()
            .map(|label| format!("[{label}] "))
            .unwrap_or_default();
        lines.push(format!("    {reset}[{}]", dialog.apply_label));
    }

    lines.join("\n")
}

/// Format one executed command and its outcome
#[must_use]
pub fn format_report(report: &StepReport, quiet: bool) -> String {
    match &report.outcome {
        StepOutcome::Events { events } if quiet => events
            .iter()
            .map(format_event)
            .collect::<Vec<_>>()
            .join("\n"),
        StepOutcome::Events { events } => {
            let mut out = format!("> {}", report.command.bold());
            for event in events {
                out.push_str(&format!("\n  -> {}", format_event(event)));
            }
            out
        }
        StepOutcome::View { view } => {
            if quiet {
                format_view(view)
            } else {
                format!("> {}\n{}", report.command.bold(), format_view(view))
            }
        }
        StepOutcome::Rejected { reason } => {
            format!("> {} {}", report.command.bold(), reason.red())
        }
    }
}

/// Summarise a catalog: one line per category with its values
#[must_use]
pub fn format_catalog(catalog: &FilterCatalog) -> String {
    let mut out = format!(
        "{} categor{}, {} value(s)",
        catalog.len(),
        if catalog.len() == 1 { "y" } else { "ies" },
        catalog.value_count()
    );
    for category in catalog.categories() {
        let labels: Vec<String> = category.values.iter().map(|v| v.display_label()).collect();
        out.push_str(&format!(
            "\n  {} ({}): {}",
            category.name.bold(),
            category.id.dimmed(),
            labels.join(", ")
        ));
    }
    out
}

/// Serialize any value as a single JSON line
///
/// # Errors
///
/// Returns `FacetError::Json` if serialization fails.
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
