//! Executes panel commands and records what each one produced.

use super::commands::PanelCommand;
use crate::error::{FacetError, Result};
use crate::events::SearchEvent;
use crate::panel::{PanelView, SearchPanel};
use serde::Serialize;

/// What a single command produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StepOutcome {
    /// The command ran; these events were emitted (possibly none)
    Events { events: Vec<SearchEvent> },
    /// The derived view was requested
    View { view: Box<PanelView> },
    /// The panel refused the command; its state is unchanged
    Rejected { reason: String },
}

/// One executed command and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub command: String,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Runs commands against a panel
///
/// Rejected transitions are recorded and the run continues, unless the
/// runner is strict.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    strict: bool,
}

impl ScriptRunner {
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Stop at the first rejected command
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Execute one command
    ///
    /// # Errors
    ///
    /// Returns the panel's error when the command is rejected.
    pub fn execute(&self, panel: &mut SearchPanel, command: &PanelCommand) -> Result<StepOutcome> {
        tracing::debug!("Executing '{command}'");

        match command {
            PanelCommand::Mount => panel.mount(),
            PanelCommand::Unmount => panel.unmount(),
            PanelCommand::Query(text) => panel.input_query(text.clone()),
            PanelCommand::Clear => panel.clear_query(),
            PanelCommand::Submit => panel.submit(),
            PanelCommand::Filter => {
                panel.open_filters()?;
            }
            PanelCommand::Tick => {
                if !panel.tick() {
                    tracing::debug!("Nothing pending on tick");
                }
            }
            PanelCommand::Category(id) => {
                panel.select_category(id)?;
            }
            PanelCommand::Toggle(id) => {
                panel.toggle_value(id)?;
            }
            PanelCommand::Back => panel.back()?,
            PanelCommand::Apply => panel.apply_filters()?,
            PanelCommand::Reset => panel.reset_filters()?,
            PanelCommand::Close => {
                panel.close_filters();
            }
            PanelCommand::More => panel.load_more(),
            PanelCommand::Loading => panel.begin_loading(),
            PanelCommand::Results { count, has_more } => panel.receive_results(*count, *has_more),
            PanelCommand::Show => {
                return Ok(StepOutcome::View {
                    view: Box::new(panel.view()),
                });
            }
        }

        Ok(StepOutcome::Events {
            events: panel.take_events(),
        })
    }

    /// Execute commands in order, reporting each one
    ///
    /// # Errors
    ///
    /// In strict mode, returns the error of the first rejected command.
    pub fn run(&self, panel: &mut SearchPanel, commands: &[PanelCommand]) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(commands.len());

        for command in commands {
            let outcome = match self.execute(panel, command) {
                Ok(outcome) => outcome,
                Err(e) if !self.strict && is_rejection(&e) => StepOutcome::Rejected {
                    reason: e.to_string(),
                },
                Err(e) => return Err(e),
            };

            reports.push(StepReport {
                command: command.to_string(),
                outcome,
            });
        }

        Ok(reports)
    }
}

const fn is_rejection(error: &FacetError) -> bool {
    matches!(
        error,
        FacetError::InvalidState(_) | FacetError::UnknownCategory(_) | FacetError::UnknownValue { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse_script;
    use crate::testing::{filters, sample_catalog};

    fn panel() -> SearchPanel {
        SearchPanel::builder()
            .catalog(sample_catalog())
            .build()
            .unwrap()
    }

    fn run(script: &str) -> (SearchPanel, Vec<StepReport>) {
        let mut panel = panel();
        let commands = parse_script(script).unwrap();
        let reports = ScriptRunner::new().run(&mut panel, &commands).unwrap();
        (panel, reports)
    }

    #[test]
    fn test_apply_flow() {
        let (panel, reports) = run(
            "mount\nfilter\ntick\ncategory age\ntoggle teen\nback\napply\n",
        );

        assert_eq!(reports.len(), 7);
        assert_eq!(
            reports[1].outcome,
            StepOutcome::Events {
                events: vec![SearchEvent::FilterDialogOpened]
            }
        );
        assert_eq!(
            reports[6].outcome,
            StepOutcome::Events {
                events: vec![
                    SearchEvent::Apply(filters(&[("age", &["teen"])])),
                    SearchEvent::ReloadRequested,
                ]
            }
        );
        assert_eq!(panel.badge_count(), 1);
    }

    #[test]
    fn test_rejection_is_recorded_and_run_continues() {
        let (panel, reports) = run("toggle teen\nquery shoes\n");

        assert!(matches!(reports[0].outcome, StepOutcome::Rejected { .. }));
        assert_eq!(
            reports[1].outcome,
            StepOutcome::Events {
                events: vec![SearchEvent::ReloadRequested]
            }
        );
        assert_eq!(panel.query(), "shoes");
    }

    #[test]
    fn test_strict_runner_stops() {
        let mut panel = panel();
        let commands = parse_script("apply\nquery shoes\n").unwrap();
        let result = ScriptRunner::new().strict(true).run(&mut panel, &commands);

        assert!(matches!(result, Err(FacetError::InvalidState(_))));
        assert_eq!(panel.query(), "");
    }

    #[test]
    fn test_show_returns_view() {
        let (_, reports) = run("results 20 more\nshow\n");
        let StepOutcome::View { view } = &reports[1].outcome else {
            panic!("expected a view");
        };
        assert_eq!(view.more_label.as_deref(), Some("More"));
        assert_eq!(reports[1].command, "show");
    }
}
