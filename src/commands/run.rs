//! Run command - drive a headless search panel from a command script

use crate::config::PanelConfig;
use crate::driver::{ScriptRunner, StepOutcome, StepReport, parse_script};
use crate::panel::{PanelSnapshot, SearchPanel};
use crate::{Result, catalog, output};
use colored::Colorize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Arguments of the run command
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    /// Command script; stdin when `None`
    pub script: Option<PathBuf>,
    /// Filter catalog
    pub catalog: PathBuf,
    /// Snapshot restored before and saved after the run
    pub state: Option<PathBuf>,
    /// JSON lines instead of text
    pub json: bool,
    /// Stop at the first rejected command
    pub strict: bool,
}

/// Execute the run command
///
/// # Errors
///
/// Returns `FacetError` if the catalog, script or state file cannot be read,
/// the script cannot be parsed, or (in strict mode) a command is rejected.
pub fn execute(config: PanelConfig, args: &RunArgs, quiet: bool) -> Result<()> {
    let catalog = catalog::load_catalog(&args.catalog)?;
    let script = read_script(args.script.as_deref())?;
    let commands = parse_script(&script)?;

    let snapshot = match &args.state {
        Some(path) => load_snapshot(path)?,
        None => PanelSnapshot::default(),
    };

    let mut panel = SearchPanel::builder()
        .catalog(catalog)
        .config(config)
        .snapshot(snapshot)
        .build()?;

    let reports = ScriptRunner::new()
        .strict(args.strict)
        .run(&mut panel, &commands)?;

    for report in &reports {
        if args.json {
            println!("{}", output::to_json_line(report)?);
        } else {
            let line = output::format_report(report, quiet);
            if !line.is_empty() {
                println!("{line}");
            }
        }
    }

    if let Some(path) = &args.state {
        save_snapshot(path, &panel.snapshot())?;
    }

    if !quiet && !args.json {
        print_summary(&panel, &reports);
    }
    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            Ok(script)
        }
    }
}

/// Read a saved snapshot; a missing file is an empty snapshot
///
/// # Errors
///
/// Returns `FacetError` if the file exists but cannot be read or parsed.
pub fn load_snapshot(path: &Path) -> Result<PanelSnapshot> {
    if !path.exists() {
        tracing::debug!("No state at {}, starting empty", path.display());
        return Ok(PanelSnapshot::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a snapshot as pretty JSON
///
/// # Errors
///
/// Returns `FacetError` if the file cannot be written.
pub fn save_snapshot(path: &Path, snapshot: &PanelSnapshot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(snapshot)?)?;
    tracing::debug!("Saved state to {}", path.display());
    Ok(())
}

fn print_summary(panel: &SearchPanel, reports: &[StepReport]) {
    let rejected = reports
        .iter()
        .filter(|report| matches!(report.outcome, StepOutcome::Rejected { .. }))
        .count();

    println!(
        "\n{} {} command(s), {} rejected",
        "Done:".bold(),
        reports.len(),
        rejected
    );
    println!(
        "  query: {:?}, {} filter value(s) selected, page size {}",
        panel.query(),
        panel.badge_count(),
        panel.page_size()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::filters;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state").join("panel.json");
        let snapshot = PanelSnapshot {
            query: "tea".to_string(),
            selected_filters: filters(&[("age", &["teen"])]),
        };

        save_snapshot(&path, &snapshot).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_missing_snapshot_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = load_snapshot(&temp_dir.path().join("none.json")).unwrap();
        assert_eq!(snapshot, PanelSnapshot::default());
    }

    #[test]
    fn test_run_saves_committed_state() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("catalog.json");
        let script = temp_dir.path().join("script.txt");
        let state = temp_dir.path().join("state.json");

        fs::write(
            &catalog,
            r#"[{"id": "age", "name": "Age", "values": [{"id": "teen", "name": "Teen"}]}]"#,
        )
        .unwrap();
        fs::write(
            &script,
            "mount\nquery shoes\nfilter\ntick\ncategory age\ntoggle teen\nback\napply\n",
        )
        .unwrap();

        let args = RunArgs {
            script: Some(script),
            catalog,
            state: Some(state.clone()),
            json: true,
            strict: true,
        };
        execute(PanelConfig::default(), &args, true).unwrap();

        let saved = load_snapshot(&state).unwrap();
        assert_eq!(saved.query, "shoes");
        assert_eq!(saved.selected_filters, filters(&[("age", &["teen"])]));
    }
}
