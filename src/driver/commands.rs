//! Command types for driving a panel from text.

use crate::error::{FacetError, Result};
use std::fmt;
use std::str::FromStr;

/// One user or host action on a `SearchPanel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCommand {
    /// Attach the panel to its host surface
    Mount,
    /// Detach the panel from its host surface
    Unmount,
    /// Type a new query (the rest of the line, may be empty)
    Query(String),
    /// Press the clear button
    Clear,
    /// Press Enter in the search input
    Submit,
    /// Press the filter button
    Filter,
    /// Let the scheduler run the pending dialog show
    Tick,
    /// Open the value page of a category
    Category(String),
    /// Toggle a value on the open value page
    Toggle(String),
    /// Return to the category page
    Back,
    /// Apply the draft
    Apply,
    /// Reset the draft
    Reset,
    /// Close the dialog without applying
    Close,
    /// Press "load more"
    More,
    /// The data source started fetching
    Loading,
    /// The data source returned `count` items
    Results { count: usize, has_more: bool },
    /// Print the derived view
    Show,
}

impl PanelCommand {
    /// Returns a human-readable description of the command.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Mount => "Mount the panel",
            Self::Unmount => "Unmount the panel",
            Self::Query(_) => "Type a query",
            Self::Clear => "Clear the query",
            Self::Submit => "Submit the query",
            Self::Filter => "Open the filter dialog",
            Self::Tick => "Run the pending dialog show",
            Self::Category(_) => "Open a filter category",
            Self::Toggle(_) => "Toggle a filter value",
            Self::Back => "Back to the category list",
            Self::Apply => "Apply the draft filters",
            Self::Reset => "Reset the draft filters",
            Self::Close => "Close the filter dialog",
            Self::More => "Load more results",
            Self::Loading => "Mark results as loading",
            Self::Results { .. } => "Report loaded results",
            Self::Show => "Show the panel view",
        }
    }
}

impl fmt::Display for PanelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mount => f.write_str("mount"),
            Self::Unmount => f.write_str("unmount"),
            Self::Query(text) if text.is_empty() => f.write_str("query"),
            Self::Query(text) => write!(f, "query {text}"),
            Self::Clear => f.write_str("clear"),
            Self::Submit => f.write_str("submit"),
            Self::Filter => f.write_str("filter"),
            Self::Tick => f.write_str("tick"),
            Self::Category(id) => write!(f, "category {id}"),
            Self::Toggle(id) => write!(f, "toggle {id}"),
            Self::Back => f.write_str("back"),
            Self::Apply => f.write_str("apply"),
            Self::Reset => f.write_str("reset"),
            Self::Close => f.write_str("close"),
            Self::More => f.write_str("more"),
            Self::Loading => f.write_str("loading"),
            Self::Results { count, has_more } => {
                if *has_more {
                    write!(f, "results {count} more")
                } else {
                    write!(f, "results {count}")
                }
            }
            Self::Show => f.write_str("show"),
        }
    }
}

impl FromStr for PanelCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));

        let command = match keyword {
            "mount" => Self::Mount,
            "unmount" => Self::Unmount,
            "query" | "type" => return Ok(Self::Query(rest.to_string())),
            "clear" => Self::Clear,
            "submit" | "enter" => Self::Submit,
            "filter" | "filters" => Self::Filter,
            "tick" => Self::Tick,
            "category" | "open" => return Ok(Self::Category(required(keyword, rest)?)),
            "toggle" => return Ok(Self::Toggle(required(keyword, rest)?)),
            "back" => Self::Back,
            "apply" | "save" => Self::Apply,
            "reset" => Self::Reset,
            "close" | "cancel" => Self::Close,
            "more" => Self::More,
            "loading" => Self::Loading,
            "results" => return parse_results(rest),
            "show" | "view" => Self::Show,
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command '{other}'")),
        };

        if rest.is_empty() {
            Ok(command)
        } else {
            Err(format!("'{keyword}' takes no arguments"))
        }
    }
}

fn required(keyword: &str, rest: &str) -> std::result::Result<String, String> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        Err(format!("'{keyword}' takes exactly one id"))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_results(rest: &str) -> std::result::Result<PanelCommand, String> {
    let mut parts = rest.split_whitespace();
    let count = parts
        .next()
        .ok_or_else(|| "'results' needs an item count".to_string())?
        .parse::<usize>()
        .map_err(|e| format!("invalid item count: {e}"))?;

    let has_more = match parts.next() {
        None => false,
        Some("more" | "true") => true,
        Some("done" | "false") => false,
        Some(other) => return Err(format!("expected 'more' or 'done', got '{other}'")),
    };

    if parts.next().is_some() {
        return Err("'results' takes at most two arguments".to_string());
    }
    Ok(PanelCommand::Results { count, has_more })
}

/// Parse a command script
///
/// One command per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `FacetError::InvalidCommand` with the 1-based line number of the
/// first line that cannot be parsed.
pub fn parse_script(script: &str) -> Result<Vec<PanelCommand>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            line.parse().map_err(|message| FacetError::InvalidCommand {
                line: index + 1,
                message,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("mount".parse(), Ok(PanelCommand::Mount));
        assert_eq!("  tick  ".parse(), Ok(PanelCommand::Tick));
        assert_eq!("save".parse(), Ok(PanelCommand::Apply));
    }

    #[test]
    fn test_parse_query_keeps_spaces() {
        assert_eq!(
            "query green tea".parse(),
            Ok(PanelCommand::Query("green tea".to_string()))
        );
        assert_eq!("query".parse(), Ok(PanelCommand::Query(String::new())));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            "category age".parse(),
            Ok(PanelCommand::Category("age".to_string()))
        );
        assert!("toggle".parse::<PanelCommand>().is_err());
        assert!("toggle teen adult".parse::<PanelCommand>().is_err());
    }

    #[test]
    fn test_parse_results() {
        assert_eq!(
            "results 20 more".parse(),
            Ok(PanelCommand::Results {
                count: 20,
                has_more: true
            })
        );
        assert_eq!(
            "results 0".parse(),
            Ok(PanelCommand::Results {
                count: 0,
                has_more: false
            })
        );
        assert!("results many".parse::<PanelCommand>().is_err());
        assert!("results 3 maybe".parse::<PanelCommand>().is_err());
    }

    #[test]
    fn test_parse_rejects_stray_arguments() {
        let err = "apply now".parse::<PanelCommand>().unwrap_err();
        assert_eq!(err, "'apply' takes no arguments");
    }

    #[test]
    fn test_display_parses_back() {
        for command in [
            PanelCommand::Query("blue shoes".to_string()),
            PanelCommand::Toggle("teen".to_string()),
            PanelCommand::Results {
                count: 5,
                has_more: true,
            },
            PanelCommand::Show,
        ] {
            assert_eq!(command.to_string().parse(), Ok(command));
        }
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# open the dialog\nmount\n\nfilter\n  # indented comment\ntick\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![PanelCommand::Mount, PanelCommand::Filter, PanelCommand::Tick]
        );
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("mount\n\njump\n").unwrap_err();
        assert!(matches!(
            err,
            FacetError::InvalidCommand { line: 3, ref message } if message.contains("jump")
        ));
    }
}
