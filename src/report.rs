//! Plain-text output for headless `--check` runs

use crate::app::ResultRow;
use crate::config::FormConfig;
use crate::validation::{ValidOutputView, ValidationResult};
use clap::ValueEnum;

/// What a headless run prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Emit {
    /// Per-token results followed by both views
    #[default]
    Report,
    /// Valid addresses, one per line
    Lines,
    /// Valid addresses, comma-separated
    Commas,
}

pub fn render(results: &[ValidationResult], config: &FormConfig, emit: Emit) -> String {
    let view = ValidOutputView::from_results(results);

    match emit {
        Emit::Lines => view.map(|v| v.lines).unwrap_or_default(),
        Emit::Commas => view.map(|v| v.commas).unwrap_or_default(),
        Emit::Report => render_report(results, config, view),
    }
}

fn render_report(
    results: &[ValidationResult],
    config: &FormConfig,
    view: Option<ValidOutputView>,
) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut out = String::from("Validation Results:\n");
    for result in results {
        out.push_str(&ResultRow::new(result, config).line());
        out.push('\n');
    }

    match view {
        Some(view) => {
            out.push_str("\nValid Addresses\n\nOne per line:\n");
            out.push_str(&view.lines);
            out.push_str("\n\nComma-separated:\n");
            out.push_str(&view.commas);
        }
        None => {
            out.push('\n');
            out.push_str(config.no_valid_message);
        }
    }

    out
}
