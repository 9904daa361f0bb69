use crate::app::app::{App, StatusMessage};
use crate::app::mode::AppMode;
use crate::config::FormConfig;
use crate::validation::{ValidOutputView, ValidationResult};

/// One line of the results list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub glyph: &'static str,
    pub label: &'static str,
    pub text: String,
    pub is_valid: bool,
}

impl ResultRow {
    pub fn new(result: &ValidationResult, config: &FormConfig) -> Self {
        let (glyph, label) = if result.is_valid {
            (config.valid_glyph, config.valid_label)
        } else {
            (config.invalid_glyph, config.invalid_label)
        };
        Self {
            glyph,
            label,
            text: result.text().to_string(),
            is_valid: result.is_valid,
        }
    }

    /// `✅ Valid — 0x...`
    pub fn line(&self) -> String {
        format!("{} {} — {}", self.glyph, self.label, self.text)
    }
}

/// Everything the view draws, derived from the app after each event
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    /// Shown in place of the input while it is empty
    pub placeholder: Option<String>,
    /// (row, display column) inside the input area
    pub cursor: (u16, u16),
    /// First input row visible in the input area
    pub input_scroll: u16,
    pub input_rows: u16,
    /// Empty when no validation results exist
    pub rows: Vec<ResultRow>,
    pub results_scroll: usize,
    /// Present only when at least one address is valid
    pub valid_view: Option<ValidOutputView>,
    pub lines_rows: u16,
    pub comma_rows: u16,
    pub info_message: Option<String>,
    pub status: Option<StatusMessage>,
}

impl RenderState {
    pub fn from_app(app: &App) -> Self {
        let config = app.config();
        let form = app.form();
        let input = app.input();

        let cursor = input.cursor_position();
        let rows: Vec<ResultRow> = form
            .results
            .iter()
            .map(|r| ResultRow::new(r, config))
            .collect();
        let valid_view = form.valid_view();
        let lines_rows = valid_view
            .as_ref()
            .map_or(0, |v| lines_view_rows(v.count, config.max_lines_view_rows));
        let comma_rows = if valid_view.is_some() {
            config.comma_view_rows
        } else {
            0
        };

        Self {
            mode: app.mode(),
            input: input.text().to_string(),
            placeholder: input.is_empty().then(|| config.placeholder.clone()),
            cursor,
            input_scroll: input_scroll(cursor.0, config.input_rows),
            input_rows: config.input_rows,
            rows,
            results_scroll: app.results_scroll(),
            valid_view,
            lines_rows,
            comma_rows,
            info_message: form
                .nothing_valid()
                .then(|| config.no_valid_message.to_string()),
            status: app.status().cloned(),
        }
    }

    pub fn has_results(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// Visible rows of the one-per-line view: one per address, capped.
pub fn lines_view_rows(count: usize, cap: u16) -> u16 {
    count.min(cap as usize) as u16
}

/// Keeps the cursor row inside a window of `rows` visible lines.
fn input_scroll(cursor_row: u16, rows: u16) -> u16 {
    cursor_row.saturating_sub(rows.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Token, ValidationResult};

    #[test]
    fn test_lines_view_rows_caps_at_five() {
        assert_eq!(lines_view_rows(1, 5), 1);
        assert_eq!(lines_view_rows(5, 5), 5);
        assert_eq!(lines_view_rows(12, 5), 5);
    }

    #[test]
    fn test_input_scroll_follows_cursor() {
        assert_eq!(input_scroll(0, 5), 0);
        assert_eq!(input_scroll(4, 5), 0);
        assert_eq!(input_scroll(7, 5), 3);
    }

    #[test]
    fn test_result_row_line_format() {
        let config = FormConfig::default();
        let result = ValidationResult::new(Token {
            text: "nope".to_string(),
            index: 0,
        });
        let row = ResultRow::new(&result, &config);
        assert!(!row.is_valid);
        assert_eq!(row.line(), "❌ Invalid — nope");
    }
}
