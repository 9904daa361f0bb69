// Configuration for the address form and its views
// Defaults mirror the web form this tool replaces

/// Sample input shown on first launch: two well-formed addresses.
pub const SAMPLE_INPUT: &str =
    "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B,0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

/// Form text and layout settings
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Text placed in the input area at startup (default: SAMPLE_INPUT)
    pub initial_input: String,

    /// Hint drawn when the input area is empty
    pub placeholder: String,

    /// Visible rows of the input area (default 5)
    pub input_rows: u16,

    /// Cap on visible rows of the one-per-line view (default 5)
    pub max_lines_view_rows: u16,

    /// Fixed visible rows of the comma-separated view (default 2)
    pub comma_view_rows: u16,

    /// Result glyphs
    pub valid_glyph: &'static str,   // default ✅
    pub invalid_glyph: &'static str, // default ❌

    /// Status words next to each result
    pub valid_label: &'static str,
    pub invalid_label: &'static str,

    /// Notice shown when a run produced results but none are valid
    pub no_valid_message: &'static str,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            initial_input: SAMPLE_INPUT.to_string(),
            placeholder: format!("e.g., {}", SAMPLE_INPUT),
            input_rows: 5,
            max_lines_view_rows: 5,
            comma_view_rows: 2,
            valid_glyph: "✅",
            invalid_glyph: "❌",
            valid_label: "Valid",
            invalid_label: "Invalid",
            no_valid_message: "No valid Ethereum addresses found in the provided list.",
        }
    }
}

impl FormConfig {
    /// Same defaults with a different starting input.
    pub fn with_initial_input(initial_input: impl Into<String>) -> Self {
        Self {
            initial_input: initial_input.into(),
            ..Self::default()
        }
    }
}
