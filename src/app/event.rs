/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    InsertChar(char),
    /// Pasted or otherwise bulk-inserted text
    InsertText(String),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    /// "Validate Addresses" action
    Validate,
    /// "Clear" action
    Clear,
    /// Copy the one-per-line view of valid addresses
    CopyLines,
    /// Copy the comma-separated view of valid addresses
    CopyCommas,
    PasteClipboard,
    ScrollResults(i32),
    Quit,
    None,
}
