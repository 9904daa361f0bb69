//! Clipboard access for copy-out and paste-in
//!
//! The app talks to a [`ClipboardProvider`] so the controller can be driven
//! without a display server. [`SystemClipboard`] is the arboard-backed
//! implementation used by the binary.

use crate::error::AppError;

/// Text clipboard the app can write views to and read input from
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<(), AppError>;

    fn get_text(&mut self) -> Result<String, AppError>;
}

/// System clipboard via arboard
///
/// The handle is opened on first use and kept alive afterwards; on X11 and
/// Wayland the copied text only stays available while its owner exists.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, AppError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| AppError::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?.set_text(text.to_string())?;
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, AppError> {
        Ok(self.handle()?.get_text()?)
    }
}

/// In-process clipboard, used in headless runs and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Some(text.to_string()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn get_text(&mut self) -> Result<String, AppError> {
        self.contents
            .clone()
            .ok_or_else(|| AppError::Clipboard("clipboard is empty".to_string()))
    }
}
