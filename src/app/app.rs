use super::event::AppEvent;
use super::input_buffer::InputBuffer;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::state::FormState;
use crate::config::FormConfig;
use crate::input::{ClipboardProvider, SystemClipboard};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback for copy and paste actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Which derived view a copy action targets
#[derive(Debug, Clone, Copy)]
enum CopyTarget {
    Lines,
    Commas,
}

/// Session state for the address form.
///
/// All state lives here and is only changed through [`App::handle_event`];
/// the UI reads it back through [`App::get_render_state`].
pub struct App {
    mode: AppMode,
    config: FormConfig,
    input: InputBuffer,
    form: FormState,
    status: Option<StatusMessage>,
    results_scroll: usize,
    clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: FormConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let input = InputBuffer::new(&config.initial_input);
        Self {
            mode: AppMode::Editing,
            config,
            input,
            form: FormState::new(),
            status: None,
            results_scroll: 0,
            clipboard,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::InsertChar(c) => self.input.insert_char(c),
            AppEvent::InsertText(text) => self.input.insert_str(&text),
            AppEvent::Newline => self.input.insert_char('\n'),
            AppEvent::Backspace => self.input.backspace(),
            AppEvent::Delete => self.input.delete(),
            AppEvent::CursorLeft => self.input.move_left(),
            AppEvent::CursorRight => self.input.move_right(),
            AppEvent::CursorUp => self.input.move_up(),
            AppEvent::CursorDown => self.input.move_down(),
            AppEvent::CursorHome => self.input.move_home(),
            AppEvent::CursorEnd => self.input.move_end(),
            AppEvent::Validate => self.validate(),
            AppEvent::Clear => self.clear(),
            AppEvent::CopyLines => self.copy(CopyTarget::Lines),
            AppEvent::CopyCommas => self.copy(CopyTarget::Commas),
            AppEvent::PasteClipboard => self.paste(),
            AppEvent::ScrollResults(delta) => self.scroll_results(delta),
            AppEvent::Quit => {
                info!("quit requested");
                self.mode = AppMode::Quit;
            }
            AppEvent::None => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_app(self)
    }

    fn validate(&mut self) {
        let total = self.form.run(self.input.text());
        self.results_scroll = 0;
        self.status = None;
        info!(
            tokens = total,
            valid = self.form.valid_count(),
            "validated address list"
        );
    }

    fn clear(&mut self) {
        self.input.clear();
        self.form.clear();
        self.results_scroll = 0;
        self.status = None;
        debug!("form cleared");
    }

    fn copy(&mut self, target: CopyTarget) {
        let Some(view) = self.form.valid_view() else {
            self.status = Some(StatusMessage::info("No valid addresses to copy"));
            return;
        };

        let (text, style) = match target {
            CopyTarget::Lines => (&view.lines, "one per line"),
            CopyTarget::Commas => (&view.commas, "comma-separated"),
        };

        self.status = Some(match self.clipboard.set_text(text) {
            Ok(()) => {
                info!(count = view.count, ?target, "copied valid addresses");
                StatusMessage::info(format!(
                    "Copied {} {} ({})",
                    view.count,
                    plural(view.count),
                    style
                ))
            }
            Err(err) => {
                warn!(error = %err, "copy failed");
                StatusMessage::error(err.to_string())
            }
        });
    }

    fn paste(&mut self) {
        match self.clipboard.get_text() {
            Ok(text) => {
                debug!(bytes = text.len(), "pasted from clipboard");
                self.input.insert_str(&text);
                self.status = None;
            }
            Err(err) => {
                warn!(error = %err, "paste failed");
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    fn scroll_results(&mut self, delta: i32) {
        let last = self.form.results.len().saturating_sub(1) as i64;
        let next = (self.results_scroll as i64 + delta as i64).clamp(0, last);
        self.results_scroll = next as usize;
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "address"
    } else {
        "addresses"
    }
}
