use crate::app::{App, AppEvent, AppMode};
use crate::ui::keymap::key_to_app_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::draw;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// Idle wait between input polls
const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draw, wait for input, apply it; until the app asks to quit.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let app_event = match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => key_to_app_event(key),
                Event::Paste(text) => AppEvent::InsertText(text),
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    AppEvent::None
                }
                _ => AppEvent::None,
            };

            app.handle_event(app_event);
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal.draw(|frame| draw(frame, &render_state))?;
        Ok(())
    }
}
