use crate::app::{RenderState, StatusKind};
use crate::ui::keymap::KEY_HELP;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "Ethereum Wallet Validator";

/// Draw the whole form from a render state.
///
/// Sections without content (results, copy views, notice) take no space.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let views_height = state
        .valid_view
        .as_ref()
        .map_or(0, |_| state.lines_rows + 2 + state.comma_rows + 2);
    let notice_height = u16::from(state.info_message.is_some());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(state.input_rows + 2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(views_height),
            Constraint::Length(notice_height),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_input(frame, chunks[1], state);
    frame.render_widget(render_key_help(), chunks[2]);

    if state.has_results() {
        frame.render_widget(render_results(state, chunks[3].height), chunks[3]);
    }

    if views_height > 0 {
        render_valid_views(frame, chunks[4], state);
    }

    if let Some(message) = &state.info_message {
        frame.render_widget(render_notice(message), chunks[5]);
    }

    frame.render_widget(render_status(state), chunks[6]);
}

fn render_title() -> Paragraph<'static> {
    Paragraph::new(TITLE).alignment(Alignment::Center).style(
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD),
    )
}

fn render_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Addresses (comma or newline separated) ")
        .border_style(Style::default().fg(colors::accent()));

    let (row, col) = state.cursor;
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let hscroll = input_hscroll(col, inner_width);

    let paragraph = match &state.placeholder {
        Some(hint) => Paragraph::new(hint.as_str())
            .style(Style::default().fg(colors::dimmed()))
            .wrap(Wrap { trim: false }),
        None => Paragraph::new(state.input.as_str())
            .style(Style::default().fg(colors::text()))
            .scroll((state.input_scroll, hscroll)),
    };
    frame.render_widget(paragraph.block(block), area);

    // Caret sits inside the border
    if inner_width > 0 && inner_height > 0 {
        let x = area.x + 1 + (col - hscroll).min(inner_width - 1);
        let y = area.y + 1 + row.saturating_sub(state.input_scroll).min(inner_height - 1);
        frame.set_cursor_position((x, y));
    }
}

/// Columns to shift the input left so the caret column stays visible.
fn input_hscroll(cursor_col: u16, inner_width: u16) -> u16 {
    cursor_col.saturating_sub(inner_width.saturating_sub(1))
}

fn render_key_help() -> Paragraph<'static> {
    Paragraph::new(KEY_HELP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()))
}

fn render_results(state: &RenderState, height: u16) -> Paragraph<'static> {
    let visible = height.saturating_sub(2) as usize;
    let lines: Vec<Line<'static>> = state
        .rows
        .iter()
        .skip(state.results_scroll)
        .take(visible)
        .map(|row| {
            let color = if row.is_valid {
                colors::valid()
            } else {
                colors::invalid()
            };
            Line::from(vec![
                Span::raw(format!("{} ", row.glyph)),
                Span::styled(
                    row.label,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" — ", Style::default().fg(colors::dimmed())),
                Span::styled(row.text.clone(), Style::default().fg(colors::text())),
            ])
        })
        .collect();

    let title = format!(" Validation Results ({}) ", state.rows.len());
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(colors::dimmed())),
    )
}

fn render_valid_views(frame: &mut Frame, area: Rect, state: &RenderState) {
    let Some(view) = &state.valid_view else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(state.lines_rows + 2),
            Constraint::Length(state.comma_rows + 2),
        ])
        .split(area);

    let border = Style::default().fg(colors::valid());

    let lines = Paragraph::new(view.lines.clone())
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(lines_view_title(view.count, state.lines_rows))
                .border_style(border),
        );
    frame.render_widget(lines, chunks[0]);

    let commas = Paragraph::new(view.commas.clone())
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Valid Addresses: comma-separated ")
                .border_style(border),
        );
    frame.render_widget(commas, chunks[1]);
}

fn lines_view_title(count: usize, shown: u16) -> String {
    let hidden = count.saturating_sub(usize::from(shown));
    if hidden == 0 {
        " Valid Addresses: one per line ".to_string()
    } else {
        format!(" Valid Addresses: one per line (+{} more, ^Y copies all) ", hidden)
    }
}

fn render_notice(message: &str) -> Paragraph<'static> {
    Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::invalid()))
}

fn render_status(state: &RenderState) -> Paragraph<'static> {
    match &state.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => colors::valid(),
                StatusKind::Error => colors::invalid(),
            };
            Paragraph::new(status.text.clone()).style(Style::default().fg(color))
        }
        None => Paragraph::new(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppEvent};
    use crate::config::{FormConfig, SAMPLE_INPUT};
    use crate::input::MemoryClipboard;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let state = app.get_render_state();
        terminal.draw(|frame| draw(frame, &state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(input: &str) -> App {
        App::with_clipboard(
            FormConfig::with_initial_input(input),
            Box::new(MemoryClipboard::default()),
        )
    }

    #[test]
    fn test_draw_before_validation_has_no_results() {
        let app = app_with(SAMPLE_INPUT);
        let text = rendered_text(&app, 120, 30);
        assert!(text.contains(TITLE));
        assert!(!text.contains("Validation Results"));
        assert!(!text.contains("one per line"));
    }

    #[test]
    fn test_draw_results_and_views() {
        let mut app = app_with(&format!("{},0x123", SAMPLE_INPUT));
        app.handle_event(AppEvent::Validate);
        let text = rendered_text(&app, 120, 30);
        assert!(text.contains("Validation Results (3)"));
        assert!(text.contains("Valid"));
        assert!(text.contains("Invalid"));
        assert!(text.contains("one per line"));
        assert!(text.contains("comma-separated"));
        assert!(!text.contains("No valid Ethereum addresses"));
    }

    #[test]
    fn test_draw_notice_when_nothing_valid() {
        let mut app = app_with("not-an-address");
        app.handle_event(AppEvent::Validate);
        let text = rendered_text(&app, 120, 30);
        assert!(text.contains("No valid Ethereum addresses found"));
        assert!(!text.contains("one per line"));
    }

    #[test]
    fn test_draw_placeholder_when_empty() {
        let app = app_with("");
        let text = rendered_text(&app, 120, 30);
        assert!(text.contains("e.g.,"));
    }

    #[test]
    fn test_input_hscroll_follows_caret() {
        assert_eq!(input_hscroll(10, 78), 0);
        assert_eq!(input_hscroll(77, 78), 0);
        assert_eq!(input_hscroll(85, 78), 8);
        assert_eq!(input_hscroll(3, 0), 3);
    }

    #[test]
    fn test_draw_long_line_keeps_caret_on_visible_end() {
        let app = app_with(SAMPLE_INPUT);
        assert_eq!(app.get_render_state().cursor, (0, 85));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = app.get_render_state();
        terminal.draw(|frame| draw(frame, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let input_row: String = (0..80u16)
            .map(|x| buffer[(x, 2u16)].symbol().to_string())
            .collect();
        // The line's tail is on screen, ending just left of the caret
        assert!(input_row.contains("4438f44e"), "row was {input_row:?}");
        assert_eq!(buffer[(77u16, 2u16)].symbol(), "e");

        let caret = terminal.get_cursor_position().unwrap();
        assert_eq!((caret.x, caret.y), (78, 2));
    }

    #[test]
    fn test_lines_view_title_counts_hidden_addresses() {
        let input = (1..=8)
            .map(|i| format!("0x{:040x}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let mut app = app_with(&input);
        app.handle_event(AppEvent::Validate);
        let text = rendered_text(&app, 120, 40);
        assert!(text.contains("one per line (+3 more"));

        let mut app = app_with(SAMPLE_INPUT);
        app.handle_event(AppEvent::Validate);
        let text = rendered_text(&app, 120, 30);
        assert!(text.contains("one per line"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let mut app = app_with(SAMPLE_INPUT);
        app.handle_event(AppEvent::Validate);
        let _ = rendered_text(&app, 10, 4);
    }
}
