use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::output::{format_score, value_bar, ScoreLevel};
use crate::scoring::Component;
use crate::tui::app::{App, FlashKind, InputMode};
use crate::tui::radar::render_radar;

const TITLE: &str = "Motivation Calculator";
const NAME_WIDTH: usize = 24;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 50 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Sliders + chart
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = Layout::horizontal([
        Constraint::Length((NAME_WIDTH + 30) as u16), // Sliders
        Constraint::Fill(1),                          // Radar chart
    ])
    .split(chunks[1]);

    render_title(frame, chunks[0], app);
    render_sliders(frame, body[0], app);
    render_radar(frame, body[1], &app.values, &app.theme);
    render_status_bar(frame, chunks[2], app);

    // Render overlays based on input mode
    match app.input_mode {
        InputMode::ExportInput => render_export_popup(frame, app),
        InputMode::Help => render_help_popup(frame, app),
        InputMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let score = app.result.score;
    let score_text = format!(
        "Motivation level: {} ({})",
        format_score(score),
        ScoreLevel::of(score).label()
    );

    let left_len = TITLE.len();
    let right_len = score_text.len();
    let padding_len = (area.width as usize).saturating_sub(left_len + right_len);

    let title = Line::from(vec![
        Span::styled(TITLE, Style::default().fg(theme.title_color).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(score_text, Style::default().fg(theme.score_color(score)).bold()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_sliders(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::bordered()
        .title(" Ratings 0-10 ")
        .border_style(Style::default().fg(theme.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // name + marker + value + weight take the rest
    let bar_width = (inner.width as usize).saturating_sub(NAME_WIDTH + 16).max(4);

    let mut lines = Vec::new();
    for (idx, component) in Component::ALL.iter().enumerate() {
        let value = app.values.get(*component);
        let weight = app.engine.weights().weight(*component) * 100.0;
        let bar = value_bar(value, bar_width);
        let filled = bar.chars().take_while(|c| *c == '█').count();
        let (filled_part, empty_part): (String, String) =
            (bar.chars().take(filled).collect(), bar.chars().skip(filled).collect());

        let marker = if idx == app.selected { "▶ " } else { "  " };
        let mut line = Line::from(vec![
            Span::raw(marker),
            Span::raw(format!("{:<width$}", component.name(), width = NAME_WIDTH)),
            Span::styled(filled_part, Style::default().fg(theme.bar_filled)),
            Span::styled(empty_part, Style::default().fg(theme.bar_empty)),
            Span::raw(format!(" {:>4.1}", value)),
            Span::styled(format!(" {:>4.1}%", weight), Style::default().fg(theme.muted)),
        ]);
        if idx == app.selected {
            line = line.style(theme.row_selected);
        }
        lines.push(line);
        lines.push(Line::from(""));
    }

    let selected = app.selected_component();
    lines.push(Line::from(Span::styled(
        selected.description(),
        Style::default().fg(theme.muted).italic(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, kind, _)) = app.flash_message {
        let msg_color = match kind {
            FlashKind::Success => theme.flash_success,
            FlashKind::Error => theme.flash_error,
            FlashKind::Info => theme.flash_info,
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        // Build hints with colored shortcut keys
        let hints = [
            ("j/k", ":select "),
            ("h/l", ":adjust "),
            ("0-9", ":set "),
            ("r", ":reset "),
            ("z", ":undo "),
            ("e/s", ":export "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

/// Render the export destination popup
fn render_export_popup(frame: &mut Frame, app: &App) {
    let width = (app.export_input.chars().count() as u16 + 4).clamp(50, 90);
    let popup_area = centered_rect_fixed(width, 5, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Export to (.csv or .txt) ")
        .title_style(app.theme.popup_title)
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);
    let chunks = Layout::vertical([
        Constraint::Length(1), // Input line
        Constraint::Length(1), // Help text
    ])
    .split(inner);

    // Render input with cursor
    let input = Paragraph::new(format!("{}|", app.export_input));
    frame.render_widget(input, chunks[0]);

    let help = Paragraph::new("Enter: save | Esc: cancel | directory = default name")
        .style(Style::default().fg(app.theme.muted));
    frame.render_widget(help, chunks[1]);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(50, 16, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(app.theme.popup_title)
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let entries = [
        ("j / Down      ", "Next component"),
        ("k / Up        ", "Previous component"),
        ("l / Right     ", "Increase by one step"),
        ("h / Left      ", "Decrease by one step"),
        ("L / H         ", "Increase / decrease by 1"),
        ("0-9 / m       ", "Set whole value / set 10"),
        ("r             ", "Reset all sliders"),
        ("z             ", "Undo last change"),
        ("e / s         ", "Export to .csv or .txt"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scoring::ScoreEngine;
    use crate::tui::theme::ThemeColors;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn test_app() -> App {
        App::new(ScoreEngine::default(), Config::default(), ThemeColors::dark()).unwrap()
    }

    #[test]
    fn test_draws_title_score_and_sliders() {
        let mut app = test_app();
        let screen = render(&mut app, 120, 30);
        assert!(screen.contains("Motivation Calculator"));
        assert!(screen.contains("5.25 / 10"));
        assert!(screen.contains("Self-regulation skills"));
        assert!(screen.contains("Motivation profile"));
    }

    #[test]
    fn test_small_terminal_message() {
        let mut app = test_app();
        let screen = render(&mut app, 40, 8);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn test_export_popup_shows_input() {
        let mut app = test_app();
        app.input_mode = InputMode::ExportInput;
        app.export_input = "scores.csv".to_string();
        let screen = render(&mut app, 120, 30);
        assert!(screen.contains("scores.csv|"));
        assert!(screen.contains("Export to"));
    }

    #[test]
    fn test_help_popup() {
        let mut app = test_app();
        app.show_help();
        let screen = render(&mut app, 120, 30);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("e / s"));
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let rect = centered_rect_fixed(200, 50, Rect::new(0, 0, 100, 20));
        assert_eq!(rect, Rect::new(0, 0, 100, 20));
    }
}
