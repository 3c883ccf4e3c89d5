pub mod app;
pub mod event;
pub mod radar;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::scoring::MAX_VALUE;

/// Run the interactive slider UI until the user quits.
pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer log output while the TUI is active to prevent it corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(250);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.update_flash(),
            Some(Event::Resize) => {}
            None => break Ok(()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            let step = app.config.slider_step;
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation
                KeyCode::Char('j') | KeyCode::Down => app.next_row(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

                // Slider adjustment
                KeyCode::Char('l') | KeyCode::Right => app.adjust_selected(step),
                KeyCode::Char('h') | KeyCode::Left => app.adjust_selected(-step),
                KeyCode::Char('L') => app.adjust_selected(1.0),
                KeyCode::Char('H') => app.adjust_selected(-1.0),
                KeyCode::Char('m') | KeyCode::End => app.set_selected(MAX_VALUE),
                KeyCode::Home => app.set_selected(0.0),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    app.set_selected(f64::from(c as u8 - b'0'));
                }

                // Reset / undo
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char('z') => app.undo_last(),

                // Export
                KeyCode::Char('e') | KeyCode::Char('s') => app.start_export_input(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::ExportInput => {
            match key.code {
                KeyCode::Enter => app.confirm_export_input(),
                KeyCode::Esc => app.cancel_export_input(),
                KeyCode::Backspace => {
                    app.export_input.pop();
                }
                KeyCode::Char(c) if !c.is_control() => {
                    app.export_input.push(c);
                }
                // Ignore all other keys (don't propagate to Normal mode)
                _ => {}
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
