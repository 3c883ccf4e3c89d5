//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::output::ScoreLevel;

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score-based colors (traffic light pattern, high motivation is green)
    pub score_high: Color,
    pub score_mid: Color,
    pub score_low: Color,

    // Slider colors
    pub bar_filled: Color,
    pub bar_empty: Color,
    pub row_selected: Style,

    // Radar chart colors
    pub radar_grid: Color,
    pub radar_axis: Color,
    pub radar_shape: Color,
    pub radar_fill: Color,
    pub radar_label: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,
    pub flash_info: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            score_high: Color::Green,
            score_mid: Color::Yellow,
            score_low: Color::Red,
            bar_filled: Color::Cyan,
            bar_empty: Color::DarkGray,
            row_selected: Style::new().bg(Color::Indexed(237)).bold(),
            radar_grid: Color::Indexed(239),
            radar_axis: Color::Indexed(242),
            radar_shape: Color::LightBlue,
            radar_fill: Color::Blue,
            radar_label: Color::Gray,
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            flash_info: Color::White,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    /// Light theme palette (darker foregrounds for light backgrounds)
    pub fn light() -> Self {
        Self {
            score_high: Color::Rgb(0, 128, 0),
            score_mid: Color::Rgb(170, 110, 0),
            score_low: Color::Rgb(180, 0, 0),
            bar_filled: Color::Blue,
            bar_empty: Color::Indexed(250),
            row_selected: Style::new().bg(Color::Indexed(253)).bold(),
            radar_grid: Color::Indexed(252),
            radar_axis: Color::Indexed(247),
            radar_shape: Color::Blue,
            radar_fill: Color::Indexed(153),
            radar_label: Color::Indexed(238),
            muted: Color::Indexed(242),
            title_color: Color::Blue,
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(180, 0, 0),
            flash_info: Color::Black,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Color for a 0-10 motivation score
    pub fn score_color(&self, score: f64) -> Color {
        match ScoreLevel::of(score) {
            ScoreLevel::High => self.score_high,
            ScoreLevel::Moderate => self.score_mid,
            ScoreLevel::Low => self.score_low,
        }
    }
}

/// Pick the palette for `mode`. `Auto` asks the terminal for its background
/// luminance and falls back to dark when the terminal does not answer.
///
/// Must run before the TUI takes over the terminal.
pub fn resolve_theme(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Dark => ThemeColors::dark(),
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => ThemeColors::light(),
            Ok(_) => ThemeColors::dark(),
            Err(e) => {
                tracing::debug!("terminal background detection failed: {}", e);
                ThemeColors::dark()
            }
        },
    }
}
