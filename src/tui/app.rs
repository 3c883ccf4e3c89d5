use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::scoring::{clamp_value, Collector, Component, ScoreEngine, ScoreResult, ValueSet};
use crate::tui::theme::ThemeColors;

const MAX_UNDO: usize = 50;
const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    ExportInput,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

pub struct App {
    pub engine: ScoreEngine,
    pub values: ValueSet,
    pub result: ScoreResult,
    pub selected: usize,
    pub input_mode: InputMode,
    pub export_input: String,
    pub flash_message: Option<(String, FlashKind, Instant)>,
    pub undo_stack: VecDeque<ValueSet>,
    pub should_quit: bool,
    pub config: Config,
    pub theme: ThemeColors,
}

/// Round to hundredths so repeated steps of 0.1 do not drift.
fn snap(value: f64) -> f64 {
    clamp_value((value * 100.0).round() / 100.0)
}

impl App {
    pub fn new(engine: ScoreEngine, config: Config, theme: ThemeColors) -> Result<Self> {
        let values = ValueSet::uniform(clamp_value(config.initial_value));
        let result = engine.compute(&values)?;

        Ok(Self {
            engine,
            values,
            result,
            selected: 0,
            input_mode: InputMode::Normal,
            export_input: String::new(),
            flash_message: None,
            undo_stack: VecDeque::new(),
            should_quit: false,
            config,
            theme,
        })
    }

    pub fn selected_component(&self) -> Component {
        Component::ALL[self.selected % Component::ALL.len()]
    }

    pub fn next_row(&mut self) {
        self.selected = (self.selected + 1) % Component::ALL.len();
    }

    pub fn previous_row(&mut self) {
        self.selected = if self.selected == 0 {
            Component::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Set one slider; values are clamped to 0-10 like a slider widget would.
    pub fn set_value(&mut self, component: Component, value: f64) {
        let value = snap(value);
        if self.values.get(component) == value {
            return;
        }
        self.push_undo();
        self.values.set(component, value);
        self.recompute();
    }

    /// Move the selected slider by `delta`.
    pub fn adjust_selected(&mut self, delta: f64) {
        let component = self.selected_component();
        self.set_value(component, self.values.get(component) + delta);
    }

    pub fn set_selected(&mut self, value: f64) {
        self.set_value(self.selected_component(), value);
    }

    /// Put every slider back to the configured starting value.
    pub fn reset(&mut self) {
        let initial = ValueSet::uniform(clamp_value(self.config.initial_value));
        if self.values == initial {
            return;
        }
        self.push_undo();
        self.values = initial;
        self.recompute();
        self.show_flash("Reset all sliders (z to undo)".to_string(), FlashKind::Info);
    }

    fn push_undo(&mut self) {
        self.undo_stack.push_front(self.values);
        if self.undo_stack.len() > MAX_UNDO {
            self.undo_stack.pop_back();
        }
    }

    pub fn undo_last(&mut self) {
        match self.undo_stack.pop_front() {
            Some(previous) => {
                self.values = previous;
                self.recompute();
                self.show_flash("Undone".to_string(), FlashKind::Info);
            }
            None => self.show_flash("Nothing to undo".to_string(), FlashKind::Info),
        }
    }

    fn recompute(&mut self) {
        match self.engine.compute(&self.values) {
            Ok(result) => self.result = result,
            Err(e) => self.show_flash(format!("Error: {}", e), FlashKind::Error),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, _, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String, kind: FlashKind) {
        self.flash_message = Some((msg, kind, Instant::now()));
    }

    /// Open the export prompt, prefilled with a timestamped file name.
    pub fn start_export_input(&mut self) {
        let file_name = export::default_file_name(now(), self.config.export_format);
        let suggested = match self.config.export_dir {
            Some(ref dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        };
        self.export_input = suggested.display().to_string();
        self.input_mode = InputMode::ExportInput;
    }

    /// Write the current profile to the path typed in the prompt.
    pub fn confirm_export_input(&mut self) {
        let input = std::mem::take(&mut self.export_input);
        self.input_mode = InputMode::Normal;
        self.export_to(&input, now());
    }

    pub(crate) fn export_to(&mut self, input: &str, timestamp: NaiveDateTime) {
        let outcome = export::resolve_destination(input, self.config.export_format, timestamp)
            .and_then(|path| {
                let values = self.collect()?;
                let result = self.engine.compute(&values)?;
                export::write(&path, &values, result.score, timestamp)
            });

        match outcome {
            Ok(path) => self.show_flash(format!("Saved: {}", path.display()), FlashKind::Success),
            Err(e) if e.is_cancelled() => {
                self.show_flash("Export cancelled".to_string(), FlashKind::Info)
            }
            Err(e) => {
                tracing::warn!("export failed: {}", e);
                self.show_flash(format!("Export failed: {}", e), FlashKind::Error);
            }
        }
    }

    /// Leaving the prompt is a deliberate no-op.
    pub fn cancel_export_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.export_input.clear();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

impl Collector for App {
    fn collect(&mut self) -> Result<ValueSet> {
        Ok(self.values.clamped())
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use chrono::NaiveDate;

    fn test_app() -> App {
        App::new(ScoreEngine::default(), Config::default(), ThemeColors::dark()).unwrap()
    }

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_starts_at_initial_value() {
        let app = test_app();
        assert_eq!(app.values, ValueSet::uniform(5.0));
        assert_eq!(app.result.score, 5.25);
        assert_eq!(app.selected_component(), Component::DigitalTechnologies);
    }

    #[test]
    fn test_row_navigation_wraps() {
        let mut app = test_app();
        app.previous_row();
        assert_eq!(app.selected_component(), Component::EvaluationCorrection);
        app.next_row();
        assert_eq!(app.selected_component(), Component::DigitalTechnologies);
    }

    #[test]
    fn test_adjust_clamps_and_snaps() {
        let mut app = test_app();
        for _ in 0..3 {
            app.adjust_selected(0.1);
        }
        assert_eq!(app.values.get(Component::DigitalTechnologies), 5.3);

        app.adjust_selected(100.0);
        assert_eq!(app.values.get(Component::DigitalTechnologies), 10.0);

        app.adjust_selected(-100.0);
        assert_eq!(app.values.get(Component::DigitalTechnologies), 0.0);
    }

    #[test]
    fn test_score_follows_sliders() {
        let mut app = test_app();
        for component in Component::ALL {
            app.set_value(component, 10.0);
        }
        assert_eq!(app.result.score, 10.0);
    }

    #[test]
    fn test_undo_restores_previous_values() {
        let mut app = test_app();
        app.set_selected(9.0);
        app.next_row();
        app.set_selected(1.0);

        app.undo_last();
        assert_eq!(app.values.get(Component::IndividualProfile), 5.0);
        assert_eq!(app.values.get(Component::DigitalTechnologies), 9.0);

        app.undo_last();
        assert_eq!(app.values, ValueSet::uniform(5.0));
        assert_eq!(app.result.score, 5.25);
    }

    #[test]
    fn test_unchanged_value_does_not_push_undo() {
        let mut app = test_app();
        app.set_selected(5.0);
        assert!(app.undo_stack.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut app = test_app();
        app.set_selected(2.0);
        app.reset();
        assert_eq!(app.values, ValueSet::uniform(5.0));
        app.undo_last();
        assert_eq!(app.values.get(Component::DigitalTechnologies), 2.0);
    }

    #[test]
    fn test_export_prompt_prefill_uses_config() {
        let mut app = test_app();
        app.config.export_format = ExportFormat::PlainText;
        app.config.export_dir = Some(PathBuf::from("/tmp"));
        app.start_export_input();
        assert_eq!(app.input_mode, InputMode::ExportInput);
        assert!(app.export_input.starts_with("/tmp/motivation_profile_"));
        assert!(app.export_input.ends_with(".txt"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.csv");
        let mut app = test_app();
        app.set_selected(8.0);

        app.export_to(&path.display().to_string(), timestamp());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("2025-06-01 12:00:00,Digital technologies,8"));
        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(kind, FlashKind::Success);
        assert!(msg.starts_with("Saved:"));
    }

    #[test]
    fn test_empty_export_prompt_is_silent_cancel() {
        let mut app = test_app();
        app.export_to("", timestamp());
        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(kind, FlashKind::Info);
        assert_eq!(msg, "Export cancelled");
    }

    #[test]
    fn test_unsupported_export_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.pdf");
        let mut app = test_app();

        app.export_to(&path.display().to_string(), timestamp());

        let (msg, kind, _) = app.flash_message.clone().unwrap();
        assert_eq!(kind, FlashKind::Error);
        assert!(msg.contains("unsupported export format"));
        assert!(!path.exists());
    }

    #[test]
    fn test_cancel_export_input() {
        let mut app = test_app();
        app.start_export_input();
        app.cancel_export_input();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.export_input.is_empty());
        assert!(app.flash_message.is_none());
    }
}
