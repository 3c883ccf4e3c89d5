use std::io::IsTerminal;

use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Component, ScoreResult, ValueSet, MAX_VALUE};

const NAME_WIDTH: usize = 24;
const DEFAULT_BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Qualitative band of a score, used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLevel {
    High,
    Moderate,
    Low,
}

impl ScoreLevel {
    pub fn of(score: f64) -> Self {
        if score >= 7.0 {
            ScoreLevel::High
        } else if score >= 4.0 {
            ScoreLevel::Moderate
        } else {
            ScoreLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::High => "high",
            ScoreLevel::Moderate => "moderate",
            ScoreLevel::Low => "low",
        }
    }
}

/// "7.45 / 10"
pub fn format_score(score: f64) -> String {
    format!("{:.2} / 10", score)
}

/// Headline shown above the breakdown
pub fn format_headline(score: f64, use_colors: bool) -> String {
    let level = ScoreLevel::of(score);
    let score_str = format_score(score);

    if use_colors {
        let colored = match level {
            ScoreLevel::High => score_str.green().bold().to_string(),
            ScoreLevel::Moderate => score_str.yellow().bold().to_string(),
            ScoreLevel::Low => score_str.red().bold().to_string(),
        };
        format!("Motivation level: {} ({})", colored, level.label())
    } else {
        format!("Motivation level: {} ({})", score_str, level.label())
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that fits next to the fixed columns, capped at the default
fn bar_width_for(term_width: Option<usize>) -> usize {
    // name + "  10.0  15.0%  1.50  "
    let fixed = NAME_WIDTH + 22;
    match term_width {
        Some(width) if width > fixed + 5 => (width - fixed).min(DEFAULT_BAR_WIDTH),
        Some(_) => 5,
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Horizontal bar for a 0-10 value: "██████░░░░"
pub fn value_bar(value: f64, width: usize) -> String {
    let ratio = (value / MAX_VALUE).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Per-component table: name, value, weight, contribution, bar
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let bar_width = bar_width_for(get_terminal_width());

    result
        .breakdown
        .iter()
        .map(|item| {
            let name = format!(
                "{:<width$}",
                truncate_label(item.component.name(), NAME_WIDTH),
                width = NAME_WIDTH
            );
            let numbers = format!(
                "{:>5.1}  {:>5.1}%  {:>4.2}",
                item.value,
                item.weight * 100.0,
                item.contribution
            );
            let bar = value_bar(item.value, bar_width);

            if use_colors {
                format!("{}{}  {}", name.bold(), numbers, bar.cyan())
            } else {
                format!("{}{}  {}", name, numbers, bar)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full report printed by `score`
pub fn format_report(result: &ScoreResult, use_colors: bool) -> String {
    format!(
        "{}\n\n{}",
        format_headline(result.score, use_colors),
        format_breakdown(result, use_colors)
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    score: f64,
    level: &'static str,
    values: &'a ValueSet,
    breakdown: &'a [crate::scoring::ComponentContribution],
}

/// Machine-readable report for scripting
pub fn format_json(values: &ValueSet, result: &ScoreResult) -> serde_json::Result<String> {
    let report = JsonReport {
        score: result.score,
        level: ScoreLevel::of(result.score).label(),
        values,
        breakdown: &result.breakdown,
    };
    serde_json::to_string_pretty(&report)
}

/// Description of the model, printed by `about`
pub fn format_about(use_colors: bool) -> String {
    let mut lines = vec![
        "Model of athletes' motivation for training sessions at the sport".to_string(),
        "specialization stage, built with digital technologies.".to_string(),
        String::new(),
    ];

    for component in Component::ALL {
        let name = format!("{:<width$}", component.name(), width = NAME_WIDTH);
        let key = format!("--{}", component.key());
        if use_colors {
            lines.push(format!(
                "  {} {:<15} {}",
                name.bold(),
                key.cyan(),
                component.description()
            ));
        } else {
            lines.push(format!("  {} {:<15} {}", name, key, component.description()));
        }
    }

    lines.push(String::new());
    lines.push("Stages of motivation: engagement -> stabilization -> deepening".to_string());
    lines.join("\n")
}
