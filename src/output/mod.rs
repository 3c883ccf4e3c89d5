pub mod formatter;

pub use formatter::{
    format_about, format_breakdown, format_headline, format_json, format_report, format_score,
    should_use_colors, value_bar, ScoreLevel,
};
