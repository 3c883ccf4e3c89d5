use std::fmt::{self, Write as _};
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::ValueSet;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const SUMMARY_LABEL: &str = "Total motivation level";

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// CSV: one row per component plus a summary row
    #[default]
    #[serde(rename = "csv")]
    DelimitedTable,
    /// Human-readable text block
    #[serde(rename = "txt")]
    PlainText,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::DelimitedTable => "csv",
            ExportFormat::PlainText => "txt",
        }
    }

    /// Pick the encoding from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match ext.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::DelimitedTable),
            "txt" => Ok(ExportFormat::PlainText),
            _ => Err(Error::UnsupportedFormat(if ext.is_empty() {
                path.display().to_string()
            } else {
                format!(".{}", ext)
            })),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything written by one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    pub timestamp: NaiveDateTime,
    pub values: ValueSet,
    pub score: f64,
}

impl ExportRecord {
    pub fn new(values: ValueSet, score: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            values,
            score,
        }
    }

    fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    fn score_str(&self) -> String {
        format!("{:.2}/10", self.score)
    }

    /// Encode the record in `format`.
    pub fn render(&self, format: ExportFormat) -> std::io::Result<Vec<u8>> {
        match format {
            ExportFormat::DelimitedTable => self.render_table(),
            ExportFormat::PlainText => Ok(self.render_text().into_bytes()),
        }
    }

    fn render_table(&self) -> std::io::Result<Vec<u8>> {
        let timestamp = self.timestamp_str();
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer.write_record(["Timestamp", "Parameter", "Value"])?;
        for (component, value) in self.values.iter() {
            writer.write_record([timestamp.as_str(), component.name(), value.to_string().as_str()])?;
        }
        writer.write_record([timestamp.as_str(), SUMMARY_LABEL, self.score_str().as_str()])?;

        writer.into_inner().map_err(|e| e.into_error())
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "Date/time: {}", self.timestamp_str());
        let _ = writeln!(out, "{}: {}", SUMMARY_LABEL, self.score_str());
        let _ = writeln!(out);
        let _ = writeln!(out, "Parameters:");
        for (component, value) in self.values.iter() {
            let _ = writeln!(out, "- {}: {}", component.name(), value);
        }
        out
    }
}

/// `motivation_profile_<YYYY-MM-DD_HH-MM-SS>.<ext>`
pub fn default_file_name(timestamp: NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "motivation_profile_{}.{}",
        timestamp.format("%Y-%m-%d_%H-%M-%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn sample_record() -> ExportRecord {
        let timestamp = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap();
        ExportRecord::new(
            ValueSet::new([8.0, 6.0, 7.0, 5.0, 9.0, 6.5, 8.0]),
            7.1234,
            timestamp,
        )
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("out.csv")).unwrap(),
            ExportFormat::DelimitedTable
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("dir/out.TXT")).unwrap(),
            ExportFormat::PlainText
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        let err = ExportFormat::from_path(&PathBuf::from("report.pdf")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == ".pdf"));

        let err = ExportFormat::from_path(&PathBuf::from("report")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_table_layout() {
        let bytes = sample_record().render(ExportFormat::DelimitedTable).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Timestamp,Parameter,Value");
        assert_eq!(lines[1], "2025-03-14 09:05:30,Digital technologies,8");
        assert_eq!(lines[6], "2025-03-14 09:05:30,Self-regulation skills,6.5");
        assert_eq!(lines[7], "2025-03-14 09:05:30,Evaluation & correction,8");
        assert_eq!(lines[8], "2025-03-14 09:05:30,Total motivation level,7.12/10");
        assert!(lines[1..].iter().all(|l| l.starts_with("2025-03-14 09:05:30,")));
    }

    #[test]
    fn test_text_layout() {
        let bytes = sample_record().render(ExportFormat::PlainText).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let expected = "\
Date/time: 2025-03-14 09:05:30
Total motivation level: 7.12/10

Parameters:
- Digital technologies: 8
- Individual profile: 6
- Diagnostics: 7
- External agents: 5
- Basic needs: 9
- Self-regulation skills: 6.5
- Evaluation & correction: 8
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_default_file_name() {
        let record = sample_record();
        assert_eq!(
            default_file_name(record.timestamp, ExportFormat::DelimitedTable),
            "motivation_profile_2025-03-14_09-05-30.csv"
        );
        assert_eq!(
            default_file_name(record.timestamp, ExportFormat::PlainText),
            "motivation_profile_2025-03-14_09-05-30.txt"
        );
    }

    #[test]
    fn test_format_deserializes_from_extension_names() {
        let format: ExportFormat = serde_json::from_str("\"txt\"").unwrap();
        assert_eq!(format, ExportFormat::PlainText);
    }
}
