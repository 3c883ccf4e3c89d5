pub mod format;
pub mod writer;

pub use format::{default_file_name, ExportFormat, ExportRecord, SUMMARY_LABEL, TIMESTAMP_FORMAT};
pub use writer::{resolve_destination, write, write_as};
