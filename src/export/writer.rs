use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::format::{default_file_name, ExportFormat, ExportRecord};
use crate::error::{Error, Result};
use crate::scoring::ValueSet;

/// Write one export, picking the encoding from the destination's extension.
///
/// Nothing is created when the extension is not supported.
pub fn write(
    destination: &Path,
    values: &ValueSet,
    score: f64,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    let format = ExportFormat::from_path(destination)?;
    let record = ExportRecord::new(*values, score, timestamp);
    write_as(destination, format, &record)?;
    Ok(destination.to_path_buf())
}

/// Write `record` to `destination` atomically in the given encoding.
///
/// The destination ends up holding either the complete record or whatever it
/// held before. An uncommitted temp file is discarded when dropped, so every
/// error path releases the file.
pub fn write_as(destination: &Path, format: ExportFormat, record: &ExportRecord) -> Result<()> {
    let bytes = record
        .render(format)
        .map_err(|e| Error::io(destination, e))?;

    let mut file = AtomicWriteFile::open(destination).map_err(|e| Error::io(destination, e))?;
    file.write_all(&bytes)
        .map_err(|e| Error::io(destination, e))?;
    file.commit().map_err(|e| Error::io(destination, e))?;

    info!(path = %destination.display(), %format, "exported motivation profile");
    Ok(())
}

/// Turn the answer to a "save as" prompt into a destination path.
///
/// An empty answer means the user backed out (`UserCancelled`). A leading `~/`
/// expands to the home directory. An existing directory gets a timestamped
/// default file name in `format`.
pub fn resolve_destination(
    input: &str,
    format: ExportFormat,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::UserCancelled);
    }

    let path = match input.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(input),
        },
        None => PathBuf::from(input),
    };

    if path.is_dir() {
        let joined = path.join(default_file_name(timestamp, format));
        debug!(path = %joined.display(), "destination is a directory, using default file name");
        return Ok(joined);
    }

    Ok(path)
}
