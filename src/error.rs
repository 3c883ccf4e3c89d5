use std::path::PathBuf;

use crate::scoring::Component;

/// Errors surfaced by the scoring core and the export writer.
///
/// None of these are fatal: front ends display them and let the user retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{component}: value {value} is outside 0-10")]
    OutOfRange { component: Component, value: f64 },

    #[error("missing value for {0}")]
    MissingComponent(Component),

    #[error("invalid weight table: {0}")]
    InvalidWeights(String),

    #[error("unsupported export format '{0}' (use .csv or .txt)")]
    UnsupportedFormat(String),

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("export cancelled")]
    UserCancelled,
}

impl Error {
    /// A cancelled destination prompt is a no-op, not a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::UserCancelled)
    }

    /// Whether the error comes from bad collector input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::MissingComponent(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
