//! Error type shared by the library and the binary.
//!
//! Only whole-file problems are errors. A malformed line inside an export
//! (an orphan continuation, an unknown placeholder, a timestamp like
//! `31/02`) is tolerated by the parser and shows up in
//! [`AssemblyStats`](crate::parsing::AssemblyStats) and the log instead.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// `Result` with [`ChatstatError`] as the error.
///
/// ```rust
/// use chatstat::error::Result;
///
/// fn count_lines(text: &str) -> Result<usize> {
///     Ok(text.lines().count())
/// }
/// # assert_eq!(count_lines("a\nb").unwrap(), 2);
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// Opening, reading or writing a file or stream failed.
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    /// The export is not UTF-8 text.
    #[error("cannot decode{} as UTF-8: {source}", path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    Utf8 {
        path: Option<PathBuf>,
        #[source]
        source: FromUtf8Error,
    },

    /// A locale table or output path was rejected.
    #[error("bad {what}: {message}")]
    InvalidFormat {
        /// What was being read, e.g. `"locale"` or `"output"`
        what: &'static str,
        message: String,
    },

    /// A filter date that is not `YYYY-MM-DD`.
    #[error("Invalid date '{input}', write it as YYYY-MM-DD")]
    InvalidDate { input: String },

    #[cfg(feature = "csv-output")]
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// Locale tables and JSON output both go through serde_json.
    #[cfg(feature = "json-output")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FromUtf8Error> for ChatstatError {
    fn from(source: FromUtf8Error) -> Self {
        Self::Utf8 { path: None, source }
    }
}

impl ChatstatError {
    /// Decoding failure tied to the file it came from.
    pub fn utf8(source: FromUtf8Error, path: Option<PathBuf>) -> Self {
        Self::Utf8 { path, source }
    }

    pub fn invalid_format(what: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            what,
            message: message.into(),
        }
    }

    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate { input: input.into() }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// The input was read but is not UTF-8.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Utf8 { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}
