//! Record output formats.
//!
//! [`OutputFormat`] is plain data so the library works without clap; the
//! `cli` feature adds a `clap::ValueEnum` derive on top.
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::format::{OutputFormat, to_format_string, write_to_format};
//! use chatstat::core::models::OutputConfig;
//! use chatstat::Message;
//!
//! let records = vec![Message::new("01/01/2000 02:00:00", "User 1", "Oi")];
//! write_to_format(&records, std::io::stdout(), OutputFormat::Jsonl, &OutputConfig::new())?;
//!
//! let csv = to_format_string(&records, OutputFormat::from_path("report.csv")?, &OutputConfig::new())?;
//! assert!(csv.contains("User 1;Oi;Text"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::ChatstatError;
use crate::message::Message;

/// How records are serialized.
///
/// ```rust
/// use chatstat::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// `;`-separated values with a header row
    #[default]
    Csv,
    /// A single pretty-printed array
    Json,
    /// One compact object per line
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,
}

const NAMES: &[&str] = &["csv", "json", "jsonl", "ndjson"];

impl OutputFormat {
    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[Self::Csv, Self::Json, Self::Jsonl]
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::Jsonl),
            _ => None,
        }
    }

    /// Picks the format matching the extension of `path`.
    ///
    /// # Errors
    ///
    /// [`ChatstatError::InvalidFormat`] when the extension is missing or
    /// not one of `csv`, `json`, `jsonl`, `ndjson`.
    pub fn from_path(path: &str) -> Result<Self, ChatstatError> {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        Self::from_name(ext).ok_or_else(|| {
            ChatstatError::invalid_format(
                "output",
                format!(
                    "Unknown file extension '.{ext}' for {path}, use one of: {}",
                    NAMES.join(", ")
                ),
            )
        })
    }

    fn required_feature(self) -> &'static str {
        match self {
            Self::Csv => "csv-output",
            Self::Json | Self::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("'{s}' is not a format, use one of: {}", NAMES.join(", ")))
    }
}

/// Serializes `messages` into `writer`.
///
/// # Errors
///
/// Fails when the format's cargo feature is off or the writer fails.
#[allow(unused_variables)]
pub fn write_to_format<W: Write>(
    messages: &[Message],
    writer: W,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatstatError> {
    use crate::core::output as out;

    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => out::write_csv(messages, writer, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => out::write_json(messages, writer, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => out::write_jsonl(messages, writer, config),
        #[allow(unreachable_patterns)]
        _ => Err(ChatstatError::invalid_format(
            "output",
            format!("{format} output needs the '{}' feature", format.required_feature()),
        )),
    }
}

/// Like [`write_to_format`] but collects into a `String`.
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatstatError> {
    let mut buffer = Vec::new();
    write_to_format(messages, &mut buffer, format, config)?;
    String::from_utf8(buffer).map_err(ChatstatError::from)
}
