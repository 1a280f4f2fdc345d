//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `chatstat`
//! binary, and the conversions from arguments to library configuration.
//! The binary itself only wires these together.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ChatConfig, ParserConfig};
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::core::stats::SummaryOptions;
use crate::error::ChatstatError;
use crate::format::OutputFormat;
use crate::locale::LocaleTable;
use crate::message::MessageKind;

/// Parse bracketed chat exports into records and statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt -o chat.jsonl
    chatstat chat.txt --after 2024-01-01 --from \"Maria\" -f json
    chatstat chat.txt --kind audio --kind photo
    chatstat chat.txt --summary --word oi --top 10
    chatstat chat.txt --locale-file es.json")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the output extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep messages of this kind (repeatable)
    #[arg(long, value_name = "KIND")]
    pub kind: Vec<MessageKind>,

    /// Print statistics instead of records
    #[arg(short, long)]
    pub summary: bool,

    /// Count occurrences of this word in the summary (repeatable)
    #[arg(short, long, value_name = "WORD")]
    pub word: Vec<String>,

    /// Number of most used words in the summary
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Add the weekday column to records
    #[arg(long)]
    pub weekday: bool,

    /// Write ISO 8601 timestamps
    #[arg(long)]
    pub iso: bool,

    /// Load extra placeholder/notice phrases from a JSON table (repeatable)
    #[arg(long, value_name = "FILE")]
    pub locale_file: Vec<PathBuf>,

    /// Keep the encryption notice and group opener records
    #[arg(long)]
    pub keep_notices: bool,

    /// Keep group membership notice lines as messages
    #[arg(long)]
    pub keep_system: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser configuration, loading every `--locale-file`.
    ///
    /// # Errors
    ///
    /// Fails if a locale file cannot be read or is not a valid table.
    pub fn parser_config(&self) -> Result<ParserConfig, ChatstatError> {
        let mut config = ParserConfig::new().with_skip_system_notices(!self.keep_system);
        for path in &self.locale_file {
            config = config.with_locale(LocaleTable::from_json_file(path)?);
        }
        Ok(config)
    }

    pub fn chat_config(&self) -> ChatConfig {
        if self.keep_notices {
            ChatConfig::keep_all()
        } else {
            ChatConfig::default()
        }
    }

    /// Filter from `--after`, `--before`, `--from` and `--kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] for malformed dates.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatstatError> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from.clone());
        }
        for kind in &self.kind {
            filter = filter.with_kind(*kind);
        }
        Ok(filter)
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            include_weekday: self.weekday,
            iso_timestamps: self.iso,
        }
    }

    pub fn summary_options(&self) -> SummaryOptions {
        self.word
            .iter()
            .fold(SummaryOptions::new().with_top_words(self.top), |options, word| {
                options.with_word(word.clone())
            })
    }

    /// The `--format` flag, else the output file's extension, else CSV.
    ///
    /// # Errors
    ///
    /// Fails if there is no `--format` and the output extension is unknown.
    pub fn output_format(&self) -> Result<OutputFormat, ChatstatError> {
        match (self.format, &self.output) {
            (Some(format), _) => Ok(format),
            (None, Some(path)) => OutputFormat::from_path(&path.to_string_lossy()),
            (None, None) => Ok(OutputFormat::Csv),
        }
    }
}
