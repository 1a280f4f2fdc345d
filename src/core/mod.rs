//! Analysis of parsed records.
//!
//! This module contains:
//! - [`chat`] - caller-side tidying of parser output
//! - [`filter`] - record filtering by date, sender and kind
//! - [`stats`] - aggregate statistics
//! - [`models`] - output configuration
//! - [`output`] - format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::config::ChatConfig;
//! use chatstat::core::{Chat, FilterConfig, SummaryOptions};
//! use chatstat::locale::PhraseBook;
//! use chatstat::parser::ChatParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let messages = ChatParser::new().parse_str(
//!     "[01/01/2000, 02:00:00] User 1: Oi\n[02/01/2000, 05:00:00] User 2: Oi\n",
//! );
//! let chat = Chat::new(messages, &ChatConfig::default(), &PhraseBook::default());
//!
//! let january_2nd = chat.filtered(&FilterConfig::new().with_date_from("2000-01-02")?);
//! assert_eq!(january_2nd.len(), 1);
//!
//! let summary = chat.summary(&SummaryOptions::new().with_word("oi"));
//! assert_eq!(summary.word_occurrences[0].total, 2);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod filter;
pub mod models;
pub mod output;
pub mod stats;

pub use chat::Chat;
pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;
pub use stats::{
    ActivityHeatmap, ChatSummary, DEFAULT_STOPWORDS, DailyCount, SummaryOptions, UserKindCounts,
    activity_heatmap, count_word_occurrences, count_word_occurrences_by_person, kind_counts,
    kind_counts_per_user, messages_per_day, messages_per_hour, messages_per_user, time_span,
    word_frequencies,
};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
