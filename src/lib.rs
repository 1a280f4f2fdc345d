//! # Chatstat
//!
//! A Rust library for turning exported chat logs into structured records and
//! activity statistics.
//!
//! ## Overview
//!
//! Chatstat reads exports whose messages start with a bracketed timestamp
//! and a sender:
//!
//! ```text
//! [01/01/2000, 02:00:00] User 1: Oi
//! [01/01/2000, 04:00:00] User 1: first line
//! second line of the same message
//! ```
//!
//! Every other line continues the message above it. Media that was not
//! exported appears as a placeholder phrase (`audio omitted`,
//! `áudio ocultado`) and is classified as a [`MessageKind`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let parser = ChatParser::new();
//!     let messages = parser.parse(Path::new("chat.txt"))?;
//!
//!     // Drop the encryption notice / group opener
//!     let chat = Chat::new(messages, &ChatConfig::default(), &parser.config().phrases);
//!
//!     let summary = chat.summary(&SummaryOptions::new().with_word("oi"));
//!     println!("{summary}");
//!
//!     write_csv(chat.messages(), std::io::stdout(), &OutputConfig::new())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), the entry point
//! - [`parsing`] - line reader, header grammar and message assembler
//! - [`locale`] - placeholder and notice phrase tables
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`ChatConfig`](config::ChatConfig)
//! - [`core`] - tidying, filtering, statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`message`] - [`Message`], [`MessageKind`], [`MessageColumns`]
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod locale;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::{Message, MessageColumns, MessageKind};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, MessageColumns, MessageKind};

    pub use crate::error::{ChatstatError, Result};

    pub use crate::parser::ChatParser;
    pub use crate::parsing::AssemblyStats;

    pub use crate::config::{ChatConfig, ParserConfig};
    pub use crate::locale::{LocaleTable, PhraseBook};

    pub use crate::core::models::OutputConfig;
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::stats::{ChatSummary, SummaryOptions};
    pub use crate::core::Chat;

    pub use crate::format::OutputFormat;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
