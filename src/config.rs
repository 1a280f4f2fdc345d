//! Configuration types for the parser and the analytics layer.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - phrase tables and line-level filtering of the parser
//! - [`ChatConfig`] - caller-side tidying applied by [`Chat`](crate::core::Chat)
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::ParserConfig;
//! use chatstat::locale::LocaleTable;
//! use chatstat::parser::ChatParser;
//!
//! let config = ParserConfig::new()
//!     .with_locale(LocaleTable::new("es"))
//!     .with_skip_system_notices(true);
//!
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::locale::{LocaleTable, PhraseBook};

/// Configuration for parsing chat exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Placeholder, system notice and encryption notice phrases (default: pt + en)
    pub phrases: PhraseBook,

    /// Drop header lines that are group membership notices (default: true)
    pub skip_system_notices: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            phrases: PhraseBook::default(),
            skip_system_notices: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole phrase book.
    #[must_use]
    pub fn with_phrases(mut self, phrases: PhraseBook) -> Self {
        self.phrases = phrases;
        self
    }

    /// Adds a locale table to the phrase book.
    #[must_use]
    pub fn with_locale(mut self, table: LocaleTable) -> Self {
        self.phrases = self.phrases.with_locale(table);
        self
    }

    /// Sets whether to drop group membership notices.
    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }
}

/// Caller-side tidying applied when building a [`Chat`](crate::core::Chat).
///
/// The parser emits every header line that is not a membership notice,
/// including the export's opening encryption announcement. These two steps
/// remove it afterwards:
///
/// - in a group chat (more than two senders) every record of the first
///   record's sender, normally the group itself, is dropped
/// - otherwise the first record is dropped if it is an encryption notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Drop the group opener's records in group chats (default: true)
    pub drop_group_opener: bool,

    /// Drop a leading encryption notice (default: true)
    pub drop_encryption_notice: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            drop_group_opener: true,
            drop_encryption_notice: true,
        }
    }
}

impl ChatConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps every record the parser emitted.
    pub fn keep_all() -> Self {
        Self {
            drop_group_opener: false,
            drop_encryption_notice: false,
        }
    }

    #[must_use]
    pub fn with_drop_group_opener(mut self, drop: bool) -> Self {
        self.drop_group_opener = drop;
        self
    }

    #[must_use]
    pub fn with_drop_encryption_notice(mut self, drop: bool) -> Self {
        self.drop_encryption_notice = drop;
        self
    }
}
