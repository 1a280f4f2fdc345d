//! Locale-specific phrase tables.
//!
//! Chat exports are written in the exporting phone's language. Media that
//! was not exported is replaced by a fixed placeholder phrase
//! (`audio omitted`, `áudio ocultado`), group membership events are written
//! as regular-looking messages (`criou este grupo`, `added you`), and the
//! first line of an export usually announces end-to-end encryption.
//!
//! These phrases are data, not logic: a [`LocaleTable`] holds them for one
//! language and a [`PhraseBook`] answers questions against every table it
//! holds. Adding a language means adding a table (built in, or loaded from
//! JSON), never touching the assembler.
//!
//! # Example
//!
//! ```rust
//! use chatstat::locale::PhraseBook;
//! use chatstat::MessageKind;
//!
//! let phrases = PhraseBook::default();
//! assert_eq!(phrases.classify("áudio ocultado"), MessageKind::Audio);
//! assert_eq!(phrases.classify("image omitted"), MessageKind::Photo);
//! assert!(phrases.is_system_notice("Maria criou este grupo"));
//! ```

use std::collections::BTreeMap;
#[cfg(feature = "json-output")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatstatError;
use crate::message::MessageKind;

/// Phrases of one export language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    /// Short language tag, e.g. `pt` or `en`.
    pub tag: String,

    /// Exact first-line placeholder phrase → kind.
    #[serde(default)]
    pub placeholders: BTreeMap<String, MessageKind>,

    /// Substrings marking a header line as a group membership notice.
    #[serde(default)]
    pub system_notices: Vec<String>,

    /// Substrings marking the export's encryption announcement.
    #[serde(default)]
    pub encryption_notices: Vec<String>,
}

impl LocaleTable {
    /// Creates an empty table for `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            placeholders: BTreeMap::new(),
            system_notices: Vec::new(),
            encryption_notices: Vec::new(),
        }
    }

    /// Portuguese (Brazil) export wording.
    pub fn portuguese() -> Self {
        Self::new("pt")
            .with_placeholder("áudio ocultado", MessageKind::Audio)
            .with_placeholder("vídeo omitido", MessageKind::Video)
            .with_placeholder("imagem ocultada", MessageKind::Photo)
            .with_placeholder("figurinha omitida", MessageKind::Sticker)
            .with_placeholder("GIF omitido", MessageKind::Gif)
            .with_system_notice("criou este grupo")
            .with_system_notice("adicionou você")
            .with_encryption_notice("criptografia")
    }

    /// English export wording.
    pub fn english() -> Self {
        Self::new("en")
            .with_placeholder("audio omitted", MessageKind::Audio)
            .with_placeholder("video omitted", MessageKind::Video)
            .with_placeholder("image omitted", MessageKind::Photo)
            .with_placeholder("sticker omitted", MessageKind::Sticker)
            .with_placeholder("GIF omitted", MessageKind::Gif)
            .with_system_notice("created group")
            .with_system_notice("added you")
            .with_encryption_notice("end-to-end encrypted")
            .with_encryption_notice("cryptography")
    }

    #[must_use]
    pub fn with_placeholder(mut self, phrase: impl Into<String>, kind: MessageKind) -> Self {
        self.placeholders.insert(phrase.into(), kind);
        self
    }

    #[must_use]
    pub fn with_system_notice(mut self, phrase: impl Into<String>) -> Self {
        self.system_notices.push(phrase.into());
        self
    }

    #[must_use]
    pub fn with_encryption_notice(mut self, phrase: impl Into<String>) -> Self {
        self.encryption_notices.push(phrase.into());
        self
    }

    /// Looks up the kind for an exact placeholder phrase.
    pub fn placeholder_kind(&self, line: &str) -> Option<MessageKind> {
        self.placeholders.get(line).copied()
    }

    /// Checks the table for phrases that would break matching.
    ///
    /// An empty notice substring is contained in every body and would drop
    /// every message, so it is rejected.
    pub fn validate(&self) -> Result<(), ChatstatError> {
        if self.tag.trim().is_empty() {
            return Err(ChatstatError::invalid_format("locale", "empty locale tag"));
        }
        let empty_notice = self
            .system_notices
            .iter()
            .chain(&self.encryption_notices)
            .any(|phrase| phrase.is_empty());
        if empty_notice || self.placeholders.keys().any(|phrase| phrase.is_empty()) {
            return Err(ChatstatError::invalid_format(
                "locale",
                format!("locale '{}' contains an empty phrase", self.tag),
            ));
        }
        Ok(())
    }

    /// Parses and validates a table from JSON.
    ///
    /// ```rust
    /// use chatstat::locale::LocaleTable;
    /// use chatstat::MessageKind;
    ///
    /// let table = LocaleTable::from_json_str(
    ///     r#"{"tag": "es", "placeholders": {"audio omitido": "Audio"}, "system_notices": ["creó el grupo"]}"#,
    /// )?;
    /// assert_eq!(table.placeholder_kind("audio omitido"), Some(MessageKind::Audio));
    /// # Ok::<(), chatstat::ChatstatError>(())
    /// ```
    #[cfg(feature = "json-output")]
    pub fn from_json_str(json: &str) -> Result<Self, ChatstatError> {
        let table: LocaleTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Reads a table from a JSON file.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &Path) -> Result<Self, ChatstatError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// An ordered set of [`LocaleTable`]s.
///
/// Every query consults all tables; exports mixing languages (a phone
/// switched locale mid-chat) are classified correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBook {
    locales: Vec<LocaleTable>,
}

impl Default for PhraseBook {
    /// Portuguese and English, the languages of the built-in tables.
    fn default() -> Self {
        Self {
            locales: vec![LocaleTable::portuguese(), LocaleTable::english()],
        }
    }
}

impl PhraseBook {
    /// Creates a phrase book with no tables; nothing is filtered and every
    /// message is text.
    pub fn empty() -> Self {
        Self {
            locales: Vec::new(),
        }
    }

    /// Adds a table, replacing any table with the same tag.
    #[must_use]
    pub fn with_locale(mut self, table: LocaleTable) -> Self {
        self.locales.retain(|existing| existing.tag != table.tag);
        self.locales.push(table);
        self
    }

    pub fn locales(&self) -> &[LocaleTable] {
        &self.locales
    }

    pub fn locale(&self, tag: &str) -> Option<&LocaleTable> {
        self.locales.iter().find(|table| table.tag == tag)
    }

    /// Classifies a message body by exact match of its first line.
    ///
    /// Continuation lines never change the result: a placeholder followed by
    /// stray text keeps the placeholder's kind.
    pub fn classify(&self, body: &str) -> MessageKind {
        let first_line = body.split('\n').next().unwrap_or_default();
        self.locales
            .iter()
            .find_map(|table| table.placeholder_kind(first_line))
            .unwrap_or(MessageKind::Text)
    }

    /// Returns `true` if `body` contains a group membership notice phrase.
    pub fn is_system_notice(&self, body: &str) -> bool {
        self.locales
            .iter()
            .flat_map(|table| &table.system_notices)
            .any(|phrase| body.contains(phrase.as_str()))
    }

    /// Returns `true` if `body` contains an encryption announcement phrase.
    pub fn is_encryption_notice(&self, body: &str) -> bool {
        self.locales
            .iter()
            .flat_map(|table| &table.encryption_notices)
            .any(|phrase| body.contains(phrase.as_str()))
    }
}
