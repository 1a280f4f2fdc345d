//! Parser facade for bracketed chat exports.
//!
//! [`ChatParser`] wires the line reader and the message assembler together:
//!
//! ```text
//! file ──read_lines──▶ Vec<String> ──Assembler──▶ Vec<Message>
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstat::parser::ChatParser;
//! use std::path::Path;
//!
//! let parser = ChatParser::new();
//! let messages = parser.parse(Path::new("chat.txt"))?;
//!
//! for msg in &messages {
//!     println!("[{}] {}: {}", msg.timestamp, msg.sender, msg.body);
//! }
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```
//!
//! Only I/O and decoding failures are errors. Malformed lines are recovered
//! from and show up in [`AssemblyStats`] instead:
//!
//! ```rust
//! use chatstat::parser::ChatParser;
//!
//! let (messages, stats) = ChatParser::new().parse_str_with_stats(
//!     "stray line\n[01/01/2000, 02:00:00] User 1: Oi\n",
//! );
//! assert_eq!(messages.len(), 1);
//! assert_eq!(stats.orphaned_lines, 1);
//! ```

use std::path::Path;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::ChatstatError;
use crate::message::Message;
use crate::parsing::{Assembler, Assembly, AssemblyStats, read_lines, split_lines};

/// Parser for `[DD/MM/YYYY, HH:MM:SS] sender: body` exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the human-readable name of this parser.
    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Parses an export file into messages, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read and
    /// [`ChatstatError::Utf8`] if it is not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>, ChatstatError> {
        self.parse_with_stats(path).map(|(messages, _)| messages)
    }

    /// Parses an export file (convenience method accepting `&str` path).
    pub fn parse_file(&self, path: &str) -> Result<Vec<Message>, ChatstatError> {
        self.parse(Path::new(path))
    }

    /// Parses export content already in memory.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        self.parse_str_with_stats(content).0
    }

    /// Like [`parse`](Self::parse), also returning the assembly counters.
    pub fn parse_with_stats(
        &self,
        path: &Path,
    ) -> Result<(Vec<Message>, AssemblyStats), ChatstatError> {
        let lines = read_lines(path)?;
        Ok(self.parse_lines(&lines))
    }

    /// Like [`parse_str`](Self::parse_str), also returning the assembly counters.
    pub fn parse_str_with_stats(&self, content: &str) -> (Vec<Message>, AssemblyStats) {
        self.parse_lines(&split_lines(content))
    }

    /// Assembles already normalized lines.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> (Vec<Message>, AssemblyStats) {
        let Assembly { messages, stats } = Assembler::new(&self.config.phrases)
            .with_skip_system_notices(self.config.skip_system_notices)
            .assemble(lines);

        debug!(
            lines = stats.lines,
            messages = stats.messages,
            continuations = stats.continuations,
            orphaned = stats.orphaned_lines,
            notices = stats.system_notices,
            "parsed chat export"
        );
        (messages, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{LocaleTable, PhraseBook};
    use crate::message::MessageKind;
    use std::fs;

    const REFERENCE: &str = "[01/01/2000, 01:00:00] User 1: \u{200E}As mensagens e as chamadas são protegidas com a criptografia de ponta a ponta.\n\
[01/01/2000, 02:00:00] User 1: Oi\n\
[01/01/2000, 04:00:00] User 1: Tudo bom?\n\
[01/01/2000, 05:00:00] User 2: Oi\n\
[01/01/2000, 06:00:00] User 2: Tudo otimo, e com você?\n";

    #[test]
    fn test_parser_name() {
        assert_eq!(ChatParser::new().name(), "WhatsApp");
    }

    #[test]
    fn test_parse_str_reference_export() {
        let (messages, stats) = ChatParser::new().parse_str_with_stats(REFERENCE);
        assert_eq!(messages.len(), 5);
        assert_eq!(stats.lines, 5);
        assert!(messages[0].body.starts_with("As mensagens"));
        assert_eq!(messages[4].body, "Tudo otimo, e com você?");
        assert!(messages.iter().all(|m| m.kind == MessageKind::Text));
    }

    #[test]
    fn test_parse_file_matches_parse_str() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, REFERENCE).unwrap();

        let parser = ChatParser::new();
        let from_file = parser.parse_file(path.to_str().unwrap()).unwrap();
        assert_eq!(from_file, parser.parse_str(REFERENCE));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = ChatParser::new().parse(Path::new("/no/such/export.txt"));
        assert!(result.unwrap_err().is_io());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = ChatParser::new();
        assert_eq!(parser.parse_str(REFERENCE), parser.parse_str(REFERENCE));
    }

    #[test]
    fn test_custom_locale() {
        let spanish = LocaleTable::new("es")
            .with_placeholder("audio omitido", MessageKind::Audio)
            .with_system_notice("creó el grupo");
        let config = ParserConfig::new().with_phrases(PhraseBook::empty().with_locale(spanish));
        let parser = ChatParser::with_config(config);

        let messages = parser.parse_str(
            "[01/01/2000, 02:00:00] Ana: Ana creó el grupo\n\
             [01/01/2000, 02:01:00] Ana: audio omitido\n\
             [01/01/2000, 02:02:00] Ana: audio omitted\n",
        );
        let kinds: Vec<_> = messages.iter().map(Message::kind).collect();
        assert_eq!(kinds, [MessageKind::Audio, MessageKind::Text]);
    }

    #[test]
    fn test_keep_system_notices() {
        let parser = ChatParser::with_config(ParserConfig::new().with_skip_system_notices(false));
        let messages = parser.parse_str("[01/01/2000, 02:00:00] Grupo: Ana criou este grupo\n");
        assert_eq!(messages.len(), 1);
        assert!(!parser.config().skip_system_notices);
    }
}
