//! Structured records produced by the parser.
//!
//! This module provides [`Message`], one logical chat message reconstructed
//! from one header line plus any continuation lines, and [`MessageKind`], the
//! closed classification of what the message carried.
//!
//! # Examples
//!
//! ```
//! use chatstat::{Message, MessageKind};
//!
//! let msg = Message::new("01/01/2000 02:00:00", "User 1", "Oi");
//! assert_eq!(msg.sender(), "User 1");
//! assert_eq!(msg.kind(), MessageKind::Text);
//! assert_eq!(msg.datetime().map(|dt| dt.to_string()), Some("2000-01-01 02:00:00".to_string()));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// `chrono` format of [`Message::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// What a message carried, derived from the export's media placeholders.
///
/// Anything that is not a known placeholder phrase is [`Text`](MessageKind::Text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    Text,
    Audio,
    Video,
    Photo,
    Sticker,
    #[serde(rename = "GIF")]
    Gif,
}

impl MessageKind {
    /// Returns all kinds in their canonical display order.
    pub fn all() -> &'static [MessageKind] {
        &[
            MessageKind::Text,
            MessageKind::Audio,
            MessageKind::Photo,
            MessageKind::Sticker,
            MessageKind::Video,
            MessageKind::Gif,
        ]
    }

    /// Returns `true` for every kind except [`Text`](MessageKind::Text).
    pub fn is_media(self) -> bool {
        self != MessageKind::Text
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Text => "Text",
            MessageKind::Audio => "Audio",
            MessageKind::Video => "Video",
            MessageKind::Photo => "Photo",
            MessageKind::Sticker => "Sticker",
            MessageKind::Gif => "GIF",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(MessageKind::Text),
            "audio" => Ok(MessageKind::Audio),
            "video" => Ok(MessageKind::Video),
            "photo" | "image" | "foto" => Ok(MessageKind::Photo),
            "sticker" => Ok(MessageKind::Sticker),
            "gif" => Ok(MessageKind::Gif),
            _ => Err(format!(
                "Unknown message kind: '{}'. Expected one of: text, audio, video, photo, sticker, gif",
                s
            )),
        }
    }
}

/// One logical message of a chat export.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | `DD/MM/YYYY HH:MM:SS`, naive local time as exported |
/// | `sender` | Display name exactly as written before the first `": "` |
/// | `body` | Inline text of the header line plus continuation lines, `\n`-joined |
/// | `kind` | Classification of the body's first line |
///
/// The timestamp is kept as the exported text. Converting it to a calendar
/// value is left to [`datetime`](Message::datetime), which returns `None`
/// for impossible dates such as `31/02/2024`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub timestamp: String,
    pub sender: String,
    pub body: String,
    #[serde(default)]
    pub kind: MessageKind,
}

impl Message {
    /// Creates a [`Text`](MessageKind::Text) message.
    pub fn new(
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            sender: sender.into(),
            body: body.into(),
            kind: MessageKind::Text,
        }
    }

    /// Builder method to set the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the first line of the body, the one that decides the kind.
    pub fn first_line(&self) -> &str {
        self.body.split('\n').next().unwrap_or_default()
    }

    // =========================================================================
    // Calendar views
    // =========================================================================

    /// Parses the timestamp into a calendar value.
    ///
    /// Returns `None` if the exported text is not a real date and time.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.datetime().map(|dt| dt.date())
    }

    pub fn hour(&self) -> Option<u32> {
        self.datetime().map(|dt| dt.hour())
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.datetime().map(|dt| dt.weekday())
    }
}

/// The records as four parallel sequences of equal length.
///
/// This is the column-oriented shape tabular consumers expect.
///
/// ```
/// use chatstat::{Message, MessageColumns};
///
/// let messages = vec![
///     Message::new("01/01/2000 02:00:00", "User 1", "Oi"),
///     Message::new("01/01/2000 05:00:00", "User 2", "Oi"),
/// ];
/// let columns = MessageColumns::from(messages.as_slice());
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns.senders, ["User 1", "User 2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageColumns {
    pub timestamps: Vec<String>,
    pub senders: Vec<String>,
    pub bodies: Vec<String>,
    pub kinds: Vec<MessageKind>,
}

impl MessageColumns {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl From<&[Message]> for MessageColumns {
    fn from(messages: &[Message]) -> Self {
        let mut columns = MessageColumns {
            timestamps: Vec::with_capacity(messages.len()),
            senders: Vec::with_capacity(messages.len()),
            bodies: Vec::with_capacity(messages.len()),
            kinds: Vec::with_capacity(messages.len()),
        };
        for msg in messages {
            columns.timestamps.push(msg.timestamp.clone());
            columns.senders.push(msg.sender.clone());
            columns.bodies.push(msg.body.clone());
            columns.kinds.push(msg.kind);
        }
        columns
    }
}
