//! Output configuration and the serialized shape of a record.

use std::borrow::Cow;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageKind};

/// Configuration for output format.
/// Controls which derived fields are added to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Add the English weekday name of each record
    pub include_weekday: bool,
    /// Write timestamps as ISO 8601 (`2000-01-01T02:00:00`) instead of the
    /// exported `DD/MM/YYYY HH:MM:SS`
    pub iso_timestamps: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_weekday(mut self) -> Self {
        self.include_weekday = true;
        self
    }

    #[must_use]
    pub fn with_iso_timestamps(mut self) -> Self {
        self.iso_timestamps = true;
        self
    }
}

/// One record as written by the output writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord<'a> {
    pub timestamp: Cow<'a, str>,
    pub sender: &'a str,
    pub body: &'a str,
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<&'static str>,
}

impl<'a> OutputRecord<'a> {
    /// Builds the output view of `msg`.
    ///
    /// Timestamps that are not real dates are written as exported, and get
    /// an empty weekday.
    pub fn new(msg: &'a Message, config: &OutputConfig) -> Self {
        let datetime = msg.datetime();
        let timestamp = match datetime {
            Some(dt) if config.iso_timestamps => {
                Cow::Owned(dt.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
            _ => Cow::Borrowed(msg.timestamp.as_str()),
        };
        let weekday = config
            .include_weekday
            .then(|| datetime.map_or("", |dt| weekday_name(dt.weekday())));

        Self {
            timestamp,
            sender: &msg.sender,
            body: &msg.body,
            kind: msg.kind,
            weekday,
        }
    }
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
