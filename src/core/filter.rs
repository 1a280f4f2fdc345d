//! Record selection by calendar window, sender and kind.
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chatstat::Message;
//!
//! # fn main() -> chatstat::Result<()> {
//! let records = vec![
//!     Message::new("31/12/2023 23:59:59", "Ana", "last of the year"),
//!     Message::new("01/01/2024 00:00:00", "Ana", "first of the year"),
//!     Message::new("01/01/2024 09:00:00", "João", "feliz ano novo"),
//! ];
//!
//! let config = FilterConfig::new().with_date_from("2024-01-01")?.with_sender("ANA");
//! let kept = apply_filters(records, &config);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].body, "first of the year");
//! # Ok(())
//! # }
//! ```
//!
//! All set criteria must hold. A record whose timestamp is not a real
//! calendar date never passes a date bound, but is unaffected otherwise.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ChatstatError;
use crate::message::{Message, MessageKind};

/// Criteria a record must meet; `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Earliest accepted instant.
    pub since: Option<NaiveDateTime>,
    /// Latest accepted instant.
    pub until: Option<NaiveDateTime>,
    /// Sender name, compared ignoring ASCII case.
    pub sender: Option<String>,
    pub kinds: Option<Vec<MessageKind>>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept records from midnight of `date` (`YYYY-MM-DD`) on.
    ///
    /// # Errors
    ///
    /// [`ChatstatError::InvalidDate`] if `date` is not `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date: &str) -> Result<Self, ChatstatError> {
        self.since = Some(parse_date(date)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Accept records up to the last second of `date` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// [`ChatstatError::InvalidDate`] if `date` is not `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date: &str) -> Result<Self, ChatstatError> {
        let day = parse_date(date)?;
        // timestamps carry whole seconds only
        self.until = day.and_hms_opt(23, 59, 59);
        Ok(self)
    }

    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Accept `kind` too. Repeated kinds are stored once.
    #[must_use]
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        let kinds = self.kinds.get_or_insert_with(Vec::new);
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
        self
    }

    pub fn has_date_filter(&self) -> bool {
        self.since.is_some() || self.until.is_some()
    }

    /// `false` when every record would pass.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.sender.is_some() || self.kinds.is_some()
    }

    fn in_window(&self, msg: &Message) -> bool {
        if !self.has_date_filter() {
            return true;
        }
        msg.datetime().is_some_and(|at| {
            self.since.is_none_or(|since| at >= since) && self.until.is_none_or(|until| at <= until)
        })
    }

    pub fn matches(&self, msg: &Message) -> bool {
        let sender_ok = self
            .sender
            .as_deref()
            .is_none_or(|wanted| msg.sender.eq_ignore_ascii_case(wanted));
        let kind_ok = self.kinds.as_ref().is_none_or(|kinds| kinds.contains(&msg.kind));

        sender_ok && kind_ok && self.in_window(msg)
    }
}

/// Reads a `YYYY-MM-DD` filter date.
///
/// # Errors
///
/// [`ChatstatError::InvalidDate`] for any other shape or an impossible day.
pub fn parse_date(date: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ChatstatError::invalid_date(date))
}

/// Keeps the records `config` matches, preserving order.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }
    messages.into_iter().filter(|msg| config.matches(msg)).collect()
}
