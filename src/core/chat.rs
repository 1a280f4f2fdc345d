//! A parsed conversation after caller-side tidying.

use tracing::debug;

use crate::config::ChatConfig;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::stats::{ChatSummary, SummaryOptions};
use crate::locale::PhraseBook;
use crate::message::Message;

/// Records of one export, ready for analysis.
///
/// Building a `Chat` applies the [`ChatConfig`] tidy steps to the parser
/// output. The parser keeps the export's opening announcement; this is
/// where it goes away.
///
/// ```rust
/// use chatstat::config::ChatConfig;
/// use chatstat::core::Chat;
/// use chatstat::locale::PhraseBook;
/// use chatstat::parser::ChatParser;
///
/// let messages = ChatParser::new().parse_str(
///     "[01/01/2000, 01:00:00] User 1: Messages and calls are end-to-end encrypted.\n\
///      [01/01/2000, 02:00:00] User 1: Oi\n\
///      [01/01/2000, 05:00:00] User 2: Oi\n",
/// );
/// assert_eq!(messages.len(), 3);
///
/// let chat = Chat::new(messages, &ChatConfig::default(), &PhraseBook::default());
/// assert_eq!(chat.len(), 2);
/// assert!(!chat.is_group());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chat {
    messages: Vec<Message>,
}

impl Chat {
    /// Tidies `messages` according to `config`.
    ///
    /// - more than two distinct senders and `drop_group_opener`: every
    ///   record from the first record's sender is removed
    /// - otherwise, with `drop_encryption_notice`, the first record is
    ///   removed if its body contains an encryption notice phrase
    pub fn new(mut messages: Vec<Message>, config: &ChatConfig, phrases: &PhraseBook) -> Self {
        let group = distinct_senders(&messages).len() > 2;

        if group && config.drop_group_opener {
            if let Some(opener) = messages.first().map(|m| m.sender.clone()) {
                let before = messages.len();
                messages.retain(|m| m.sender != opener);
                debug!(sender = %opener, removed = before - messages.len(), "dropped group opener records");
            }
        } else if config.drop_encryption_notice
            && messages
                .first()
                .is_some_and(|m| phrases.is_encryption_notice(&m.body))
        {
            messages.remove(0);
            debug!("dropped encryption notice");
        }

        Self { messages }
    }

    /// Wraps records without any tidying.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        distinct_senders(&self.messages)
    }

    /// Returns `true` if more than two people wrote in the chat.
    pub fn is_group(&self) -> bool {
        self.senders().len() > 2
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the records passing `filter`.
    pub fn filtered(&self, filter: &FilterConfig) -> Vec<Message> {
        apply_filters(self.messages.clone(), filter)
    }

    /// Computes every statistic over the records.
    pub fn summary(&self, options: &SummaryOptions) -> ChatSummary {
        ChatSummary::compute(&self.messages, options)
    }
}

impl From<Chat> for Vec<Message> {
    fn from(chat: Chat) -> Self {
        chat.messages
    }
}

fn distinct_senders(messages: &[Message]) -> Vec<&str> {
    let mut senders: Vec<&str> = Vec::new();
    for msg in messages {
        if !senders.contains(&msg.sender.as_str()) {
            senders.push(&msg.sender);
        }
    }
    senders
}
