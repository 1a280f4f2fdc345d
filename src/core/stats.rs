//! Aggregate statistics over parsed records.
//!
//! Every function takes a record slice and leaves it untouched. Time-based
//! statistics skip records whose timestamp is not a real calendar value and
//! log how many they skipped.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`messages_per_day`] | count per (date, sender) |
//! | [`messages_per_hour`] | count per hour of day, 0..=23 |
//! | [`messages_per_user`] | count per sender |
//! | [`kind_counts`] | count per [`MessageKind`] |
//! | [`kind_counts_per_user`] | count per sender per kind |
//! | [`activity_heatmap`] | count per weekday × hour |
//! | [`count_word_occurrences`] | occurrences of a word in all bodies |
//! | [`count_word_occurrences_by_person`] | the same, per sender |
//! | [`word_frequencies`] | most used words of text messages |
//!
//! [`ChatSummary`] bundles all of them.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::message::{Message, MessageKind};

/// Words left out of [`word_frequencies`] by default: common English words
/// followed by Portuguese chat filler.
///
/// Words are split at every non-alphanumeric character, so English
/// contractions are listed by their fragments (`don`, `ll`, `ve`).
pub const DEFAULT_STOPWORDS: &[&str] = &[
    // english
    "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "com", "could", "couldn", "did", "didn", "do", "does",
    "doesn", "doing", "don", "down", "during", "each", "else", "ever", "few", "for", "from",
    "further", "get", "had", "hadn", "has", "hasn", "have", "haven", "having", "he", "hence",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "http", "https",
    "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "like", "ll", "me", "more",
    "most", "mustn", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "re", "same",
    "shall", "shan", "she", "should", "shouldn", "since", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "therefore", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was",
    "wasn", "we", "were", "weren", "what", "when", "where", "which", "while", "who", "whom",
    "why", "with", "won", "would", "wouldn", "www", "you", "your", "yours", "yourself",
    "yourselves",
    // portuguese
    "mas", "da", "meu", "em", "de", "ao", "os", "que", "eu", "ma", "pra", "para", "uma", "um",
    "e", "você", "o", "não", "sim", "se", "mano", "ta", "tá", "só", "é", "tem",
];

/// Number of messages one sender wrote on one day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub sender: String,
    pub count: usize,
}

/// Per-kind message counts of one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserKindCounts {
    pub sender: String,
    pub total: usize,
    /// Kinds the sender used, in [`MessageKind::all`] order.
    pub counts: Vec<(MessageKind, usize)>,
}

impl UserKindCounts {
    /// Count for `kind`, zero if the sender never used it.
    pub fn get(&self, kind: MessageKind) -> usize {
        self.counts
            .iter()
            .find_map(|&(k, n)| (k == kind).then_some(n))
            .unwrap_or(0)
    }
}

/// Message counts by day of week and hour of day.
///
/// Rows run Sunday to Saturday, columns are hours 0 to 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityHeatmap {
    pub cells: [[usize; 24]; 7],
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self {
            cells: [[0; 24]; 7],
        }
    }
}

impl ActivityHeatmap {
    /// Row order of [`cells`](Self::cells).
    pub const WEEKDAYS: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    fn add(&mut self, dt: NaiveDateTime) {
        let row = dt.weekday().num_days_from_sunday() as usize;
        self.cells[row][dt.hour() as usize] += 1;
    }

    /// Count for `weekday` at `hour`; hours past 23 are zero.
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.row(weekday)
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn row(&self, weekday: Weekday) -> &[usize; 24] {
        &self.cells[weekday.num_days_from_sunday() as usize]
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Busiest cell, the earliest one on ties. `None` if the map is empty.
    pub fn peak(&self) -> Option<(Weekday, u32, usize)> {
        let mut best: Option<(Weekday, u32, usize)> = None;
        for (weekday, row) in Self::WEEKDAYS.iter().zip(&self.cells) {
            for (hour, &count) in (0u32..).zip(row) {
                if count > 0 && best.is_none_or(|(_, _, top)| count > top) {
                    best = Some((*weekday, hour, count));
                }
            }
        }
        best
    }
}

// ============================================================================
// Time-based statistics
// ============================================================================

/// Valid calendar values of the records, warning about the others.
fn datetimes<'a>(
    messages: &'a [Message],
    statistic: &'static str,
) -> impl Iterator<Item = (&'a Message, NaiveDateTime)> + 'a {
    let skipped = messages.iter().filter(|m| m.datetime().is_none()).count();
    if skipped > 0 {
        warn!(statistic, skipped, "skipped records with invalid timestamps");
    }
    messages
        .iter()
        .filter_map(|m| m.datetime().map(|dt| (m, dt)))
}

/// Counts messages per (date, sender), sorted by date then sender.
pub fn messages_per_day(messages: &[Message]) -> Vec<DailyCount> {
    let mut counts: BTreeMap<(NaiveDate, &str), usize> = BTreeMap::new();
    for (msg, dt) in datetimes(messages, "messages_per_day") {
        *counts.entry((dt.date(), msg.sender.as_str())).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((date, sender), count)| DailyCount {
            date,
            sender: sender.to_string(),
            count,
        })
        .collect()
}

/// Counts messages per hour of day. Hours without messages are zero.
pub fn messages_per_hour(messages: &[Message]) -> [usize; 24] {
    let mut hours = [0; 24];
    for (_, dt) in datetimes(messages, "messages_per_hour") {
        hours[dt.hour() as usize] += 1;
    }
    hours
}

/// Counts messages per weekday (Sunday first) and hour.
pub fn activity_heatmap(messages: &[Message]) -> ActivityHeatmap {
    let mut heatmap = ActivityHeatmap::default();
    for (_, dt) in datetimes(messages, "activity_heatmap") {
        heatmap.add(dt);
    }
    heatmap
}

/// Earliest and latest valid timestamps.
pub fn time_span(messages: &[Message]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    messages
        .iter()
        .filter_map(Message::datetime)
        .fold(None, |span, dt| match span {
            None => Some((dt, dt)),
            Some((first, last)) => Some((first.min(dt), last.max(dt))),
        })
}

// ============================================================================
// Sender and kind statistics
// ============================================================================

/// Sums `value` per sender; descending, ties in order of first appearance.
fn per_sender<F>(messages: &[Message], mut value: F) -> Vec<(String, usize)>
where
    F: FnMut(&Message) -> usize,
{
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for msg in messages {
        let total = totals.entry(&msg.sender).or_insert_with(|| {
            order.push(&msg.sender);
            0
        });
        *total += value(msg);
    }

    let mut result: Vec<(String, usize)> = order
        .into_iter()
        .map(|sender| (sender.to_string(), totals[sender]))
        .collect();
    result.sort_by(|a, b| b.1.cmp(&a.1));
    result
}

/// Counts messages per sender, most active first.
pub fn messages_per_user(messages: &[Message]) -> Vec<(String, usize)> {
    per_sender(messages, |_| 1)
}

fn count_kinds<'a>(messages: impl IntoIterator<Item = &'a Message>) -> Vec<(MessageKind, usize)> {
    let mut counts: HashMap<MessageKind, usize> = HashMap::new();
    for msg in messages {
        *counts.entry(msg.kind).or_default() += 1;
    }
    MessageKind::all()
        .iter()
        .filter_map(|kind| counts.get(kind).map(|&n| (*kind, n)))
        .collect()
}

/// Counts messages per kind, most common first. Absent kinds are left out.
pub fn kind_counts(messages: &[Message]) -> Vec<(MessageKind, usize)> {
    let mut counts = count_kinds(messages);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Counts messages per kind for every sender, most active sender first.
pub fn kind_counts_per_user(messages: &[Message]) -> Vec<UserKindCounts> {
    messages_per_user(messages)
        .into_iter()
        .map(|(sender, total)| {
            let counts = count_kinds(messages.iter().filter(|m| m.sender == sender));
            UserKindCounts {
                sender,
                total,
                counts,
            }
        })
        .collect()
}

// ============================================================================
// Lexical statistics
// ============================================================================

fn occurrences(body: &str, needle: &str) -> usize {
    body.to_lowercase().matches(needle).count()
}

/// Counts case-insensitive occurrences of `word` in every body.
///
/// Matching is literal and substring based: `"oi"` is found twice in
/// `"Oi, oito"`. An empty word counts zero.
///
/// ```rust
/// use chatstat::core::stats::count_word_occurrences;
/// use chatstat::Message;
///
/// let messages = vec![
///     Message::new("01/01/2000 02:00:00", "A", "Oi, oito"),
///     Message::new("01/01/2000 02:01:00", "B", "OI"),
/// ];
/// assert_eq!(count_word_occurrences(&messages, "oi"), 3);
/// ```
pub fn count_word_occurrences(messages: &[Message], word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let needle = word.to_lowercase();
    messages.iter().map(|m| occurrences(&m.body, &needle)).sum()
}

/// Like [`count_word_occurrences`], per sender, highest count first.
///
/// Every sender is listed, with zero if they never used the word.
pub fn count_word_occurrences_by_person(messages: &[Message], word: &str) -> Vec<(String, usize)> {
    let needle = word.to_lowercase();
    per_sender(messages, |m| {
        if needle.is_empty() {
            0
        } else {
            occurrences(&m.body, &needle)
        }
    })
}

/// Most frequent words of [`Text`](MessageKind::Text) messages.
///
/// Words are maximal runs of alphanumeric characters, lowercased, at least
/// two characters long. Stopwords are compared case-insensitively. Sorted by
/// count, then alphabetically; at most `limit` entries.
pub fn word_frequencies<S: AsRef<str>>(
    messages: &[Message],
    stopwords: &[S],
    limit: usize,
) -> Vec<(String, usize)> {
    let stopwords: HashSet<String> = stopwords
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for msg in messages.iter().filter(|m| m.kind == MessageKind::Text) {
        for word in msg.body.split(|c: char| !c.is_alphanumeric()) {
            if word.chars().count() < 2 {
                continue;
            }
            let word = word.to_lowercase();
            if !stopwords.contains(&word) {
                *counts.entry(word).or_default() += 1;
            }
        }
    }

    let mut words: Vec<(String, usize)> = counts.into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(limit);
    words
}

// ============================================================================
// Summary
// ============================================================================

/// Options of [`ChatSummary::compute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Words left out of the top words (default: [`DEFAULT_STOPWORDS`])
    pub stopwords: Vec<String>,

    /// Number of top words to list (default: 20)
    pub top_words: usize,

    /// Words whose occurrences are counted
    pub words: Vec<String>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(ToString::to_string).collect(),
            top_words: 20,
            words: Vec::new(),
        }
    }
}

impl SummaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stopword list.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Adds a word to search for.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }
}

/// Occurrences of one searched word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOccurrences {
    pub word: String,
    pub total: usize,
    pub by_person: Vec<(String, usize)>,
}

/// Every statistic of a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub total_messages: usize,
    pub first_message: Option<NaiveDateTime>,
    pub last_message: Option<NaiveDateTime>,
    pub per_user: Vec<(String, usize)>,
    pub per_day: Vec<DailyCount>,
    pub per_hour: [usize; 24],
    pub kinds: Vec<(MessageKind, usize)>,
    pub kinds_per_user: Vec<UserKindCounts>,
    pub heatmap: ActivityHeatmap,
    pub top_words: Vec<(String, usize)>,
    pub word_occurrences: Vec<WordOccurrences>,
}

impl ChatSummary {
    pub fn compute(messages: &[Message], options: &SummaryOptions) -> Self {
        let span = time_span(messages);
        Self {
            total_messages: messages.len(),
            first_message: span.map(|(first, _)| first),
            last_message: span.map(|(_, last)| last),
            per_user: messages_per_user(messages),
            per_day: messages_per_day(messages),
            per_hour: messages_per_hour(messages),
            kinds: kind_counts(messages),
            kinds_per_user: kind_counts_per_user(messages),
            heatmap: activity_heatmap(messages),
            top_words: word_frequencies(messages, &options.stopwords, options.top_words),
            word_occurrences: options
                .words
                .iter()
                .map(|word| WordOccurrences {
                    word: word.clone(),
                    total: count_word_occurrences(messages, word),
                    by_person: count_word_occurrences_by_person(messages, word),
                })
                .collect(),
        }
    }
}

impl fmt::Display for ChatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Messages: {}", self.total_messages)?;
        if let (Some(first), Some(last)) = (self.first_message, self.last_message) {
            writeln!(f, "Period:   {first} .. {last}")?;
        }

        writeln!(f, "\nPer user:")?;
        for (sender, count) in &self.per_user {
            writeln!(f, "  {sender:<24} {count:>6}")?;
        }

        writeln!(f, "\nPer kind:")?;
        for (kind, count) in &self.kinds {
            writeln!(f, "  {:<24} {count:>6}", kind.as_str())?;
        }

        writeln!(f, "\nPer hour:")?;
        for (hour, count) in self.per_hour.iter().enumerate() {
            writeln!(f, "  {hour:02}h {count:>6}")?;
        }

        if let Some((weekday, hour, count)) = self.heatmap.peak() {
            writeln!(f, "\nBusiest slot: {weekday} {hour:02}h ({count} messages)")?;
        }

        if !self.top_words.is_empty() {
            writeln!(f, "\nTop words:")?;
            for (word, count) in &self.top_words {
                writeln!(f, "  {word:<24} {count:>6}")?;
            }
        }

        for occurrences in &self.word_occurrences {
            writeln!(f, "\n\"{}\": {}", occurrences.word, occurrences.total)?;
            for (sender, count) in &occurrences.by_person {
                writeln!(f, "  {sender:<24} {count:>6}")?;
            }
        }
        Ok(())
    }
}
