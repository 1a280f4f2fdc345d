//! Message assembler: physical lines to logical messages.
//!
//! Assembly is a single fold over the lines carrying one open candidate:
//!
//! | Line | Open candidate | Effect |
//! |------|----------------|--------|
//! | header, membership notice | any | line dropped, candidate stays open |
//! | header | none | new candidate |
//! | header | some | candidate emitted, new candidate |
//! | continuation | some | `"\n" + line` appended to the candidate |
//! | continuation | none | line dropped (orphan) |
//!
//! At end of input the open candidate is emitted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::header::{Header, parse_header};
use crate::locale::PhraseBook;
use crate::message::Message;

/// Diagnostic counters of one assembly run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Physical lines consumed.
    pub lines: usize,
    /// Lines matching the header grammar, membership notices included.
    pub headers: usize,
    /// Lines appended to an open candidate.
    pub continuations: usize,
    /// Continuation lines seen before any header; dropped.
    pub orphaned_lines: usize,
    /// Header lines dropped as group membership notices.
    pub system_notices: usize,
    /// Messages emitted.
    pub messages: usize,
}

/// Output of [`Assembler::assemble`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub messages: Vec<Message>,
    pub stats: AssemblyStats,
}

/// A message whose body may still grow.
#[derive(Debug)]
struct Candidate {
    timestamp: String,
    sender: String,
    body: String,
}

impl Candidate {
    fn start(header: &Header<'_>) -> Self {
        Self {
            timestamp: header.timestamp(),
            sender: header.sender.to_string(),
            body: header.body.to_string(),
        }
    }

    fn append(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }

    fn finalize(self, phrases: &PhraseBook) -> Message {
        let kind = phrases.classify(&self.body);
        Message::new(self.timestamp, self.sender, self.body).with_kind(kind)
    }
}

/// Fold accumulator.
#[derive(Debug, Default)]
struct State {
    current: Option<Candidate>,
    messages: Vec<Message>,
    stats: AssemblyStats,
}

impl State {
    fn emit(&mut self, candidate: Candidate, phrases: &PhraseBook) {
        self.messages.push(candidate.finalize(phrases));
        self.stats.messages += 1;
    }
}

/// Rebuilds logical messages from physical lines.
///
/// # Example
///
/// ```rust
/// use chatstat::locale::PhraseBook;
/// use chatstat::parsing::Assembler;
/// use chatstat::MessageKind;
///
/// let phrases = PhraseBook::default();
/// let assembly = Assembler::new(&phrases).assemble([
///     "[01/01/2000, 02:00:00] User 1: first line",
///     "second line",
///     "[01/01/2000, 02:05:00] User 2: audio omitted",
/// ]);
///
/// assert_eq!(assembly.messages.len(), 2);
/// assert_eq!(assembly.messages[0].body, "first line\nsecond line");
/// assert_eq!(assembly.messages[1].kind, MessageKind::Audio);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    phrases: &'a PhraseBook,
    skip_system_notices: bool,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler that drops membership notices.
    pub fn new(phrases: &'a PhraseBook) -> Self {
        Self {
            phrases,
            skip_system_notices: true,
        }
    }

    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }

    /// Assembles the lines, in order, into messages.
    pub fn assemble<I>(&self, lines: I) -> Assembly
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut state = lines
            .into_iter()
            .fold(State::default(), |state, line| self.step(state, line.as_ref()));

        if let Some(last) = state.current.take() {
            state.emit(last, self.phrases);
        }

        Assembly {
            messages: state.messages,
            stats: state.stats,
        }
    }

    fn step(&self, mut state: State, line: &str) -> State {
        state.stats.lines += 1;

        let Some(header) = parse_header(line) else {
            match state.current.as_mut() {
                Some(candidate) => {
                    candidate.append(line);
                    state.stats.continuations += 1;
                }
                None => {
                    state.stats.orphaned_lines += 1;
                    debug!(line = state.stats.lines, "dropped continuation line before first message");
                }
            }
            return state;
        };

        state.stats.headers += 1;

        if self.skip_system_notices && self.phrases.is_system_notice(header.body) {
            state.stats.system_notices += 1;
            debug!(line = state.stats.lines, sender = header.sender, "dropped system notice");
            return state;
        }

        if let Some(finished) = state.current.replace(Candidate::start(&header)) {
            state.emit(finished, self.phrases);
        }
        state
    }
}
