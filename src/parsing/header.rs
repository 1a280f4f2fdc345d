//! Header line grammar: `[DD/MM/YYYY, HH:MM:SS] <sender>: <body>`.

use std::sync::LazyLock;

use regex::Regex;

/// Anchored at line start. The sender is the text before the first `": "`;
/// the body is everything after it.
pub const HEADER_PATTERN: &str = r"^\[(\d{2}/\d{2}/\d{4}), (\d{2}:\d{2}:\d{2})\] (.*?): (.*)";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"));

/// Fields of a header line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// `DD/MM/YYYY`
    pub date: &'a str,
    /// `HH:MM:SS`
    pub time: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

impl Header<'_> {
    /// `DD/MM/YYYY HH:MM:SS`, the bracketed date-time without its comma.
    pub fn timestamp(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

/// Matches a line against the header grammar.
///
/// Returns `None` for continuation lines, including a line whose first
/// `": "` directly follows the bracket. Calendar values are not checked:
/// `[99/99/2000, 25:61:00]` is still a header.
///
/// ```rust
/// use chatstat::parsing::parse_header;
///
/// let header = parse_header("[01/01/2000, 02:00:00] User 1: Oi").unwrap();
/// assert_eq!(header.sender, "User 1");
/// assert_eq!(header.body, "Oi");
/// assert_eq!(header.timestamp(), "01/01/2000 02:00:00");
///
/// assert!(parse_header("just some text").is_none());
/// ```
pub fn parse_header(line: &str) -> Option<Header<'_>> {
    let caps = HEADER_REGEX.captures(line)?;
    let sender = caps.get(3)?.as_str();
    if sender.is_empty() {
        return None;
    }
    Some(Header {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        sender,
        body: caps.get(4)?.as_str(),
    })
}
