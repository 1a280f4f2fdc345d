//! Line reader: raw export text to normalized physical lines.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ChatstatError;

/// Left-to-right and right-to-left marks the export sprinkles into lines.
const DIRECTION_MARKS: [char; 2] = ['\u{200E}', '\u{200F}'];

/// Tilde followed by a narrow no-break space, written before some names.
const TILDE_NNBSP: &str = "~\u{202F}";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Every line boundary Unicode-aware readers honour: `\r\n`, lone `\r` or
/// `\n`, the vertical tab and form feed, the file/group/record separators,
/// NEL and the line/paragraph separators.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is a valid regex")
});

fn is_direction_mark(c: char) -> bool {
    DIRECTION_MARKS.contains(&c)
}

/// Strips formatting artifacts that are not part of names or text.
///
/// Direction marks are removed first, so a mark sitting between the tilde
/// and the narrow no-break space does not hide the pair.
///
/// ```rust
/// use chatstat::parsing::normalize_line;
///
/// assert_eq!(normalize_line("User 1: \u{200E}Oi"), "User 1: Oi");
/// assert_eq!(normalize_line("~\u{202F}Maria: Oi"), "Maria: Oi");
/// ```
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if !line.contains(is_direction_mark) && !line.contains(TILDE_NNBSP) {
        return Cow::Borrowed(line);
    }
    let unmarked = line.replace(is_direction_mark, "");
    Cow::Owned(unmarked.replace(TILDE_NNBSP, ""))
}

/// Splits in-memory export text into normalized lines.
///
/// Any line break ends a line, so CR-only exports split too.
/// A trailing break does not produce an extra empty line. A byte order mark
/// at the start is dropped.
pub fn split_lines(content: &str) -> Vec<String> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut lines: Vec<String> = LINE_BREAK
        .split(content)
        .map(|line| normalize_line(line).into_owned())
        .collect();
    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Reads an export file into normalized lines.
///
/// The whole file is read and its handle closed before any line is
/// processed. Fails without partial output if the file cannot be read or is
/// not valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ChatstatError> {
    let bytes = fs::read(path)?;
    let content =
        String::from_utf8(bytes).map_err(|e| ChatstatError::utf8(e, Some(path.to_path_buf())))?;

    let lines = split_lines(&content);
    debug!(path = %path.display(), lines = lines.len(), "read chat export");
    Ok(lines)
}
