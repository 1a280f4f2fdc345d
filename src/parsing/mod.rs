//! Line-level parsing of chat exports.
//!
//! - [`reader`] - file/text to normalized physical lines
//! - [`header`] - the `[DD/MM/YYYY, HH:MM:SS] sender: body` grammar
//! - [`assembler`] - physical lines to [`Message`](crate::Message)s
//!
//! Most callers want [`ChatParser`](crate::parser::ChatParser), which wires
//! these together.

pub mod assembler;
pub mod header;
pub mod reader;

pub use assembler::{Assembler, Assembly, AssemblyStats};
pub use header::{HEADER_PATTERN, Header, parse_header};
pub use reader::{normalize_line, read_lines, split_lines};
