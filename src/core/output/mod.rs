//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Writers take any [`std::io::Write`]; the `to_*` variants return a `String`.
//! Every format carries the same fields, see
//! [`OutputRecord`](crate::core::models::OutputRecord).
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_jsonl};
//! use chatstat::core::models::OutputConfig;
//! use chatstat::Message;
//!
//! let messages = vec![
//!     Message::new("01/01/2000 02:00:00", "User 1", "Oi"),
//!     Message::new("01/01/2000 05:00:00", "User 2", "Oi"),
//! ];
//!
//! let csv = to_csv(&messages, &OutputConfig::new())?;
//! assert!(csv.starts_with("Timestamp;Sender;Body;Kind\n"));
//!
//! let mut buffer = Vec::new();
//! write_jsonl(&messages, &mut buffer, &OutputConfig::new().with_weekday())?;
//! assert_eq!(buffer.iter().filter(|&&b| b == b'\n').count(), 2);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
