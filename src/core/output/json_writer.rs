//! JSON output writer.

use std::io::Write;

use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::ChatstatError;
use crate::message::Message;

/// Writes records as a pretty-printed JSON array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "01/01/2000 02:00:00", "sender": "User 1", "body": "Oi", "kind": "Text"}
/// ]
/// ```
pub fn write_json<W: Write>(
    messages: &[Message],
    mut writer: W,
    config: &OutputConfig,
) -> Result<(), ChatstatError> {
    let records: Vec<OutputRecord<'_>> = messages
        .iter()
        .map(|m| OutputRecord::new(m, config))
        .collect();

    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String, ChatstatError> {
    let records: Vec<OutputRecord<'_>> = messages
        .iter()
        .map(|m| OutputRecord::new(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
