//! JSON Lines (JSONL) output writer.

use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::ChatstatError;
use crate::message::Message;

/// Writes records in JSONL format, one compact JSON object per line.
///
/// ```jsonl
/// {"timestamp":"01/01/2000 02:00:00","sender":"User 1","body":"Oi","kind":"Text"}
/// {"timestamp":"01/01/2000 05:00:00","sender":"User 2","body":"Oi","kind":"Text"}
/// ```
///
/// Newlines inside bodies are escaped, so every record stays on one line.
pub fn write_jsonl<W: Write>(
    messages: &[Message],
    writer: W,
    config: &OutputConfig,
) -> Result<(), ChatstatError> {
    let mut writer = BufWriter::new(writer);

    for msg in messages {
        let record = OutputRecord::new(msg, config);
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String, ChatstatError> {
    let mut buffer = Vec::new();
    write_jsonl(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}
