//! CSV output writer.

use std::io::Write;

use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::ChatstatError;
use crate::message::Message;

/// Writes records as CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`, `Kind`, plus `Weekday` when enabled
/// - Multi-line bodies are quoted, newlines kept
/// - Encoding: UTF-8
pub fn write_csv<W: Write>(
    messages: &[Message],
    writer: W,
    config: &OutputConfig,
) -> Result<(), ChatstatError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);

    writer.write_record(build_header(config))?;

    for msg in messages {
        let record = OutputRecord::new(msg, config);
        writer.write_record(build_record(&record))?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts records to a CSV string.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String, ChatstatError> {
    let mut buffer = Vec::new();
    write_csv(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Timestamp", "Sender", "Body", "Kind"];
    if config.include_weekday {
        header.push("Weekday");
    }
    header
}

fn build_record<'a>(record: &'a OutputRecord<'_>) -> Vec<&'a str> {
    let mut fields = vec![
        record.timestamp.as_ref(),
        record.sender,
        record.body,
        record.kind.as_str(),
    ];
    if let Some(weekday) = record.weekday {
        fields.push(weekday);
    }
    fields
}
