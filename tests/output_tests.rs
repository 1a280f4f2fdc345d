//! Tests for output writers (JSON, JSONL, CSV)

#![cfg(all(feature = "csv-output", feature = "json-output"))]

use std::fs::{self, File};

use chatstat::core::OutputConfig;
use chatstat::core::output::{write_csv, write_json, write_jsonl};
use chatstat::format::{OutputFormat, to_format_string, write_to_format};
use chatstat::{Message, MessageKind};
use serde_json::Value;
use tempfile::tempdir;

fn sample_messages() -> Vec<Message> {
    vec![
        Message::new("15/01/2024 10:30:00", "Alice", "Hello!"),
        Message::new("15/01/2024 10:31:00", "Bob", "áudio ocultado").with_kind(MessageKind::Audio),
        Message::new("16/01/2024 08:00:00", "Alice", "first line\nsecond line"),
    ]
}

fn read_csv(content: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(content.as_bytes());
    let header = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (header, rows)
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample_messages(), File::create(&path).unwrap(), &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let (header, rows) = read_csv(&content);
        assert_eq!(header, ["Timestamp", "Sender", "Body", "Kind"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], ["15/01/2024 10:31:00", "Bob", "áudio ocultado", "Audio"]);
        assert_eq!(rows[2][2], "first line\nsecond line");
    }

    #[test]
    fn test_write_csv_with_weekday_and_iso() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");
        let config = OutputConfig::new().with_weekday().with_iso_timestamps();

        write_csv(&sample_messages(), File::create(&path).unwrap(), &config).unwrap();

        let (header, rows) = read_csv(&fs::read_to_string(&path).unwrap());
        assert_eq!(header, ["Timestamp", "Sender", "Body", "Kind", "Weekday"]);
        assert_eq!(rows[0][0], "2024-01-15T10:30:00");
        assert_eq!(rows[0][4], "Monday");
        assert_eq!(rows[2][4], "Tuesday");
    }

    #[test]
    fn test_write_csv_escapes_semicolons_and_quotes() {
        let messages = vec![Message::new(
            "15/01/2024 10:30:00",
            "Alice",
            r#"one; two "three""#,
        )];
        let mut buffer = Vec::new();
        write_csv(&messages, &mut buffer, &OutputConfig::new()).unwrap();

        let (_, rows) = read_csv(&String::from_utf8(buffer).unwrap());
        assert_eq!(rows[0][2], r#"one; two "three""#);
    }

    #[test]
    fn test_write_csv_empty_messages() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer, &OutputConfig::new()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim_end(), "Timestamp;Sender;Body;Kind");
    }
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_messages(), File::create(&path).unwrap(), &OutputConfig::new()).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["sender"], "Alice");
        assert_eq!(records[1]["kind"], "Audio");
        assert_eq!(records[2]["body"], "first line\nsecond line");
        assert!(records[0].get("weekday").is_none());
    }

    #[test]
    fn test_write_json_round_trips_messages() {
        let messages = sample_messages();
        let mut buffer = Vec::new();
        write_json(&messages, &mut buffer, &OutputConfig::new()).unwrap();

        let parsed: Vec<Message> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, messages);
    }

    #[test]
    fn test_write_json_empty_messages() {
        let mut buffer = Vec::new();
        write_json(&[], &mut buffer, &OutputConfig::new()).unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value, Value::Array(Vec::new()));
    }

    #[test]
    fn test_write_json_unicode() {
        let messages = vec![
            Message::new("15/01/2024 10:30:00", "Алиса", "Привет! 🎉"),
            Message::new("15/01/2024 10:31:00", "田中", "こんにちは"),
        ];
        let mut buffer = Vec::new();
        write_json(&messages, &mut buffer, &OutputConfig::new()).unwrap();

        let content = String::from_utf8(buffer).unwrap();
        assert!(content.contains("Привет"));
        assert!(content.contains("🎉"));
        assert!(content.contains("こんにちは"));
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");
        let config = OutputConfig::new().with_weekday();

        write_jsonl(&sample_messages(), File::create(&path).unwrap(), &config).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            let value: Value = serde_json::from_str(line).unwrap();
            assert!(value["weekday"].is_string());
        }
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_write_jsonl_empty_messages() {
        let mut buffer = Vec::new();
        write_jsonl(&[], &mut buffer, &OutputConfig::new()).unwrap();
        assert!(buffer.is_empty());
    }
}

// ============================================================================
// Format dispatch
// ============================================================================

#[test]
fn test_write_to_format_matches_writers() {
    let messages = sample_messages();
    let config = OutputConfig::new();

    for format in OutputFormat::all() {
        let mut buffer = Vec::new();
        write_to_format(&messages, &mut buffer, *format, &config).unwrap();
        let direct = to_format_string(&messages, *format, &config).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), direct, "{format}");
    }
}

#[test]
fn test_format_from_output_path() {
    let dir = tempdir().unwrap();
    for (name, expected) in [
        ("chat.csv", OutputFormat::Csv),
        ("chat.JSON", OutputFormat::Json),
        ("chat.ndjson", OutputFormat::Jsonl),
    ] {
        let path = dir.path().join(name);
        assert_eq!(OutputFormat::from_path(path.to_str().unwrap()).unwrap(), expected);
    }
}

#[test]
fn test_very_long_body() {
    let body = "kkk ".repeat(25_000);
    let messages = vec![Message::new("15/01/2024 10:30:00", "Alice", body.clone())];

    let jsonl = to_format_string(&messages, OutputFormat::Jsonl, &OutputConfig::new()).unwrap();
    let value: Value = serde_json::from_str(jsonl.trim_end()).unwrap();
    assert_eq!(value["body"].as_str().unwrap().len(), body.len());
}
