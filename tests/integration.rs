//! Integration tests: export files through parsing, tidying and statistics.

use std::fs;
use std::path::{Path, PathBuf};

use chatstat::core::{
    Chat, FilterConfig, SummaryOptions, apply_filters, count_word_occurrences,
    count_word_occurrences_by_person, messages_per_user,
};
use chatstat::locale::LocaleTable;
use chatstat::prelude::*;
use tempfile::{TempDir, tempdir};

const REFERENCE: &str = "[01/01/2000, 01:00:00] User 1: \u{200E}As mensagens e as chamadas são protegidas com a criptografia de ponta a ponta.
[01/01/2000, 02:00:00] User 1: Oi
[01/01/2000, 04:00:00] User 1: Tudo bom?
[01/01/2000, 05:00:00] User 2: Oi
[01/01/2000, 06:00:00] User 2: Tudo otimo, e com você?
";

const GROUP: &str = "[10/03/2024, 09:00:00] Maria: Maria criou este grupo
[10/03/2024, 09:00:01] Maria: Maria adicionou você
[10/03/2024, 09:00:02] Maria: Bem-vindos!
[10/03/2024, 09:15:00] João: Oi gente
[10/03/2024, 09:16:00] Ana: Oi oi
tudo bem por aqui
[10/03/2024, 21:40:00] João: áudio ocultado
[11/03/2024, 08:00:00] Ana: imagem ocultada
[11/03/2024, 08:05:00] João: bom dia
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn parse(path: &Path) -> Vec<Message> {
    ChatParser::new().parse(path).unwrap()
}

// =========================================================================
// Reference export
// =========================================================================

#[test]
fn test_reference_export_records() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "chat.txt", REFERENCE);

    let messages = parse(&path);
    assert_eq!(messages.len(), 5);

    let columns = MessageColumns::from(messages.as_slice());
    assert_eq!(
        columns.timestamps,
        [
            "01/01/2000 01:00:00",
            "01/01/2000 02:00:00",
            "01/01/2000 04:00:00",
            "01/01/2000 05:00:00",
            "01/01/2000 06:00:00",
        ]
    );
    assert_eq!(columns.senders, ["User 1", "User 1", "User 1", "User 2", "User 2"]);
    assert_eq!(
        columns.bodies[0],
        "As mensagens e as chamadas são protegidas com a criptografia de ponta a ponta."
    );
    assert_eq!(columns.bodies[4], "Tudo otimo, e com você?");
    assert!(columns.kinds.iter().all(|k| *k == MessageKind::Text));
}

#[test]
fn test_reference_export_tidied() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "chat.txt", REFERENCE);

    let parser = ChatParser::new();
    let chat = Chat::new(parse(&path), &ChatConfig::default(), &parser.config().phrases);

    assert_eq!(chat.len(), 4);
    assert!(!chat.is_group());
    let senders: Vec<&str> = chat.messages().iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(senders, ["User 1", "User 1", "User 2", "User 2"]);
    assert_eq!(chat.messages()[0].body, "Oi");
}

#[test]
fn test_reference_export_kept_with_keep_all() {
    let parser = ChatParser::new();
    let chat = Chat::new(
        parser.parse_str(REFERENCE),
        &ChatConfig::keep_all(),
        &parser.config().phrases,
    );
    assert_eq!(chat.len(), 5);
}

#[test]
fn test_parsing_is_repeatable() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "chat.txt", REFERENCE);

    let parser = ChatParser::new();
    let first = parser.parse(&path).unwrap();
    let second = parser.parse(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_file_and_string_agree() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "group.txt", GROUP);

    let parser = ChatParser::new();
    assert_eq!(parser.parse(&path).unwrap(), parser.parse_str(GROUP));
    assert_eq!(
        parser.parse_file(path.to_str().unwrap()).unwrap(),
        parser.parse_str(GROUP)
    );
}

#[test]
fn test_crlf_and_bom_file() {
    let dir = tempdir().unwrap();
    let content = format!("\u{FEFF}{}", REFERENCE.replace('\n', "\r\n"));
    let path = write_fixture(&dir, "windows.txt", &content);

    let messages = parse(&path);
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0].timestamp, "01/01/2000 01:00:00");
    assert!(messages.iter().all(|m| !m.body.ends_with('\r')));
}

// =========================================================================
// Group export
// =========================================================================

#[test]
fn test_group_export_assembly() {
    let (messages, stats) = ChatParser::new().parse_str_with_stats(GROUP);

    assert_eq!(stats.lines, 9);
    assert_eq!(stats.headers, 8);
    assert_eq!(stats.system_notices, 2);
    assert_eq!(stats.continuations, 1);
    assert_eq!(stats.orphaned_lines, 0);
    assert_eq!(stats.messages, messages.len());
    assert_eq!(messages.len(), 6);

    assert_eq!(messages[2].body, "Oi oi\ntudo bem por aqui");
    assert_eq!(messages[3].kind, MessageKind::Audio);
    assert_eq!(messages[4].kind, MessageKind::Photo);
}

#[test]
fn test_group_opener_dropped() {
    let parser = ChatParser::new();
    let chat = Chat::new(
        parser.parse_str(GROUP),
        &ChatConfig::default(),
        &parser.config().phrases,
    );

    assert!(chat.is_group());
    assert!(chat.messages().iter().all(|m| m.sender != "Maria"));
    assert_eq!(chat.senders(), ["João", "Ana"]);
    assert_eq!(chat.len(), 5);
}

#[test]
fn test_group_summary() {
    let parser = ChatParser::new();
    let chat = Chat::new(
        parser.parse_str(GROUP),
        &ChatConfig::default(),
        &parser.config().phrases,
    );
    let summary = chat.summary(&SummaryOptions::new().with_word("oi"));

    assert_eq!(summary.total_messages, 5);
    assert_eq!(
        summary.per_user,
        [("João".to_string(), 3), ("Ana".to_string(), 2)]
    );
    assert_eq!(summary.per_day.len(), 4);
    assert_eq!(summary.per_hour[9], 2);
    assert_eq!(summary.per_hour[21], 1);
    assert_eq!(summary.per_hour[8], 2);
    assert_eq!(summary.heatmap.total(), 5);

    let oi = &summary.word_occurrences[0];
    assert_eq!(oi.word, "oi");
    // "Oi gente" + "Oi oi"
    assert_eq!(oi.total, 3);
}

#[test]
fn test_word_counts_by_person() {
    let messages = ChatParser::new().parse_str(GROUP);

    assert_eq!(count_word_occurrences(&messages, "bom"), 1);
    let by_person = count_word_occurrences_by_person(&messages, "oi");
    assert!(by_person.contains(&("Ana".to_string(), 2)));
    assert!(by_person.contains(&("João".to_string(), 1)));
}

// =========================================================================
// Filters
// =========================================================================

#[test]
fn test_filter_after_parse() {
    let messages = ChatParser::new().parse_str(GROUP);

    let filter = FilterConfig::new().with_date_from("2024-03-11").unwrap();
    let filtered = apply_filters(messages.clone(), &filter);
    assert_eq!(filtered.len(), 2);

    let filter = FilterConfig::new()
        .with_sender("ana")
        .with_kind(MessageKind::Photo);
    let filtered = apply_filters(messages, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].body, "imagem ocultada");
}

#[test]
fn test_chat_filtered_keeps_original() {
    let parser = ChatParser::new();
    let chat = Chat::from_messages(parser.parse_str(GROUP));
    let filtered = chat.filtered(&FilterConfig::new().with_sender("João"));

    assert_eq!(filtered.len(), 3);
    assert_eq!(chat.len(), 6);
    assert_eq!(messages_per_user(&filtered), [("João".to_string(), 3)]);
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn test_custom_locale_file() {
    let dir = tempdir().unwrap();
    let table = r#"{
        "tag": "es",
        "placeholders": {"audio omitido": "Audio", "imagen omitida": "Photo"},
        "system_notices": ["creó el grupo"],
        "encryption_notices": ["cifrado de extremo a extremo"]
    }"#;
    let locale_path = write_fixture(&dir, "es.json", table);
    let chat_path = write_fixture(
        &dir,
        "es.txt",
        "[02/02/2024, 10:00:00] Luis: Los mensajes están protegidos con el cifrado de extremo a extremo.
[02/02/2024, 10:00:01] Luis: Luis creó el grupo
[02/02/2024, 10:01:00] Luis: audio omitido
[02/02/2024, 10:02:00] Sofía: imagen omitida
",
    );

    let config = ParserConfig::new().with_locale(LocaleTable::from_json_file(&locale_path).unwrap());
    let parser = ChatParser::with_config(config);
    let messages = parser.parse(&chat_path).unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].kind, MessageKind::Audio);
    assert_eq!(messages[2].kind, MessageKind::Photo);

    let chat = Chat::new(messages, &ChatConfig::default(), &parser.config().phrases);
    assert_eq!(chat.len(), 2);
}

#[test]
fn test_keep_system_notices() {
    let parser = ChatParser::with_config(ParserConfig::new().with_skip_system_notices(false));
    let messages = parser.parse_str(GROUP);
    assert_eq!(messages.len(), 8);
    assert_eq!(messages[0].body, "Maria criou este grupo");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn test_missing_file_is_io_error() {
    let err = ChatParser::new()
        .parse(Path::new("/definitely/not/here/chat.txt"))
        .unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_invalid_utf8_is_decode_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"[01/01/2000, 02:00:00] Jo\xe3o: Ol\xe1\n").unwrap();

    let err = ChatParser::new().parse(&path).unwrap_err();
    assert!(err.is_decode());
    assert!(err.to_string().contains("latin1.txt"));
}

#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    let path = write_fixture(&dir, "empty.txt", "");

    let (messages, stats) = ChatParser::new().parse_with_stats(&path).unwrap();
    assert!(messages.is_empty());
    assert_eq!(stats.lines, 0);
    assert!(MessageColumns::from(messages.as_slice()).is_empty());
}
