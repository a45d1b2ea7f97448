use tabulist_core::{toggle, toggle_document, Mode, TextDocument, ToggleError, ToggleOptions};

const TEAM: &str = "\
# Team

- Alice
  - role: dev
  - team: core
- Bob
  - role: ops
  - team: infra

Notes follow.
";

#[test]
fn test_toggle_twice_restores_simple_list() {
    let mut doc = TextDocument::parse(TEAM);
    let options = ToggleOptions::default();

    let first = toggle_document(&mut doc, 4, &options).unwrap();
    assert_eq!(first.mode, Mode::ListToTable);
    assert_eq!((first.start_line, first.end_line), (2, 7));
    assert_eq!(
        doc.lines()[2..6],
        [
            "| Item  | role | team  |",
            "| ----- | ---- | ----- |",
            "| Alice | dev  | core  |",
            "| Bob   | ops  | infra |",
        ]
    );

    let second = toggle_document(&mut doc, 2, &options).unwrap();
    assert_eq!(second.mode, Mode::TableToList);
    assert_eq!((second.start_line, second.end_line), (2, 5));
    assert_eq!(doc.to_text(), TEAM);
}

#[test]
fn test_indented_block_keeps_its_indent() {
    let lines = ["Intro", "", "    - a", "      - k: v", "", "end"];
    let options = ToggleOptions::default();

    let table = toggle(&lines, 3, &options).unwrap();
    assert_eq!(
        table.replacement,
        vec!["    | Item | k   |", "    | ---- | --- |", "    | a    | v   |"]
    );

    let list = toggle(&table.replacement, 0, &options).unwrap();
    assert_eq!(list.replacement, vec!["    - a", "      - k: v"]);
}

#[test]
fn test_declined_toggle_changes_nothing() {
    let mut doc = TextDocument::parse("Some prose.\n\n- a\n");
    let err = toggle_document(&mut doc, 0, &ToggleOptions::default()).unwrap_err();
    assert_eq!(
        err,
        ToggleError::NotConvertible {
            start_line: 0,
            end_line: 0
        }
    );
    assert_eq!(err.to_string(), "lines 0-0 contain no list or table to convert");
    assert_eq!(doc.to_text(), "Some prose.\n\n- a\n");
}

#[test]
fn test_crlf_documents_stay_crlf() {
    let mut doc = TextDocument::parse("- a\r\n  - k: v\r\n");
    let options = ToggleOptions {
        format_table: false,
        ..Default::default()
    };
    toggle_document(&mut doc, 0, &options).unwrap();
    assert_eq!(doc.to_text(), "| Item | k |\r\n| --- | --- |\r\n| a | v |\r\n");
}

#[test]
fn test_table_rows_inside_list_block_follow_majority() {
    let lines = ["- a", "  - k: v", "| stray |"];
    let result = toggle(&lines, 2, &ToggleOptions::default()).unwrap();
    assert_eq!(result.mode, Mode::ListToTable);
}
