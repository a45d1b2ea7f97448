use super::render;
use insta::assert_snapshot;
use tabulist_core::{convert_table_to_list, ListMarkerStyle, ToggleOptions, ValueEscapeStyle};

#[test]
fn test_keyed_root_expands_back() {
    let lines = ["| Item | Age |", "| --- | --- |", "| Name: Alice | 30 |"];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["- Name: Alice", "  - Age: 30"]
    );
}

#[test]
fn test_ordered_markers_and_soft_breaks() {
    let options = ToggleOptions {
        list_marker_style: ListMarkerStyle::Ordered,
        output_empty_keys: false,
        ..Default::default()
    };
    let lines = [
        "| Item | role | notes |",
        "| --- | --- | --- |",
        "| Alice | dev | likes<br/>tea |",
        "| Bob | ops | |",
    ];
    let list = convert_table_to_list(&lines, &options, "");
    assert_snapshot!(render(&list), @r"
1. Alice
  1. role: dev
  1. notes: likes
            tea
1. Bob
  1. role: ops
");
}

#[test]
fn test_formatted_table_cells_are_trimmed() {
    let lines = [
        "| Item  | role | team  |",
        "| ----- | ---- | ----- |",
        "| Alice | dev  | core  |",
    ];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["- Alice", "  - role: dev", "  - team: core"]
    );
}

#[test]
fn test_alignment_separators_are_skipped() {
    let lines = ["| Item | n |", "| :--- | ---: |", "| a | 1 |"];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["- a", "  - n: 1"]
    );
}

#[test]
fn test_table_without_separator_uses_every_row() {
    let lines = ["| Item | n |", "| a | 1 |", "| b | 2 |"];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["- a", "  - n: 1", "- b", "  - n: 2"]
    );
}

#[test]
fn test_dotted_headers_stay_single_items() {
    let lines = ["| Item | address.city |", "| --- | --- |", "| Alice | Paris |"];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["- Alice", "  - address.city: Paris"]
    );
}

#[test]
fn test_always_quotes_every_value() {
    let options = ToggleOptions {
        value_escape_style: ValueEscapeStyle::Always,
        ..Default::default()
    };
    let lines = ["| Item | k |", "| --- | --- |", "| a | v |"];
    assert_eq!(
        convert_table_to_list(&lines, &options, ""),
        vec!["- \"a\"", "  - k: \"v\""]
    );
}

#[test]
fn test_escaped_pipes_are_restored() {
    let lines = ["| Item | or |", "| --- | --- |", "| cmd | a \\| b |"];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["- cmd", "  - or: a | b"]
    );
}

#[test]
fn test_block_without_rows_is_untouched() {
    let lines = ["just text", "more text"];
    assert_eq!(
        convert_table_to_list(&lines, &ToggleOptions::default(), ""),
        vec!["just text", "more text"]
    );
}
