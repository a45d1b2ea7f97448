use super::render;
use insta::assert_snapshot;
use tabulist_core::{convert_list_to_table, convert_table_to_list, ToggleOptions};

fn unformatted() -> ToggleOptions {
    ToggleOptions {
        format_table: false,
        ..Default::default()
    }
}

#[test]
fn test_people_list_renders_aligned_table() {
    let lines = [
        "- Alice",
        "  - age: 30",
        "  - address: home",
        "    - city: Paris",
        "- Bob",
        "  - age: 25",
        "  - email: bob@example.com",
    ];
    let table = convert_list_to_table(&lines, &ToggleOptions::default(), "");
    assert_snapshot!(render(&table), @r"
| Item  | age | address | address.city | email           |
| ----- | --- | ------- | ------------ | --------------- |
| Alice | 30  | home    | Paris        |                 |
| Bob   | 25  |         |              | bob@example.com |
");
}

#[test]
fn test_keyed_root_keeps_its_text() {
    let lines = ["- Name: Alice", "  - Age: 30"];
    assert_eq!(
        convert_list_to_table(&lines, &unformatted(), ""),
        vec!["| Item | Age |", "| --- | --- |", "| Name: Alice | 30 |"]
    );
}

#[test]
fn test_unmarked_line_continues_root_text() {
    let lines = ["- Name: Alice", "  Age: 30"];
    assert_eq!(
        convert_list_to_table(&lines, &unformatted(), ""),
        vec!["| Item |", "| --- |", "| Name: Alice<br>Age: 30 |"]
    );
}

#[test]
fn test_soft_break_cells_pad_to_widest_segment() {
    let lines = ["- A", "  - notes: first line", "    second"];
    let table = convert_list_to_table(&lines, &ToggleOptions::default(), "");
    assert_snapshot!(render(&table), @r"
| Item | notes      |
| ---- | ---------- |
| A    | first line<br>second |
");
}

#[test]
fn test_base_indent_prefixes_every_line() {
    let lines = ["  - x", "    - k: v"];
    assert_eq!(
        convert_list_to_table(&lines, &ToggleOptions::default(), "  "),
        vec!["  | Item | k   |", "  | ---- | --- |", "  | x    | v   |"]
    );
}

#[test]
fn test_columns_follow_first_appearance_across_rows() {
    let lines = [
        "- one",
        "  - b: 1",
        "- two",
        "  - a: 2",
        "  - b: 3",
        "  - c: 4",
    ];
    let table = convert_list_to_table(&lines, &unformatted(), "");
    assert_eq!(table[0], "| Item | b | a | c |");
    assert_eq!(table[2], "| one | 1 |  |  |");
    assert_eq!(table[3], "| two | 3 | 2 | 4 |");
}

#[test]
fn test_repeated_sibling_keys_share_one_cell() {
    let lines = ["- A", "  - tag: red", "  - tag: blue"];
    assert_eq!(
        convert_list_to_table(&lines, &unformatted(), ""),
        vec!["| Item | tag |", "| --- | --- |", "| A | red<br>blue |"]
    );
}

#[test]
fn test_code_spans_keep_their_pipes() {
    let lines = ["- cmd", "  - run: `ls | wc`", "  - or: a | b"];
    assert_eq!(
        convert_list_to_table(&lines, &unformatted(), ""),
        vec![
            "| Item | run | or |",
            "| --- | --- | --- |",
            "| cmd | `ls | wc` | a \\| b |",
        ]
    );
}

#[test]
fn test_mixed_markers_parse_as_one_list() {
    let lines = ["1. first", "   * k: v", "2. second", "   - k: w"];
    assert_eq!(
        convert_list_to_table(&lines, &unformatted(), ""),
        vec!["| Item | k |", "| --- | --- |", "| first | v |", "| second | w |"]
    );
}

#[test]
fn test_empty_parent_value_with_children() {
    let lines = ["- A", "  - address: ", "    - city: Paris", "    - zip: 1"];
    assert_eq!(
        convert_list_to_table(&lines, &unformatted(), ""),
        vec![
            "| Item | address.city | address.zip |",
            "| --- | --- | --- |",
            "| A | Paris | 1 |",
        ]
    );

    let options = ToggleOptions {
        flatten_nested_keys: false,
        ..unformatted()
    };
    assert_eq!(
        convert_list_to_table(&lines, &options, ""),
        vec![
            "| Item | address |",
            "| --- | --- |",
            "| A | city: Paris<br>zip: 1 |",
        ]
    );
}

#[test]
fn test_literal_backslash_pipe_splits_on_the_way_back() {
    let lines = ["- A", "  - path: a\\|b", "  - k: v"];
    let table = convert_list_to_table(&lines, &unformatted(), "");
    assert_eq!(table[2], "| A | a\\\\|b | v |");

    // The doubled backslash escapes itself, so the pipe separates cells.
    assert_eq!(
        convert_table_to_list(&table, &unformatted(), ""),
        vec!["- A", "  - path: a\\\\", "  - k: b"]
    );
}
