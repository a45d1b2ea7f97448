use rstest::rstest;
use tabulist_core::{detect_mode, locate_block, Mode};

#[rstest]
#[case::table_first_tie(&["| a |", "- b"], Some(Mode::TableToList))]
#[case::list_first_tie(&["- b", "| a |"], Some(Mode::ListToTable))]
#[case::more_list_items(&["| c |", "- a", "- b"], Some(Mode::ListToTable))]
#[case::more_table_rows(&["- c", "| a |", "| b |"], Some(Mode::TableToList))]
#[case::ordered_marker(&["1. a"], Some(Mode::ListToTable))]
#[case::asterisk_marker(&["  * a"], Some(Mode::ListToTable))]
#[case::indented_table(&["    | a |"], Some(Mode::TableToList))]
#[case::prose(&["plain", "text"], None)]
#[case::marker_without_space(&["-no space"], None)]
fn test_detect_mode(#[case] lines: &[&str], #[case] expected: Option<Mode>) {
    assert_eq!(detect_mode(lines), expected);
}

#[test]
fn test_block_is_bounded_by_blank_lines() {
    let lines = ["intro", "", "- a", "  - k: v", "   ", "tail"];
    let block = locate_block(&lines, 3).unwrap();
    assert_eq!((block.start_line, block.end_line), (2, 3));
    assert_eq!(block.lines, vec!["- a", "  - k: v"]);
    assert_eq!(block.base_indent, "");
}

#[test]
fn test_block_reaches_document_edges() {
    let lines = ["  - a", "    - b"];
    let block = locate_block(&lines, 0).unwrap();
    assert_eq!((block.start_line, block.end_line), (0, 1));
    assert_eq!(block.base_indent, "  ");
}

#[rstest]
#[case::blank_line(1)]
#[case::whitespace_only(2)]
#[case::past_the_end(7)]
fn test_no_block_at(#[case] cursor: usize) {
    let lines = ["- a", "", "  \t", "- b"];
    assert!(locate_block(&lines, cursor).is_none());
}
