use proptest::prelude::*;
use std::collections::BTreeSet;
use tabulist_core::formats::table::parse_table;
use tabulist_core::{convert_list_to_table, convert_table_to_list, detect_mode, Mode, ToggleOptions};

/// Arbitrary list lines, up to three levels deep. Backticks are left out so
/// code spans never swallow the cell separators.
fn list_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0usize..3, "[a-zA-Z0-9 :.|*-]{1,12}"), 1..12).prop_map(|items| {
        items
            .into_iter()
            .map(|(depth, text)| format!("{}- {}", "  ".repeat(depth), text))
            .collect()
    })
}

/// Rows that all carry the same keys, in the same order, with plain values.
fn keyed_rows() -> impl Strategy<Value = (Vec<String>, Vec<(String, Vec<String>)>)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..4).prop_flat_map(|keys: BTreeSet<String>| {
        let keys: Vec<String> = keys.into_iter().collect();
        let width = keys.len();
        let rows = prop::collection::vec(
            (
                "[A-Z][a-z]{0,6}",
                prop::collection::vec("[a-z0-9]{1,8}", width..=width),
            ),
            1..5,
        );
        (Just(keys), rows)
    })
}

fn render_rows(keys: &[String], rows: &[(String, Vec<String>)]) -> Vec<String> {
    let mut lines = Vec::new();
    for (root, values) in rows {
        lines.push(format!("- {root}"));
        for (key, value) in keys.iter().zip(values) {
            lines.push(format!("  - {key}: {value}"));
        }
    }
    lines
}

proptest! {
    #[test]
    fn converted_lists_detect_as_tables(lines in list_lines(), format_table in any::<bool>()) {
        let options = ToggleOptions { format_table, ..Default::default() };
        let table = convert_list_to_table(&lines, &options, "");
        prop_assert_eq!(detect_mode(&table), Some(Mode::TableToList));
    }

    #[test]
    fn simple_key_value_lists_round_trip((keys, rows) in keyed_rows(), format_table in any::<bool>()) {
        let options = ToggleOptions { format_table, ..Default::default() };
        let lines = render_rows(&keys, &rows);
        let table = convert_list_to_table(&lines, &options, "");
        let back = convert_table_to_list(&table, &options, "");
        prop_assert_eq!(back, lines);
    }

    #[test]
    fn columns_follow_first_seen_order(
        rows in prop::collection::vec(prop::collection::vec("[a-e]{1,2}", 0..4), 1..6)
    ) {
        let mut lines = Vec::new();
        let mut expected: Vec<String> = Vec::new();
        for (i, keys) in rows.iter().enumerate() {
            lines.push(format!("- row{i}"));
            for key in keys {
                lines.push(format!("  - {key}: v"));
                if !expected.contains(key) {
                    expected.push(key.clone());
                }
            }
        }

        let table = convert_list_to_table(&lines, &ToggleOptions::default(), "");
        let parsed = parse_table(&table).unwrap();
        prop_assert_eq!(&parsed.headers[0], "Item");
        prop_assert_eq!(parsed.headers[1..].to_vec(), expected);
    }
}
