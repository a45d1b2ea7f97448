use rstest::rstest;
use tabulist_core::escape::{
    apply_value_escape, escape_pipes, line_breaks_to_soft_breaks, restore_line_breaks,
};
use tabulist_core::ValueEscapeStyle;

#[rstest]
#[case::plain_smart("a|b", true, "a\\|b")]
#[case::plain_always("a|b", false, "a\\|b")]
#[case::code_span_smart("`a|b`", true, "`a|b`")]
#[case::code_span_always("`a|b`", false, "`a\\|b`")]
#[case::double_tick_span("``a`|`b`` c|d", true, "``a`|`b`` c\\|d")]
#[case::unclosed_span("x `a|b", true, "x `a|b")]
#[case::fenced_block("```\na|b\n```\nc|d", true, "```\na|b\n```\nc\\|d")]
#[case::tilde_fence_ignores_backticks(
    "~~~\na|b\n```\nc|d\n~~~\ne|f",
    true,
    "~~~\na|b\n```\nc|d\n~~~\ne\\|f"
)]
fn test_escape_pipes(#[case] input: &str, #[case] smart: bool, #[case] expected: &str) {
    assert_eq!(escape_pipes(input, smart), expected);
}

#[rstest]
#[case("a<br>b")]
#[case("a<br/>b")]
#[case("a<br />b")]
#[case("a<BR>b")]
#[case("a<Br/>b")]
fn test_soft_break_spellings(#[case] cell: &str) {
    assert_eq!(restore_line_breaks(cell, "  "), vec!["a", "  b"]);
}

#[test]
fn test_line_breaks_become_br_tokens() {
    assert_eq!(line_breaks_to_soft_breaks("one\r\ntwo\nthree"), "one<br>two<br>three");
}

#[rstest]
#[case::none_keeps_text(ValueEscapeStyle::None, "a \"b\"", "a \"b\"")]
#[case::always_quotes(ValueEscapeStyle::Always, "v", "\"v\"")]
#[case::smart_plain(ValueEscapeStyle::Smart, "plain", "plain")]
#[case::smart_quotes_inner_quote(ValueEscapeStyle::Smart, "a \"b\"", "\"a \\\"b\\\"\"")]
#[case::smart_quotes_padding(ValueEscapeStyle::Smart, " x", "\" x\"")]
#[case::smart_quotes_breaks(ValueEscapeStyle::Smart, "a<br>b", "\"a<br>b\"")]
fn test_value_escape(
    #[case] style: ValueEscapeStyle,
    #[case] value: &str,
    #[case] expected: &str,
) {
    assert_eq!(apply_value_escape(value, style), expected);
}
