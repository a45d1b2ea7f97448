//! Builds a forest of [`ListNode`]s from indented marker lines.
//!
//! The tree is built bottom-up with an explicit stack of open items. Each
//! new item closes every open item indented at least as deep as itself,
//! then becomes a child of whatever remains open (or a new root). Closed
//! items are attached to their parent as they are popped, so every child
//! vector owns its nodes outright and no parent links are needed.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)([-*]|[0-9]+\.)\s+(.*)$").expect("list item regex is valid")
});

/// Columns a tab counts for when measuring indentation.
const TAB_WIDTH: usize = 4;

/// One list item and its nested items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    /// Item text after the marker; continuation lines are joined with `\n`.
    pub text: String,
    /// Indentation width of the marker (tab = 4 columns).
    pub indent: usize,
    /// The marker as written: `-`, `*` or `N.`.
    pub marker: String,
    pub children: Vec<ListNode>,
}

impl ListNode {
    fn new(text: &str, indent: usize, marker: &str) -> Self {
        ListNode {
            text: text.to_string(),
            indent,
            marker: marker.to_string(),
            children: Vec::new(),
        }
    }
}

pub(crate) fn indentation_width(indent: &str) -> usize {
    indent
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Parses list lines into a forest of root items.
///
/// Blank lines are skipped. A non-blank line without a marker continues the
/// most recently opened item; before any item is open it is dropped.
pub fn parse_list<S: AsRef<str>>(lines: &[S]) -> Vec<ListNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<ListNode> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let Some(captures) = LIST_ITEM.captures(line) else {
            match stack.last_mut() {
                Some(open) => {
                    open.text.push('\n');
                    open.text.push_str(line.trim());
                }
                None => log::trace!("dropping text before first list item: {line:?}"),
            }
            continue;
        };

        let indent = indentation_width(&captures[1]);
        while stack.last().is_some_and(|open| open.indent >= indent) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(ListNode::new(&captures[3], indent, &captures[2]));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }
    roots
}

/// Pops the innermost open item and attaches it to its parent.
fn close_top(stack: &mut Vec<ListNode>, roots: &mut Vec<ListNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
