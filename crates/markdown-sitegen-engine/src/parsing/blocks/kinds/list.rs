/// Unordered list block type (`- item`).
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";
    pub const TAG: &'static str = "ul";

    /// True when every line starts with `"- "`.
    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Item text with the two-character marker removed.
    pub fn item_text(line: &str) -> &str {
        line.get(Self::MARKER.len()..).unwrap_or("")
    }
}

/// Ordered list block type (`1. item`).
pub struct OrderedList;

impl OrderedList {
    /// Separates the item number from the item text.
    pub const SEPARATOR: &'static str = ". ";
    pub const TAG: &'static str = "ol";

    /// True when line `i` (1-based) starts with exactly `"{i}. "`.
    ///
    /// Numbering must start at 1 and go up by one; a single gap or repeat
    /// disqualifies the whole block.
    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .zip(1usize..)
            .all(|(line, n)| line.starts_with(&format!("{n}{}", Self::SEPARATOR)))
    }

    /// Item text after the first `". "` on the line.
    pub fn item_text(line: &str) -> &str {
        match line.find(Self::SEPARATOR) {
            Some(at) => &line[at + Self::SEPARATOR.len()..],
            None => line,
        }
    }
}

/// Tag shared by both list kinds for their items.
pub const LIST_ITEM_TAG: &str = "li";
