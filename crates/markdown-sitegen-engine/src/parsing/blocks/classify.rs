use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Labels raw blocks with a [`BlockKind`].
///
/// Rules are tried in a fixed order and the first match wins. Prefix checks
/// are literal: no leading whitespace is tolerated.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Classifies a trimmed block.
    ///
    /// Quote and list rules are all-or-nothing: a single non-conforming line
    /// demotes the whole block to [`BlockKind::Paragraph`].
    pub fn classify(&self, block: &str) -> BlockKind {
        if Heading::level(block).is_some() {
            BlockKind::Heading
        } else if CodeFence::is_fenced(block) {
            BlockKind::Code
        } else if BlockQuote::matches(block) {
            BlockKind::Quote
        } else if UnorderedList::matches(block) {
            BlockKind::UnorderedList
        } else if OrderedList::matches(block) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}
