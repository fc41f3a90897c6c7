use crate::{
    error::ConvertError,
    html::{HtmlNode, RootNode},
    parsing::inline::{InlineError, text_to_children},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, LIST_ITEM_TAG, OrderedList, Paragraph, UnorderedList},
    types::BlockKind,
};

/// Converts one classified block into exactly one HTML parent node.
///
/// Every kind except [`BlockKind::Code`] has its text inline-tokenized; code
/// content is kept verbatim inside `<pre><code>`.
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode, InlineError> {
    match kind {
        BlockKind::Heading => heading(block),
        BlockKind::Code => Ok(code(block)),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList => list(block, UnorderedList::TAG, UnorderedList::item_text),
        BlockKind::OrderedList => list(block, OrderedList::TAG, OrderedList::item_text),
        BlockKind::Paragraph => Ok(HtmlNode::parent(Paragraph::TAG, text_to_children(block)?)),
    }
}

fn heading(block: &str) -> Result<HtmlNode, InlineError> {
    let level = Heading::count_markers(block);
    let children = text_to_children(Heading::text(block, level))?;
    Ok(HtmlNode::parent(Heading::tag(level), children))
}

fn code(block: &str) -> HtmlNode {
    let leaf = HtmlNode::leaf(CodeFence::INNER_TAG, CodeFence::content(block));
    HtmlNode::parent(CodeFence::OUTER_TAG, vec![leaf])
}

fn quote(block: &str) -> Result<HtmlNode, InlineError> {
    let children = text_to_children(&BlockQuote::content(block))?;
    Ok(HtmlNode::parent(BlockQuote::TAG, children))
}

fn list(block: &str, tag: &str, item_text: fn(&str) -> &str) -> Result<HtmlNode, InlineError> {
    let items = block
        .split('\n')
        .map(|line| {
            let children = text_to_children(item_text(line))?;
            Ok(HtmlNode::parent(LIST_ITEM_TAG, children))
        })
        .collect::<Result<Vec<_>, InlineError>>()?;
    Ok(HtmlNode::parent(tag, items))
}

/// Accumulates converted blocks into the document root.
///
/// Blocks are numbered in push order so a failing block can be reported by
/// position.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    out: Vec<HtmlNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts and appends one classified block.
    pub fn push(&mut self, block: &str, kind: BlockKind) -> Result<(), ConvertError> {
        let node = block_to_html_node(block, kind).map_err(|source| ConvertError::Block {
            index: self.out.len(),
            kind,
            excerpt: excerpt(block),
            source,
        })?;
        self.out.push(node);
        Ok(())
    }

    pub fn finish(self) -> RootNode {
        RootNode::new(self.out)
    }
}

/// First line of a block, shortened for error messages.
fn excerpt(block: &str) -> String {
    const MAX_CHARS: usize = 40;
    let first = block.lines().next().unwrap_or("");
    if first.chars().count() > MAX_CHARS {
        let cut: String = first.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}
