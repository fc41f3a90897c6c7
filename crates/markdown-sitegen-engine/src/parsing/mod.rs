pub mod blocks;
pub mod inline;
pub mod title;

use crate::{error::ConvertError, html::RootNode};

use blocks::{BlockBuilder, MarkdownBlockClassifier, split_blocks};

pub use title::extract_title;

/// Converts a whole markdown document into a `<div>` of block nodes.
///
/// The root has one child per non-empty, blank-line separated block, in
/// document order. The first block that fails to convert aborts the whole
/// document; no partial tree is returned.
pub fn markdown_to_html_node(markdown: &str) -> Result<RootNode, ConvertError> {
    let classifier = MarkdownBlockClassifier;
    let mut builder = BlockBuilder::new();

    for block in split_blocks(markdown) {
        let kind = classifier.classify(block);
        log::debug!("block classified as {kind:?}");
        builder.push(block, kind)?;
    }

    Ok(builder.finish())
}
