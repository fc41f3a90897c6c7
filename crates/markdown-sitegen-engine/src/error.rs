use thiserror::Error;

use crate::{
    html::RenderError,
    parsing::{blocks::BlockKind, inline::InlineError, title::TitleError},
};

/// Failure converting a document into an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Failed to convert block {index} ({kind:?}) starting {excerpt:?}")]
    Block {
        /// Zero-based position of the block in the document.
        index: usize,
        kind: BlockKind,
        /// First line of the block, possibly shortened.
        excerpt: String,
        source: InlineError,
    },
}

/// Any failure of the markdown to HTML pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Title(#[from] TitleError),
}
