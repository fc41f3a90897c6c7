//! # Inline Parsing
//!
//! Sequential, flat inline tokenizing. Each pass splits the `Plain` nodes left
//! by the previous one, so earlier passes shadow later ones.
//!
//! ## Modules
//!
//! - **`types`**: `InlineKind` and `InlineNode`
//! - **`kinds`**: delimiter constants and bracket patterns, one type per construct
//! - **`cursor`**: `Cursor` for delimiter scanning
//! - **`parser`**: `tokenize()` main entry point and the individual split passes
//! - **`to_html`**: mapping from inline nodes to HTML leaves
//!
//! ## Pass Order
//!
//! Code spans go first: `` `**not bold**` `` stays a single Code node. Images
//! go before links so the brackets of `![alt](src)` are never taken as a link.

use thiserror::Error;

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod to_html;
pub mod types;

pub use parser::tokenize;
pub use to_html::{inline_to_html, text_to_children};
pub use types::{InlineKind, InlineNode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error("Invalid markdown: missing closing '{delimiter}' delimiter")]
    MalformedInlineMarkup { delimiter: &'static str },
    #[error("Inline node of kind {kind:?} requires a URL")]
    MissingUrl { kind: InlineKind },
}
