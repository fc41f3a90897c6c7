//! # Block Parsing
//!
//! Three steps, each a pure function of its input:
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into trimmed
//!    raw blocks
//! 2. **Classification** (`classify`): `MarkdownBlockClassifier` labels each block
//!    with a `BlockKind`
//! 3. **Construction** (`builder`): each block becomes one HTML parent node and
//!    `BlockBuilder` collects them under the document root
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: block-specific types with owned markers and tags
//! - **`split`**: `split_blocks`
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`builder`**: `block_to_html_node` and `BlockBuilder`
//!
//! ## Key Invariants
//!
//! - Code blocks are raw zones: no inline parsing inside
//! - Quote and list classification is all-or-nothing per block
//! - The root has exactly one child per non-empty block

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use builder::{BlockBuilder, block_to_html_node};
pub use classify::MarkdownBlockClassifier;
pub use split::split_blocks;
pub use types::BlockKind;
