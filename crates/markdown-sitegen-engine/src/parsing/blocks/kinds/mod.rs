//! # Block Kinds
//!
//! One type per block kind, each owning its markers, match rule and tag.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{LIST_ITEM_TAG, OrderedList, UnorderedList};
pub use paragraph::Paragraph;
