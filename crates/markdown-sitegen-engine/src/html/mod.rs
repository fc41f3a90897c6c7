//! # HTML Node Tree
//!
//! A small owned tree of HTML elements and the renderer that turns it into a
//! string.
//!
//! - **`node`**: `HtmlNode` (leaf / parent) and `RootNode`
//! - **`props`**: `Props`, insertion-ordered attributes
//! - **`render`**: the `Render` trait and `RenderError`
//!
//! Text is emitted as-is; nothing is escaped.

pub mod node;
pub mod props;
pub mod render;

pub use node::{HtmlNode, RootNode};
pub use props::Props;
pub use render::{Render, RenderError, render};
