//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = "\`"` - raw zone, split out before everything else
//! - **`Strong`** / **`Emphasis`**: `"**"` and `"_"`
//! - **`Image`** / **`Link`**: bracket-paren patterns, images first
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser code.
//! The tokenizer calls these; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link};
