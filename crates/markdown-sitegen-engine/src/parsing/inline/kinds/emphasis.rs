/// `**bold**` delimiter.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// `_italic_` delimiter.
///
/// Split after [`Strong`] so a `**` run is never read as two italics.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "_";
}
