/// The kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading,
    /// A block fenced by ```` ``` ```` at both ends.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
    /// The default when no other kind matches.
    Paragraph,
}
