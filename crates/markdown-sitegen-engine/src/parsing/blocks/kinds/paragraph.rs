/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no other
/// kind matches. The whole block is inline-tokenized.
pub struct Paragraph;

impl Paragraph {
    pub const TAG: &'static str = "p";
}
