/// Blank line separating two blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks, in document order.
///
/// Extra blank lines between blocks produce no empty blocks, and a document
/// that is empty or all whitespace yields none at all.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
