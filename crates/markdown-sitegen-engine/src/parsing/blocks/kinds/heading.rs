/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `block` opens with 1-6 `#` and a space.
    ///
    /// Seven or more `#`, or `#` without a following space, is not a heading.
    pub fn level(block: &str) -> Option<usize> {
        let hashes = Self::count_markers(block);
        let level_ok = (1..=Self::MAX_LEVEL).contains(&hashes);
        (level_ok && block[hashes..].starts_with(' ')).then_some(hashes)
    }

    /// Text after the markers and the single separating space.
    ///
    /// Callers must only pass blocks for which [`Heading::level`] is `Some`.
    pub fn text(block: &str, level: usize) -> &str {
        block.get(level + 1..).unwrap_or("")
    }

    /// `h1`..`h6`.
    pub fn tag(level: usize) -> String {
        format!("h{level}")
    }

    /// Number of leading `#` characters.
    pub fn count_markers(block: &str) -> usize {
        block.chars().take_while(|&c| c == Self::MARKER).count()
    }
}
