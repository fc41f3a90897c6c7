/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix.
    pub const PREFIX: &'static str = ">";
    pub const TAG: &'static str = "blockquote";

    /// True when every line of the block starts with `>`.
    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::PREFIX))
    }

    /// Removes `"> "`, or a bare `">"` when no space follows.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix("> ")
            .or_else(|| line.strip_prefix(Self::PREFIX))
            .unwrap_or(line)
    }

    /// The quoted text with every line's prefix removed, rejoined with `\n`.
    pub fn content(block: &str) -> String {
        block
            .split('\n')
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lines_quoted() {
        assert!(BlockQuote::matches("> a\n>b\n> c"));
    }

    #[test]
    fn one_unquoted_line_breaks_the_quote() {
        assert!(!BlockQuote::matches("> a\nb\n> c"));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), "hello");
    }

    #[test]
    fn strip_quote_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), "hello");
    }

    #[test]
    fn strip_only_one_level() {
        assert_eq!(BlockQuote::strip_prefix("> > nested"), "> nested");
    }

    #[test]
    fn content_rejoins_lines() {
        assert_eq!(BlockQuote::content("> one\n>two\n>"), "one\ntwo\n");
    }
}
