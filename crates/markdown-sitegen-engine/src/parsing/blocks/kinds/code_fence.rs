/// Fenced code block type with owned fence constant.
///
/// Code blocks are raw zones: their content is never inline-tokenized.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const OUTER_TAG: &'static str = "pre";
    pub const INNER_TAG: &'static str = "code";

    /// A block that both starts and ends with a fence. A single line such as
    /// "```code```" qualifies too.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Strips exactly one fence length from each end.
    ///
    /// A bare "```" (opener and closer overlapping) has no content.
    pub fn content(block: &str) -> &str {
        let n = Self::BACKTICKS.len();
        block.get(n..block.len().saturating_sub(n)).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_multiline_fence() {
        assert!(CodeFence::is_fenced("```\nfn main() {}\n```"));
    }

    #[test]
    fn detect_single_line_fence() {
        assert!(CodeFence::is_fenced("```inline```"));
    }

    #[test]
    fn unclosed_fence_is_not_code() {
        assert!(!CodeFence::is_fenced("```\nfn main() {}"));
    }

    #[test]
    fn content_keeps_inner_newlines() {
        assert_eq!(CodeFence::content("```\nx = 1\n```"), "\nx = 1\n");
    }

    #[test]
    fn content_of_info_string_fence() {
        assert_eq!(CodeFence::content("```rust\nlet x;\n```"), "rust\nlet x;\n");
    }

    #[test]
    fn bare_fence_has_no_content() {
        assert_eq!(CodeFence::content("```"), "");
    }
}
