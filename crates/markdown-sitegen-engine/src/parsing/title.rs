use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("No H1 title found in markdown")]
    NoTitleFound,
}

/// The `h1` heading marker a title line must start with.
pub const TITLE_MARKER: &str = "# ";

/// Returns the text of the first `# ` line, trimmed.
///
/// Lines are trimmed before the marker check, so an indented `  # Title`
/// counts. `## Sub` does not.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(TitleError::NoTitleFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", "Hello")]
    #[case("# Hello   ", "Hello")]
    #[case("   #   Spaced  ", "Spaced")]
    #[case("intro\n\n## Sub\n\n# Real Title\n\n# Later", "Real Title")]
    #[case("# **Bold** title", "**Bold** title")]
    fn finds_first_h1(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("## Only a subheading")]
    #[case("#NoSpace")]
    #[case("Plain text\n\n- list")]
    fn no_title(#[case] markdown: &str) {
        assert_eq!(extract_title(markdown), Err(TitleError::NoTitleFound));
    }
}
