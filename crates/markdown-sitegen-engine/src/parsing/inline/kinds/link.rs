use std::sync::LazyLock;

use regex::Regex;

/// Inline link `[anchor](url)`.
pub struct Link;

impl Link {
    /// Marker that turns a link into an image when it precedes the `[`.
    pub const IMAGE_BANG: u8 = b'!';

    /// Anchor and URL must both be non-empty; the anchor may not contain `]`
    /// and the URL may not contain `)`.
    pub fn pattern() -> &'static Regex {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
        });
        &PATTERN
    }
}

/// Inline image `![alt](url)`.
pub struct Image;

impl Image {
    /// Alt text may be empty. Both groups are lazy so adjacent images on one
    /// line stay separate matches.
    pub fn pattern() -> &'static Regex {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"!\[([^\]]*?)\]\((.*?)\)").expect("image pattern is valid")
        });
        &PATTERN
    }
}
