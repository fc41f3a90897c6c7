/// The closed set of inline styles the tokenizer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    /// Text that isn't part of any special construct.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` `` - a raw zone, nothing else is parsed inside it.
    Code,
    /// `[anchor](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl InlineKind {
    /// Whether nodes of this kind must carry a URL.
    pub fn requires_url(self) -> bool {
        matches!(self, InlineKind::Link | InlineKind::Image)
    }
}

/// A typed span of inline text.
///
/// `url` is only meaningful for [`InlineKind::Link`] and [`InlineKind::Image`];
/// for every other kind it is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineNode {
    pub text: String,
    pub kind: InlineKind,
    pub url: Option<String>,
}

impl InlineNode {
    /// Creates a node without a URL.
    pub fn new(text: impl Into<String>, kind: InlineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: InlineKind::Link,
            url: Some(url.into()),
        }
    }

    /// Images keep no text; the alt text is dropped during tokenizing.
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            kind: InlineKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_links_and_images_require_urls() {
        assert!(InlineKind::Link.requires_url());
        assert!(InlineKind::Image.requires_url());
        assert!(!InlineKind::Plain.requires_url());
        assert!(!InlineKind::Bold.requires_url());
        assert!(!InlineKind::Italic.requires_url());
        assert!(!InlineKind::Code.requires_url());
    }

    #[test]
    fn image_constructor_drops_text() {
        let node = InlineNode::image("/a.png");
        assert_eq!(node.text, "");
        assert_eq!(node.url.as_deref(), Some("/a.png"));
    }
}
