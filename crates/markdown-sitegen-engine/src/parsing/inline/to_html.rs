use crate::html::HtmlNode;

use super::{InlineError, parser::tokenize, types::InlineKind, types::InlineNode};

/// Maps one inline node onto an HTML leaf.
///
/// | kind   | output                               |
/// |--------|--------------------------------------|
/// | Plain  | bare text                            |
/// | Bold   | `<b>`                                |
/// | Italic | `<i>`                                |
/// | Code   | `<code>`                             |
/// | Link   | `<a href="url">`                     |
/// | Image  | `<img src="url" alt="text">` (value `" "`) |
pub fn inline_to_html(node: &InlineNode) -> Result<HtmlNode, InlineError> {
    let html = match node.kind {
        InlineKind::Plain => HtmlNode::text(&node.text),
        InlineKind::Bold => HtmlNode::leaf("b", &node.text),
        InlineKind::Italic => HtmlNode::leaf("i", &node.text),
        InlineKind::Code => HtmlNode::leaf("code", &node.text),
        InlineKind::Link => HtmlNode::leaf("a", &node.text).with_prop("href", required_url(node)?),
        InlineKind::Image => HtmlNode::leaf("img", " ")
            .with_prop("src", required_url(node)?)
            .with_prop("alt", &node.text),
    };
    Ok(html)
}

fn required_url(node: &InlineNode) -> Result<&str, InlineError> {
    node.url
        .as_deref()
        .ok_or(InlineError::MissingUrl { kind: node.kind })
}

/// Tokenizes `text` and maps every inline node to HTML.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    tokenize(text)?.iter().map(inline_to_html).collect()
}
