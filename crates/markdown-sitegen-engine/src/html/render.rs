use thiserror::Error;

use super::node::{HtmlNode, RootNode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Leaf node has an empty value (tag: {tag:?})")]
    EmptyValue { tag: Option<String> },
    #[error("Parent node requires a tag")]
    MissingTag,
    #[error("Parent node <{tag}> requires children, but child list is empty")]
    MissingChildren { tag: String },
}

/// Something that can be turned into an HTML string.
pub trait Render {
    /// Appends this node's HTML to `out`.
    fn render_into(&self, out: &mut String) -> Result<(), RenderError>;

    fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }
}

/// Renders any node (or the document root) to a string.
pub fn render<R: Render + ?Sized>(node: &R) -> Result<String, RenderError> {
    node.render()
}

impl Render for HtmlNode {
    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, props } => {
                if value.is_empty() {
                    return Err(RenderError::EmptyValue { tag: tag.clone() });
                }
                match tag {
                    None => out.push_str(value),
                    Some(tag) => out.push_str(&format!("<{tag}{props}>{value}</{tag}>")),
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                props,
            } => {
                let Some(tag) = tag else {
                    return Err(RenderError::MissingTag);
                };
                if children.is_empty() {
                    return Err(RenderError::MissingChildren { tag: tag.clone() });
                }
                out.push_str(&format!("<{tag}{props}>"));
                for child in children {
                    child.render_into(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}

impl Render for RootNode {
    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        out.push_str(&format!("<{}>", RootNode::TAG));
        for child in self.children() {
            child.render_into(out)?;
        }
        out.push_str(&format!("</{}>", RootNode::TAG));
        Ok(())
    }
}
