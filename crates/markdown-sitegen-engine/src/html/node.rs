use super::props::Props;

/// A node in the rendered HTML tree.
///
/// Validity (non-empty leaf values, tagged parents with children) is checked
/// when rendering, not at construction, so malformed trees can be built and
/// reported with a precise [`RenderError`](super::RenderError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Literal text, optionally wrapped in a tag. An untagged leaf renders as
    /// its raw value.
    Leaf {
        tag: Option<String>,
        value: String,
        props: Props,
    },
    /// An element that owns an ordered list of child nodes.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        props: Props,
    },
}

impl HtmlNode {
    /// An untagged leaf: bare text in the output.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            props: Props::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            props: Props::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            props: Props::new(),
        }
    }

    /// Appends an attribute, builder style.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props_mut().insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    fn props_mut(&mut self) -> &mut Props {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }
}

/// The `<div>` that wraps a whole converted document.
///
/// Unlike [`HtmlNode::Parent`] it may be empty: an empty document renders as
/// `<div></div>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootNode {
    children: Vec<HtmlNode>,
}

impl RootNode {
    pub const TAG: &'static str = "div";

    pub fn new(children: Vec<HtmlNode>) -> Self {
        Self { children }
    }

    /// One entry per block of the source document.
    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    /// Converts into an ordinary parent node, losing the empty-root exemption.
    pub fn into_node(self) -> HtmlNode {
        HtmlNode::parent(Self::TAG, self.children)
    }
}
