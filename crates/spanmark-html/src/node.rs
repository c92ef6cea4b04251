//! HTML node tree
//!
//! A node is either a terminal leaf holding a value, or a container holding
//! ordered children. Fields that a well-formed node requires are still
//! optional here; a node missing one is rejected when it is rendered.

use indexmap::IndexMap;

use crate::render::render;
use crate::ValidationError;

/// Element attributes, serialized in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node in the rendered HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Leaf node. Without a tag the value is emitted as raw text.
    Terminal {
        tag: Option<String>,
        value: Option<String>,
        attributes: Option<Attributes>,
    },

    /// Element wrapping child nodes. Requires both a tag and children.
    Container {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Option<Attributes>,
    },
}

impl HtmlNode {
    /// Create an untagged terminal node (raw text)
    pub fn text(value: &str) -> Self {
        HtmlNode::Terminal {
            tag: None,
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    /// Create a tagged terminal node
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Terminal {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    /// Create a container node
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Container {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: None,
        }
    }

    /// Add an attribute, replacing any previous value for the same key
    /// while keeping its original position.
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes_mut()
            .get_or_insert_with(Attributes::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Replace all attributes
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        *self.attributes_mut() = Some(attributes);
        self
    }

    /// Append a child. Terminal nodes have no children and are left unchanged.
    pub fn add_child(&mut self, child: HtmlNode) {
        if let HtmlNode::Container { children, .. } = self {
            children.get_or_insert_with(Vec::new).push(child);
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, HtmlNode::Terminal { .. })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Terminal { tag, .. } | HtmlNode::Container { tag, .. } => tag.as_deref(),
        }
    }

    /// Value of a terminal node
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Terminal { value, .. } => value.as_deref(),
            HtmlNode::Container { .. } => None,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Terminal { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes.as_ref()
            }
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes()?.get(name).map(String::as_str)
    }

    /// Child nodes of a container; empty for terminals
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        let children = match self {
            HtmlNode::Container { children, .. } => children.as_deref(),
            HtmlNode::Terminal { .. } => None,
        };
        children.into_iter().flatten()
    }

    /// Serialize this node and its descendants with default options
    pub fn to_html(&self) -> Result<String, ValidationError> {
        render(self)
    }

    fn attributes_mut(&mut self) -> &mut Option<Attributes> {
        match self {
            HtmlNode::Terminal { attributes, .. } | HtmlNode::Container { attributes, .. } => {
                attributes
            }
        }
    }
}
