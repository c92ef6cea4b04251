//! HTML serialization
//!
//! Converts an `HtmlNode` tree into markup.

use std::borrow::Cow;

use crate::node::{Attributes, HtmlNode};
use crate::options::RenderOptions;
use crate::ValidationError;

/// Serialize a node tree to HTML with default options
pub fn render(node: &HtmlNode) -> Result<String, ValidationError> {
    render_with(node, &RenderOptions::default())
}

/// Serialize a node tree to HTML
///
/// Fails on the first node that is missing a required field; no partial
/// output is returned.
pub fn render_with(node: &HtmlNode, options: &RenderOptions) -> Result<String, ValidationError> {
    let mut output = String::new();
    render_node(node, options, &mut output)?;
    Ok(output)
}

/// Serialize attributes as ` key="value"` pairs in insertion order.
///
/// Values are written verbatim.
pub fn attributes_to_markup(attributes: Option<&Attributes>) -> String {
    let mut output = String::new();
    write_attributes(attributes, &RenderOptions::default(), &mut output);
    output
}

fn render_node(
    node: &HtmlNode,
    options: &RenderOptions,
    out: &mut String,
) -> Result<(), ValidationError> {
    match node {
        HtmlNode::Terminal {
            tag,
            value,
            attributes,
        } => {
            let value = value.as_deref().ok_or(ValidationError::MissingValue)?;
            match tag {
                None => out.push_str(value),
                Some(tag) => {
                    open_tag(tag, attributes.as_ref(), options, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }

        HtmlNode::Container {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(ValidationError::MissingTag)?;
            let children = children
                .as_deref()
                .ok_or_else(|| ValidationError::MissingChildren {
                    tag: tag.to_string(),
                })?;

            open_tag(tag, attributes.as_ref(), options, out);
            for child in children {
                render_node(child, options, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn open_tag(tag: &str, attributes: Option<&Attributes>, options: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, options, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attributes: Option<&Attributes>, options: &RenderOptions, out: &mut String) {
    let Some(attributes) = attributes else {
        return;
    };

    for (key, value) in attributes {
        let value: Cow<'_, str> = if options.escape_attribute_values {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value.as_str())
        };
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&value);
        out.push('"');
    }
}
