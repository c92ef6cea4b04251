//! Configuration options for HTML serialization

/// Options for HTML serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `"`, `<` and `>` in attribute values.
    ///
    /// Off by default: attribute values are written verbatim.
    pub escape_attribute_values: bool,
}

impl RenderOptions {
    /// Options that escape attribute values
    pub fn escaped() -> Self {
        Self {
            escape_attribute_values: true,
        }
    }
}
