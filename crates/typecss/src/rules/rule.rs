//! Single style rule definition.

use cssparser::{Parser, ParserInput};

use crate::style::Props;
use crate::{Error, Result};

/// A raw `name: value` declaration that bypasses the property schema.
///
/// Used for vendor-prefixed properties and anything the schema does not
/// model. The value is emitted verbatim; its correctness is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomProp {
    /// Property name, e.g. `-webkit-tap-highlight-color`.
    pub name: String,
    /// Property value, emitted as-is.
    pub value: String,
}

impl CustomProp {
    /// Create a custom property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Check that the name is a single CSS identifier.
    pub fn validate(&self) -> Result<()> {
        if is_valid_property_name(&self.name) {
            Ok(())
        } else {
            Err(Error::invalid_custom_property_name(&self.name))
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for CustomProp {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Check whether `name` tokenizes as exactly one CSS identifier.
///
/// Accepts vendor prefixes (`-webkit-appearance`) and custom properties
/// (`--brand-color`); rejects empty names, surrounding whitespace and
/// anything containing punctuation such as `:` or `;`.
pub fn is_valid_property_name(name: &str) -> bool {
    if name.is_empty() || name.trim() != name {
        return false;
    }

    let mut input = ParserInput::new(name);
    let mut parser = Parser::new(&mut input);
    let is_ident = parser.expect_ident().is_ok();
    is_ident && parser.expect_exhausted().is_ok()
}

/// A style rule: a selector, typed properties and custom properties.
///
/// Declarations are emitted typed properties first, in canonical slot order,
/// then custom properties in insertion order. A custom property can therefore
/// deliberately override a typed one.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The selector, emitted verbatim. Must not be empty.
    pub selector: String,
    /// Typed property assignments.
    pub props: Props,
    /// Custom properties, in insertion order.
    pub custom_props: Vec<CustomProp>,
}

impl Rule {
    /// Create a rule with typed properties.
    pub fn new(selector: impl Into<String>, props: impl Into<Props>) -> Self {
        Self {
            selector: selector.into(),
            props: props.into(),
            custom_props: Vec::new(),
        }
    }

    /// Create a rule with no properties.
    pub fn bare(selector: impl Into<String>) -> Self {
        Self::new(selector, Props::new())
    }

    /// Append a custom property.
    pub fn custom_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_props.push(CustomProp::new(name, value));
        self
    }

    /// Append several custom properties, in order.
    pub fn custom_props<I, P>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<CustomProp>,
    {
        self.custom_props.extend(props.into_iter().map(Into::into));
        self
    }

    /// Check if the rule carries no properties at all.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.custom_props.is_empty()
    }
}
