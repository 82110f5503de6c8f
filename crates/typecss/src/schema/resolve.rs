//! Resolution of slot assignments into CSS declarations.

use std::borrow::Cow;
use std::fmt;

use super::PropertySlot;
use crate::types::{Border, Color, Length, Value};
use crate::{Error, Result};

/// A single `name: value` CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name.
    pub name: &'a str,
    /// Property value, already serialized.
    pub value: Cow<'a, str>,
}

impl<'a> Declaration<'a> {
    /// Create a declaration.
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

#[derive(Debug, Clone, Copy)]
enum BorderPart {
    Width,
    Style,
    Color,
}

/// Expansion order for the `Border` composite.
const BORDER_EXPANSION: [(BorderPart, &str); 3] = [
    (BorderPart::Width, "border-width"),
    (BorderPart::Style, "border-style"),
    (BorderPart::Color, "border-color"),
];

/// Resolve a slot assignment into its declarations.
///
/// Primitive slots yield one declaration, or none when the value serializes
/// to "omit". Composite slots yield their fixed expansion, skipping unset
/// sub-fields.
///
/// # Errors
///
/// - [`Error::TypeMismatch`] if the slot does not accept the value's kind.
/// - [`Error::InvalidValue`] for a non-finite length magnitude.
pub fn resolve<'a>(slot: PropertySlot, value: &Value) -> Result<Vec<Declaration<'a>>> {
    let def = slot.def();
    let found = value.kind();
    if !def.kind.accepts(found) {
        return Err(Error::type_mismatch(def.name, def.kind, found));
    }

    match value {
        Value::Border(border) => expand_border(border),
        Value::Length(length) => {
            check_finite(def.name, length)?;
            Ok(primitive(def.name, value))
        }
        _ => Ok(primitive(def.name, value)),
    }
}

fn primitive<'a>(name: &'static str, value: &Value) -> Vec<Declaration<'a>> {
    match value.to_css() {
        Some(css) => vec![Declaration::new(name, css)],
        None => {
            tracing::trace!(property = name, "omitting empty value");
            Vec::new()
        }
    }
}

fn expand_border<'a>(border: &Border) -> Result<Vec<Declaration<'a>>> {
    let mut declarations = Vec::with_capacity(BORDER_EXPANSION.len());

    for (part, name) in BORDER_EXPANSION {
        let css = match part {
            BorderPart::Width => match &border.width {
                Some(width) => {
                    check_finite(name, width)?;
                    Some(width.to_css())
                }
                None => None,
            },
            BorderPart::Style => border.style.map(|style| style.as_css().to_string()),
            BorderPart::Color => border.color.as_ref().and_then(Color::to_css),
        };

        if let Some(css) = css {
            declarations.push(Declaration::new(name, css));
        }
    }

    Ok(declarations)
}

fn check_finite(property: &str, length: &Length) -> Result<()> {
    if length.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_value(
            property,
            format!("magnitude must be finite, got {:?}", length.magnitude()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SlotKind;
    use crate::types::{BorderStyle, Display, ValueKind};

    fn css(declarations: Vec<Declaration<'_>>) -> Vec<String> {
        declarations.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn primitive_slot_yields_one_declaration() {
        let out = resolve(PropertySlot::Display, &Display::Block.into()).unwrap();
        assert_eq!(css(out), ["display:block"]);
    }

    #[test]
    fn omitted_value_yields_nothing() {
        let out = resolve(PropertySlot::FontWeight, &Value::keyword("")).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn border_expansion_order() {
        let border = Border::new()
            .color(Color::Inherit)
            .style(BorderStyle::Solid)
            .width(Length::ZERO);
        let out = resolve(PropertySlot::Border, &border.into()).unwrap();
        assert_eq!(
            css(out),
            ["border-width:0", "border-style:solid", "border-color:inherit"]
        );
    }

    #[test]
    fn border_omits_unset_fields() {
        let empty = resolve(PropertySlot::Border, &Border::new().into()).unwrap();
        assert!(empty.is_empty());

        let style_only = Border::new().style(BorderStyle::Dashed);
        let out = resolve(PropertySlot::Border, &style_only.into()).unwrap();
        assert_eq!(css(out), ["border-style:dashed"]);
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let err = resolve(PropertySlot::Height, &Color::Inherit.into()).unwrap_err();
        assert_eq!(
            err,
            Error::type_mismatch("height", SlotKind::Length, ValueKind::Color)
        );

        let err = resolve(PropertySlot::Border, &Value::raw("1px solid")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { property: "border", .. }));
    }

    #[test]
    fn non_finite_length_is_rejected() {
        let err = resolve(PropertySlot::Width, &Length::px(f64::NAN).into()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref property, .. } if property == "width"));

        let border = Border::new().width(Length::em(f64::INFINITY));
        let err = resolve(PropertySlot::Border, &border.into()).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref property, .. } if property == "border-width"));
    }

    #[test]
    fn keywords_accepted_on_typed_slots() {
        let out = resolve(PropertySlot::Color, &Value::inherit()).unwrap();
        assert_eq!(css(out), ["color:inherit"]);
    }
}
