//! Style property value types.
//!
//! This module provides the typed CSS values that property slots are set to,
//! along with the rules each kind follows when serialized to CSS text.
//!
//! # Example
//!
//! ```
//! use typecss::prelude::*;
//!
//! assert_eq!(Length::px(16.0).to_css(), "16px");
//! assert_eq!(Length::em(-0.25).to_css(), "-0.25em");
//! assert_eq!(Length::raw(1.5).to_css(), "1.5");
//!
//! // Zero lengths drop their unit.
//! assert_eq!(Length::percent(0.0).to_css(), "0");
//!
//! // Empty keywords mean "no declaration", not an empty declaration.
//! assert_eq!(Value::keyword("").to_css(), None);
//! ```

use std::fmt;

use super::BorderStyle;

/// A value assigned to a property slot.
///
/// `to_css` returns `None` when the value means "emit no declaration". That
/// is never the same thing as an empty CSS value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A CSS keyword or identifier, copied verbatim (`inherit`, `none`, ...).
    Keyword(String),
    /// A number with a unit.
    Length(Length),
    /// A color expression.
    Color(Color),
    /// Unvalidated passthrough text, e.g. `none !important`.
    Raw(String),
    /// Composite border value. Only the `Border` slot accepts it.
    Border(Border),
}

impl Value {
    /// Create a keyword value.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::Keyword(keyword.into())
    }

    /// Create a raw passthrough value.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// The `inherit` keyword.
    pub fn inherit() -> Self {
        Self::Keyword("inherit".to_string())
    }

    /// The kind of this value, as checked against a slot's schema.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Keyword(_) => ValueKind::Keyword,
            Value::Length(_) => ValueKind::Length,
            Value::Color(_) => ValueKind::Color,
            Value::Raw(_) => ValueKind::Raw,
            Value::Border(_) => ValueKind::Border,
        }
    }

    /// Serialize to CSS text, or `None` if the declaration should be omitted.
    pub fn to_css(&self) -> Option<String> {
        match self {
            Value::Keyword(text) | Value::Raw(text) => non_empty(text),
            Value::Length(length) => Some(length.to_css()),
            Value::Color(color) => color.to_css(),
            Value::Border(border) => border.to_css(),
        }
    }
}

impl From<Length> for Value {
    fn from(value: Length) -> Self {
        Value::Length(value)
    }
}

impl From<Color> for Value {
    fn from(value: Color) -> Self {
        Value::Color(value)
    }
}

impl From<Border> for Value {
    fn from(value: Border) -> Self {
        Value::Border(value)
    }
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Keyword,
    Length,
    Color,
    Raw,
    Border,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Keyword => "keyword",
            ValueKind::Length => "length",
            ValueKind::Color => "color",
            ValueKind::Raw => "raw",
            ValueKind::Border => "border",
        })
    }
}

/// Units a [`Length`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Absolute pixels.
    Px,
    /// Relative to current font size.
    Em,
    /// Relative to root font size.
    Rem,
    /// Percentage of the reference value.
    Percent,
    /// Percentage of the viewport width.
    Vw,
    /// Percentage of the viewport height.
    Vh,
    /// The `auto` keyword. Carries no magnitude.
    Auto,
    /// The `inherit` keyword. Carries no magnitude.
    Inherit,
    /// A bare number, e.g. `line-height: 1.5`.
    Raw,
}

impl Unit {
    /// Whether lengths in this unit carry a magnitude.
    pub fn has_magnitude(self) -> bool {
        !matches!(self, Unit::Auto | Unit::Inherit)
    }

    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Percent => "%",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Auto | Unit::Inherit | Unit::Raw => "",
        }
    }
}

/// A numeric CSS value with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    magnitude: f64,
    unit: Unit,
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Length {
    /// Zero length. Serializes as a bare `0`.
    pub const ZERO: Length = Length::px(0.0);

    /// Create a length from a magnitude and unit.
    ///
    /// The magnitude is ignored for `Auto` and `Inherit`.
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Create a pixel value.
    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    /// Create an em value.
    pub const fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    /// Create a rem value.
    pub const fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    /// Create a percentage value.
    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Create a viewport-width value.
    pub const fn vw(value: f64) -> Self {
        Self::new(value, Unit::Vw)
    }

    /// Create a viewport-height value.
    pub const fn vh(value: f64) -> Self {
        Self::new(value, Unit::Vh)
    }

    /// Create a unit-less number.
    pub const fn raw(value: f64) -> Self {
        Self::new(value, Unit::Raw)
    }

    /// The `auto` keyword.
    pub const fn auto() -> Self {
        Self::new(0.0, Unit::Auto)
    }

    /// The `inherit` keyword.
    pub const fn inherit() -> Self {
        Self::new(0.0, Unit::Inherit)
    }

    /// The magnitude, or `None` for units that carry none.
    pub fn magnitude(&self) -> Option<f64> {
        self.unit.has_magnitude().then_some(self.magnitude)
    }

    /// The unit.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Check if this is a zero magnitude, whatever the unit.
    pub fn is_zero(&self) -> bool {
        self.magnitude() == Some(0.0)
    }

    /// Check that the magnitude, if any, is a finite number.
    pub fn is_finite(&self) -> bool {
        self.magnitude().is_none_or(f64::is_finite)
    }

    /// Serialize to CSS text.
    pub fn to_css(&self) -> String {
        match self.unit {
            Unit::Auto => "auto".to_string(),
            Unit::Inherit => "inherit".to_string(),
            _ if self.is_zero() => "0".to_string(),
            unit => format!("{}{}", format_number(self.magnitude), unit.suffix()),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Shortest decimal that round-trips, no exponent, `-0` folded to `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// A CSS color expression.
///
/// Function-call expressions such as `color-mix(...)` or `rgb(...)` are
/// colors, not raw values: use [`Color::function`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// The `inherit` keyword.
    Inherit,
    /// The `transparent` keyword.
    Transparent,
    /// The `currentColor` keyword.
    CurrentColor,
    /// A named color such as `red`.
    Named(String),
    /// A hex color, stored with or without the leading `#`.
    Hex(String),
    /// A color function such as `color-mix(in srgb, currentColor 50%, transparent)`.
    Function(String),
}

impl Color {
    /// Create a named color.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a hex color.
    pub fn hex(hex: impl Into<String>) -> Self {
        Self::Hex(hex.into())
    }

    /// Create an opaque hex color from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Hex(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Create a color function expression.
    pub fn function(expr: impl Into<String>) -> Self {
        Self::Function(expr.into())
    }

    /// Serialize to CSS text, or `None` for an empty expression.
    pub fn to_css(&self) -> Option<String> {
        match self {
            Color::Inherit => Some("inherit".to_string()),
            Color::Transparent => Some("transparent".to_string()),
            Color::CurrentColor => Some("currentColor".to_string()),
            Color::Named(text) | Color::Function(text) => non_empty(text),
            Color::Hex(hex) => {
                let digits = hex.trim().trim_start_matches('#');
                (!digits.is_empty()).then(|| format!("#{digits}"))
            }
        }
    }
}

/// Composite border value.
///
/// Each unset field is left out of the expansion; a border with no fields set
/// produces no declarations at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Border {
    /// Border width.
    pub width: Option<Length>,
    /// Border style.
    pub style: Option<BorderStyle>,
    /// Border color.
    pub color: Option<Color>,
}

impl Border {
    /// Create a border with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width.
    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the style.
    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.style.is_none() && self.color.is_none()
    }

    /// Serialize as the `border` shorthand (`1px solid red`).
    pub fn to_css(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.width.map(|w| w.to_css()),
            self.style.map(|s| s.as_css().to_string()),
            self.color.as_ref().and_then(Color::to_css),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_formats_without_trailing_zeros() {
        assert_eq!(Length::px(1.0).to_css(), "1px");
        assert_eq!(Length::em(0.5).to_css(), "0.5em");
        assert_eq!(Length::rem(0.125).to_css(), "0.125rem");
        assert_eq!(Length::percent(80.0).to_css(), "80%");
        assert_eq!(Length::em(-0.25).to_css(), "-0.25em");
        assert_eq!(Length::raw(1.5).to_css(), "1.5");
    }

    #[test]
    fn length_keeps_caller_precision() {
        assert_eq!(Length::percent(33.333333).to_css(), "33.333333%");
        assert_eq!(Length::px(16777217.0).to_css(), "16777217px");
        assert_eq!(Length::raw(2147483647.0).to_css(), "2147483647");
        assert_eq!(Length::em(0.1).to_css(), "0.1em");
        assert_eq!(Length::rem(1234567.8).to_css(), "1234567.8rem");
    }

    #[test]
    fn zero_length_drops_unit() {
        for unit in [Unit::Px, Unit::Em, Unit::Rem, Unit::Percent, Unit::Vw, Unit::Vh, Unit::Raw] {
            assert_eq!(Length::new(0.0, unit).to_css(), "0");
            assert_eq!(Length::new(-0.0, unit).to_css(), "0");
        }
        assert_eq!(Length::ZERO.to_css(), "0");
    }

    #[test]
    fn keyword_units_ignore_magnitude() {
        assert_eq!(Length::auto().to_css(), "auto");
        assert_eq!(Length::new(12.0, Unit::Inherit).to_css(), "inherit");
        assert_eq!(Length::auto().magnitude(), None);
        assert!(!Length::auto().is_zero());
    }

    #[test]
    fn non_finite_magnitude_detected() {
        assert!(!Length::px(f64::NAN).is_finite());
        assert!(!Length::em(f64::INFINITY).is_finite());
        assert!(Length::new(f64::NAN, Unit::Auto).is_finite());
    }

    #[test]
    fn empty_values_are_omitted() {
        assert_eq!(Value::keyword("").to_css(), None);
        assert_eq!(Value::raw("   ").to_css(), None);
        assert_eq!(Color::named("").to_css(), None);
        assert_eq!(Color::hex("#").to_css(), None);
        assert_eq!(Value::Border(Border::new()).to_css(), None);
    }

    #[test]
    fn color_serialization() {
        assert_eq!(Color::Inherit.to_css().as_deref(), Some("inherit"));
        assert_eq!(Color::CurrentColor.to_css().as_deref(), Some("currentColor"));
        assert_eq!(Color::hex("fff").to_css().as_deref(), Some("#fff"));
        assert_eq!(Color::rgb(255, 0, 0).to_css().as_deref(), Some("#ff0000"));
        assert_eq!(
            Color::function("color-mix(in srgb, currentColor 50%, transparent)")
                .to_css()
                .as_deref(),
            Some("color-mix(in srgb, currentColor 50%, transparent)")
        );
    }

    #[test]
    fn border_shorthand() {
        let border = Border::new().width(Length::px(1.0)).style(BorderStyle::Solid);
        assert_eq!(border.to_css().as_deref(), Some("1px solid"));
        assert!(Border::new().is_empty());
    }
}
