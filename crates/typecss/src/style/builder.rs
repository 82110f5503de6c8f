//! Type-safe style builder DSL.

use super::Props;
use crate::schema::PropertySlot;
use crate::types::{
    Appearance, Border, BorderCollapse, BorderStyle, BoxSizing, Color, Cursor, Display,
    FontFamily, FontStyle, FontWeight, Length, ListStylePosition, ListStyleType, Position,
    TextAlign, TextDecorationLine, TextDecorationStyle, Value, VerticalAlign,
};

/// Builder for creating property sets with a fluent API.
///
/// Each typed setter only takes the value kind its slot accepts, so a color
/// cannot be handed to `height` through this API. Keyword escapes and raw
/// text go through [`Style::set`].
///
/// # Example
///
/// ```
/// use typecss::prelude::*;
///
/// let props = Style::new()
///     .color(Color::Inherit)
///     .height(Length::ZERO)
///     .set(PropertySlot::FontWeight, Value::keyword("inherit"))
///     .build();
///
/// assert_eq!(props.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    props: Props,
}

impl Style {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final property set.
    pub fn build(self) -> Props {
        self.props
    }

    /// Assign any value to a slot. The slot's kind is checked at compile time
    /// of the stylesheet.
    pub fn set(mut self, slot: PropertySlot, value: impl Into<Value>) -> Self {
        self.props.set(slot, value);
        self
    }

    /// Set a slot to `inherit`.
    pub fn inherit(self, slot: PropertySlot) -> Self {
        self.set(slot, Value::inherit())
    }

    // === Box Model ===

    /// Set margin.
    pub fn margin(self, value: Length) -> Self {
        self.set(PropertySlot::Margin, value)
    }

    /// Set padding.
    pub fn padding(self, value: Length) -> Self {
        self.set(PropertySlot::Padding, value)
    }

    /// Set box sizing.
    pub fn box_sizing(self, value: BoxSizing) -> Self {
        self.set(PropertySlot::BoxSizing, value)
    }

    /// Set the composite border.
    pub fn border(self, value: Border) -> Self {
        self.set(PropertySlot::Border, value)
    }

    /// Set border width.
    pub fn border_width(self, value: Length) -> Self {
        self.set(PropertySlot::BorderWidth, value)
    }

    /// Set border style.
    pub fn border_style(self, value: BorderStyle) -> Self {
        self.set(PropertySlot::BorderStyle, value)
    }

    /// Set border color.
    pub fn border_color(self, value: Color) -> Self {
        self.set(PropertySlot::BorderColor, value)
    }

    /// Set border radius.
    pub fn border_radius(self, value: Length) -> Self {
        self.set(PropertySlot::BorderRadius, value)
    }

    /// Set the table border model.
    pub fn border_collapse(self, value: BorderCollapse) -> Self {
        self.set(PropertySlot::BorderCollapse, value)
    }

    // === Size Constraints ===

    /// Set explicit width.
    pub fn width(self, value: Length) -> Self {
        self.set(PropertySlot::Width, value)
    }

    /// Set explicit height.
    pub fn height(self, value: Length) -> Self {
        self.set(PropertySlot::Height, value)
    }

    /// Set minimum width.
    pub fn min_width(self, value: Length) -> Self {
        self.set(PropertySlot::MinWidth, value)
    }

    /// Set minimum height.
    pub fn min_height(self, value: Length) -> Self {
        self.set(PropertySlot::MinHeight, value)
    }

    /// Set maximum width.
    pub fn max_width(self, value: Length) -> Self {
        self.set(PropertySlot::MaxWidth, value)
    }

    /// Set maximum height.
    pub fn max_height(self, value: Length) -> Self {
        self.set(PropertySlot::MaxHeight, value)
    }

    // === Layout ===

    /// Set display type.
    pub fn display(self, value: Display) -> Self {
        self.set(PropertySlot::Display, value)
    }

    /// Set positioning scheme.
    pub fn position(self, value: Position) -> Self {
        self.set(PropertySlot::Position, value)
    }

    /// Set top offset.
    pub fn top(self, value: Length) -> Self {
        self.set(PropertySlot::Top, value)
    }

    /// Set right offset.
    pub fn right(self, value: Length) -> Self {
        self.set(PropertySlot::Right, value)
    }

    /// Set bottom offset.
    pub fn bottom(self, value: Length) -> Self {
        self.set(PropertySlot::Bottom, value)
    }

    /// Set left offset.
    pub fn left(self, value: Length) -> Self {
        self.set(PropertySlot::Left, value)
    }

    /// Set stacking order.
    pub fn z_index(self, value: i32) -> Self {
        self.set(PropertySlot::ZIndex, Length::raw(f64::from(value)))
    }

    /// Set vertical alignment.
    pub fn vertical_align(self, value: VerticalAlign) -> Self {
        self.set(PropertySlot::VerticalAlign, value)
    }

    // === Typography ===

    /// Set font family.
    pub fn font_family(self, value: FontFamily) -> Self {
        self.set(PropertySlot::FontFamily, value)
    }

    /// Set font size.
    pub fn font_size(self, value: Length) -> Self {
        self.set(PropertySlot::FontSize, value)
    }

    /// Set font style.
    pub fn font_style(self, value: FontStyle) -> Self {
        self.set(PropertySlot::FontStyle, value)
    }

    /// Set font weight.
    pub fn font_weight(self, value: FontWeight) -> Self {
        self.set(PropertySlot::FontWeight, value)
    }

    /// Set line height. Use [`Length::raw`] for a multiplier.
    pub fn line_height(self, value: Length) -> Self {
        self.set(PropertySlot::LineHeight, value)
    }

    /// Set letter spacing.
    pub fn letter_spacing(self, value: Length) -> Self {
        self.set(PropertySlot::LetterSpacing, value)
    }

    /// Set text color.
    pub fn color(self, value: Color) -> Self {
        self.set(PropertySlot::Color, value)
    }

    /// Set text alignment.
    pub fn text_align(self, value: TextAlign) -> Self {
        self.set(PropertySlot::TextAlign, value)
    }

    /// Set text indent.
    pub fn text_indent(self, value: Length) -> Self {
        self.set(PropertySlot::TextIndent, value)
    }

    /// Set text decoration line.
    pub fn text_decoration_line(self, value: TextDecorationLine) -> Self {
        self.set(PropertySlot::TextDecorationLine, value)
    }

    /// Set text decoration style.
    pub fn text_decoration_style(self, value: TextDecorationStyle) -> Self {
        self.set(PropertySlot::TextDecorationStyle, value)
    }

    /// Set text decoration color.
    pub fn text_decoration_color(self, value: Color) -> Self {
        self.set(PropertySlot::TextDecorationColor, value)
    }

    /// Set list marker type.
    pub fn list_style_type(self, value: ListStyleType) -> Self {
        self.set(PropertySlot::ListStyleType, value)
    }

    /// Set list marker position.
    pub fn list_style_position(self, value: ListStylePosition) -> Self {
        self.set(PropertySlot::ListStylePosition, value)
    }

    // === Background & Effects ===

    /// Set background color.
    pub fn background_color(self, value: Color) -> Self {
        self.set(PropertySlot::BackgroundColor, value)
    }

    /// Set opacity. The value is emitted as given; CSS clamps it to 0.0-1.0.
    pub fn opacity(self, value: f64) -> Self {
        self.set(PropertySlot::Opacity, Length::raw(value))
    }

    // === Interaction ===

    /// Set cursor style.
    pub fn cursor(self, value: Cursor) -> Self {
        self.set(PropertySlot::Cursor, value)
    }

    /// Set native control appearance.
    pub fn appearance(self, value: Appearance) -> Self {
        self.set(PropertySlot::Appearance, value)
    }
}

impl From<Style> for Props {
    fn from(style: Style) -> Self {
        style.build()
    }
}
