//! Property slots and the table mapping each slot to its CSS definition.

use std::fmt;
use std::str::FromStr;

use crate::types::ValueKind;
use crate::{Error, Result};

/// The kind of value a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Keyword-valued property.
    Keyword,
    /// Length- or number-valued property.
    Length,
    /// Color-valued property.
    Color,
    /// Composite border property, expanded into several declarations.
    Border,
}

impl SlotKind {
    /// Check whether a value of `kind` may be assigned to a slot of this kind.
    ///
    /// Primitive slots also take keywords (for `inherit`, `initial` and the
    /// like) and raw text. Composite slots take only their own value kind.
    pub fn accepts(self, kind: ValueKind) -> bool {
        match self {
            SlotKind::Keyword => matches!(kind, ValueKind::Keyword | ValueKind::Raw),
            SlotKind::Length => {
                matches!(kind, ValueKind::Length | ValueKind::Keyword | ValueKind::Raw)
            }
            SlotKind::Color => {
                matches!(kind, ValueKind::Color | ValueKind::Keyword | ValueKind::Raw)
            }
            SlotKind::Border => kind == ValueKind::Border,
        }
    }

    /// Check if slots of this kind expand into several declarations.
    pub fn is_composite(self) -> bool {
        matches!(self, SlotKind::Border)
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotKind::Keyword => "keyword",
            SlotKind::Length => "length",
            SlotKind::Color => "color",
            SlotKind::Border => "border",
        })
    }
}

/// Schema entry for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDef {
    /// CSS property name. For composites, the shorthand name.
    pub name: &'static str,
    /// Accepted value kind.
    pub kind: SlotKind,
}

macro_rules! property_slots {
    ( $( $variant:ident => $name:literal : $kind:ident ),+ $(,)? ) => {
        /// A typed property slot.
        ///
        /// Variants are declared in canonical emission order, and the derived
        /// `Ord` follows it: a rule's typed declarations are always written
        /// in this order regardless of the order they were set in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum PropertySlot {
            $( $variant ),+
        }

        impl PropertySlot {
            /// Every slot, in canonical order.
            pub const ALL: &'static [PropertySlot] = &[ $( PropertySlot::$variant ),+ ];

            /// The schema entry for this slot.
            pub const fn def(self) -> SlotDef {
                match self {
                    $( PropertySlot::$variant => SlotDef { name: $name, kind: SlotKind::$kind } ),+
                }
            }
        }
    };
}

property_slots! {
    Appearance => "appearance": Keyword,
    BackgroundColor => "background-color": Color,
    Border => "border": Border,
    BorderCollapse => "border-collapse": Keyword,
    BorderColor => "border-color": Color,
    BorderRadius => "border-radius": Length,
    BorderStyle => "border-style": Keyword,
    BorderWidth => "border-width": Length,
    Bottom => "bottom": Length,
    BoxSizing => "box-sizing": Keyword,
    Color => "color": Color,
    Cursor => "cursor": Keyword,
    Display => "display": Keyword,
    FontFamily => "font-family": Keyword,
    FontSize => "font-size": Length,
    FontStyle => "font-style": Keyword,
    FontWeight => "font-weight": Keyword,
    Height => "height": Length,
    Left => "left": Length,
    LetterSpacing => "letter-spacing": Length,
    LineHeight => "line-height": Length,
    ListStylePosition => "list-style-position": Keyword,
    ListStyleType => "list-style-type": Keyword,
    Margin => "margin": Length,
    MaxHeight => "max-height": Length,
    MaxWidth => "max-width": Length,
    MinHeight => "min-height": Length,
    MinWidth => "min-width": Length,
    Opacity => "opacity": Length,
    Padding => "padding": Length,
    Position => "position": Keyword,
    Right => "right": Length,
    TextAlign => "text-align": Keyword,
    TextDecorationColor => "text-decoration-color": Color,
    TextDecorationLine => "text-decoration-line": Keyword,
    TextDecorationStyle => "text-decoration-style": Keyword,
    TextIndent => "text-indent": Length,
    Top => "top": Length,
    VerticalAlign => "vertical-align": Keyword,
    Width => "width": Length,
    ZIndex => "z-index": Length,
}

impl PropertySlot {
    /// CSS property name.
    pub const fn name(self) -> &'static str {
        self.def().name
    }

    /// Accepted value kind.
    pub const fn kind(self) -> SlotKind {
        self.def().kind
    }
}

impl fmt::Display for PropertySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertySlot {
    type Err = Error;

    /// Look up a slot by CSS property name.
    fn from_str(name: &str) -> Result<Self> {
        PropertySlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.name() == name)
            .ok_or_else(|| Error::schema_mismatch(name))
    }
}
