//! Value model: typed CSS values and keyword enumerations.

mod keywords;
pub mod scale;
mod value;

pub use keywords::{
    Appearance, BorderCollapse, BorderStyle, BoxSizing, Cursor, Display, FontFamily, FontStyle,
    FontWeight, ListStylePosition, ListStyleType, Position, TextAlign, TextDecorationLine,
    TextDecorationStyle, VerticalAlign,
};
pub use value::{Border, Color, Length, Unit, Value, ValueKind};
