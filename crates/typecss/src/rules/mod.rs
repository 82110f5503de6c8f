//! Style rules and stylesheets.

mod rule;
mod stylesheet;

pub use rule::{CustomProp, Rule, is_valid_property_name};
pub use stylesheet::Stylesheet;
