//! Typed property sets and the builder DSL.

mod builder;
mod properties;

pub use builder::Style;
pub use properties::Props;
