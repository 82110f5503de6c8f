//! Typed stylesheet construction and deterministic CSS compilation.
//!
//! This crate lets you describe CSS rules as strongly-typed data and compile
//! them into CSS text, featuring:
//!
//! - **Typed values**: lengths with units, colors, keyword enums, raw escapes
//! - **Property schema**: a closed set of slots, each with a CSS name and an
//!   accepted value kind, including composites that expand into several
//!   declarations
//! - **Custom properties**: schema-free `name: value` pairs for vendor
//!   prefixes and anything not yet modeled
//! - **Deterministic output**: rule order preserved, declarations in a fixed
//!   order, byte-identical results for identical input
//!
//! # Example
//!
//! ```
//! use typecss::prelude::*;
//!
//! let mut sheet = Stylesheet::new();
//! sheet.push(Rule::new(
//!     "*,::after,::before",
//!     Style::new()
//!         .border(Border::new().width(scale::SIZE_0).style(BorderStyle::Solid))
//!         .box_sizing(BoxSizing::BorderBox),
//! ));
//! sheet.push(Rule::bare("textarea").custom_prop("resize", "vertical"));
//!
//! let css = compile(&sheet)?;
//! assert_eq!(
//!     css,
//!     "*,::after,::before{border-width:0;border-style:solid;box-sizing:border-box;}\
//!      textarea{resize:vertical;}"
//! );
//! # Ok::<(), typecss::Error>(())
//! ```

pub mod compiler;
pub mod rules;
pub mod schema;
pub mod style;
pub mod types;

mod error;

pub use compiler::{CompileOptions, Compiler, OutputFormat, compile, compile_with};
pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::compiler::{CompileOptions, Compiler, OutputFormat, compile, compile_with};
    pub use crate::rules::{CustomProp, Rule, Stylesheet};
    pub use crate::schema::PropertySlot;
    pub use crate::style::{Props, Style};
    pub use crate::types::{
        Appearance, Border, BorderCollapse, BorderStyle, BoxSizing, Color, Cursor, Display,
        FontFamily, FontStyle, FontWeight, Length, ListStylePosition, ListStyleType, Position,
        TextAlign, TextDecorationLine, TextDecorationStyle, Unit, Value, VerticalAlign, scale,
    };
}
