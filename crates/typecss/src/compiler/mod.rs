//! Stylesheet compilation to CSS text.
//!
//! Compilation is a pure function of the stylesheet and the options:
//! identical input always yields byte-identical output.
//!
//! Per rule, in stylesheet order:
//! 1. Typed properties are resolved through the schema in canonical slot
//!    order. Composites are flattened in place; omitted values are skipped.
//! 2. Custom properties follow, verbatim, in insertion order.
//! 3. The rule is emitted, even when it has no declarations.
//!
//! Every rule is resolved before anything is written, so an error leaves
//! the output sink untouched.
//!
//! # Example
//!
//! ```
//! use typecss::prelude::*;
//!
//! let sheet = Stylesheet::new().with_rule(
//!     Rule::new("hr", Style::new().color(Color::Inherit).height(Length::ZERO))
//!         .custom_prop("border-top-width", "1px"),
//! );
//!
//! assert_eq!(compile(&sheet)?, "hr{color:inherit;height:0;border-top-width:1px;}");
//! # Ok::<(), typecss::Error>(())
//! ```

mod options;

use std::fmt::{self, Write};

pub use options::{CompileOptions, OutputFormat};

use crate::rules::{Rule, Stylesheet};
use crate::schema::{self, Declaration};
use crate::{Error, Result};

/// Compile a stylesheet with the default options.
pub fn compile(sheet: &Stylesheet) -> Result<String> {
    Compiler::default().compile(sheet)
}

/// Compile a stylesheet with the given options.
pub fn compile_with(sheet: &Stylesheet, options: &CompileOptions) -> Result<String> {
    Compiler::new(options.clone()).compile(sheet)
}

/// A stylesheet compiler.
///
/// Holds only immutable options, so one compiler can be shared across
/// threads and reused for any number of stylesheets.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

/// A rule with all of its declarations resolved.
struct ResolvedRule<'a> {
    selector: &'a str,
    declarations: Vec<Declaration<'a>>,
}

impl Compiler {
    /// Create a compiler with the given options.
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// The compiler's options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a stylesheet to a new string.
    pub fn compile(&self, sheet: &Stylesheet) -> Result<String> {
        let mut css = String::new();
        self.write_to(sheet, &mut css)?;
        Ok(css)
    }

    /// Compile a stylesheet into `out`.
    ///
    /// Nothing is written if any rule fails to resolve.
    pub fn write_to<W: Write + ?Sized>(&self, sheet: &Stylesheet, out: &mut W) -> Result<()> {
        tracing::debug!(
            rules = sheet.len(),
            format = ?self.options.format,
            "compiling stylesheet"
        );

        let resolved = sheet
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                self.resolve_rule(index, rule).inspect_err(|e| {
                    tracing::warn!(
                        index,
                        selector = %rule.selector,
                        error = %e,
                        "rule failed to compile"
                    );
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut declarations = 0;
        for (index, rule) in resolved.iter().enumerate() {
            self.emit(index, rule, out)?;
            declarations += rule.declarations.len();
        }

        tracing::debug!(rules = resolved.len(), declarations, "compiled stylesheet");
        Ok(())
    }

    fn resolve_rule<'a>(&self, index: usize, rule: &'a Rule) -> Result<ResolvedRule<'a>> {
        if rule.selector.trim().is_empty() {
            return Err(Error::EmptySelector { index });
        }

        let mut declarations = Vec::with_capacity(rule.props.len() + rule.custom_props.len());

        for (slot, value) in rule.props.iter() {
            declarations.extend(schema::resolve(slot, value)?);
        }

        for custom in &rule.custom_props {
            if self.options.validate_custom_properties {
                custom.validate()?;
            }
            declarations.push(Declaration::new(&custom.name, custom.value.as_str()));
        }

        Ok(ResolvedRule {
            selector: &rule.selector,
            declarations,
        })
    }

    fn emit<W: Write + ?Sized>(
        &self,
        index: usize,
        rule: &ResolvedRule<'_>,
        out: &mut W,
    ) -> fmt::Result {
        match self.options.format {
            OutputFormat::Compact => {
                write!(out, "{}{{", rule.selector)?;
                for declaration in &rule.declarations {
                    write!(out, "{}:{};", declaration.name, declaration.value)?;
                }
                out.write_char('}')
            }
            OutputFormat::Pretty => {
                if index > 0 {
                    out.write_char('\n')?;
                }
                if rule.declarations.is_empty() {
                    return writeln!(out, "{} {{}}", rule.selector);
                }
                writeln!(out, "{} {{", rule.selector)?;
                for declaration in &rule.declarations {
                    writeln!(out, "  {}: {};", declaration.name, declaration.value)?;
                }
                writeln!(out, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PropertySlot;
    use crate::style::Style;
    use crate::types::{Border, BorderStyle, Color, Display, Length, Value};

    fn hr_rule() -> Rule {
        Rule::new("hr", Style::new().color(Color::Inherit).height(Length::ZERO))
            .custom_prop("border-top-width", "1px")
    }

    #[test]
    fn compact_single_rule() {
        let sheet = Stylesheet::new().with_rule(hr_rule());
        assert_eq!(
            compile(&sheet).unwrap(),
            "hr{color:inherit;height:0;border-top-width:1px;}"
        );
    }

    #[test]
    fn pretty_single_rule() {
        let sheet = Stylesheet::new().with_rule(hr_rule());
        assert_eq!(
            compile_with(&sheet, &CompileOptions::pretty()).unwrap(),
            "hr {\n  color: inherit;\n  height: 0;\n  border-top-width: 1px;\n}\n"
        );
    }

    #[test]
    fn pretty_separates_rules() {
        let sheet = Stylesheet::new()
            .with_rule(Rule::bare("a"))
            .with_rule(Rule::new("b", Style::new().display(Display::Block)));
        assert_eq!(
            compile_with(&sheet, &CompileOptions::pretty()).unwrap(),
            "a {}\n\nb {\n  display: block;\n}\n"
        );
    }

    #[test]
    fn typed_order_is_canonical_not_insertion() {
        let a = Style::new().height(Length::ZERO).color(Color::Inherit);
        let b = Style::new().color(Color::Inherit).height(Length::ZERO);
        let first = compile(&Stylesheet::new().with_rule(Rule::new("x", a))).unwrap();
        let second = compile(&Stylesheet::new().with_rule(Rule::new("x", b))).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "x{color:inherit;height:0;}");
    }

    #[test]
    fn custom_prop_follows_typed_prop() {
        let rule = Rule::new("[hidden]", Style::new().display(Display::Block))
            .custom_prop("display", "none !important");
        let css = compile(&Stylesheet::new().with_rule(rule)).unwrap();
        assert_eq!(css, "[hidden]{display:block;display:none !important;}");
    }

    #[test]
    fn empty_rule_still_emitted() {
        let sheet = Stylesheet::new()
            .with_rule(Rule::bare("a"))
            .with_rule(Rule::new("b", Style::new().border(Border::new())));
        assert_eq!(compile(&sheet).unwrap(), "a{}b{}");
    }

    #[test]
    fn composite_flattened_in_place() {
        let style = Style::new()
            .border(Border::new().width(Length::ZERO).style(BorderStyle::Solid))
            .box_sizing(crate::types::BoxSizing::BorderBox)
            .appearance(crate::types::Appearance::Button);
        let css = compile(&Stylesheet::new().with_rule(Rule::new("*", style))).unwrap();
        assert_eq!(
            css,
            "*{appearance:button;border-width:0;border-style:solid;box-sizing:border-box;}"
        );
    }

    #[test]
    fn empty_selector_rejected() {
        let sheet = Stylesheet::new()
            .with_rule(Rule::bare("a"))
            .with_rule(Rule::bare("  "));
        assert_eq!(compile(&sheet), Err(Error::EmptySelector { index: 1 }));
    }

    #[test]
    fn type_mismatch_fails_whole_compile() {
        let sheet = Stylesheet::new()
            .with_rule(hr_rule())
            .with_rule(Rule::new(
                "p",
                Style::new().set(PropertySlot::Height, Color::Inherit),
            ));

        let mut out = String::new();
        let err = Compiler::default().write_to(&sheet, &mut out).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { property: "height", .. }));
        assert!(out.is_empty(), "no partial CSS on error");
    }

    #[test]
    fn invalid_custom_name_rejected_unless_disabled() {
        let sheet = Stylesheet::new().with_rule(Rule::bare("a").custom_prop("bad name", "1"));

        assert_eq!(
            compile(&sheet),
            Err(Error::invalid_custom_property_name("bad name"))
        );

        let lenient = CompileOptions::default().with_custom_property_validation(false);
        assert_eq!(compile_with(&sheet, &lenient).unwrap(), "a{bad name:1;}");
    }

    #[test]
    fn omitted_values_are_skipped() {
        let style = Style::new()
            .set(PropertySlot::FontWeight, Value::keyword(""))
            .color(Color::named(""))
            .display(Display::Flex);
        let css = compile(&Stylesheet::new().with_rule(Rule::new("p", style))).unwrap();
        assert_eq!(css, "p{display:flex;}");
    }

    #[test]
    fn repeated_compiles_are_identical() {
        let sheet = Stylesheet::new().with_rule(hr_rule()).with_rule(hr_rule());
        let compiler = Compiler::new(CompileOptions::pretty());
        assert_eq!(compiler.compile(&sheet).unwrap(), compiler.compile(&sheet).unwrap());
    }
}
