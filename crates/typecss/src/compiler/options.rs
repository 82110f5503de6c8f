//! Compiler configuration.

/// Text layout of the compiled CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// `selector{name:value;}` with no whitespace and nothing between rules.
    #[default]
    Compact,
    /// One declaration per line, two-space indent, blank line between rules.
    Pretty,
}

/// Options controlling a compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Output layout.
    pub format: OutputFormat,
    /// Reject custom properties whose name is not a single CSS identifier.
    pub validate_custom_properties: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Compact,
            validate_custom_properties: true,
        }
    }
}

impl CompileOptions {
    /// Default options: compact output, custom property names validated.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Pretty-printed output, custom property names validated.
    pub fn pretty() -> Self {
        Self::default().with_format(OutputFormat::Pretty)
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable custom property name validation.
    pub fn with_custom_property_validation(mut self, enabled: bool) -> Self {
        self.validate_custom_properties = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CompileOptions::default();
        assert_eq!(options.format, OutputFormat::Compact);
        assert!(options.validate_custom_properties);
        assert_eq!(options, CompileOptions::compact());
    }

    #[test]
    fn chained_setters() {
        let options = CompileOptions::pretty().with_custom_property_validation(false);
        assert_eq!(options.format, OutputFormat::Pretty);
        assert!(!options.validate_custom_properties);
    }
}
