//! Error types for stylesheet construction and compilation.

use crate::schema::SlotKind;
use crate::types::ValueKind;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or compiling a stylesheet.
///
/// Every variant is fatal for the compile call that produced it: no partial
/// CSS is returned alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A property name has no registered slot in the schema.
    #[error("Unknown property '{name}': no slot is registered for it")]
    SchemaMismatch { name: String },

    /// A custom property name is not a single CSS identifier.
    #[error("Invalid custom property name '{name}'")]
    InvalidCustomPropertyName { name: String },

    /// A value's kind is not accepted by the slot it was assigned to.
    #[error("Type mismatch for property '{property}': expected {expected}, found {found}")]
    TypeMismatch {
        property: &'static str,
        expected: SlotKind,
        found: ValueKind,
    },

    /// A value of the right kind that cannot be expressed as CSS.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// A rule was built with an empty selector.
    #[error("Rule {index} has an empty selector")]
    EmptySelector { index: usize },

    /// The output sink refused a write.
    #[error("Failed to write CSS output: {0}")]
    Write(#[from] std::fmt::Error),
}

impl Error {
    /// Create a schema mismatch error.
    pub fn schema_mismatch(name: impl Into<String>) -> Self {
        Self::SchemaMismatch { name: name.into() }
    }

    /// Create an invalid custom property name error.
    pub fn invalid_custom_property_name(name: impl Into<String>) -> Self {
        Self::InvalidCustomPropertyName { name: name.into() }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(property: &'static str, expected: SlotKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            property,
            expected,
            found,
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
