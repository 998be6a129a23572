//! Schema construction and field access errors.

use std::error::Error;
use std::fmt;

use crate::kind::FieldKind;

/// Errors detected when finalizing a schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields were declared under the same name.
    DuplicateField {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { name } => {
                write!(f, "duplicate field name '{name}'")
            }
        }
    }
}

impl Error for SchemaError {}

/// Errors from accessing a record field by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// No field with the given name exists in the schema.
    Unknown {
        /// The requested name.
        name: String,
    },
    /// The accessor's kind differs from the field's declared kind.
    TypeMismatch {
        /// The requested name.
        name: String,
        /// The kind the accessor expected.
        expected: FieldKind,
        /// The kind the field was declared with.
        actual: FieldKind,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown field '{name}'"),
            Self::TypeMismatch {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "field '{name}' is declared {actual}, accessed as {expected}"
                )
            }
        }
    }
}

impl Error for FieldError {}
