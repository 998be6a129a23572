//! Declaration-order schema construction.

use smallvec::SmallVec;

use crate::error::SchemaError;
use crate::kind::FieldKind;
use crate::schema::StructSchema;

/// Builder collecting named fields in declaration order.
///
/// Offsets are assigned at [`SchemaBuilder::build`] by tight packing: each
/// field starts where the previous one ends, with no alignment padding.
/// Duplicate names are rejected at build time.
#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    fields: SmallVec<[(String, FieldKind); 8]>,
}

impl SchemaBuilder {
    /// Start an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    fn add(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push((name.into(), kind));
        self
    }

    /// Append a 1-byte signed integer field.
    pub fn add_byte(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Byte)
    }

    /// Append a 2-byte signed integer field.
    pub fn add_short(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Short)
    }

    /// Append a 4-byte signed integer field.
    pub fn add_int(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Int)
    }

    /// Append an 8-byte signed integer field.
    pub fn add_long(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Long)
    }

    /// Append a 2-byte UTF-16 code unit field.
    pub fn add_char(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Char)
    }

    /// Append a 1-byte boolean field.
    pub fn add_bool(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Bool)
    }

    /// Append a 4-byte IEEE-754 single field.
    pub fn add_float(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Float)
    }

    /// Append an 8-byte IEEE-754 double field.
    pub fn add_double(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Double)
    }

    /// Append an 8-byte reference to another record.
    pub fn add_struct(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Pointer)
    }

    /// Append an 8-byte reference to a vector block.
    pub fn add_array(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Pointer)
    }

    /// Append an 8-byte untyped block reference.
    pub fn add_pointer(self, name: impl Into<String>) -> Self {
        self.add(name, FieldKind::Pointer)
    }

    /// Finalize the field list into an immutable schema.
    pub fn build(self) -> Result<StructSchema, SchemaError> {
        StructSchema::from_declarations(self.fields)
    }
}
