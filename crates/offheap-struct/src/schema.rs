//! The immutable schema, its record handle, and the typed accessors.

use indexmap::IndexMap;
use smallvec::SmallVec;

use offheap_core::{AllocError, Block, BlockAddr};

use crate::error::{FieldError, SchemaError};
use crate::kind::FieldKind;

/// One declared field: its kind and resolved byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    kind: FieldKind,
    offset: usize,
}

impl Field {
    /// The field's declared kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Byte offset from the start of the record block.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte width, fixed by the kind.
    pub fn width(&self) -> usize {
        self.kind.width()
    }
}

/// Owned handle to one record block of a schema.
///
/// The handle owns exactly `schema.size()` bytes and is freed once, by
/// [`StructSchema::free`] consuming it. Reference fields inside the block
/// hold bare [`BlockAddr`]s — freeing the record never touches the blocks
/// those addresses point at.
#[must_use]
pub struct StructHandle {
    block: Block,
}

impl StructHandle {
    /// The block's address in its opaque integer form.
    pub fn addr(&self) -> BlockAddr {
        self.block.addr()
    }
}

/// Ordered, immutable table of named, typed, fixed-offset fields.
///
/// The table is an `IndexMap` so iteration follows declaration order, which
/// is also the packing order. One schema allocates any number of records;
/// the schema itself holds no record state.
#[derive(Clone, Debug)]
pub struct StructSchema {
    fields: IndexMap<String, Field>,
    size: usize,
}

impl StructSchema {
    /// Resolve declarations into offsets. Called by
    /// [`SchemaBuilder::build`](crate::SchemaBuilder::build).
    pub(crate) fn from_declarations(
        declarations: SmallVec<[(String, FieldKind); 8]>,
    ) -> Result<Self, SchemaError> {
        let mut fields = IndexMap::with_capacity(declarations.len());
        let mut offset = 0usize;
        for (name, kind) in declarations {
            let field = Field { kind, offset };
            if fields.insert(name.clone(), field).is_some() {
                return Err(SchemaError::DuplicateField { name });
            }
            offset += kind.width();
        }
        Ok(Self {
            fields,
            size: offset,
        })
    }

    /// Total record width in bytes: the sum of all field widths.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Whether a field with this name is declared.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Byte offset of the named field, if declared.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.fields.get(name).map(Field::offset)
    }

    /// Iterate over fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Allocate a zero-filled record of [`StructSchema::size`] bytes.
    ///
    /// Zero fill gives every scalar field 0/false and every reference field
    /// [`BlockAddr::NULL`].
    pub fn allocate(&self) -> Result<StructHandle, AllocError> {
        Ok(StructHandle {
            block: Block::allocate(self.size)?,
        })
    }

    /// Release the record block. Referenced blocks are untouched.
    pub fn free(&self, handle: StructHandle) {
        handle.block.release();
    }

    fn field(&self, name: &str, expected: FieldKind) -> Result<Field, FieldError> {
        let field = self.fields.get(name).ok_or_else(|| FieldError::Unknown {
            name: name.to_string(),
        })?;
        if field.kind != expected {
            return Err(FieldError::TypeMismatch {
                name: name.to_string(),
                expected,
                actual: field.kind,
            });
        }
        Ok(*field)
    }

    /// Read a byte field.
    pub fn get_byte(&self, handle: &StructHandle, name: &str) -> Result<i8, FieldError> {
        let field = self.field(name, FieldKind::Byte)?;
        Ok(handle.block.read_i8(field.offset))
    }

    /// Write a byte field.
    pub fn set_byte(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: i8,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Byte)?;
        handle.block.write_i8(field.offset, value);
        Ok(())
    }

    /// Read a short field.
    pub fn get_short(&self, handle: &StructHandle, name: &str) -> Result<i16, FieldError> {
        let field = self.field(name, FieldKind::Short)?;
        Ok(handle.block.read_i16(field.offset))
    }

    /// Write a short field.
    pub fn set_short(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: i16,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Short)?;
        handle.block.write_i16(field.offset, value);
        Ok(())
    }

    /// Read an int field.
    pub fn get_int(&self, handle: &StructHandle, name: &str) -> Result<i32, FieldError> {
        let field = self.field(name, FieldKind::Int)?;
        Ok(handle.block.read_i32(field.offset))
    }

    /// Write an int field.
    pub fn set_int(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: i32,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Int)?;
        handle.block.write_i32(field.offset, value);
        Ok(())
    }

    /// Read a long field.
    pub fn get_long(&self, handle: &StructHandle, name: &str) -> Result<i64, FieldError> {
        let field = self.field(name, FieldKind::Long)?;
        Ok(handle.block.read_i64(field.offset))
    }

    /// Write a long field.
    pub fn set_long(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: i64,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Long)?;
        handle.block.write_i64(field.offset, value);
        Ok(())
    }

    /// Read a char field (UTF-16 code unit).
    pub fn get_char(&self, handle: &StructHandle, name: &str) -> Result<u16, FieldError> {
        let field = self.field(name, FieldKind::Char)?;
        Ok(handle.block.read_u16(field.offset))
    }

    /// Write a char field (UTF-16 code unit).
    pub fn set_char(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: u16,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Char)?;
        handle.block.write_u16(field.offset, value);
        Ok(())
    }

    /// Read a bool field.
    pub fn get_bool(&self, handle: &StructHandle, name: &str) -> Result<bool, FieldError> {
        let field = self.field(name, FieldKind::Bool)?;
        Ok(handle.block.read_u8(field.offset) != 0)
    }

    /// Write a bool field.
    pub fn set_bool(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: bool,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Bool)?;
        handle.block.write_u8(field.offset, u8::from(value));
        Ok(())
    }

    /// Read a float field.
    pub fn get_float(&self, handle: &StructHandle, name: &str) -> Result<f32, FieldError> {
        let field = self.field(name, FieldKind::Float)?;
        Ok(handle.block.read_f32(field.offset))
    }

    /// Write a float field.
    pub fn set_float(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: f32,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Float)?;
        handle.block.write_f32(field.offset, value);
        Ok(())
    }

    /// Read a double field.
    pub fn get_double(&self, handle: &StructHandle, name: &str) -> Result<f64, FieldError> {
        let field = self.field(name, FieldKind::Double)?;
        Ok(handle.block.read_f64(field.offset))
    }

    /// Write a double field.
    pub fn set_double(
        &self,
        handle: &mut StructHandle,
        name: &str,
        value: f64,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Double)?;
        handle.block.write_f64(field.offset, value);
        Ok(())
    }

    /// Read the address stored in a reference field.
    pub fn pointer(&self, handle: &StructHandle, name: &str) -> Result<BlockAddr, FieldError> {
        let field = self.field(name, FieldKind::Pointer)?;
        Ok(handle.block.read_addr(field.offset))
    }

    /// Store an address in a reference field.
    ///
    /// The relation is non-owning: the record neither keeps the referenced
    /// block alive nor frees it.
    pub fn set_pointer(
        &self,
        handle: &mut StructHandle,
        name: &str,
        addr: BlockAddr,
    ) -> Result<(), FieldError> {
        let field = self.field(name, FieldKind::Pointer)?;
        handle.block.write_addr(field.offset, addr);
        Ok(())
    }

    /// Read the address of the record referenced by `name`.
    pub fn struct_addr(&self, handle: &StructHandle, name: &str) -> Result<BlockAddr, FieldError> {
        self.pointer(handle, name)
    }

    /// Store a record reference. Equivalent to [`StructSchema::set_pointer`].
    pub fn set_struct(
        &self,
        handle: &mut StructHandle,
        name: &str,
        addr: BlockAddr,
    ) -> Result<(), FieldError> {
        self.set_pointer(handle, name, addr)
    }

    /// Read the address of the vector block referenced by `name`.
    pub fn array_addr(&self, handle: &StructHandle, name: &str) -> Result<BlockAddr, FieldError> {
        self.pointer(handle, name)
    }

    /// Store a vector-block reference. Equivalent to
    /// [`StructSchema::set_pointer`].
    pub fn set_array(
        &self,
        handle: &mut StructHandle,
        name: &str,
        addr: BlockAddr,
    ) -> Result<(), FieldError> {
        self.set_pointer(handle, name, addr)
    }
}
