//! Scope-based auto-release layered over the explicit record API.

use offheap_core::{AllocError, BlockAddr};

use crate::schema::{StructHandle, StructSchema};

/// A record handle that frees its block when dropped.
///
/// The guard pairs a handle with its schema and releases the block at scope
/// exit; field access still goes through the schema's accessors with
/// [`StructGuard::handle`]/[`StructGuard::handle_mut`].
/// [`StructGuard::into_handle`] opts back out, leaving the caller
/// responsible for [`StructSchema::free`].
pub struct StructGuard<'a> {
    schema: &'a StructSchema,
    handle: Option<StructHandle>,
}

impl<'a> StructGuard<'a> {
    /// Allocate a fresh record owned by the guard.
    pub fn allocate(schema: &'a StructSchema) -> Result<Self, AllocError> {
        Ok(Self {
            schema,
            handle: Some(schema.allocate()?),
        })
    }

    /// Wrap an existing handle.
    pub fn from_handle(schema: &'a StructSchema, handle: StructHandle) -> Self {
        Self {
            schema,
            handle: Some(handle),
        }
    }

    /// Release ownership without freeing, returning the raw handle.
    pub fn into_handle(mut self) -> StructHandle {
        self.handle.take().expect("guard always holds a handle")
    }

    /// Borrow the handle for read accessors.
    pub fn handle(&self) -> &StructHandle {
        self.handle.as_ref().expect("guard always holds a handle")
    }

    /// Borrow the handle for write accessors.
    pub fn handle_mut(&mut self) -> &mut StructHandle {
        self.handle.as_mut().expect("guard always holds a handle")
    }

    /// The record's address in its opaque integer form.
    pub fn addr(&self) -> BlockAddr {
        self.handle().addr()
    }
}

impl Drop for StructGuard<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.schema.free(handle);
        }
    }
}
