//! Scope-based auto-release layered over the explicit handle API.

use offheap_core::{AllocError, BlockAddr};

use crate::element::Element;
use crate::error::IndexOutOfRange;
use crate::iter::VecIter;
use crate::vector::{VecHandle, Vector};

/// A vector handle that frees its block when dropped.
///
/// An optional convenience over the explicit [`Vector`]/[`VecHandle`] API:
/// the guard pairs a handle with its engine and releases the block at scope
/// exit. [`VecGuard::into_handle`] opts back out, returning the raw handle
/// and leaving the caller responsible for [`Vector::free`].
pub struct VecGuard<'a, T: Element> {
    engine: &'a Vector<T>,
    handle: Option<VecHandle<T>>,
}

impl<'a, T: Element> VecGuard<'a, T> {
    /// Allocate a fresh vector owned by the guard.
    pub fn allocate(engine: &'a Vector<T>) -> Result<Self, AllocError> {
        Ok(Self {
            engine,
            handle: Some(engine.allocate()?),
        })
    }

    /// Wrap an existing handle.
    pub fn from_handle(engine: &'a Vector<T>, handle: VecHandle<T>) -> Self {
        Self {
            engine,
            handle: Some(handle),
        }
    }

    /// Release ownership without freeing, returning the raw handle.
    pub fn into_handle(mut self) -> VecHandle<T> {
        self.handle.take().expect("guard always holds a handle")
    }

    fn handle(&self) -> &VecHandle<T> {
        self.handle.as_ref().expect("guard always holds a handle")
    }

    fn handle_mut(&mut self) -> &mut VecHandle<T> {
        self.handle.as_mut().expect("guard always holds a handle")
    }

    /// Append `value`, growing the block as needed.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        let engine = self.engine;
        engine.push(self.handle_mut(), value)
    }

    /// The element at `index`.
    pub fn get(&self, index: i64) -> Result<T, IndexOutOfRange> {
        self.engine.get(self.handle(), index)
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: i64, value: T) -> Result<T, IndexOutOfRange> {
        let engine = self.engine;
        engine.set(self.handle_mut(), index, value)
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> i64 {
        self.engine.len(self.handle())
    }

    /// Whether the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty(self.handle())
    }

    /// The block's address in its opaque integer form.
    pub fn addr(&self) -> BlockAddr {
        self.handle().addr()
    }

    /// Forward cursor over the elements.
    pub fn iter(&self) -> VecIter<'_, T> {
        self.engine.iter(self.handle())
    }
}

impl<T: Element> Drop for VecGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.engine.free(handle);
        }
    }
}
