//! Growable off-heap vectors of fixed-width elements.
//!
//! A [`Vector`] is an engine, not a container: it holds only configuration
//! (the initial capacity) and operates on [`VecHandle`]s, each of which owns
//! one off-heap block. The block layout is
//!
//! ```text
//! ┌────────────┬─────────────────┬──────────────────────────┐
//! │ len (i32)  │ capacity (i32)  │ capacity * WIDTH data    │
//! └────────────┴─────────────────┴──────────────────────────┘
//! ```
//!
//! Appending may grow the block, which can move it — growth operations
//! therefore take the handle by exclusive borrow and update the address in
//! place, so a stale address is not observable through the handle. Freeing
//! consumes the handle outright. The borrow checker rules out structural
//! mutation during iteration and use-after-free in safe code.
//!
//! The canonical instantiation is [`ByteVec`]; the other aliases cover the
//! remaining fixed-width element types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod guard;
pub mod iter;
pub mod vector;

mod bytes;

pub use element::Element;
pub use error::IndexOutOfRange;
pub use guard::VecGuard;
pub use iter::VecIter;
pub use vector::{
    ByteVec, CharVec, DoubleVec, FloatVec, IntVec, LongVec, VecHandle, Vector,
    DEFAULT_INITIAL_CAPACITY,
};
