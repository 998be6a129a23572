//! Fixed-schema off-heap records with named, typed fields.
//!
//! A [`StructSchema`] is built once from an ordered list of named fields,
//! then used to allocate any number of record blocks. Fields are packed
//! tightly — the offset of field *n* is the sum of the widths of fields
//! `0..n` — and every block is exactly [`StructSchema::size`] bytes with no
//! header.
//!
//! ```text
//! SchemaBuilder ── build() ──▶ StructSchema (immutable field table)
//!                                  ├── allocate() ──▶ StructHandle
//!                                  └── typed get/set by field name
//! ```
//!
//! Reference fields (`add_struct`/`add_array`/`add_pointer`) store an
//! 8-byte [`BlockAddr`](offheap_core::BlockAddr) and nothing more: the
//! record never owns the referenced block, and freeing the record never
//! cascades to it. The zero address denotes "unset".

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod guard;
pub mod kind;
pub mod schema;

pub use builder::SchemaBuilder;
pub use error::{FieldError, SchemaError};
pub use guard::StructGuard;
pub use kind::FieldKind;
pub use schema::{Field, StructHandle, StructSchema};
