//! Handle-addressed off-heap vectors and records with explicit allocation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the offheap sub-crates. For most users, adding `offheap` as a single
//! dependency is sufficient.
//!
//! Storage lives in manually-managed blocks outside the normal ownership
//! graph, addressed by opaque handles. Allocation and release are explicit;
//! a process-wide counter tracks every live byte.
//!
//! # Quick start
//!
//! ```rust
//! use offheap::prelude::*;
//!
//! // Fill a growable off-heap byte vector.
//! let bytes = ByteVec::new();
//! let mut payload = bytes.allocate().unwrap();
//! for value in [0x11, 0x10, 0x09] {
//!     bytes.push(&mut payload, value).unwrap();
//! }
//! assert_eq!(bytes.len(&payload), 3);
//! assert_eq!(bytes.index_of(&payload, 0x10), 1);
//!
//! // Describe a fixed-layout record that references the vector.
//! let schema = SchemaBuilder::new()
//!     .add_long("id")
//!     .add_array("payload")
//!     .build()
//!     .unwrap();
//! let mut record = schema.allocate().unwrap();
//! schema.set_long(&mut record, "id", 7).unwrap();
//! schema.set_array(&mut record, "payload", payload.addr()).unwrap();
//! assert_eq!(schema.array_addr(&record, "payload").unwrap(), payload.addr());
//!
//! // Release explicitly. The record never owns the vector, so the order
//! // is free, and freeing the record cannot touch the vector's block.
//! schema.free(record);
//! bytes.free(payload);
//! assert_eq!(offheap::reserved_bytes(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! [`prelude`]:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`block`] | `offheap-core` | Block handles, addresses, reserve counter |
//! | [`vec`] | `offheap-vec` | Growable vectors of fixed-width elements |
//! | [`layout`] | `offheap-struct` | Fixed-schema records with named fields |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block handles, addresses, and the reserve counter (`offheap-core`).
pub use offheap_core as block;

/// Growable off-heap vectors of fixed-width elements (`offheap-vec`).
pub use offheap_vec as vec;

/// Fixed-schema off-heap records with named, typed fields
/// (`offheap-struct`).
pub use offheap_struct as layout;

pub use offheap_core::reserved_bytes;

/// The common types, re-exported flat.
pub mod prelude {
    pub use offheap_core::{reserved_bytes, AllocError, Block, BlockAddr};
    pub use offheap_struct::{
        Field, FieldError, FieldKind, SchemaBuilder, SchemaError, StructGuard, StructHandle,
        StructSchema,
    };
    pub use offheap_vec::{
        ByteVec, CharVec, DoubleVec, Element, FloatVec, IndexOutOfRange, IntVec, LongVec,
        VecGuard, VecHandle, VecIter, Vector, DEFAULT_INITIAL_CAPACITY,
    };
}
