//! Raw block allocation and reserve accounting for the offheap engines.
//!
//! Provides the manually-managed memory blocks that back the vector and
//! struct engines. This is the only crate in the workspace that may contain
//! `unsafe` code, and all of it is confined to `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! Block (owned handle: address + byte length)
//! ├── RawBlock (raw.rs — the only unsafe module)
//! │   └── system allocator (alloc_zeroed / realloc / dealloc)
//! └── reserve counter (process-wide AtomicUsize tally)
//! ```
//!
//! # Ownership model
//!
//! A [`Block`] is the single owner of its allocation. It is deliberately
//! neither `Copy` nor `Clone`: transferring a block moves the handle, and
//! [`Block::release`] consumes it, so double-free and use-after-free are
//! compile errors rather than runtime hazards. [`BlockAddr`] is the
//! detached, `Copy` form of the address — an opaque integer that identifies
//! the block but grants no access to its memory.
//!
//! Callers are not expected to use this crate directly; the vector and
//! struct engines are the public surface of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod addr;
pub mod block;
pub mod error;
mod raw;
pub mod reserve;

pub use addr::BlockAddr;
pub use block::Block;
pub use error::AllocError;
pub use reserve::reserved_bytes;
