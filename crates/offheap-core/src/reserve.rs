//! Process-wide tally of bytes currently held in off-heap blocks.
//!
//! Independent blocks may be allocated, resized, or freed concurrently from
//! different threads, so the counter is maintained with atomic RMW updates.
//! Invariant: the counter equals the sum of the byte sizes of all currently
//! live blocks.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Bytes currently reserved across all live blocks.
static RESERVED: AtomicUsize = AtomicUsize::new(0);

/// Number of bytes currently held in off-heap blocks, process-wide.
pub fn reserved_bytes() -> usize {
    RESERVED.load(Ordering::Relaxed)
}

/// Record `bytes` newly allocated.
pub(crate) fn reserve(bytes: usize) {
    RESERVED.fetch_add(bytes, Ordering::Relaxed);
}

/// Record `bytes` released back to the system.
pub(crate) fn unreserve(bytes: usize) {
    RESERVED.fetch_sub(bytes, Ordering::Relaxed);
}
