//! Benchmark fixtures for the offheap memory primitives.
//!
//! Provides pre-built vectors and schemas shared by the criterion benches:
//!
//! - [`filled_byte_vec`]: a byte vector holding a deterministic pattern
//! - [`telemetry_schema`]: a mixed-scalar record layout with one reference

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use offheap_struct::{SchemaBuilder, StructSchema};
use offheap_vec::{ByteVec, VecHandle};

/// Build a byte vector of `len` elements with a deterministic pattern.
///
/// The caller frees the returned handle.
pub fn filled_byte_vec(engine: &ByteVec, len: usize) -> VecHandle<u8> {
    let mut handle = engine.allocate().expect("bench allocation");
    for i in 0..len {
        engine
            .push(&mut handle, (i % 251) as u8)
            .expect("bench push");
    }
    handle
}

/// A record layout with every scalar width plus one vector reference.
pub fn telemetry_schema() -> StructSchema {
    SchemaBuilder::new()
        .add_long("timestamp")
        .add_int("sequence")
        .add_short("source")
        .add_byte("flags")
        .add_bool("valid")
        .add_char("tag")
        .add_float("reading")
        .add_double("accumulated")
        .add_array("samples")
        .build()
        .expect("bench schema")
}
