//! Cross-engine behaviour: records referencing vectors, address refresh
//! after growth, and combined guard usage.

use offheap::prelude::*;

#[test]
fn record_references_a_vector_without_owning_it() {
    let bytes = ByteVec::new();
    let mut payload = bytes.allocate().unwrap();
    for value in [1u8, 2, 3, 4] {
        bytes.push(&mut payload, value).unwrap();
    }

    let schema = SchemaBuilder::new()
        .add_long("id")
        .add_array("payload")
        .build()
        .unwrap();
    let mut record = schema.allocate().unwrap();
    schema.set_long(&mut record, "id", 42).unwrap();
    schema
        .set_array(&mut record, "payload", payload.addr())
        .unwrap();

    assert_eq!(
        schema.array_addr(&record, "payload").unwrap(),
        payload.addr()
    );

    // The record holds only the address. After freeing it, the vector is
    // untouched and fully usable.
    schema.free(record);
    assert_eq!(bytes.to_vec(&payload), vec![1, 2, 3, 4]);
    bytes.free(payload);
}

#[test]
fn stored_addresses_are_refreshed_after_growth() {
    let bytes = ByteVec::with_initial_capacity(1);
    let mut payload = bytes.allocate().unwrap();
    bytes.push(&mut payload, 0xaa).unwrap();

    let schema = SchemaBuilder::new().add_array("payload").build().unwrap();
    let mut record = schema.allocate().unwrap();
    schema
        .set_array(&mut record, "payload", payload.addr())
        .unwrap();

    // Growth may relocate the block, so the caller re-stores the address
    // the handle reports afterwards.
    for value in 0..64u8 {
        bytes.push(&mut payload, value).unwrap();
    }
    schema
        .set_array(&mut record, "payload", payload.addr())
        .unwrap();
    assert_eq!(
        schema.array_addr(&record, "payload").unwrap(),
        payload.addr()
    );

    schema.free(record);
    bytes.free(payload);
}

#[test]
fn records_can_chain_through_struct_references() {
    let node = SchemaBuilder::new()
        .add_int("value")
        .add_struct("next")
        .build()
        .unwrap();

    let mut tail = node.allocate().unwrap();
    node.set_int(&mut tail, "value", 2).unwrap();

    let mut head = node.allocate().unwrap();
    node.set_int(&mut head, "value", 1).unwrap();
    node.set_struct(&mut head, "next", tail.addr()).unwrap();

    assert_eq!(node.struct_addr(&head, "next").unwrap(), tail.addr());
    assert!(node.struct_addr(&tail, "next").unwrap().is_null());

    node.free(head);
    node.free(tail);
}

#[test]
fn guards_release_both_engines_at_scope_exit() {
    let bytes = ByteVec::new();
    let schema = SchemaBuilder::new()
        .add_bool("ready")
        .add_array("buf")
        .build()
        .unwrap();

    let mut vec_guard = VecGuard::allocate(&bytes).unwrap();
    vec_guard.push(0x01).unwrap();

    let mut record = StructGuard::allocate(&schema).unwrap();
    schema.set_bool(record.handle_mut(), "ready", true).unwrap();
    schema
        .set_array(record.handle_mut(), "buf", vec_guard.addr())
        .unwrap();

    assert!(schema.get_bool(record.handle(), "ready").unwrap());
    assert_eq!(
        schema.array_addr(record.handle(), "buf").unwrap(),
        vec_guard.addr()
    );
    // Both guards drop here; release order does not matter because the
    // record's reference is non-owning.
}
