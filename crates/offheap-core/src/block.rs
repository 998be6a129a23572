//! The owned block handle and its checked accessors.

use crate::addr::BlockAddr;
use crate::error::AllocError;
use crate::raw::RawBlock;
use crate::reserve;

/// A manually-managed memory block, owned by exactly one handle.
///
/// `Block` is move-only: growth consumes the handle in place and
/// [`Block::release`] consumes it outright, so the freed-address hazards of
/// a raw pointer API cannot be expressed in safe code. The accounting
/// contract is that every live block's byte length is included in
/// [`reserved_bytes`](crate::reserved_bytes) from `allocate` to `release`.
///
/// # Panics
///
/// The typed accessors take byte offsets relative to the block start and
/// panic when `offset + width` exceeds the block length. An out-of-block
/// offset is a contract violation by the calling engine, not a recoverable
/// condition — engines perform their own index checks before touching the
/// block.
#[must_use]
pub struct Block {
    raw: RawBlock,
}

impl Block {
    /// Allocate a zero-filled block of `len` bytes and add it to the
    /// reserve tally.
    pub fn allocate(len: usize) -> Result<Block, AllocError> {
        let raw = RawBlock::alloc_zeroed(len)?;
        reserve::reserve(len);
        Ok(Block { raw })
    }

    /// Grow or shrink the block to `new_len` bytes, preserving
    /// `min(len, new_len)` bytes of content and adjusting the reserve tally
    /// by the difference.
    ///
    /// The block may move; its previous [`BlockAddr`] is then dangling. On
    /// failure the block is untouched and still valid.
    pub fn resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        let old_len = self.raw.len();
        self.raw.resize(new_len)?;
        if new_len >= old_len {
            reserve::reserve(new_len - old_len);
        } else {
            reserve::unreserve(old_len - new_len);
        }
        Ok(())
    }

    /// Free the block and subtract it from the reserve tally.
    pub fn release(self) {
        reserve::unreserve(self.raw.len());
        self.raw.release();
    }

    /// Byte length of the block.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the block is zero-length.
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// The block's address in its opaque integer form.
    pub fn addr(&self) -> BlockAddr {
        BlockAddr::from(self.raw.addr())
    }

    /// Shared view of `len` bytes starting at `offset`.
    pub fn bytes(&self, offset: usize, len: usize) -> &[u8] {
        &self.raw.as_slice()[offset..offset + len]
    }

    /// Mutable view of `len` bytes starting at `offset`.
    pub fn bytes_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.raw.as_mut_slice()[offset..offset + len]
    }

    /// Copy `len` bytes from `src` to `dst` within the block. The ranges
    /// may overlap.
    pub fn copy_within(&mut self, src: usize, dst: usize, len: usize) {
        self.raw.as_mut_slice().copy_within(src..src + len, dst);
    }

    fn array<const N: usize>(&self, offset: usize) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.bytes(offset, N));
        buf
    }

    /// Read an unsigned byte at `offset`.
    pub fn read_u8(&self, offset: usize) -> u8 {
        self.bytes(offset, 1)[0]
    }

    /// Write an unsigned byte at `offset`.
    pub fn write_u8(&mut self, offset: usize, value: u8) {
        self.bytes_mut(offset, 1)[0] = value;
    }

    /// Read a signed byte at `offset`.
    pub fn read_i8(&self, offset: usize) -> i8 {
        self.read_u8(offset) as i8
    }

    /// Write a signed byte at `offset`.
    pub fn write_i8(&mut self, offset: usize, value: i8) {
        self.write_u8(offset, value as u8);
    }

    /// Read a native-endian `i16` at `offset`.
    pub fn read_i16(&self, offset: usize) -> i16 {
        i16::from_ne_bytes(self.array(offset))
    }

    /// Write a native-endian `i16` at `offset`.
    pub fn write_i16(&mut self, offset: usize, value: i16) {
        self.bytes_mut(offset, 2).copy_from_slice(&value.to_ne_bytes());
    }

    /// Read a native-endian `u16` at `offset`.
    pub fn read_u16(&self, offset: usize) -> u16 {
        u16::from_ne_bytes(self.array(offset))
    }

    /// Write a native-endian `u16` at `offset`.
    pub fn write_u16(&mut self, offset: usize, value: u16) {
        self.bytes_mut(offset, 2).copy_from_slice(&value.to_ne_bytes());
    }

    /// Read a native-endian `i32` at `offset`.
    pub fn read_i32(&self, offset: usize) -> i32 {
        i32::from_ne_bytes(self.array(offset))
    }

    /// Write a native-endian `i32` at `offset`.
    pub fn write_i32(&mut self, offset: usize, value: i32) {
        self.bytes_mut(offset, 4).copy_from_slice(&value.to_ne_bytes());
    }

    /// Read a native-endian `i64` at `offset`.
    pub fn read_i64(&self, offset: usize) -> i64 {
        i64::from_ne_bytes(self.array(offset))
    }

    /// Write a native-endian `i64` at `offset`.
    pub fn write_i64(&mut self, offset: usize, value: i64) {
        self.bytes_mut(offset, 8).copy_from_slice(&value.to_ne_bytes());
    }

    /// Read a native-endian `f32` at `offset`.
    pub fn read_f32(&self, offset: usize) -> f32 {
        f32::from_ne_bytes(self.array(offset))
    }

    /// Write a native-endian `f32` at `offset`.
    pub fn write_f32(&mut self, offset: usize, value: f32) {
        self.bytes_mut(offset, 4).copy_from_slice(&value.to_ne_bytes());
    }

    /// Read a native-endian `f64` at `offset`.
    pub fn read_f64(&self, offset: usize) -> f64 {
        f64::from_ne_bytes(self.array(offset))
    }

    /// Write a native-endian `f64` at `offset`.
    pub fn write_f64(&mut self, offset: usize, value: f64) {
        self.bytes_mut(offset, 8).copy_from_slice(&value.to_ne_bytes());
    }

    /// Read a stored 8-byte address at `offset`.
    pub fn read_addr(&self, offset: usize) -> BlockAddr {
        BlockAddr::from_raw(u64::from_ne_bytes(self.array(offset)))
    }

    /// Write an 8-byte address at `offset`.
    pub fn write_addr(&mut self, offset: usize, addr: BlockAddr) {
        self.bytes_mut(offset, 8).copy_from_slice(&addr.to_raw().to_ne_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_zero_filled() {
        let block = Block::allocate(32).unwrap();
        assert!(block.bytes(0, 32).iter().all(|&b| b == 0));
        block.release();
    }

    #[test]
    fn scalar_round_trips_at_unaligned_offsets() {
        let mut block = Block::allocate(64).unwrap();
        block.write_i16(1, -12345);
        block.write_i32(3, i32::MIN);
        block.write_i64(7, i64::MAX);
        block.write_u16(15, u16::MAX);
        block.write_f32(17, 123.324);
        block.write_f64(21, 1234213.124_321_421_3);
        block.write_i8(29, -5);

        assert_eq!(block.read_i16(1), -12345);
        assert_eq!(block.read_i32(3), i32::MIN);
        assert_eq!(block.read_i64(7), i64::MAX);
        assert_eq!(block.read_u16(15), u16::MAX);
        assert_eq!(block.read_f32(17), 123.324);
        assert_eq!(block.read_f64(21), 1234213.124_321_421_3);
        assert_eq!(block.read_i8(29), -5);
        block.release();
    }

    #[test]
    fn addr_round_trips_through_memory() {
        let mut block = Block::allocate(16).unwrap();
        let target = BlockAddr::from_raw(0x1234_5678_9abc);
        block.write_addr(8, target);
        assert_eq!(block.read_addr(8), target);
        assert_eq!(block.read_addr(0), BlockAddr::NULL);
        block.release();
    }

    #[test]
    fn copy_within_handles_overlap() {
        let mut block = Block::allocate(8).unwrap();
        block.bytes_mut(0, 8).copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        block.copy_within(2, 0, 6);
        assert_eq!(block.bytes(0, 8), &[3, 4, 5, 6, 7, 8, 7, 8]);
        block.release();
    }

    #[test]
    fn resize_keeps_content_and_stays_valid_on_growth() {
        let mut block = Block::allocate(4).unwrap();
        block.write_i32(0, 77);
        block.resize(128).unwrap();
        assert_eq!(block.read_i32(0), 77);
        assert_eq!(block.len(), 128);
        block.release();
    }

    #[test]
    #[should_panic]
    fn out_of_block_read_panics() {
        let block = Block::allocate(4).unwrap();
        let _ = block.read_i64(0);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn i64_round_trip_is_bit_exact(value in any::<i64>(), offset in 0usize..24) {
                let mut block = Block::allocate(32).unwrap();
                block.write_i64(offset, value);
                prop_assert_eq!(block.read_i64(offset), value);
                block.release();
            }

            #[test]
            fn f64_round_trip_is_bit_exact(bits in any::<u64>()) {
                let mut block = Block::allocate(8).unwrap();
                block.write_f64(0, f64::from_bits(bits));
                prop_assert_eq!(block.read_f64(0).to_bits(), bits);
                block.release();
            }
        }
    }
}
