//! Bulk byte operations, available on the byte instantiation only.

use offheap_core::{AllocError, Block};

use crate::error::IndexOutOfRange;
use crate::vector::{VecHandle, Vector, CAPACITY_OFFSET, HEADER_SIZE, LEN_OFFSET};

/// Largest byte-vector length: the header stores it as an `i32`.
const MAX_LEN: usize = i32::MAX as usize;

impl Vector<u8> {
    /// Allocate a vector holding a copy of `data`, with
    /// `len == capacity == data.len()`.
    pub fn from_slice(&self, data: &[u8]) -> Result<VecHandle<u8>, AllocError> {
        if data.len() > MAX_LEN {
            return Err(AllocError::TooLarge {
                requested: HEADER_SIZE + data.len(),
            });
        }
        let mut block = Block::allocate(HEADER_SIZE + data.len())?;
        block.bytes_mut(HEADER_SIZE, data.len()).copy_from_slice(data);
        block.write_i32(LEN_OFFSET, data.len() as i32);
        block.write_i32(CAPACITY_OFFSET, data.len() as i32);
        Ok(VecHandle::from_block(block))
    }

    /// Copy the stored bytes `[0, len)` into an owned `Vec<u8>`.
    pub fn to_vec(&self, handle: &VecHandle<u8>) -> Vec<u8> {
        let len = self.len(handle) as usize;
        handle.block().bytes(HEADER_SIZE, len).to_vec()
    }

    /// Append all of `data`, growing the block as needed.
    ///
    /// The block may move; on failure the vector is untouched and still
    /// valid.
    pub fn extend(&self, handle: &mut VecHandle<u8>, data: &[u8]) -> Result<(), AllocError> {
        let len = self.len(handle);
        let needed = len + data.len() as i64;
        if needed > MAX_LEN as i64 {
            return Err(AllocError::TooLarge {
                requested: HEADER_SIZE + needed as usize,
            });
        }
        if needed > self.capacity(handle) {
            let target = needed.max(self.capacity(handle) * 2).min(MAX_LEN as i64);
            self.resize(handle, target)?;
        }
        handle
            .block_mut()
            .bytes_mut(HEADER_SIZE + len as usize, data.len())
            .copy_from_slice(data);
        handle.block_mut().write_i32(LEN_OFFSET, needed as i32);
        Ok(())
    }

    /// Remove and return the first `count` bytes, shifting the remainder to
    /// the front. Errors when `count` exceeds the current length.
    pub fn cut(
        &self,
        handle: &mut VecHandle<u8>,
        count: i64,
    ) -> Result<Vec<u8>, IndexOutOfRange> {
        let len = self.len(handle);
        if count < 0 || count > len {
            return Err(IndexOutOfRange { index: count, len });
        }
        let taken = handle.block().bytes(HEADER_SIZE, count as usize).to_vec();
        let remaining = (len - count) as usize;
        if remaining > 0 {
            handle
                .block_mut()
                .copy_within(HEADER_SIZE + count as usize, HEADER_SIZE, remaining);
        }
        handle.block_mut().write_i32(LEN_OFFSET, remaining as i32);
        Ok(taken)
    }
}
