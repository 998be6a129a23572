//! The opaque integer form of a block address.

use std::fmt;

/// Opaque integer handle identifying a memory block.
///
/// A `BlockAddr` is the detached, copyable form of a block's address. It is
/// what gets stored in a struct's reference fields and what diagnostics
/// print. It grants no access to the block's memory — all reads and writes
/// go through the owning [`Block`](crate::Block) — so holding a `BlockAddr`
/// is a non-owning relation: the referent may be freed at any time without
/// the holder noticing.
///
/// The zero address ([`BlockAddr::NULL`]) denotes "unset".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockAddr(usize);

impl BlockAddr {
    /// The unset address.
    pub const NULL: BlockAddr = BlockAddr(0);

    /// Reconstruct an address from its raw integer form.
    ///
    /// Intended for round-tripping addresses through 8-byte reference
    /// fields. Forging an address here never grants memory access.
    pub fn from_raw(raw: u64) -> Self {
        BlockAddr(raw as usize)
    }

    /// The raw integer form, suitable for storing in an 8-byte field.
    pub fn to_raw(self) -> u64 {
        self.0 as u64
    }

    /// Whether this is the unset address.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BlockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for BlockAddr {
    fn from(v: usize) -> Self {
        BlockAddr(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_zero_and_unset() {
        assert!(BlockAddr::NULL.is_null());
        assert_eq!(BlockAddr::NULL.to_raw(), 0);
    }

    #[test]
    fn raw_round_trip() {
        let addr = BlockAddr::from_raw(0xdead_beef);
        assert_eq!(addr.to_raw(), 0xdead_beef);
        assert!(!addr.is_null());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(BlockAddr::from_raw(0xff).to_string(), "0xff");
    }
}
