//! 64-bit FNV-1a, for deriving well-spread table keys from bytes.
//!
//! Digests are bit-exact with the reference FNV-1a definition and may be
//! persisted or compared across implementations.

use core::hash::{BuildHasherDefault, Hasher};

pub const FNV1A_64_INIT: u64 = 0xcbf2_9ce4_8422_2325;
pub const FNV1A_64_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline]
fn step(hash: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(hash, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV1A_64_PRIME))
}

/// FNV-1a digest of `bytes`.
#[inline]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    step(FNV1A_64_INIT, bytes)
}

/// Streaming FNV-1a. Feeding bytes across several `write` calls gives the
/// same digest as one `fnv1a_64` over their concatenation.
#[derive(Copy, Clone, Debug)]
pub struct FnvHasher(u64);

impl Default for FnvHasher {
    fn default() -> Self {
        FnvHasher(FNV1A_64_INIT)
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = step(self.0, bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
}

pub type FnvBuildHasher = BuildHasherDefault<FnvHasher>;
