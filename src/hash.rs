//! FNV-1a hashing, usable in `const` context.
//!
//! Meant for compile-time identifiers (message ids, key tags) on targets with
//! no hashing infrastructure. Not a defence against adversarial keys.
//!
//! ```
//! use ballast::hash::{fnv1a_32, fnv1a_64};
//!
//! const SENSOR_ID: u32 = fnv1a_32(b"engine.temp");
//! assert_eq!(SENSOR_ID, fnv1a_32(b"engine.temp"));
//! assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
//! ```

use core::hash::{BuildHasherDefault, Hasher};

const OFFSET_32: u32 = 0x811c_9dc5;
const PRIME_32: u32 = 0x0100_0193;
const OFFSET_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// 32-bit FNV-1a of `bytes`.
#[allow(clippy::cast_lossless)]
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = OFFSET_32;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u32).wrapping_mul(PRIME_32);
        i += 1;
    }
    hash
}

/// 64-bit FNV-1a of `bytes`.
#[allow(clippy::cast_lossless)]
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = OFFSET_64;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u64).wrapping_mul(PRIME_64);
        i += 1;
    }
    hash
}

/// Streaming 64-bit FNV-1a as a [`Hasher`].
///
/// Feeding the same bytes in any number of `write` calls gives the same
/// result as [`fnv1a_64`] over their concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a64 {
    state: u64,
}

/// `BuildHasher` for [`Fnv1a64`], for maps keyed by small values.
pub type BuildFnv1a64 = BuildHasherDefault<Fnv1a64>;

impl Fnv1a64 {
    /// A hasher at the offset basis.
    #[inline]
    pub const fn new() -> Self {
        Self { state: OFFSET_64 }
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (self.state ^ u64::from(b)).wrapping_mul(PRIME_64);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}
