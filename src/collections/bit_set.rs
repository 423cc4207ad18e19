//! `BitSet`: up to 64 flags packed into one word.
//!
//! Single bits are written through [`BitRef`], a small lens holding the word
//! and a mask, with explicit `get`/`set` rather than assignment through a
//! proxy reference.

use crate::error::ParseBitsError;
use core::fmt;

/// A set of `N` bits, `1 <= N <= 64`, stored in a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet<const N: usize> {
    word: u64,
}

/// Read/write access to one bit of a [`BitSet`].
pub struct BitRef<'a> {
    word: &'a mut u64,
    mask: u64,
}

impl<'a> BitRef<'a> {
    /// Current value of the bit.
    #[inline(always)]
    pub fn get(&self) -> bool {
        *self.word & self.mask != 0
    }

    /// Writes the bit.
    #[inline(always)]
    pub fn set(&mut self, value: bool) {
        if value {
            *self.word |= self.mask;
        } else {
            *self.word &= !self.mask;
        }
    }

    /// Flips the bit and returns its new value.
    #[inline(always)]
    pub fn toggle(&mut self) -> bool {
        *self.word ^= self.mask;
        self.get()
    }
}

impl<const N: usize> BitSet<N> {
    const VALID: () = assert!(N > 0 && N <= 64, "BitSet<N>: N must be in 1..=64");

    const MASK: u64 = if N >= 64 { u64::MAX } else { (1u64 << N) - 1 };

    /// All bits cleared.
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self { word: 0 }
    }

    /// Takes the low `N` bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self {
            word: bits & Self::MASK,
        }
    }

    /// Parses a string of `0`/`1` digits, most significant bit first.
    ///
    /// `_` may be used as a separator. Fewer than `N` digits fill the high
    /// bits and leave the rest clear, matching a left-aligned bit pattern.
    ///
    /// # Errors
    /// Fails on any other character or on more than `N` digits.
    pub fn parse(bits: &str) -> Result<Self, ParseBitsError> {
        let mut set = Self::new();
        let mut bit = 0usize;
        for (offset, c) in bits.bytes().enumerate() {
            match c {
                b'_' => continue,
                b'0' | b'1' => {
                    if bit >= N {
                        return Err(ParseBitsError::TooManyBits { capacity: N });
                    }
                    if c == b'1' {
                        set.word |= 1u64 << (N - 1 - bit);
                    }
                    bit += 1;
                }
                _ => return Err(ParseBitsError::InvalidDigit(offset)),
            }
        }
        Ok(set)
    }

    /// The bits as a number.
    #[inline(always)]
    pub const fn value(&self) -> u64 {
        self.word
    }

    /// Number of bits in the set.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Value of bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    #[inline]
    #[track_caller]
    pub fn get(&self, i: usize) -> bool {
        self.word & Self::mask(i) != 0
    }

    /// Writes bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, i: usize, value: bool) {
        self.bit_mut(i).set(value);
    }

    /// Flips bit `i` and returns its new value.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    #[inline]
    #[track_caller]
    pub fn toggle(&mut self, i: usize) -> bool {
        self.bit_mut(i).toggle()
    }

    /// Lens onto bit `i`.
    ///
    /// # Panics
    /// Panics if `i >= N`.
    #[inline]
    #[track_caller]
    pub fn bit_mut(&mut self, i: usize) -> BitRef<'_> {
        BitRef {
            mask: Self::mask(i),
            word: &mut self.word,
        }
    }

    /// Number of set bits.
    #[inline]
    pub const fn count_ones(&self) -> u32 {
        self.word.count_ones()
    }

    #[inline(always)]
    #[track_caller]
    fn mask(i: usize) -> u64 {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        assert!(i < N, "bit index {i} out of range for BitSet<{N}>");
        1u64 << i
    }
}

impl<const N: usize> Default for BitSet<N> {
    /// All bits cleared. Width checked like [`new`](Self::new).
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for BitSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet({:0width$b})", self.word, width = N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_msb_first_with_separators() {
        let set = BitSet::<8>::parse("1000_0001").unwrap();
        assert_eq!(set.value(), 0x81);
        assert!(set.get(7));
        assert!(set.get(0));
        assert!(!set.get(3));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            BitSet::<4>::parse("10x1"),
            Err(ParseBitsError::InvalidDigit(2))
        );
        assert_eq!(
            BitSet::<4>::parse("1_0101"),
            Err(ParseBitsError::TooManyBits { capacity: 4 })
        );
    }

    #[test]
    fn test_bit_lens_writes_through() {
        let mut set = BitSet::<16>::new();
        {
            let mut bit = set.bit_mut(9);
            assert!(!bit.get());
            bit.set(true);
            assert!(bit.get());
        }
        assert_eq!(set.value(), 1 << 9);
        set.set(9, false);
        assert_eq!(set.value(), 0);
        assert!(set.toggle(15));
        assert_eq!(set.count_ones(), 1);
    }

    #[test]
    fn test_from_bits_masks_to_width() {
        assert_eq!(BitSet::<4>::from_bits(0xFF).value(), 0x0F);
        assert_eq!(BitSet::<64>::from_bits(u64::MAX).count_ones(), 64);
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(BitSet::<8>::default(), BitSet::<8>::new());
        assert_eq!(BitSet::<64>::default().value(), 0);

        let mut set = BitSet::<64>::default();
        set.set(63, true);
        assert_eq!(set.value(), 1u64 << 63);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_bit_panics() {
        BitSet::<3>::new().get(3);
    }

    #[test]
    fn test_debug_is_zero_padded() {
        assert_eq!(format!("{:?}", BitSet::<6>::from_bits(0b101)), "BitSet(000101)");
    }
}
