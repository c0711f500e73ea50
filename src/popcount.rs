//! Population-count capability.
//!
//! Two interchangeable strategies behind one surface: the hardware path
//! (`count_ones`, which lowers to a `popcnt` instruction on targets that have
//! one) and a SWAR multiply-fold that depends on nothing but shifts, masks,
//! and a multiply. The `portable-popcount` feature selects which one the rest
//! of the crate calls; both are always compiled so the test suite can hold
//! them to bit-identical answers.

/// Hardware/intrinsic popcount of a 64-bit word.
#[inline(always)]
pub(crate) fn popcount64_native(x: u64) -> u32 {
    x.count_ones()
}

/// SWAR popcount of a 64-bit word.
///
/// Pairwise bit sums, then nibble sums, then a multiply that gathers all
/// byte counts into the top byte.
#[inline(always)]
pub(crate) fn popcount64_portable(mut x: u64) -> u32 {
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x + (x >> 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    (x.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}

/// Popcount of a 64-bit word, using the strategy selected at build time.
#[inline(always)]
pub fn popcount64(x: u64) -> u32 {
    #[cfg(feature = "portable-popcount")]
    {
        popcount64_portable(x)
    }
    #[cfg(not(feature = "portable-popcount"))]
    {
        popcount64_native(x)
    }
}

/// Popcount of a single byte.
#[inline(always)]
pub fn popcount8(x: u8) -> u32 {
    popcount64(u64::from(x))
}
