//! The distance core: Hamming distance between two binary strings.
//!
//! One operation, two branches. Both operands exactly 8 bytes — the dominant
//! case, fixed-width hash and fingerprint comparison — takes a single 64-bit
//! XOR + popcount. Everything else goes byte-wise, with unequal lengths
//! handled by counting every byte past the common prefix against an implicit
//! zero byte rather than truncating it away.

use crate::popcount::{popcount8, popcount64};

/// Number of bit positions where `a` and `b` differ.
///
/// Inputs may have any lengths, including zero and unequal. The shorter input
/// is treated as zero-padded to the longer one's length, so the metric stays
/// well-defined and monotone under length mismatch:
///
/// ```rust
/// use hammdist::distance;
///
/// assert_eq!(distance(&[], &[]), 0);
/// assert_eq!(distance(&[0xFF], &[]), 8);
/// assert_eq!(distance(&[0x00, 0x00], &[0x00]), 0);
/// ```
///
/// Pure and deterministic; never fails for any pair of byte slices.
pub fn distance(a: &[u8], b: &[u8]) -> u64 {
    // Fast path: both operands are one 64-bit word. Byte order is irrelevant
    // for XOR as long as both sides are read the same way.
    if let (Ok(x), Ok(y)) = (<[u8; 8]>::try_from(a), <[u8; 8]>::try_from(b)) {
        return u64::from(popcount64(u64::from_ne_bytes(x) ^ u64::from_ne_bytes(y)));
    }

    general(a, b)
}

/// Byte-wise path for arbitrary lengths.
fn general(a: &[u8], b: &[u8]) -> u64 {
    let shared = a.len().min(b.len());

    let mut diff: u64 = a[..shared]
        .iter()
        .zip(&b[..shared])
        .map(|(&x, &y)| u64::from(popcount8(x ^ y)))
        .sum();

    // Tail of the longer operand, compared against implicit zero bytes.
    let tail = if a.len() > shared { &a[shared..] } else { &b[shared..] };
    diff += tail.iter().map(|&x| u64::from(popcount8(x))).sum::<u64>();

    diff
}
