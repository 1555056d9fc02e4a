//! Small constant tables shared across the decoder.
#![allow(clippy::unreadable_literal)]

/// Maps a zig-zag scan position to its natural (row-major) index in an
/// 8x8 block: `natural[UN_ZIGZAG[i]] = zigzag[i]`.
///
/// This is the standard ISO/IEC 10918-1 Figure F.1 zig-zag traversal
/// table, identical to the one baseline JPEG decoders embed.
#[rustfmt::skip]
pub(crate) const UN_ZIGZAG: [usize; 64] = [
    0,  1,  8,  16, 9,  2,  3, 10,
    17, 24, 32, 25, 18, 11, 4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13, 6,  7,  14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse permutation of [`UN_ZIGZAG`]: maps a natural index to its
/// zig-zag scan position. Only used by tests that need to build a
/// natural-order block and check it round-trips through the zig-zag
/// permutation.
#[cfg(test)]
pub(crate) fn zigzag_of(natural_index: usize) -> usize
{
    UN_ZIGZAG
        .iter()
        .position(|&n| n == natural_index)
        .expect("UN_ZIGZAG is a permutation of 0..64")
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn un_zigzag_is_a_permutation()
    {
        let mut seen = [false; 64];
        for &n in &UN_ZIGZAG
        {
            assert!(!seen[n], "duplicate natural index {n}");
            seen[n] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn zigzag_is_an_involution_with_its_inverse()
    {
        for zigzag_pos in 0..64
        {
            let natural = UN_ZIGZAG[zigzag_pos];
            assert_eq!(zigzag_of(natural), zigzag_pos);
        }
    }
}
