//! Word-level layout of truth tables.
//!
//! An `n`-input function is stored in `2^n` bits packed into `u64` words.
//! Functions with up to 6 inputs fit in the low `2^n` bits of a single word
//! (the high bits are unconstrained and must be masked out before comparing
//! or counting). Larger functions span `2^(n-6)` fully meaningful words,
//! word `w` holding truth-table indices `64w..64w+63`.
//!
//! Input `k < 6` selects bits *inside* a word (see [`INPUT_MASKS`]), while
//! input `k >= 6` selects whole words in alternating blocks of
//! `2^(k-6)` words (see [`word_stride`]).

/// Number of bits in a storage word.
pub const WORD_BITS: usize = 64;

/// Number of inputs that fit exactly in one storage word.
pub const WORD_INPUTS: usize = 6;

/// Largest supported input count.
pub const MAX_INPUTS: usize = 32;

/// Bit positions where input `k` is 1, for `k` in `0..6`.
pub const INPUT_MASKS: [u64; WORD_INPUTS] = [
    0xaaaa_aaaa_aaaa_aaaa,
    0xcccc_cccc_cccc_cccc,
    0xf0f0_f0f0_f0f0_f0f0,
    0xff00_ff00_ff00_ff00,
    0xffff_0000_ffff_0000,
    0xffff_ffff_0000_0000,
];

/// Meaningful bits of the single word of an `n`-input function, `n` in `0..=6`.
pub const SIZE_MASKS: [u64; WORD_INPUTS + 1] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0003,
    0x0000_0000_0000_000f,
    0x0000_0000_0000_00ff,
    0x0000_0000_0000_ffff,
    0x0000_0000_ffff_ffff,
    0xffff_ffff_ffff_ffff,
];

/// Six-input parity function.
pub const XOR_MASK: u64 = 0x6996_9669_9669_6996;

/// Number of words needed to store an `n`-input function.
///
/// ```
/// use lut_rs::masks::array_size;
///
/// assert_eq!(array_size(0), 1);
/// assert_eq!(array_size(6), 1);
/// assert_eq!(array_size(9), 8);
/// ```
#[inline]
pub const fn array_size(input_count: usize) -> usize {
    if input_count > WORD_INPUTS {
        1 << (input_count - WORD_INPUTS)
    } else {
        1
    }
}

/// Number of truth-table bits of an `n`-input function (`2^n`).
#[inline]
pub const fn bit_count(input_count: usize) -> usize {
    1 << input_count
}

/// Mask of the meaningful bits in each word of an `n`-input function.
#[inline]
pub const fn size_mask(input_count: usize) -> u64 {
    if input_count >= WORD_INPUTS {
        SIZE_MASKS[WORD_INPUTS]
    } else {
        SIZE_MASKS[input_count]
    }
}

/// Word stride between the two cofactor blocks of input `k >= 6`.
#[inline]
pub const fn word_stride(input: usize) -> usize {
    debug_assert!(input >= WORD_INPUTS);
    1 << (input - WORD_INPUTS)
}

/// Iterates over the index pairs `(j, j + stride)` of the 0- and 1-cofactor
/// words of input `k >= 6`, for a table of `len` words.
pub(crate) fn block_pairs(len: usize, input: usize) -> impl Iterator<Item = (usize, usize)> {
    let stride = word_stride(input);
    (0..len)
        .step_by(2 * stride)
        .flat_map(move |i| (i..i + stride).map(move |j| (j, j + stride)))
}
