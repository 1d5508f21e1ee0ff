//! Hexadecimal encoding of truth tables.
//!
//! An `n`-input function (`n >= 2`) is written as `2^(n-2)` hex digits,
//! most-significant nibble first: the highest-index word comes first and
//! every word is zero-padded to its full nibble width.
//!
//! ```text
//! And(4)  = 1000_0000_0000_0000 (bit 15 set)  ->  "8000"
//! Xor(3)  = 1001_0110                         ->  "96"
//! ```

use std::fmt;

use log::debug;

use crate::error::{LutError, Result};
use crate::masks::{array_size, size_mask, MAX_INPUTS, WORD_INPUTS};
use crate::table::TruthTable;

/// Number of hex digits per full word.
const WORD_DIGITS: usize = 16;

/// Number of hex digits of each word of an `n`-input function.
fn digits_per_word(input_count: usize) -> usize {
    if input_count >= WORD_INPUTS {
        WORD_DIGITS
    } else {
        1 << (input_count - 2)
    }
}

/// Input count encoded by a hex string of the given length.
///
/// The length must be exactly `2^(n-2)` for some `n >= 2`.
pub fn input_count_of(init: &str) -> Result<usize> {
    input_count_of_len(init.len())
}

fn input_count_of_len(len: usize) -> Result<usize> {
    if !len.is_power_of_two() {
        return Err(LutError::MalformedEncoding(format!(
            "length {} is not a power of two",
            len
        )));
    }
    let input_count = len.trailing_zeros() as usize + 2;
    if input_count > MAX_INPUTS {
        return Err(LutError::TooManyInputs { input_count });
    }
    Ok(input_count)
}

/// Encode the words of an `n`-input function.
pub(crate) fn encode(input_count: usize, words: &[u64]) -> Result<String> {
    if input_count < 2 {
        return Err(LutError::NoHexForm { input_count });
    }
    let width = digits_per_word(input_count);
    let mask = size_mask(input_count);
    let mut res = String::with_capacity(width * words.len());
    for &w in words.iter().rev() {
        res.push_str(&format!("{:0width$x}", w & mask, width = width));
    }
    Ok(res)
}

/// Decode a hex string into a buffer of the matching size.
///
/// Nothing is written unless the whole string is valid.
pub(crate) fn decode_into(init: &str, words: &mut [u64]) -> Result<()> {
    let input_count = input_count_of(init)?;
    debug!("decode_into(init = {}, inputs = {})", init, input_count);
    assert_eq!(words.len(), array_size(input_count));

    let digits = init
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(u64::from)
                .ok_or_else(|| LutError::MalformedEncoding(format!("invalid character {:?}", c)))
        })
        .collect::<Result<Vec<_>>>()?;

    let width = digits_per_word(input_count);
    for (i, chunk) in digits.chunks(width).enumerate() {
        let value = chunk.iter().fold(0u64, |acc, &d| (acc << 4) | d);
        words[words.len() - 1 - i] = value;
    }
    Ok(())
}

/// Display helper shared by owned tables and views.
///
/// Functions with fewer than 2 inputs have no hex form and are shown as bits.
pub(crate) fn fmt_table<T>(table: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: TruthTable + ?Sized,
{
    match table.to_hex() {
        Ok(s) => f.write_str(&s),
        Err(_) => f.write_str(&table.to_bit_string()),
    }
}
