//! Shared capability traits of owned tables and views.
//!
//! [`TruthTable`] gives read access to the packed words of a function,
//! [`TruthTableMut`] adds write access. Every other operation of the crate
//! is built on top of these two traits, so [`Lut`][crate::lut::Lut],
//! [`LutRef`] and [`LutMut`] expose exactly the same operation surface.

use std::hash::Hasher;

use crate::error::{LutError, Result};
use crate::hex;
use crate::masks::{array_size, bit_count, size_mask, MAX_INPUTS, WORD_BITS};
use crate::view::{LutMut, LutRef};

/// Read access to the packed truth table of a Boolean function.
pub trait TruthTable {
    /// Number of inputs of the function.
    fn input_count(&self) -> usize;

    /// The packed words, exactly `array_size(input_count)` of them.
    fn words(&self) -> &[u64];

    /// Number of words of the table.
    fn array_size(&self) -> usize {
        array_size(self.input_count())
    }

    /// Number of truth-table bits (`2^n`).
    fn bit_count(&self) -> usize {
        bit_count(self.input_count())
    }

    /// Mask of the meaningful bits of each word.
    fn size_mask(&self) -> u64 {
        size_mask(self.input_count())
    }

    /// Output value for the given input assignment (bit `k` is input `k`).
    fn evaluate(&self, input_values: usize) -> Result<bool> {
        check_values(self.input_count(), input_values)?;
        let word = self.words()[input_values / WORD_BITS];
        Ok((word >> (input_values % WORD_BITS)) & 1 == 1)
    }

    /// Number of input assignments evaluating to 1.
    fn count_set_bits(&self) -> usize {
        let mask = self.size_mask();
        self.words().iter().map(|&w| (w & mask).count_ones() as usize).sum()
    }

    /// Logical equality: same input count and same meaningful bits.
    fn equals<O>(&self, other: &O) -> bool
    where
        O: TruthTable + ?Sized,
    {
        if self.input_count() != other.input_count() {
            return false;
        }
        let mask = self.size_mask();
        self.words()
            .iter()
            .zip(other.words())
            .all(|(&a, &b)| (a ^ b) & mask == 0)
    }

    /// Hash of the meaningful bits, consistent with [`equals`][Self::equals].
    fn hash_value(&self) -> u64 {
        let mask = self.size_mask();
        self.words().iter().fold(0, |acc, &w| acc ^ (w & mask))
    }

    /// Hexadecimal encoding, most-significant nibble first.
    fn to_hex(&self) -> Result<String> {
        hex::encode(self.input_count(), self.words())
    }

    /// One `0`/`1` character per truth-table index, index 0 first.
    fn to_bit_string(&self) -> String {
        let words = self.words();
        (0..self.bit_count())
            .map(|i| {
                if (words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }

    /// Borrow the table as a read-only view.
    fn view(&self) -> LutRef<'_> {
        LutRef::from_parts(self.input_count(), self.words())
    }
}

/// Write access to the packed truth table of a Boolean function.
pub trait TruthTableMut: TruthTable {
    /// The packed words, exactly `array_size(input_count)` of them.
    fn words_mut(&mut self) -> &mut [u64];

    /// Set the output value for the given input assignment.
    fn set_val(&mut self, input_values: usize, val: bool) -> Result<()> {
        check_values(self.input_count(), input_values)?;
        let bit = 1u64 << (input_values % WORD_BITS);
        let word = &mut self.words_mut()[input_values / WORD_BITS];
        if val {
            *word |= bit;
        } else {
            *word &= !bit;
        }
        Ok(())
    }

    /// Invert the output.
    fn invert(&mut self) {
        for w in self.words_mut() {
            *w = !*w;
        }
    }

    /// Copy another table with the same input count.
    fn assign<O>(&mut self, other: &O) -> Result<()>
    where
        O: TruthTable + ?Sized,
    {
        check_arity(self.input_count(), other.input_count())?;
        self.words_mut().copy_from_slice(other.words());
        Ok(())
    }

    /// Overwrite the table from its hexadecimal encoding.
    ///
    /// The encoding must describe a function with the same input count.
    fn assign_hex(&mut self, init: &str) -> Result<()> {
        let input_count = hex::input_count_of(init)?;
        check_arity(self.input_count(), input_count)?;
        hex::decode_into(init, self.words_mut())
    }

    /// Borrow the table as a mutable view.
    fn view_mut(&mut self) -> LutMut<'_> {
        let input_count = self.input_count();
        LutMut::from_parts(input_count, self.words_mut())
    }
}

/// Fail unless both input counts are equal.
pub(crate) fn check_arity(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(LutError::ArityMismatch { expected, found });
    }
    Ok(())
}

/// Fail unless `input` is an input of an `input_count`-input function.
pub(crate) fn check_input(input_count: usize, input: usize) -> Result<()> {
    if input >= input_count {
        return Err(LutError::InputOutOfRange { input, input_count });
    }
    Ok(())
}

fn check_values(input_count: usize, values: usize) -> Result<()> {
    if values >= bit_count(input_count) {
        return Err(LutError::ValuesOutOfRange {
            values,
            input_count,
        });
    }
    Ok(())
}

pub(crate) fn check_input_count(input_count: usize) {
    assert!(
        input_count <= MAX_INPUTS,
        "Input count should be in the range 0..={}",
        MAX_INPUTS
    );
}

pub(crate) fn check_max_inputs(input_count: usize) -> Result<()> {
    if input_count > MAX_INPUTS {
        return Err(LutError::TooManyInputs { input_count });
    }
    Ok(())
}

/// Feed the meaningful content of a table into a standard hasher.
pub(crate) fn hash_table<T, H>(table: &T, state: &mut H)
where
    T: TruthTable + ?Sized,
    H: Hasher,
{
    let mask = table.size_mask();
    state.write_usize(table.input_count());
    for &w in table.words() {
        state.write_u64(w & mask);
    }
}
