//! Shannon cofactors.
//!
//! Two flavours are provided:
//!
//! - **Position-preserving** cofactors keep the arity: the selected half of
//!   the table is replicated into the other half, so the input stays in place
//!   as a don't-care.
//! - **Compact** cofactors drop one input: the selected input is swapped to
//!   the last position and the table is cut in half. As a consequence the
//!   last input of the source takes the place of the removed one.
//!
//! For any function `f` and input `k`:
//!
//! ```text
//! f = from_cofactors(f|k=0, f|k=1, k) = from_compact_cofactors(f|k=0, f|k=1, k)
//! ```

use log::debug;

use crate::error::Result;
use crate::masks::{array_size, bit_count, block_pairs, size_mask, INPUT_MASKS, WORD_INPUTS};
use crate::table::{check_arity, check_input, TruthTable, TruthTableMut};
use crate::transform::swap_inputs_words;

/// Cofactor extraction and reassembly.
///
/// Implemented for every [`TruthTableMut`].
pub trait Cofactors: TruthTableMut {
    /// Fix `input` to `value` in place, keeping the input as a don't-care.
    fn set_to_cofactor(&mut self, input: usize, value: bool) -> Result<()> {
        check_input(self.input_count(), input)?;
        cofactor_words(self.words_mut(), input, value);
        Ok(())
    }

    /// `self = src` with `input` fixed to `value`.
    fn assign_cofactor<S>(&mut self, src: &S, input: usize, value: bool) -> Result<()>
    where
        S: TruthTable + ?Sized,
    {
        check_arity(self.input_count(), src.input_count())?;
        check_input(src.input_count(), input)?;
        self.words_mut().copy_from_slice(src.words());
        cofactor_words(self.words_mut(), input, value);
        Ok(())
    }

    /// Rebuild `self` from its cofactors on `input`: `neg` where the input
    /// is 0 and `pos` where it is 1.
    fn assign_from_cofactors<N, P>(&mut self, neg: &N, pos: &P, input: usize) -> Result<()>
    where
        N: TruthTable + ?Sized,
        P: TruthTable + ?Sized,
    {
        let n = self.input_count();
        check_arity(n, neg.input_count())?;
        check_arity(n, pos.input_count())?;
        check_input(n, input)?;

        let words = self.words_mut();
        if input < WORD_INPUTS {
            let mask = INPUT_MASKS[input];
            for ((w, &a), &b) in words.iter_mut().zip(neg.words()).zip(pos.words()) {
                *w = (a & !mask) | (b & mask);
            }
        } else {
            for (j0, j1) in block_pairs(words.len(), input) {
                words[j0] = neg.words()[j0];
                words[j1] = pos.words()[j1];
            }
        }
        Ok(())
    }

    /// `self = src` with `input` fixed to `value`, as an `(n-1)`-input function.
    fn assign_compact_cofactor<S>(&mut self, src: &S, input: usize, value: bool) -> Result<()>
    where
        S: TruthTable + ?Sized,
    {
        let n = src.input_count();
        check_input(n, input)?;
        check_arity(n - 1, self.input_count())?;
        debug!(
            "assign_compact_cofactor(inputs = {}, input = {}, value = {})",
            n, input, value
        );

        let mut tmp = src.words().to_vec();
        swap_inputs_words(&mut tmp, input, n - 1);
        let words = self.words_mut();
        if n > WORD_INPUTS {
            let half = array_size(n - 1);
            let offset = if value { half } else { 0 };
            words.copy_from_slice(&tmp[offset..offset + half]);
        } else {
            let shift = if value { bit_count(n - 1) } else { 0 };
            words[0] = (tmp[0] >> shift) & size_mask(n - 1);
        }
        Ok(())
    }

    /// Rebuild an `(n+1)`-input `self` from its compact cofactors on `input`.
    fn assign_from_compact_cofactors<N, P>(&mut self, neg: &N, pos: &P, input: usize) -> Result<()>
    where
        N: TruthTable + ?Sized,
        P: TruthTable + ?Sized,
    {
        let n = self.input_count();
        check_input(n, input)?;
        check_arity(n - 1, neg.input_count())?;
        check_arity(n - 1, pos.input_count())?;
        debug!("assign_from_compact_cofactors(inputs = {}, input = {})", n, input);

        let words = self.words_mut();
        if n > WORD_INPUTS {
            let half = array_size(n - 1);
            words[..half].copy_from_slice(neg.words());
            words[half..].copy_from_slice(pos.words());
        } else {
            let mask = size_mask(n - 1);
            words[0] = (neg.words()[0] & mask) | ((pos.words()[0] & mask) << bit_count(n - 1));
        }
        swap_inputs_words(words, n - 1, input);
        Ok(())
    }
}

impl<T: TruthTableMut + ?Sized> Cofactors for T {}

/// Replicate the `value` half of `input` into the other half.
pub(crate) fn cofactor_words(words: &mut [u64], input: usize, value: bool) {
    if input < WORD_INPUTS {
        let shift = 1 << input;
        let mask = if value {
            INPUT_MASKS[input]
        } else {
            !INPUT_MASKS[input]
        };
        for w in words.iter_mut() {
            let kept = *w & mask;
            *w = if value {
                kept | (kept >> shift)
            } else {
                kept | (kept << shift)
            };
        }
    } else {
        for (j0, j1) in block_pairs(words.len(), input) {
            if value {
                words[j0] = words[j1];
            } else {
                words[j1] = words[j0];
            }
        }
    }
}

/// Number of set bits of `f` restricted to the half where `input == value`.
///
/// This is half the set-bit count of the position-preserving cofactor.
pub(crate) fn half_set_bits<T>(table: &T, input: usize, value: bool) -> usize
where
    T: TruthTable + ?Sized,
{
    let words = table.words();
    if input < WORD_INPUTS {
        let select = if value {
            INPUT_MASKS[input]
        } else {
            !INPUT_MASKS[input]
        };
        let mask = select & table.size_mask();
        words.iter().map(|&w| (w & mask).count_ones() as usize).sum()
    } else {
        block_pairs(words.len(), input)
            .map(|(j0, j1)| if value { words[j1] } else { words[j0] })
            .map(|w| w.count_ones() as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::classify::Classify;
    use crate::error::LutError;
    use crate::lut::Lut;

    fn sample(n: usize, seed: u64) -> Lut {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut f = Lut::new(n);
        for w in f.words_mut() {
            *w = rng.random();
        }
        f
    }

    #[test]
    fn test_cofactor_is_dc_and_matches_evaluation() {
        for n in 1..10 {
            let f = sample(n, 7 * n as u64);
            for k in 0..n {
                for value in [false, true] {
                    let c = f.cofactor(k, value).unwrap();
                    assert!(c.is_dc(k).unwrap(), "n = {}, k = {}", n, k);
                    for i in 0..f.bit_count() {
                        let j = if value { i | (1 << k) } else { i & !(1 << k) };
                        assert_eq!(c.evaluate(i).unwrap(), f.evaluate(j).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn test_reassemble_from_cofactors() {
        for n in 1..10 {
            let f = sample(n, 3 + n as u64);
            for k in 0..n {
                let neg = f.cofactor(k, false).unwrap();
                let pos = f.cofactor(k, true).unwrap();
                assert_eq!(Lut::from_cofactors(&neg, &pos, k).unwrap(), f);
            }
        }
    }

    #[test]
    fn test_compact_cofactor_of_last_input() {
        for n in 1..10 {
            let f = sample(n, 11 * n as u64);
            for value in [false, true] {
                let c = f.compact_cofactor(n - 1, value).unwrap();
                assert_eq!(c.input_count(), n - 1);
                let offset = if value { 1 << (n - 1) } else { 0 };
                for i in 0..c.bit_count() {
                    assert_eq!(c.evaluate(i).unwrap(), f.evaluate(offset + i).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_compact_cofactor_moves_last_input() {
        // f = x0 & x3 over 4 inputs; removing x1 leaves x3 in slot 1.
        let f = Lut::apply_and(&Lut::buf(0, 4), &Lut::buf(3, 4)).unwrap();
        let expected = Lut::apply_and(&Lut::buf(0, 3), &Lut::buf(1, 3)).unwrap();
        assert_eq!(f.compact_cofactor(1, true).unwrap(), expected);
        assert_eq!(f.compact_cofactor(1, false).unwrap(), expected);

        let c = f.compact_cofactor(3, false).unwrap();
        assert_eq!(c, Lut::gnd(3));
    }

    #[test]
    fn test_reassemble_from_compact_cofactors() {
        for n in 1..10 {
            let f = sample(n, 5 + 13 * n as u64);
            for k in 0..n {
                let neg = f.compact_cofactor(k, false).unwrap();
                let pos = f.compact_cofactor(k, true).unwrap();
                assert_eq!(Lut::from_compact_cofactors(&neg, &pos, k).unwrap(), f);
            }
        }
    }

    #[test]
    fn test_compact_cofactor_arity_mismatch() {
        let f = Lut::and(4);
        let mut dst = Lut::new(4);
        assert_eq!(
            dst.assign_compact_cofactor(&f, 0, true),
            Err(LutError::ArityMismatch {
                expected: 3,
                found: 4
            })
        );
        let mut big = Lut::new(5);
        assert!(big
            .assign_from_compact_cofactors(&Lut::gnd(3), &Lut::gnd(4), 0)
            .is_err());
    }

    #[test]
    fn test_half_set_bits() {
        let f = Lut::buf(2, 8);
        assert_eq!(half_set_bits(&f, 2, true), 128);
        assert_eq!(half_set_bits(&f, 2, false), 0);
        assert_eq!(half_set_bits(&f, 7, true), 64);

        let g = Lut::from_mask(2, 0xffff_fff8).unwrap();
        assert_eq!(half_set_bits(&g, 0, true), 1);
        assert_eq!(half_set_bits(&g, 1, false), 0);
    }
}
