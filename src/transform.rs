//! Input inversion and permutation.
//!
//! Both transformations work word-at-a-time. For an input `k < 6` the two
//! cofactors are interleaved inside every word, so they are separated with
//! [`INPUT_MASKS`] and moved by shifting by `2^k`. For `k >= 6` they live in
//! alternating blocks of `2^(k-6)` whole words, which are exchanged.

use log::trace;

use crate::error::Result;
use crate::masks::{block_pairs, INPUT_MASKS, WORD_INPUTS};
use crate::table::{check_arity, check_input, TruthTable, TruthTableMut};

/// Input inversion and permutation.
///
/// Implemented for every [`TruthTableMut`].
pub trait Transform: TruthTableMut {
    /// Replace input `input` by its complement.
    fn invert_input(&mut self, input: usize) -> Result<()> {
        check_input(self.input_count(), input)?;
        invert_input_words(self.words_mut(), input);
        Ok(())
    }

    /// Exchange input `input` with input 0.
    fn swap_to_begin(&mut self, input: usize) -> Result<()> {
        check_input(self.input_count(), input)?;
        swap_to_begin_words(self.words_mut(), input);
        Ok(())
    }

    /// Exchange inputs `i` and `j`.
    ///
    /// ```
    /// use lut_rs::prelude::*;
    ///
    /// let mut f = Lut::buf(1, 4);
    /// f.swap_inputs(1, 3).unwrap();
    /// assert_eq!(f, Lut::buf(3, 4));
    /// ```
    fn swap_inputs(&mut self, i: usize, j: usize) -> Result<()> {
        let n = self.input_count();
        check_input(n, i)?;
        check_input(n, j)?;
        swap_inputs_words(self.words_mut(), i, j);
        Ok(())
    }

    /// Copy `src` with inputs `i` and `j` exchanged.
    fn assign_swapped_inputs<S>(&mut self, src: &S, i: usize, j: usize) -> Result<()>
    where
        S: TruthTable + ?Sized,
    {
        check_arity(self.input_count(), src.input_count())?;
        check_input(src.input_count(), i)?;
        check_input(src.input_count(), j)?;
        self.words_mut().copy_from_slice(src.words());
        swap_inputs_words(self.words_mut(), i, j);
        Ok(())
    }
}

impl<T: TruthTableMut + ?Sized> Transform for T {}

pub(crate) fn invert_input_words(words: &mut [u64], input: usize) {
    if input < WORD_INPUTS {
        let mask = INPUT_MASKS[input];
        let shift = 1 << input;
        for w in words.iter_mut() {
            let lower = *w & !mask;
            let upper = *w & mask;
            *w = (lower << shift) | (upper >> shift);
        }
    } else {
        for (j0, j1) in block_pairs(words.len(), input) {
            words.swap(j0, j1);
        }
    }
}

/// Exchange `input` and input 0.
///
/// Every bit falls in one of four quarters `fab` (input = a, input 0 = b):
/// `f00` and `f11` stay in place, `f01` and `f10` trade places.
pub(crate) fn swap_to_begin_words(words: &mut [u64], input: usize) {
    let m0 = INPUT_MASKS[0];
    if input == 0 {
        return;
    }
    if input < WORD_INPUTS {
        let mk = INPUT_MASKS[input];
        let shift = (1 << input) - 1;
        for w in words.iter_mut() {
            let f00 = *w & !mk & !m0;
            let f01 = *w & !mk & m0;
            let f10 = *w & mk & !m0;
            let f11 = *w & mk & m0;
            let nf01 = f10 >> shift;
            let nf10 = f01 << shift;
            debug_assert_eq!(nf01 & nf10, 0);
            *w = f00 | f11 | nf01 | nf10;
        }
    } else {
        for (j0, j1) in block_pairs(words.len(), input) {
            let f00 = words[j0] & !m0;
            let f01 = words[j0] & m0;
            let f10 = words[j1] & !m0;
            let f11 = words[j1] & m0;
            words[j0] = f00 | (f10 << 1);
            words[j1] = f11 | (f01 >> 1);
        }
    }
}

/// Exchange inputs `i` and `j` as a product of swaps with input 0.
pub(crate) fn swap_inputs_words(words: &mut [u64], i: usize, j: usize) {
    trace!("swap_inputs(i = {}, j = {})", i, j);
    if i == j {
        return;
    }
    if i == 0 || j == 0 {
        swap_to_begin_words(words, i.max(j));
        return;
    }
    swap_to_begin_words(words, i);
    swap_to_begin_words(words, j);
    swap_to_begin_words(words, i);
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::LutError;
    use crate::lut::Lut;

    /// Reference implementation: remap every truth-table index.
    fn permute_slow(f: &Lut, map: impl Fn(usize) -> usize) -> Lut {
        let mut res = Lut::new(f.input_count());
        for i in 0..f.bit_count() {
            res.set_val(map(i), f.evaluate(i).unwrap()).unwrap();
        }
        res
    }

    fn sample(n: usize) -> Lut {
        let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
        let mut f = Lut::new(n);
        for w in f.words_mut() {
            *w = rng.random();
        }
        f
    }

    #[test]
    fn test_invert_input_matches_reference() {
        for n in 1..10 {
            let f = sample(n);
            for k in 0..n {
                let mut g = f.clone();
                g.invert_input(k).unwrap();
                assert_eq!(g, permute_slow(&f, |i| i ^ (1 << k)), "n = {}, k = {}", n, k);
            }
        }
    }

    #[test]
    fn test_swap_inputs_matches_reference() {
        for n in 1..10 {
            let f = sample(n);
            for i in 0..n {
                for j in 0..n {
                    let mut g = f.clone();
                    g.swap_inputs(i, j).unwrap();
                    let expected = permute_slow(&f, |x| {
                        let bi = (x >> i) & 1;
                        let bj = (x >> j) & 1;
                        let cleared = x & !(1 << i) & !(1 << j);
                        cleared | (bi << j) | (bj << i)
                    });
                    assert_eq!(g, expected, "n = {}, i = {}, j = {}", n, i, j);
                }
            }
        }
    }

    #[test]
    fn test_swap_to_begin() {
        let mut f = Lut::buf(7, 9);
        f.swap_to_begin(7).unwrap();
        assert_eq!(f, Lut::buf(0, 9));
        f.swap_to_begin(3).unwrap();
        assert_eq!(f, Lut::buf(3, 9));
    }

    #[test]
    fn test_assign_swapped_inputs() {
        let src = Lut::buf(2, 5);
        let mut dst = Lut::new(5);
        dst.assign_swapped_inputs(&src, 2, 4).unwrap();
        assert_eq!(dst, Lut::buf(4, 5));
        assert_eq!(src, Lut::buf(2, 5));

        let mut small = Lut::new(4);
        assert!(small.assign_swapped_inputs(&src, 0, 1).is_err());
    }

    #[test]
    fn test_out_of_range_inputs() {
        let mut f = Lut::and(3);
        assert_eq!(
            f.invert_input(3),
            Err(LutError::InputOutOfRange {
                input: 3,
                input_count: 3
            })
        );
        assert!(f.swap_inputs(0, 5).is_err());
        assert_eq!(f, Lut::and(3));
    }
}
