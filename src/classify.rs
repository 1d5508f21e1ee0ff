//! Structural classification of Boolean functions.
//!
//! All queries are read-only and work on any [`TruthTable`]. Per-input
//! queries for `k < 6` compare each word with itself shifted by `2^k`, which
//! lines up the two cofactors of input `k` bit for bit; for `k >= 6` the
//! cofactors are whole blocks of words and are compared directly.

use log::debug;

use crate::cofactor::cofactor_words;
use crate::error::Result;
use crate::lut::Lut;
use crate::masks::{block_pairs, INPUT_MASKS, WORD_INPUTS};
use crate::table::{check_input, TruthTable, TruthTableMut};

/// How a function simplifies with respect to a single input.
///
/// `ForcedToAB` means that holding the input at `A` forces the output to `B`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SingleInputSimplification {
    None,
    Dc,
    ForcedTo00,
    ForcedTo01,
    ForcedTo10,
    ForcedTo11,
    Toggles,
}

/// How a function simplifies with respect to a pair of inputs `(i, j)`.
///
/// Writing `fab` for the cofactor with input `i` at `a` and input `j` at `b`,
/// `AndAB` means that `fab` is the only quarter that differs from the other
/// three, so the pair collapses to a single AND-type input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwoInputSimplification {
    None,
    /// `f01 == f10`: the inputs can be exchanged.
    Symm,
    /// `f00 == f11`: the inputs can be exchanged together with an inversion of both.
    SymmInv,
    And00,
    And01,
    And10,
    And11,
    /// `f00 == f11` and `f01 == f10`: the pair collapses to its parity.
    Xor,
}

impl TwoInputSimplification {
    /// Whether the pair can be replaced by a single two-input gate.
    pub fn is_factorization(self) -> bool {
        matches!(
            self,
            Self::And00 | Self::And01 | Self::And10 | Self::And11 | Self::Xor
        )
    }
}

/// Structural queries.
///
/// Implemented for every [`TruthTable`].
pub trait Classify: TruthTable {
    /// Whether the output does not depend on any input.
    fn is_constant(&self) -> bool {
        self.is_constant_value(false) || self.is_constant_value(true)
    }

    /// Whether the output is the constant `value`.
    fn is_constant_value(&self, value: bool) -> bool {
        let mask = self.size_mask();
        let expected = if value { mask } else { 0 };
        self.words().iter().all(|&w| w & mask == expected)
    }

    fn is_gnd(&self) -> bool {
        self.is_constant_value(false)
    }

    fn is_vcc(&self) -> bool {
        self.is_constant_value(true)
    }

    fn is_and(&self) -> bool {
        self.equals(&Lut::and(self.input_count()))
    }

    fn is_or(&self) -> bool {
        self.equals(&Lut::or(self.input_count()))
    }

    fn is_nand(&self) -> bool {
        self.equals(&Lut::nand(self.input_count()))
    }

    fn is_nor(&self) -> bool {
        self.equals(&Lut::nor(self.input_count()))
    }

    fn is_xor(&self) -> bool {
        self.equals(&Lut::xor(self.input_count()))
    }

    fn is_exor(&self) -> bool {
        self.equals(&Lut::exor(self.input_count()))
    }

    /// AND, OR, NAND or NOR up to input polarity: exactly one bit differs
    /// from one of the two constants.
    fn is_generalized_and(&self) -> bool {
        let set = self.count_set_bits();
        set == 1 || set + 1 == self.bit_count()
    }

    /// XOR or EXOR of all inputs.
    fn is_generalized_xor(&self) -> bool {
        self.is_xor() || self.is_exor()
    }

    /// Whether `input` has no influence on the output.
    fn is_dc(&self, input: usize) -> Result<bool> {
        check_input(self.input_count(), input)?;
        let words = self.words();
        if input < WORD_INPUTS {
            let shift = 1 << input;
            let acc = words.iter().fold(0, |acc, &w| acc | ((w << shift) ^ w));
            Ok(acc & INPUT_MASKS[input] & self.size_mask() == 0)
        } else {
            Ok(block_pairs(words.len(), input).all(|(j0, j1)| words[j0] == words[j1]))
        }
    }

    /// Whether some input has no influence on the output.
    fn has_dc(&self) -> bool {
        (0..self.input_count()).any(|k| matches!(self.is_dc(k), Ok(true)))
    }

    /// Whether flipping `input` always flips the output.
    fn toggles(&self, input: usize) -> Result<bool> {
        check_input(self.input_count(), input)?;
        let words = self.words();
        if input < WORD_INPUTS {
            let shift = 1 << input;
            let acc = words.iter().fold(!0, |acc, &w| acc & ((w << shift) ^ w));
            let exclude = !INPUT_MASKS[input] | !self.size_mask();
            Ok(acc | exclude == !0)
        } else {
            Ok(block_pairs(words.len(), input).all(|(j0, j1)| words[j0] ^ words[j1] == !0))
        }
    }

    /// Whether holding `input` at `in_val` forces the output to `out_val`.
    fn forces_value(&self, input: usize, in_val: bool, out_val: bool) -> Result<bool> {
        check_input(self.input_count(), input)?;
        let words = self.words();
        let expected = if out_val { !0 } else { 0 };
        if input < WORD_INPUTS {
            let select = if in_val {
                INPUT_MASKS[input]
            } else {
                !INPUT_MASKS[input]
            };
            let mask = select & self.size_mask();
            Ok(words.iter().all(|&w| (w ^ expected) & mask == 0))
        } else {
            Ok(block_pairs(words.len(), input)
                .map(|(j0, j1)| if in_val { words[j1] } else { words[j0] })
                .all(|w| w == expected))
        }
    }

    /// Number of assignments satisfying the unateness implication of
    /// `input` in the given polarity.
    ///
    /// Positive polarity counts `!f|k=0 | f|k=1`, negative polarity counts
    /// `f|k=0 | !f|k=1`. Both cofactors keep all `n` inputs, so the maximum
    /// is `2^n`.
    fn count_unate_polarity(&self, input: usize, polarity: bool) -> Result<usize> {
        check_input(self.input_count(), input)?;
        Ok(unate_count(self, input, polarity))
    }

    /// The larger of the two polarity counts.
    fn count_unate(&self, input: usize) -> Result<usize> {
        let positive = self.count_unate_polarity(input, true)?;
        let negative = self.count_unate_polarity(input, false)?;
        Ok(positive.max(negative))
    }

    /// Whether the function is monotone in `input` with the given polarity.
    fn is_unate_polarity(&self, input: usize, polarity: bool) -> Result<bool> {
        Ok(self.count_unate_polarity(input, polarity)? == self.bit_count())
    }

    /// Whether the function is monotone in `input` in either polarity.
    fn is_unate(&self, input: usize) -> Result<bool> {
        Ok(self.is_unate_polarity(input, true)? || self.is_unate_polarity(input, false)?)
    }

    fn is_binate(&self, input: usize) -> Result<bool> {
        Ok(!self.is_unate(input)?)
    }

    /// Classify the effect of a single input.
    fn single_input_simplification(&self, input: usize) -> Result<SingleInputSimplification> {
        use SingleInputSimplification::*;

        if self.is_dc(input)? {
            return Ok(Dc);
        }
        if self.toggles(input)? {
            return Ok(Toggles);
        }
        let forced = [
            (false, false, ForcedTo00),
            (false, true, ForcedTo01),
            (true, false, ForcedTo10),
            (true, true, ForcedTo11),
        ];
        for (in_val, out_val, res) in forced {
            if self.forces_value(input, in_val, out_val)? {
                return Ok(res);
            }
        }
        Ok(None)
    }

    /// Classify the joint effect of inputs `i` and `j`.
    ///
    /// AND-type factorizations take priority over XOR, which takes
    /// priority over plain symmetries. A pair made of the same input twice
    /// is reported as [`TwoInputSimplification::None`].
    fn two_input_simplification(&self, i: usize, j: usize) -> Result<TwoInputSimplification> {
        use TwoInputSimplification::*;

        let n = self.input_count();
        check_input(n, i)?;
        check_input(n, j)?;
        if i == j {
            return Ok(None);
        }

        let quarter = |a: bool, b: bool| {
            let mut q = Lut::from_table(self);
            cofactor_words(q.words_mut(), i, a);
            cofactor_words(q.words_mut(), j, b);
            q
        };
        let f00 = quarter(false, false);
        let f01 = quarter(false, true);
        let f10 = quarter(true, false);
        let f11 = quarter(true, true);

        let res = if f10 == f11 && f11 == f00 {
            And01
        } else if f10 == f11 && f11 == f01 {
            And00
        } else if f00 == f01 && f01 == f10 {
            And11
        } else if f00 == f01 && f01 == f11 {
            And10
        } else if f01 == f10 && f00 == f11 {
            Xor
        } else if f01 == f10 {
            Symm
        } else if f00 == f11 {
            SymmInv
        } else {
            None
        };
        Ok(res)
    }

    /// Whether some input toggles the output or forces it to a constant.
    ///
    /// Every input of a constant function forces it, so constants with at
    /// least one input qualify.
    fn has_single_input_factorization(&self) -> bool {
        let forces = |k: usize, in_val: bool, out_val: bool| {
            matches!(self.forces_value(k, in_val, out_val), Ok(true))
        };
        (0..self.input_count()).any(|k| {
            matches!(self.toggles(k), Ok(true))
                || forces(k, false, false)
                || forces(k, false, true)
                || forces(k, true, false)
                || forces(k, true, true)
        })
    }

    /// Whether some pair of inputs collapses to an AND-type or XOR-type gate.
    ///
    /// A pair of two don't-care inputs has four equal quarters and counts
    /// as AND-type, so constants with at least two inputs qualify.
    fn has_two_input_factorization(&self) -> bool {
        let n = self.input_count();
        debug!("has_two_input_factorization(inputs = {})", n);
        (0..n).any(|i| {
            (i + 1..n).any(|j| {
                self.two_input_simplification(i, j)
                    .map_or(false, TwoInputSimplification::is_factorization)
            })
        })
    }
}

impl<T: TruthTable + ?Sized> Classify for T {}

/// Unchecked body of [`Classify::count_unate_polarity`].
pub(crate) fn unate_count<T>(table: &T, input: usize, polarity: bool) -> usize
where
    T: TruthTable + ?Sized,
{
    let mut neg = table.words().to_vec();
    let mut pos = table.words().to_vec();
    cofactor_words(&mut neg, input, false);
    cofactor_words(&mut pos, input, true);
    let mask = table.size_mask();
    neg.iter()
        .zip(&pos)
        .map(|(&a, &b)| if polarity { !a | b } else { a | !b })
        .map(|w| (w & mask).count_ones() as usize)
        .sum()
}
