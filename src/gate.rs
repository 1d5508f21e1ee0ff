//! Canonical gate construction and word-wise Boolean combinators.
//!
//! Builders overwrite the whole table with a primitive function of all the
//! inputs (`set_and`, `set_xor`, ...) or of a single input (`set_wire`).
//! Combinators apply a bitwise operation across the word arrays of two
//! same-arity operands.

use crate::error::Result;
use crate::masks::{array_size, bit_count, block_pairs, size_mask, INPUT_MASKS, WORD_INPUTS, XOR_MASK};
use crate::table::{check_arity, check_input, TruthTable, TruthTableMut};

/// Gate builders and Boolean combinators.
///
/// Implemented for every [`TruthTableMut`].
pub trait Gates: TruthTableMut {
    /// Constant 0.
    fn set_gnd(&mut self) {
        self.words_mut().fill(0);
    }

    /// Constant 1.
    fn set_vcc(&mut self) {
        self.words_mut().fill(!0);
    }

    /// Conjunction of all inputs: only the all-ones index is set.
    fn set_and(&mut self) {
        let n = self.input_count();
        self.set_gnd();
        if n <= WORD_INPUTS {
            self.words_mut()[0] = 1 << (bit_count(n) - 1);
        } else {
            let last = array_size(n) - 1;
            self.words_mut()[last] = 1 << 63;
        }
    }

    /// Disjunction of all inputs: only the all-zeros index is unset.
    fn set_or(&mut self) {
        self.set_vcc();
        self.words_mut()[0] = !1;
    }

    fn set_nand(&mut self) {
        self.set_and();
        self.invert();
    }

    fn set_nor(&mut self) {
        self.set_or();
        self.invert();
    }

    /// Parity of all inputs.
    ///
    /// Each input above the sixth doubles the table by appending the
    /// complement of the half already built.
    fn set_xor(&mut self) {
        let n = self.input_count();
        let words = self.words_mut();
        words[0] = XOR_MASK;
        for i in 0..n.saturating_sub(WORD_INPUTS) {
            let half = 1 << i;
            for j in 0..half {
                words[half + j] = !words[j];
            }
        }
    }

    fn set_exor(&mut self) {
        self.set_xor();
        self.invert();
    }

    /// Single input `wire_input`, inverted if `invert` is set.
    fn set_wire(&mut self, wire_input: usize, invert: bool) -> Result<()> {
        let n = self.input_count();
        check_input(n, wire_input)?;
        if wire_input < WORD_INPUTS {
            let mask = if invert {
                !INPUT_MASKS[wire_input]
            } else {
                INPUT_MASKS[wire_input]
            };
            let mask = mask & size_mask(n);
            self.words_mut().fill(mask);
        } else {
            let words = self.words_mut();
            for (j0, j1) in block_pairs(words.len(), wire_input) {
                words[j0] = if invert { !0 } else { 0 };
                words[j1] = if invert { 0 } else { !0 };
            }
        }
        Ok(())
    }

    /// Buffer of `wire_input`.
    fn set_buf(&mut self, wire_input: usize) -> Result<()> {
        self.set_wire(wire_input, false)
    }

    /// Inverter of `wire_input`.
    fn set_inv(&mut self, wire_input: usize) -> Result<()> {
        self.set_wire(wire_input, true)
    }

    /// `self = !a`
    fn assign_not<A>(&mut self, a: &A) -> Result<()>
    where
        A: TruthTable + ?Sized,
    {
        check_arity(self.input_count(), a.input_count())?;
        for (w, &x) in self.words_mut().iter_mut().zip(a.words()) {
            *w = !x;
        }
        Ok(())
    }

    /// `self = a & b`
    fn assign_and<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        assign_binary(self, a, b, |x, y| x & y)
    }

    /// `self = a | b`
    fn assign_or<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        assign_binary(self, a, b, |x, y| x | y)
    }

    /// `self = !(a & b)`
    fn assign_nand<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        assign_binary(self, a, b, |x, y| !(x & y))
    }

    /// `self = !(a | b)`
    fn assign_nor<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        assign_binary(self, a, b, |x, y| !(x | y))
    }

    /// `self = a ^ b`
    fn assign_xor<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        assign_binary(self, a, b, |x, y| x ^ y)
    }

    /// `self = !(a ^ b)`
    fn assign_exor<A, B>(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        assign_binary(self, a, b, |x, y| !(x ^ y))
    }

    /// `self &= other`
    fn and_assign<O>(&mut self, other: &O) -> Result<()>
    where
        O: TruthTable + ?Sized,
    {
        update(self, other, |x, y| x & y)
    }

    /// `self |= other`
    fn or_assign<O>(&mut self, other: &O) -> Result<()>
    where
        O: TruthTable + ?Sized,
    {
        update(self, other, |x, y| x | y)
    }

    /// `self ^= other`
    fn xor_assign<O>(&mut self, other: &O) -> Result<()>
    where
        O: TruthTable + ?Sized,
    {
        update(self, other, |x, y| x ^ y)
    }
}

impl<T: TruthTableMut + ?Sized> Gates for T {}

fn assign_binary<T, A, B>(dst: &mut T, a: &A, b: &B, op: impl Fn(u64, u64) -> u64) -> Result<()>
where
    T: TruthTableMut + ?Sized,
    A: TruthTable + ?Sized,
    B: TruthTable + ?Sized,
{
    check_arity(dst.input_count(), a.input_count())?;
    check_arity(dst.input_count(), b.input_count())?;
    for ((w, &x), &y) in dst.words_mut().iter_mut().zip(a.words()).zip(b.words()) {
        *w = op(x, y);
    }
    Ok(())
}

fn update<T, O>(dst: &mut T, other: &O, op: impl Fn(u64, u64) -> u64) -> Result<()>
where
    T: TruthTableMut + ?Sized,
    O: TruthTable + ?Sized,
{
    check_arity(dst.input_count(), other.input_count())?;
    for (w, &x) in dst.words_mut().iter_mut().zip(other.words()) {
        *w = op(*w, x);
    }
    Ok(())
}
