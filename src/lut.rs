//! Owned lookup tables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::debug;

use crate::canonical::Canonicalize;
use crate::cofactor::Cofactors;
use crate::error::{LutError, Result};
use crate::gate::Gates;
use crate::hex;
use crate::masks::{array_size, MAX_INPUTS, WORD_INPUTS};
use crate::table::{check_input_count, hash_table, TruthTable, TruthTableMut};
use crate::transform::Transform;

/// A completely-specified Boolean function owning its truth table.
///
/// `Lut` is the owning counterpart of [`LutMut`][crate::view::LutMut]: it
/// supports the same operations through the [`TruthTable`] and
/// [`TruthTableMut`] traits, and can additionally change its input count.
///
/// # Examples
///
/// ```
/// use lut_rs::prelude::*;
///
/// let a = Lut::buf(0, 3);
/// let b = Lut::buf(1, 3);
/// let f = Lut::apply_and(&a, &b).unwrap();
///
/// assert!(f.evaluate(0b011).unwrap());
/// assert!(!f.evaluate(0b101).unwrap());
/// assert!(f.is_dc(2).unwrap());
/// assert_eq!(f.to_hex().unwrap(), "88");
/// ```
#[derive(Clone)]
pub struct Lut {
    input_count: usize,
    words: Vec<u64>,
}

impl Lut {
    /// Create the constant-0 function of the given input count.
    ///
    /// # Panics
    ///
    /// Panics if `input_count` exceeds [`MAX_INPUTS`][crate::masks::MAX_INPUTS].
    pub fn new(input_count: usize) -> Self {
        check_input_count(input_count);
        Self {
            input_count,
            words: vec![0; array_size(input_count)],
        }
    }

    /// Create a function of at most 6 inputs from its single-word pattern.
    pub fn from_mask(input_count: usize, mask: u64) -> Result<Self> {
        if input_count > WORD_INPUTS {
            return Err(LutError::NotSingleWord { input_count });
        }
        Ok(Self {
            input_count,
            words: vec![mask],
        })
    }

    /// Copy any table into an owned one.
    pub fn from_table<T>(table: &T) -> Self
    where
        T: TruthTable + ?Sized,
    {
        Self {
            input_count: table.input_count(),
            words: table.words().to_vec(),
        }
    }

    /// Change the input count, keeping the overlapping prefix of words.
    ///
    /// Words added when growing are zero.
    pub fn set_input_count(&mut self, input_count: usize) {
        check_input_count(input_count);
        debug!("set_input_count({} -> {})", self.input_count, input_count);
        self.words.resize(array_size(input_count), 0);
        self.input_count = input_count;
    }

    /// Copy another table, resizing to its input count if needed.
    pub fn assign_resize<T>(&mut self, other: &T)
    where
        T: TruthTable + ?Sized,
    {
        self.input_count = other.input_count();
        self.words.clear();
        self.words.extend_from_slice(other.words());
    }

    /// Consume the table, returning its words.
    pub fn into_words(self) -> Vec<u64> {
        self.words
    }
}

// Gate constructors
impl Lut {
    fn build(input_count: usize, f: impl FnOnce(&mut Lut)) -> Lut {
        let mut res = Lut::new(input_count);
        f(&mut res);
        res
    }

    /// Constant 0.
    pub fn gnd(input_count: usize) -> Lut {
        Lut::new(input_count)
    }

    /// Constant 1.
    pub fn vcc(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_vcc())
    }

    /// Conjunction of all inputs.
    pub fn and(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_and())
    }

    /// Disjunction of all inputs.
    pub fn or(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_or())
    }

    /// Complemented conjunction of all inputs.
    pub fn nand(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_nand())
    }

    /// Complemented disjunction of all inputs.
    pub fn nor(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_nor())
    }

    /// Parity of all inputs.
    pub fn xor(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_xor())
    }

    /// Complemented parity of all inputs.
    pub fn exor(input_count: usize) -> Lut {
        Lut::build(input_count, |l| l.set_exor())
    }

    /// Single input `wire_input`, possibly inverted, in an `input_count`-input space.
    pub fn wire(wire_input: usize, input_count: usize, invert: bool) -> Result<Lut> {
        let mut res = Lut::new(input_count);
        res.set_wire(wire_input, invert)?;
        Ok(res)
    }

    /// Buffer of input `wire_input`.
    ///
    /// # Panics
    ///
    /// Panics if `wire_input >= input_count`; use [`Lut::wire`] for a checked version.
    pub fn buf(wire_input: usize, input_count: usize) -> Lut {
        match Lut::wire(wire_input, input_count, false) {
            Ok(lut) => lut,
            Err(e) => panic!("{}", e),
        }
    }

    /// Inverter of input `wire_input`.
    ///
    /// # Panics
    ///
    /// Panics if `wire_input >= input_count`; use [`Lut::wire`] for a checked version.
    pub fn inv(wire_input: usize, input_count: usize) -> Lut {
        match Lut::wire(wire_input, input_count, true) {
            Ok(lut) => lut,
            Err(e) => panic!("{}", e),
        }
    }
}

// Combinators
impl Lut {
    fn combine<A, B>(a: &A, b: &B, f: impl FnOnce(&mut Lut, &A, &B) -> Result<()>) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        let mut res = Lut::new(a.input_count());
        f(&mut res, a, b)?;
        Ok(res)
    }

    /// Complement of `a`.
    pub fn apply_not<A>(a: &A) -> Lut
    where
        A: TruthTable + ?Sized,
    {
        let mut res = Lut::from_table(a);
        res.invert();
        res
    }

    pub fn apply_and<A, B>(a: &A, b: &B) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        Lut::combine(a, b, |r, a, b| r.assign_and(a, b))
    }

    pub fn apply_or<A, B>(a: &A, b: &B) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        Lut::combine(a, b, |r, a, b| r.assign_or(a, b))
    }

    pub fn apply_nand<A, B>(a: &A, b: &B) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        Lut::combine(a, b, |r, a, b| r.assign_nand(a, b))
    }

    pub fn apply_nor<A, B>(a: &A, b: &B) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        Lut::combine(a, b, |r, a, b| r.assign_nor(a, b))
    }

    pub fn apply_xor<A, B>(a: &A, b: &B) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        Lut::combine(a, b, |r, a, b| r.assign_xor(a, b))
    }

    pub fn apply_exor<A, B>(a: &A, b: &B) -> Result<Lut>
    where
        A: TruthTable + ?Sized,
        B: TruthTable + ?Sized,
    {
        Lut::combine(a, b, |r, a, b| r.assign_exor(a, b))
    }
}

// Derived tables
impl Lut {
    /// Cofactor on `input`, keeping the input in position as a don't-care.
    pub fn cofactor(&self, input: usize, value: bool) -> Result<Lut> {
        let mut res = self.clone();
        res.set_to_cofactor(input, value)?;
        Ok(res)
    }

    /// Cofactor on `input` as an `(n-1)`-input function.
    ///
    /// The last input takes the place of the removed one.
    pub fn compact_cofactor(&self, input: usize, value: bool) -> Result<Lut> {
        let mut res = Lut::new(self.input_count.saturating_sub(1));
        res.assign_compact_cofactor(self, input, value)?;
        Ok(res)
    }

    /// Rebuild a function from its two cofactors on `input`.
    pub fn from_cofactors<N, P>(neg: &N, pos: &P, input: usize) -> Result<Lut>
    where
        N: TruthTable + ?Sized,
        P: TruthTable + ?Sized,
    {
        let mut res = Lut::new(neg.input_count());
        res.assign_from_cofactors(neg, pos, input)?;
        Ok(res)
    }

    /// Rebuild an `(n+1)`-input function from its two compact cofactors on `input`.
    pub fn from_compact_cofactors<N, P>(neg: &N, pos: &P, input: usize) -> Result<Lut>
    where
        N: TruthTable + ?Sized,
        P: TruthTable + ?Sized,
    {
        if neg.input_count() >= MAX_INPUTS {
            return Err(LutError::ArityMismatch {
                expected: MAX_INPUTS - 1,
                found: neg.input_count(),
            });
        }
        let mut res = Lut::new(neg.input_count() + 1);
        res.assign_from_compact_cofactors(neg, pos, input)?;
        Ok(res)
    }

    /// Copy with inputs `i` and `j` exchanged.
    pub fn swapped_inputs(&self, i: usize, j: usize) -> Result<Lut> {
        let mut res = self.clone();
        res.swap_inputs(i, j)?;
        Ok(res)
    }

    /// Pseudo-representative of the function's NPN class.
    pub fn pseudo_representant(&self) -> Lut {
        let mut res = self.clone();
        res.make_pseudo_representant();
        res
    }
}

impl TruthTable for Lut {
    fn input_count(&self) -> usize {
        self.input_count
    }
    fn words(&self) -> &[u64] {
        &self.words
    }
}

impl TruthTableMut for Lut {
    fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }
}

impl Default for Lut {
    fn default() -> Self {
        Lut::new(0)
    }
}

impl<T: TruthTable + ?Sized> PartialEq<T> for Lut {
    fn eq(&self, other: &T) -> bool {
        self.equals(other)
    }
}

impl Eq for Lut {}

impl Hash for Lut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_table(self, state);
    }
}

impl FromStr for Lut {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self> {
        let mut res = Lut::new(hex::input_count_of(s)?);
        hex::decode_into(s, &mut res.words)?;
        Ok(res)
    }
}

impl fmt::Display for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::fmt_table(self, f)
    }
}

impl fmt::Debug for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lut")
            .field("inputs", &self.input_count)
            .field("table", &format_args!("{}", self))
            .finish()
    }
}
