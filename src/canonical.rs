//! Pseudo-representatives of NPN classes.
//!
//! Two functions are NPN-equivalent when one can be obtained from the other
//! by permuting inputs, inverting inputs and inverting the output. Finding
//! the exact class representative is expensive; instead a function is
//! brought into a normal form by three deterministic local steps:
//!
//! 1. invert the output if fewer than half of the bits are set;
//! 2. invert every input whose 0-cofactor has more set bits than its 1-cofactor;
//! 3. sort the inputs by ascending `(1-cofactor set bits, positive unateness count)`.
//!
//! The result is a *pseudo*-representative: equivalent functions often, but
//! not always, map to the same table.

use log::{debug, trace};

use crate::classify::unate_count;
use crate::cofactor::half_set_bits;
use crate::error::Result;
use crate::table::{check_arity, TruthTable, TruthTableMut};
use crate::transform::{invert_input_words, swap_inputs_words};

/// Sort key of one input.
type InputKey = (usize, usize);

fn input_key<T>(table: &T, input: usize) -> InputKey
where
    T: TruthTable + ?Sized,
{
    (half_set_bits(table, input, true), unate_count(table, input, true))
}

/// Pseudo-representative check.
///
/// Implemented for every [`TruthTable`].
pub trait Canonical: TruthTable {
    /// Whether the table is already in pseudo-representative form.
    fn is_pseudo_representant(&self) -> bool {
        let n = self.input_count();
        if 2 * self.count_set_bits() < self.bit_count() {
            return false;
        }
        if (0..n).any(|k| half_set_bits(self, k, false) > half_set_bits(self, k, true)) {
            return false;
        }
        let keys: Vec<InputKey> = (0..n).map(|k| input_key(self, k)).collect();
        keys.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T: TruthTable + ?Sized> Canonical for T {}

/// Pseudo-representative construction.
///
/// Implemented for every [`TruthTableMut`].
pub trait Canonicalize: TruthTableMut {
    /// Replace the table by its pseudo-representative.
    fn make_pseudo_representant(&mut self) {
        let n = self.input_count();
        debug!("make_pseudo_representant(inputs = {})", n);

        if 2 * self.count_set_bits() < self.bit_count() {
            trace!("invert output");
            self.invert();
        }

        for k in 0..n {
            if half_set_bits(&*self, k, false) > half_set_bits(&*self, k, true) {
                trace!("invert input {}", k);
                invert_input_words(self.words_mut(), k);
            }
        }

        // Selection sort: ties keep the lower index in place.
        let mut keys: Vec<InputKey> = (0..n).map(|k| input_key(&*self, k)).collect();
        for i in 0..n {
            let mut best = i;
            for j in i + 1..n {
                if keys[j] < keys[best] {
                    best = j;
                }
            }
            if best != i {
                swap_inputs_words(self.words_mut(), i, best);
                keys.swap(i, best);
            }
        }
        debug_assert!(self.is_pseudo_representant());
    }

    /// `self` = pseudo-representative of `src`.
    fn assign_pseudo_representant<S>(&mut self, src: &S) -> Result<()>
    where
        S: TruthTable + ?Sized,
    {
        check_arity(self.input_count(), src.input_count())?;
        self.words_mut().copy_from_slice(src.words());
        self.make_pseudo_representant();
        Ok(())
    }
}

impl<T: TruthTableMut + ?Sized> Canonicalize for T {}

#[cfg(test)]
mod tests {
    use test_log::test;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::classify::Classify;
    use crate::lut::Lut;
    use crate::transform::Transform;

    fn sample(n: usize, seed: u64) -> Lut {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut f = Lut::new(n);
        for w in f.words_mut() {
            *w = rng.random();
        }
        f
    }

    #[test]
    fn test_gates_collapse_to_or() {
        for n in 2..9 {
            for f in [Lut::and(n), Lut::or(n), Lut::nand(n), Lut::nor(n)] {
                assert_eq!(f.pseudo_representant(), Lut::or(n), "{:?}", f);
            }
        }
    }

    #[test]
    fn test_xor_is_representant() {
        for n in 1..9 {
            assert!(Lut::xor(n).is_pseudo_representant());
            assert_eq!(Lut::xor(n).pseudo_representant(), Lut::xor(n));
        }
    }

    #[test]
    fn test_wire_moves_last() {
        assert_eq!(Lut::buf(3, 5).pseudo_representant(), Lut::buf(4, 5));
        assert_eq!(Lut::inv(0, 3).pseudo_representant(), Lut::buf(2, 3));
        assert!(!Lut::inv(0, 3).is_pseudo_representant());
        assert!(!Lut::buf(0, 3).is_pseudo_representant());
        assert!(Lut::buf(2, 3).is_pseudo_representant());
    }

    #[test]
    fn test_ties_sort_by_ascending_unateness() {
        // Both representatives have three inputs with equal 1-cofactor
        // counts, and the one with the largest unateness count goes last.
        let cases = [("19", "e6", 6, [6, 6, 8]), ("3c", "66", 4, [4, 4, 8])];
        for (src, expected, ones, unate) in cases {
            let g = src.parse::<Lut>().unwrap().pseudo_representant();
            assert_eq!(g.to_hex().unwrap(), expected);
            for k in 0..3 {
                assert_eq!(g.cofactor(k, true).unwrap().count_set_bits(), ones, "input {}", k);
                assert_eq!(g.count_unate_polarity(k, true).unwrap(), unate[k], "input {}", k);
            }
            let last = g.count_unate_polarity(2, true).unwrap();
            assert!(g.count_unate_polarity(1, true).unwrap() < last);
        }

        // The reversed order is rejected.
        let reversed = "e6".parse::<Lut>().unwrap().swapped_inputs(0, 2).unwrap();
        assert!(!reversed.is_pseudo_representant());
    }

    #[test]
    fn test_majority_output() {
        assert!(!Lut::gnd(4).is_pseudo_representant());
        assert!(Lut::vcc(4).is_pseudo_representant());
        assert_eq!(Lut::gnd(4).pseudo_representant(), Lut::vcc(4));
    }

    #[test]
    fn test_random_tables() {
        for n in 0..11 {
            for seed in 0..8 {
                let f = sample(n, seed * 31 + n as u64);
                let g = f.pseudo_representant();
                assert!(g.is_pseudo_representant(), "n = {}, seed = {}", n, seed);
                assert_eq!(g.pseudo_representant(), g, "n = {}, seed = {}", n, seed);
                assert!(2 * g.count_set_bits() >= g.bit_count());
            }
        }
    }

    #[test]
    fn test_input_inversion_keeps_output_polarity() {
        // Input inversion preserves the set-bit count, so the output
        // polarity chosen for both tables is the same.
        for n in 1..9 {
            let f = sample(n, 1000 + n as u64);
            for k in 0..n {
                let mut g = f.clone();
                g.invert_input(k).unwrap();
                let a = f.pseudo_representant();
                let b = g.pseudo_representant();
                assert_eq!(a.count_set_bits(), b.count_set_bits());
            }
        }
    }

    #[test]
    fn test_assign_pseudo_representant() {
        let src = Lut::nand(4);
        let mut dst = Lut::new(4);
        dst.assign_pseudo_representant(&src).unwrap();
        assert_eq!(dst, Lut::or(4));
        assert!(dst.assign_pseudo_representant(&Lut::nand(3)).is_err());

        let mut words = [0u64; 4];
        let mut view = crate::view::LutMut::new(8, &mut words).unwrap();
        view.assign_pseudo_representant(&Lut::and(8)).unwrap();
        assert_eq!(view, Lut::or(8));
    }
}
