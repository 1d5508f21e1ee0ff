//! # lut-rs: Truth tables of Boolean functions
//!
//! **`lut-rs`** stores a completely-specified Boolean function of `n` inputs
//! as its full truth table (a *lookup table*, or LUT) packed into 64-bit words,
//! and provides the word-parallel primitives a logic-synthesis tool needs
//! on its hot paths: gate construction, input permutation and inversion,
//! cofactors, structural classification and NPN pseudo-canonization.
//!
//! ## Storage
//!
//! Bit `i` of the table is the output for the input assignment `i`, where
//! bit `k` of `i` is the value of input `k`. Functions of up to 6 inputs use
//! a single word; larger ones use `2^(n-6)` words. See [`masks`] for the
//! layout constants.
//!
//! ## Owned tables and views
//!
//! - [`Lut`][crate::lut::Lut] owns its words and can be resized.
//! - [`LutRef`][crate::view::LutRef] and [`LutMut`][crate::view::LutMut] borrow
//!   a caller-owned buffer, for example one slot of a large packed array.
//!
//! All three implement [`TruthTable`][crate::table::TruthTable] (and the
//! mutable ones [`TruthTableMut`][crate::table::TruthTableMut]). Every other
//! operation is provided by an extension trait blanket-implemented on top of
//! those two, so owned tables and views share the same surface.
//!
//! ## Basic Usage
//!
//! ```rust
//! use lut_rs::prelude::*;
//!
//! // f = x0 AND (NOT x2), over 3 inputs
//! let f = Lut::apply_and(&Lut::buf(0, 3), &Lut::inv(2, 3)).unwrap();
//!
//! assert!(f.evaluate(0b011).unwrap());
//! assert!(!f.evaluate(0b101).unwrap());
//! assert!(f.is_dc(1).unwrap());
//! assert_eq!(f.to_hex().unwrap(), "0a");
//!
//! // Tables round-trip through their hexadecimal form.
//! let g: Lut = "0a".parse().unwrap();
//! assert_eq!(f, g);
//!
//! // NPN pseudo-representative.
//! let r = f.pseudo_representant();
//! assert!(r.is_pseudo_representant());
//! ```
//!
//! ## Core Components
//!
//! - **[`gate`]**: gate builders and word-wise combinators.
//! - **[`transform`]**: input inversion and permutation.
//! - **[`cofactor`]**: position-preserving and compact cofactors.
//! - **[`classify`]**: don't-care, unateness and factorization queries.
//! - **[`canonical`]**: pseudo-representatives of NPN classes.
//! - **[`hex`]**: hexadecimal codec.

pub mod canonical;
pub mod classify;
pub mod cofactor;
pub mod error;
pub mod gate;
pub mod hex;
pub mod lut;
pub mod masks;
pub mod table;
pub mod transform;
pub mod view;

pub use crate::error::{LutError, Result};
pub use crate::lut::Lut;
pub use crate::view::{LutMut, LutRef};

/// Everything needed to work with tables: types and extension traits.
pub mod prelude {
    pub use crate::canonical::{Canonical, Canonicalize};
    pub use crate::classify::{Classify, SingleInputSimplification, TwoInputSimplification};
    pub use crate::cofactor::Cofactors;
    pub use crate::error::LutError;
    pub use crate::gate::Gates;
    pub use crate::lut::Lut;
    pub use crate::table::{TruthTable, TruthTableMut};
    pub use crate::transform::Transform;
    pub use crate::view::{LutMut, LutRef};
}
