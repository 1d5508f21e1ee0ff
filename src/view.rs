//! Non-owning views over caller-owned word buffers.
//!
//! A view never allocates: it wraps a slice of words owned by someone else
//! (an owned [`Lut`], a slice of a larger packed buffer, ...) together with
//! an input count, and borrows that buffer for its whole lifetime.
//! [`LutMut`] supports every operation of an owned table except resizing.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice::{ChunksExact, ChunksExactMut};

use crate::error::{LutError, Result};
use crate::lut::Lut;
use crate::masks::array_size;
use crate::table::{check_input_count, check_max_inputs, hash_table, TruthTable, TruthTableMut};

/// Read-only view of a truth table.
#[derive(Copy, Clone)]
pub struct LutRef<'a> {
    input_count: usize,
    words: &'a [u64],
}

/// Mutable view of a truth table.
pub struct LutMut<'a> {
    input_count: usize,
    words: &'a mut [u64],
}

fn check_buffer(input_count: usize, len: usize) -> Result<()> {
    check_max_inputs(input_count)?;
    let expected = array_size(input_count);
    if len != expected {
        return Err(LutError::BufferSize {
            expected,
            found: len,
        });
    }
    Ok(())
}

impl<'a> LutRef<'a> {
    /// Wrap a buffer of exactly `array_size(input_count)` words.
    pub fn new(input_count: usize, words: &'a [u64]) -> Result<Self> {
        check_buffer(input_count, words.len())?;
        Ok(Self::from_parts(input_count, words))
    }

    pub(crate) fn from_parts(input_count: usize, words: &'a [u64]) -> Self {
        debug_assert_eq!(words.len(), array_size(input_count));
        Self { input_count, words }
    }

    /// Iterate over consecutive `input_count`-input tables packed in `buffer`.
    ///
    /// Trailing words that do not form a complete table are ignored.
    pub fn iter_buffer(input_count: usize, buffer: &'a [u64]) -> BufferIter<'a> {
        check_input_count(input_count);
        BufferIter {
            input_count,
            chunks: buffer.chunks_exact(array_size(input_count)),
        }
    }

    /// Copy the viewed table into an owned one.
    pub fn to_lut(&self) -> Lut {
        Lut::from_table(self)
    }
}

impl<'a> LutMut<'a> {
    /// Wrap a buffer of exactly `array_size(input_count)` words.
    pub fn new(input_count: usize, words: &'a mut [u64]) -> Result<Self> {
        check_buffer(input_count, words.len())?;
        Ok(Self::from_parts(input_count, words))
    }

    pub(crate) fn from_parts(input_count: usize, words: &'a mut [u64]) -> Self {
        debug_assert_eq!(words.len(), array_size(input_count));
        Self { input_count, words }
    }

    /// Iterate mutably over consecutive tables packed in `buffer`.
    pub fn iter_buffer_mut(input_count: usize, buffer: &'a mut [u64]) -> BufferIterMut<'a> {
        check_input_count(input_count);
        BufferIterMut {
            input_count,
            chunks: buffer.chunks_exact_mut(array_size(input_count)),
        }
    }

    /// Reborrow as a shorter-lived mutable view.
    pub fn reborrow(&mut self) -> LutMut<'_> {
        LutMut::from_parts(self.input_count, &mut *self.words)
    }

    /// Copy the viewed table into an owned one.
    pub fn to_lut(&self) -> Lut {
        Lut::from_table(self)
    }
}

impl TruthTable for LutRef<'_> {
    fn input_count(&self) -> usize {
        self.input_count
    }
    fn words(&self) -> &[u64] {
        self.words
    }
}

impl TruthTable for LutMut<'_> {
    fn input_count(&self) -> usize {
        self.input_count
    }
    fn words(&self) -> &[u64] {
        &*self.words
    }
}

impl TruthTableMut for LutMut<'_> {
    fn words_mut(&mut self) -> &mut [u64] {
        &mut *self.words
    }
}

/// Iterator over read-only views of a packed buffer.
pub struct BufferIter<'a> {
    input_count: usize,
    chunks: ChunksExact<'a, u64>,
}

impl<'a> Iterator for BufferIter<'a> {
    type Item = LutRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let words = self.chunks.next()?;
        Some(LutRef::from_parts(self.input_count, words))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

/// Iterator over mutable views of a packed buffer.
pub struct BufferIterMut<'a> {
    input_count: usize,
    chunks: ChunksExactMut<'a, u64>,
}

impl<'a> Iterator for BufferIterMut<'a> {
    type Item = LutMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let words = self.chunks.next()?;
        Some(LutMut::from_parts(self.input_count, words))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T: TruthTable + ?Sized> PartialEq<T> for LutRef<'_> {
    fn eq(&self, other: &T) -> bool {
        self.equals(other)
    }
}

impl Eq for LutRef<'_> {}

impl<T: TruthTable + ?Sized> PartialEq<T> for LutMut<'_> {
    fn eq(&self, other: &T) -> bool {
        self.equals(other)
    }
}

impl Eq for LutMut<'_> {}

impl Hash for LutRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_table(self, state);
    }
}

impl Hash for LutMut<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_table(self, state);
    }
}

impl fmt::Debug for LutRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LutRef")
            .field("inputs", &self.input_count)
            .field("table", &self.to_bit_string())
            .finish()
    }
}

impl fmt::Debug for LutMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LutMut")
            .field("inputs", &self.input_count)
            .field("table", &self.to_bit_string())
            .finish()
    }
}

impl fmt::Display for LutRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hex::fmt_table(self, f)
    }
}

impl fmt::Display for LutMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hex::fmt_table(self, f)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::gate::Gates;

    #[test]
    fn test_view_checks_buffer_size() {
        let words = [0u64; 4];
        assert!(LutRef::new(8, &words).is_ok());
        assert_eq!(
            LutRef::new(9, &words).unwrap_err(),
            LutError::BufferSize {
                expected: 8,
                found: 4
            }
        );
        assert!(LutRef::new(3, &words[..1]).is_ok());
    }

    #[test]
    fn test_view_rejects_too_many_inputs() {
        let mut words = [0u64; 1];
        assert_eq!(
            LutRef::new(33, &words).unwrap_err(),
            LutError::TooManyInputs { input_count: 33 }
        );
        assert_eq!(
            LutMut::new(64, &mut words).unwrap_err(),
            LutError::TooManyInputs { input_count: 64 }
        );
        assert_eq!(
            LutRef::new(32, &words).unwrap_err(),
            LutError::BufferSize {
                expected: 1 << 26,
                found: 1
            }
        );
    }

    #[test]
    fn test_view_mut_writes_through() {
        let mut words = [0u64; 2];
        {
            let mut view = LutMut::new(7, &mut words).unwrap();
            view.set_and();
        }
        assert_eq!(words, [0, 1 << 63]);
    }

    #[test]
    fn test_view_equals_owned() {
        let lut = Lut::and(7);
        let words = [0u64, 1 << 63];
        let view = LutRef::new(7, &words).unwrap();
        assert_eq!(view, lut);
        assert_eq!(lut, view);
        assert_eq!(view.to_lut(), lut);
    }

    #[test]
    fn test_iter_buffer() {
        let mut buffer = vec![0u64; 3];
        for (i, mut view) in LutMut::iter_buffer_mut(4, &mut buffer).enumerate() {
            view.set_val(i, true).unwrap();
        }
        assert_eq!(buffer, vec![0b1, 0b10, 0b100]);

        let views: Vec<_> = LutRef::iter_buffer(4, &buffer).collect();
        assert_eq!(views.len(), 3);
        assert!(views[2].evaluate(2).unwrap());
        assert!(!views[2].evaluate(1).unwrap());
    }

    #[test]
    fn test_reborrow() {
        let mut words = [0u64];
        let mut view = LutMut::new(2, &mut words).unwrap();
        view.reborrow().set_vcc();
        assert_eq!(view.count_set_bits(), 4);
    }
}
