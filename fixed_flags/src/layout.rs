//! Backing storage for a flag set.
//!
//! All eight storage shapes (a single 8/16/32/64-bit word, or an array of
//! them) are the same type, [`Words`], instantiated with a different word
//! type and length. A scalar layout is simply `Words<W, 1>`.

use crate::word::Word;
use core::fmt::Debug;
use core::hash::Hash;

/// Bit-addressable fixed-size storage.
///
/// Positions handed to a layout must be below [`Layout::CAPACITY`]; the
/// methods panic otherwise. Checking positions against the flag count of a
/// [`Flags`](crate::Flags) is done by the container, not here.
pub trait Layout: Copy + Eq + Hash + Debug + Default {
    type Word: Word;

    /// Number of words in the backing array.
    const WORDS: usize;

    /// Number of addressable bits, `WORDS * Word::BITS`.
    const CAPACITY: usize;

    /// The layout with every bit cleared.
    const EMPTY: Self;

    fn reset(&mut self);

    fn set(&mut self, pos: usize, value: bool);

    fn flip(&mut self, pos: usize);

    fn get(&self, pos: usize) -> bool;

    fn as_words(&self) -> &[Self::Word];

    /// The backing words viewed as bytes, in native word order.
    fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_words())
    }
}

/// `LEN` words of type `W`, embedded by value.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Words<W: Word, const LEN: usize> {
    words: [W; LEN],
}

/// Single-word layout.
pub type Scalar<W> = Words<W, 1>;

impl<W: Word, const LEN: usize> Words<W, LEN> {
    #[inline(always)]
    const fn locate(pos: usize) -> (usize, usize) {
        (pos / W::BITS, pos % W::BITS)
    }
}

impl<W: Word, const LEN: usize> Default for Words<W, LEN> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<W: Word, const LEN: usize> Layout for Words<W, LEN> {
    type Word = W;

    const WORDS: usize = LEN;
    const CAPACITY: usize = LEN * W::BITS;
    const EMPTY: Self = Self {
        words: [W::ZERO; LEN],
    };

    #[inline]
    fn reset(&mut self) {
        self.words = [W::ZERO; LEN];
    }

    #[inline]
    fn set(&mut self, pos: usize, value: bool) {
        let (word, bit) = Self::locate(pos);
        self.words[word].with_bit(bit, value);
    }

    #[inline]
    fn flip(&mut self, pos: usize) {
        let (word, bit) = Self::locate(pos);
        self.words[word].toggle(bit);
    }

    #[inline]
    fn get(&self, pos: usize) -> bool {
        let (word, bit) = Self::locate(pos);
        self.words[word].test(bit)
    }

    #[inline]
    fn as_words(&self) -> &[W] {
        &self.words
    }
}
