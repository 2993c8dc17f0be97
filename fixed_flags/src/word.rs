//! Storage words: the unsigned integers a layout is built from.

use bytemuck::Pod;
use core::fmt::Debug;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer usable as one storage unit of a layout.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. Bit `0` is the least
/// significant bit of the word.
pub trait Word: Pod + Eq + Hash + Debug + sealed::Sealed {
    /// Width of the word in bits.
    const BITS: usize;

    /// The word with every bit cleared.
    const ZERO: Self;

    /// Single-bit mask for `bit`. `bit` must be below `Self::BITS`.
    fn mask(bit: usize) -> Self;

    /// Sets (`value == true`) or clears `bit`, leaving the other bits untouched.
    fn with_bit(&mut self, bit: usize, value: bool);

    /// Complements `bit`.
    fn toggle(&mut self, bit: usize);

    /// Returns whether `bit` is 1.
    fn test(self, bit: usize) -> bool;
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;

                #[inline(always)]
                fn mask(bit: usize) -> Self {
                    debug_assert!(bit < <Self as Word>::BITS);
                    (1 as $ty) << bit
                }

                #[inline(always)]
                fn with_bit(&mut self, bit: usize, value: bool) {
                    if value {
                        *self |= Self::mask(bit);
                    } else {
                        *self &= !Self::mask(bit);
                    }
                }

                #[inline(always)]
                fn toggle(&mut self, bit: usize) {
                    *self ^= Self::mask(bit);
                }

                #[inline(always)]
                fn test(self, bit: usize) -> bool {
                    (self & Self::mask(bit)) != 0
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

/// Type-level word width, used by the selector to name a word type by its
/// bit count.
pub struct Width<const BITS: usize>;

/// Maps a [`Width`] to the word type of that width.
pub trait WordOf {
    type Word: Word;
}

impl WordOf for Width<8> {
    type Word = u8;
}

impl WordOf for Width<16> {
    type Word = u16;
}

impl WordOf for Width<32> {
    type Word = u32;
}

impl WordOf for Width<64> {
    type Word = u64;
}
