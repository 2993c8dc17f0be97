//! Storage selection.
//!
//! Maps a flag count `N` to the smallest of eight storage shapes that holds
//! `N` bits. Counts up to 64 get a single word of 8, 16, 32 or 64 bits.
//! Larger counts get an array whose word width is picked from the bits left
//! over after removing full 64-bit groups (`N % 64`):
//!
//! | `N % 64`  | word width |
//! |-----------|------------|
//! | 1..=8     | 8          |
//! | 9..=16    | 16         |
//! | 17..=32   | 32         |
//! | 33..=63   | 64         |
//! | 0         | 64         |
//!
//! The array holds `ceil(N / width)` words.
//!
//! The selection happens at compile time: every supported `N` has an
//! implementation of [`SelectLayout`] for [`Capacity<N>`], generated by the
//! build script, naming its concrete [`Words`] type.

use crate::layout::{Layout, Words};
use core::fmt;

#[inline]
pub const fn remainder(n: usize) -> usize {
    n % 64
}

/// Word width in bits for a flag count of `n`.
pub const fn word_bits(n: usize) -> usize {
    match remainder(n) {
        0 => 64,
        r if r > 32 => 64,
        r if r > 16 => 32,
        r if r > 8 => 16,
        _ => 8,
    }
}

/// Number of words the layout for `n` flags holds.
pub const fn word_count(n: usize) -> usize {
    if n <= 64 { 1 } else { n.div_ceil(word_bits(n)) }
}

/// Diagnostic classification of a layout.
///
/// Scalar classes carry their word width. Array classes carry the minimum
/// footprint of an array of that word type past 64 bits (`64 + width`),
/// not the actual footprint, which grows with `N`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeClass {
    Scalar8 = 8,
    Scalar16 = 16,
    Scalar32 = 32,
    Scalar64 = 64,
    Array8 = 72,
    Array16 = 80,
    Array32 = 96,
    Array64 = 128,
}

impl SizeClass {
    /// Classifies the layout chosen for `n` flags.
    pub const fn of(n: usize) -> Self {
        let array = n > 64;
        match (word_bits(n), array) {
            (8, false) => SizeClass::Scalar8,
            (16, false) => SizeClass::Scalar16,
            (32, false) => SizeClass::Scalar32,
            (_, false) => SizeClass::Scalar64,
            (8, true) => SizeClass::Array8,
            (16, true) => SizeClass::Array16,
            (32, true) => SizeClass::Array32,
            (_, true) => SizeClass::Array64,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn is_array(self) -> bool {
        self.value() > 64
    }

    pub const fn word_bits(self) -> usize {
        match self {
            SizeClass::Scalar8 | SizeClass::Array8 => 8,
            SizeClass::Scalar16 | SizeClass::Array16 => 16,
            SizeClass::Scalar32 | SizeClass::Array32 => 32,
            SizeClass::Scalar64 | SizeClass::Array64 => 64,
        }
    }
}

impl From<SizeClass> for u8 {
    fn from(class: SizeClass) -> Self {
        class.value()
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Type-level flag count.
pub struct Capacity<const N: usize>;

mod sealed {
    pub trait Sealed {}
}

/// Resolves a flag count to its storage layout.
#[diagnostic::on_unimplemented(
    message = "no storage layout for `{Self}`",
    note = "flag counts must be in 1..=1024 (1..=4096 with the `wide` feature)"
)]
pub trait SelectLayout: sealed::Sealed {
    type Layout: Layout;
    const CLASS: SizeClass;
}

macro_rules! select_layout {
    ($n:literal) => {
        impl sealed::Sealed for Capacity<$n> {}

        impl SelectLayout for Capacity<$n> {
            type Layout = Words<
                <crate::word::Width<{ word_bits($n) }> as crate::word::WordOf>::Word,
                { word_count($n) },
            >;
            const CLASS: SizeClass = SizeClass::of($n);
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/select_table.rs"));
