//! The fixed-size flag set.
//!
//! # Examples
//!
//! ```rust
//! use fixed_flags::{Flags, SizeClass};
//!
//! let mut flags = Flags::<10>::new();
//! flags.set(3, true);
//! flags.set(9, true);
//!
//! assert!(flags.get(3));
//! assert!(flags[9]);
//! assert!(!flags.get(4));
//!
//! // Positions past N are ignored.
//! flags.set(15, true);
//! assert!(!flags.get(15));
//!
//! assert_eq!(flags.size_class(), SizeClass::Scalar16);
//! assert_eq!(core::mem::size_of::<Flags<10>>(), 2);
//! ```

use crate::FlagsError;
use crate::layout::Layout;
use crate::select::{Capacity, SelectLayout, SizeClass};
use core::fmt;
use core::ops::Index;

type Result<T> = core::result::Result<T, FlagsError>;

type LayoutOf<const N: usize> = <Capacity<N> as SelectLayout>::Layout;

/// `N` independently addressable flags, all cleared on construction.
///
/// The backing storage is picked at compile time from `N` (see
/// [`select`](crate::select)) and embedded by value; `Flags<N>` has exactly
/// the size of that storage.
///
/// Out-of-range positions (`pos >= N`) are tolerated: [`set`](Self::set) and
/// [`flip`](Self::flip) do nothing and [`get`](Self::get) returns `false`.
/// The `try_*` methods report them as [`FlagsError::PositionOutOfRange`]
/// instead.
///
/// `N` must be in `1..=MAX_FLAGS`. Anything else has no layout and does not
/// compile:
///
/// ```compile_fail
/// use fixed_flags::Flags;
///
/// let flags = Flags::<0>::new();
/// ```
///
/// ```compile_fail
/// use fixed_flags::Flags;
///
/// let flags = Flags::<4097>::new();
/// ```
#[cfg_attr(
    not(feature = "wide"),
    doc = "\n```compile_fail\nuse fixed_flags::Flags;\n\nlet flags = Flags::<1025>::new();\n```"
)]
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags<const N: usize>
where
    Capacity<N>: SelectLayout,
{
    storage: LayoutOf<N>,
}

impl<const N: usize> Flags<N>
where
    Capacity<N>: SelectLayout,
{
    /// Number of flags.
    pub const LEN: usize = N;

    /// Creates a flag set with every flag cleared.
    pub const fn new() -> Self {
        Self {
            storage: <LayoutOf<N> as Layout>::EMPTY,
        }
    }

    /// Clears every flag.
    #[inline]
    pub fn reset(&mut self) {
        self.storage.reset();
    }

    /// Sets flag `pos` to `value`. No-op when `pos >= N`.
    #[inline]
    pub fn set(&mut self, pos: usize, value: bool) {
        if pos < N {
            self.storage.set(pos, value);
        }
    }

    /// Complements flag `pos`. No-op when `pos >= N`.
    #[inline]
    pub fn flip(&mut self, pos: usize) {
        if pos < N {
            self.storage.flip(pos);
        }
    }

    /// Returns flag `pos`, or `false` when `pos >= N`.
    #[inline]
    pub fn get(&self, pos: usize) -> bool {
        pos < N && self.storage.get(pos)
    }

    pub fn try_set(&mut self, pos: usize, value: bool) -> Result<()> {
        Self::check(pos)?;
        self.storage.set(pos, value);
        Ok(())
    }

    pub fn try_flip(&mut self, pos: usize) -> Result<()> {
        Self::check(pos)?;
        self.storage.flip(pos);
        Ok(())
    }

    pub fn try_get(&self, pos: usize) -> Result<bool> {
        Self::check(pos)?;
        Ok(self.storage.get(pos))
    }

    /// Which of the eight storage classes backs this set.
    pub const fn size_class(&self) -> SizeClass {
        <Capacity<N> as SelectLayout>::CLASS
    }

    /// Raw backing storage. Bits past `N` are always zero.
    pub fn as_bytes(&self) -> &[u8] {
        self.storage.as_bytes()
    }

    #[inline(always)]
    fn check(pos: usize) -> Result<()> {
        if pos < N {
            Ok(())
        } else {
            Err(FlagsError::PositionOutOfRange { pos, len: N })
        }
    }
}

impl<const N: usize> Default for Flags<N>
where
    Capacity<N>: SelectLayout,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for Flags<N>
where
    Capacity<N>: SelectLayout,
{
    type Output = bool;

    fn index(&self, pos: usize) -> &bool {
        if self.get(pos) { &true } else { &false }
    }
}

struct BitString<'a, const N: usize>(&'a Flags<N>)
where
    Capacity<N>: SelectLayout;

impl<const N: usize> fmt::Display for BitString<'_, N>
where
    Capacity<N>: SelectLayout,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0b")?;
        for pos in (0..N).rev() {
            f.write_str(if self.0.get(pos) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Flags<N>
where
    Capacity<N>: SelectLayout,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("len", &N)
            .field("class", &self.size_class())
            .field("bits", &format_args!("{}", BitString(self)))
            .finish()
    }
}
