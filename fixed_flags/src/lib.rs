//! # fixed_flags
//!
//! A `no_std` compatible fixed-size flag set, packed into the smallest
//! storage that holds it.
//!
//! ```rust
//! use fixed_flags::{Flags, SizeClass};
//!
//! // 100 flags: 100 % 64 = 36 leftover bits, so two u64 words.
//! let mut flags = Flags::<100>::new();
//! flags.set(99, true);
//! flags.flip(0);
//!
//! assert!(flags.get(99));
//! assert!(flags.get(0));
//! assert_eq!(flags.size_class(), SizeClass::Array64);
//! assert_eq!(core::mem::size_of::<Flags<100>>(), 16);
//! ```
//!
//! ## Storage classes
//!
//! ```rust
//! use fixed_flags::{Flags, SizeClass};
//!
//! assert_eq!(Flags::<8>::new().size_class(), SizeClass::Scalar8);   // u8
//! assert_eq!(Flags::<9>::new().size_class(), SizeClass::Scalar16);  // u16
//! assert_eq!(Flags::<65>::new().size_class(), SizeClass::Array8);   // [u8; 9]
//! assert_eq!(Flags::<80>::new().size_class(), SizeClass::Array16);  // [u16; 5]
//! assert_eq!(Flags::<128>::new().size_class(), SizeClass::Array64); // [u64; 2]
//! ```
//!
//! ## Supported sizes
//!
//! `N` ranges over `1..=MAX_FLAGS`, which is 1024, or 4096 with the `wide`
//! feature. `Flags<0>` and counts above the limit fail to compile with
//! "no storage layout for `Capacity<N>`".
//!
//! ## Strict access
//!
//! ```rust
//! use fixed_flags::{Flags, FlagsError};
//!
//! let mut flags = Flags::<4>::new();
//! flags.set(7, true); // silently ignored
//! assert_eq!(
//!     flags.try_set(7, true),
//!     Err(FlagsError::PositionOutOfRange { pos: 7, len: 4 })
//! );
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::FlagsError;

pub mod flags;
pub mod layout;
pub mod select;
pub mod word;

pub use flags::Flags;
pub use layout::{Layout, Scalar, Words};
pub use select::{Capacity, MAX_FLAGS, SelectLayout, SizeClass};
pub use word::Word;
