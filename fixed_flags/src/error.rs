#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagsError {
    #[cfg_attr(
        feature = "std",
        error("Position {pos} is out of range for {len} flags")
    )]
    PositionOutOfRange { pos: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FlagsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlagsError::PositionOutOfRange { pos, len } => {
                write!(f, "Position {} is out of range for {} flags", pos, len)
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for FlagsError {}
