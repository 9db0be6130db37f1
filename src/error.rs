#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedIntsError {
    #[cfg_attr(
        feature = "std",
        error("bit width must be in the range 1..=8, got {0}")
    )]
    InvalidBitWidth(usize),

    #[cfg_attr(
        feature = "std",
        error("buffer too small: need {needed} bytes, have {have}")
    )]
    InsufficientBytes { needed: usize, have: usize },

    #[cfg_attr(feature = "std", error("value {0} does not fit in {1} bits"))]
    ValueOverflow(u32, usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PackedIntsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackedIntsError::InvalidBitWidth(w) => {
                write!(f, "bit width must be in the range 1..=8, got {}", w)
            }
            PackedIntsError::InsufficientBytes { needed, have } => {
                write!(f, "buffer too small: need {} bytes, have {}", needed, have)
            }
            PackedIntsError::ValueOverflow(v, w) => {
                write!(f, "value {} does not fit in {} bits", v, w)
            }
        }
    }
}
