//! Unified error type for the hilbert-grid library.
//!
//! The raw curve kernel ([`xy_to_d`](crate::xy_to_d) and
//! [`d_to_xy`](crate::d_to_xy)) never fails. Errors only come from the
//! checked layer built on top of it: grid construction, range-checked
//! conversions, batch helpers, lookup tables and configuration loading.

use thiserror::Error;

/// Unified error type for all hilbert-grid operations.
///
/// Numeric fields are widened to `u128` so one error type serves every
/// integer width the grid is instantiated with.
///
/// # Example
///
/// ```
/// use hilbert_grid::{GridOrder, Result};
///
/// fn cell_index(side: u32, x: u32, y: u32) -> Result<u32> {
///     let order = GridOrder::new(side)?;
///     order.encode(x, y)
/// }
///
/// assert_eq!(cell_index(4, 0, 0).ok(), Some(0));
/// assert!(cell_index(6, 0, 0).is_err());
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The grid side is zero or not a power of two.
    #[error("Grid side {side} is not a power of two")]
    NotPowerOfTwo { side: u128 },

    /// `side * side` does not fit the integer type chosen for the grid.
    #[error("Grid side {side} is too large: {side}^2 cells overflow a {bits}-bit integer")]
    OrderTooLarge { side: u128, bits: u32 },

    /// A coordinate lies outside `[0, side - 1]`.
    #[error("Coordinate ({x}, {y}) is outside a {side}x{side} grid")]
    CoordinateOutOfRange { x: u128, y: u128, side: u128 },

    /// A distance lies outside `[0, side^2 - 1]`.
    #[error("Distance {distance} is outside a curve of {cells} cells")]
    DistanceOutOfRange { distance: u128, cells: u128 },

    /// Batch input and output slices disagree in length.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A lookup table was requested for a grid above the supported side.
    #[error("Lookup table for side {side} exceeds the maximum side {max}")]
    TableTooLarge { side: u128, max: u32 },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsing error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::LengthMismatch`] unless a slice of `actual` elements
/// matches the `expected` count.
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}

impl Error {
    /// Create a configuration error from a string message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns `true` if the grid side itself was rejected.
    pub fn is_invalid_order(&self) -> bool {
        matches!(self, Self::NotPowerOfTwo { .. } | Self::OrderTooLarge { .. })
    }

    /// Returns `true` if a coordinate or distance was out of range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::CoordinateOutOfRange { .. } | Self::DistanceOutOfRange { .. }
        )
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::NotPowerOfTwo { side: 6 };
        assert_eq!(err.to_string(), "Grid side 6 is not a power of two");

        let err = Error::CoordinateOutOfRange { x: 4, y: 1, side: 4 };
        assert_eq!(err.to_string(), "Coordinate (4, 1) is outside a 4x4 grid");
    }

    #[test]
    fn test_predicates() {
        assert!(Error::OrderTooLarge { side: 1 << 16, bits: 32 }.is_invalid_order());
        assert!(Error::DistanceOutOfRange { distance: 16, cells: 16 }.is_out_of_range());
        assert!(!Error::config("bad").is_out_of_range());
        assert!(Error::from(std::io::Error::other("disk")).is_io());
    }

    #[test]
    fn test_check_len() {
        assert!(check_len(3, 3).is_ok());
        let err = check_len(3, 2).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 3, actual: 2 }));
        assert_eq!(err.to_string(), "Length mismatch: expected 3 elements, got 2");
    }
}
