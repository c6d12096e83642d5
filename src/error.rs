//! Error types for cloth construction.

use core::fmt;

/// Errors raised when building a cloth, collider, or wind generator.
///
/// Ticking a valid cloth never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid dimensions must be at least 2x2.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Collider radius must be positive and finite.
    InvalidRadius,
    /// Collider scale must be positive and finite.
    InvalidScale,
    /// Wind reversal period must be non-zero.
    InvalidWindPeriod,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid must be at least 2x2 (got {} rows, {} cols)", rows, cols)
            }
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::InvalidRadius => write!(f, "radius must be positive and finite"),
            ClothError::InvalidScale => write!(f, "scale must be positive and finite"),
            ClothError::InvalidWindPeriod => write!(f, "wind period must be non-zero"),
        }
    }
}
