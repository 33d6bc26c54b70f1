//! Error types for U-CutList.
//!
//! Two layers of failure exist:
//!
//! - [`Error`]: rejects an optimizer *configuration* (bad sheet size, negative kerf).
//!   Returned from constructors only.
//! - [`PartError`]: a per-part problem found during a run. These are never
//!   returned as `Err`; they are collected into
//!   [`PackingResult::unplaced_errors`](crate::PackingResult::unplaced_errors)
//!   and the rest of the batch is still packed.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type alias for U-CutList operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that reject an optimizer configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid sheet dimensions.
    #[error("Invalid sheet: {0}")]
    InvalidSheet(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// A non-fatal problem with a single part requirement or part instance.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartError {
    /// One of the requirement's lengths is zero, negative or not finite.
    #[error("invalid dimension {length_a} x {length_b}")]
    InvalidDimension {
        /// First measured length.
        length_a: f64,
        /// Second measured length.
        length_b: f64,
    },

    /// The requirement's quantity is zero or negative.
    #[error("invalid quantity {0}")]
    InvalidQuantity(i64),

    /// The instance cannot fit the sheet in its normalized orientation.
    #[error("part {width} x {height} does not fit sheet {sheet_width} x {sheet_height}")]
    PartTooLarge {
        /// Normalized part width.
        width: f64,
        /// Normalized part height.
        height: f64,
        /// Sheet width.
        sheet_width: f64,
        /// Sheet height.
        sheet_height: f64,
    },
}

impl PartError {
    /// Returns the error kind name reported to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => "InvalidDimension",
            Self::InvalidQuantity(_) => "InvalidQuantity",
            Self::PartTooLarge { .. } => "PartTooLarge",
        }
    }

    /// Returns true for errors raised by the packer rather than the expander.
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::PartTooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let dim = PartError::InvalidDimension {
            length_a: 0.0,
            length_b: 10.0,
        };
        assert_eq!(dim.kind(), "InvalidDimension");
        assert_eq!(PartError::InvalidQuantity(-1).kind(), "InvalidQuantity");

        let large = PartError::PartTooLarge {
            width: 60.0,
            height: 50.0,
            sheet_width: 96.0,
            sheet_height: 48.0,
        };
        assert_eq!(large.kind(), "PartTooLarge");
        assert!(large.is_too_large());
        assert!(!dim.is_too_large());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PartError::InvalidQuantity(0).to_string(),
            "invalid quantity 0"
        );
        assert_eq!(
            Error::InvalidSheet("width must be positive".to_string()).to_string(),
            "Invalid sheet: width must be positive"
        );
    }
}
