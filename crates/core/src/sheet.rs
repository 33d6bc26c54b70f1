//! Stock sheet specification.

use crate::error::{Error, Result};
use crate::part::PartInstance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sheet width (a full 8 ft sheet, in inches).
pub const DEFAULT_SHEET_WIDTH: f64 = 96.0;

/// Default sheet height (a full 4 ft sheet, in inches).
pub const DEFAULT_SHEET_HEIGHT: f64 = 48.0;

/// Size of the stock sheets parts are cut from.
///
/// Constant for one optimization run. Stored so that `width >= height`,
/// matching the orientation of [`PartInstance`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetSpec {
    /// Sheet width (the longer side).
    pub width: f64,

    /// Sheet height (the shorter side).
    pub height: f64,
}

impl SheetSpec {
    /// Creates a sheet spec; the longer of the two lengths becomes the width.
    pub fn new(length_a: f64, length_b: f64) -> Self {
        let (width, height) = if length_a >= length_b {
            (length_a, length_b)
        } else {
            (length_b, length_a)
        };
        Self { width, height }
    }

    /// Validates the sheet dimensions.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidSheet(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(Error::InvalidSheet(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        Ok(())
    }

    /// Area of one sheet.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the instance fits an empty sheet without rotation.
    ///
    /// The comparison is exact: a part larger than the sheet never fits,
    /// whatever tolerance the packer uses for accumulated cursor error.
    pub fn fits(&self, instance: &PartInstance) -> bool {
        instance.width <= self.width && instance.height <= self.height
    }
}

impl Default for SheetSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_SHEET_WIDTH,
            height: DEFAULT_SHEET_HEIGHT,
        }
    }
}
