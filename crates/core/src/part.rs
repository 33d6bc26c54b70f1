//! Part requirement and part instance types.

use crate::error::PartError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a part kind ("Side", "Shelf", ...).
pub type PartLabel = String;

/// One kind of part needed `quantity` times.
///
/// The two lengths are taken as measured; which one runs along the sheet is
/// decided by [`PartRequirement::normalized`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartRequirement {
    /// Part label.
    pub label: PartLabel,

    /// First measured length.
    pub length_a: f64,

    /// Second measured length.
    pub length_b: f64,

    /// Number of copies required.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    pub quantity: i64,
}

#[cfg(feature = "serde")]
fn default_quantity() -> i64 {
    1
}

impl PartRequirement {
    /// Creates a requirement for a single part.
    pub fn new(label: impl Into<PartLabel>, length_a: f64, length_b: f64) -> Self {
        Self {
            label: label.into(),
            length_a,
            length_b,
            quantity: 1,
        }
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Checks the quantity, then both lengths.
    pub fn validate(&self) -> Result<(), PartError> {
        if self.quantity <= 0 {
            return Err(PartError::InvalidQuantity(self.quantity));
        }
        if !is_positive_length(self.length_a) || !is_positive_length(self.length_b) {
            return Err(PartError::InvalidDimension {
                length_a: self.length_a,
                length_b: self.length_b,
            });
        }
        Ok(())
    }

    /// Returns one instance in normalized orientation (long side as width).
    ///
    /// Does not validate; see [`PartRequirement::validate`].
    pub fn normalized(&self) -> PartInstance {
        PartInstance::new(self.label.clone(), self.length_a, self.length_b)
    }

    /// Total area of all requested copies (zero for invalid requirements).
    pub fn total_area(&self) -> f64 {
        if self.validate().is_err() {
            return 0.0;
        }
        self.length_a * self.length_b * self.quantity as f64
    }
}

fn is_positive_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// One physical unit to be cut, in normalized orientation (`width >= height`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartInstance {
    /// Label of the requirement this instance came from.
    pub label: PartLabel,

    /// Longer side.
    pub width: f64,

    /// Shorter side.
    pub height: f64,
}

impl PartInstance {
    /// Creates an instance, assigning the longer length to `width`.
    pub fn new(label: impl Into<PartLabel>, length_a: f64, length_b: f64) -> Self {
        Self {
            label: label.into(),
            width: length_a.max(length_b),
            height: length_a.min(length_b),
        }
    }

    /// Area of the instance.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
