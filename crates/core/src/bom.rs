//! Cabinet bill of materials.
//!
//! Breaks a box cabinet into the panels that are cut from sheet stock:
//! two sides, a top and a bottom fitted between the sides, a full back and
//! any number of fixed shelves. Lengths are not validated here; a cabinet
//! too narrow for its material thickness produces non-positive lengths that
//! the expander reports as `InvalidDimension`.

use crate::part::PartRequirement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default cabinet depth (standard base cabinet, in inches).
pub const DEFAULT_DEPTH: f64 = 23.25;

/// Default panel thickness (3/4" plywood).
pub const DEFAULT_THICKNESS: f64 = 0.75;

/// Overall dimensions of one cabinet module.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabinetSpec {
    /// Module name, used as the part label prefix.
    pub name: String,

    /// Outside width.
    pub width: f64,

    /// Outside height.
    pub height: f64,

    /// Outside depth.
    #[cfg_attr(feature = "serde", serde(default = "default_depth"))]
    pub depth: f64,

    /// Panel thickness.
    #[cfg_attr(feature = "serde", serde(default = "default_thickness"))]
    pub thickness: f64,

    /// Number of fixed shelves.
    #[cfg_attr(feature = "serde", serde(default = "default_shelves"))]
    pub shelves: i64,
}

#[cfg(feature = "serde")]
fn default_depth() -> f64 {
    DEFAULT_DEPTH
}

#[cfg(feature = "serde")]
fn default_thickness() -> f64 {
    DEFAULT_THICKNESS
}

#[cfg(feature = "serde")]
fn default_shelves() -> i64 {
    1
}

impl CabinetSpec {
    /// Creates a cabinet with default depth, thickness and one shelf.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            depth: DEFAULT_DEPTH,
            thickness: DEFAULT_THICKNESS,
            shelves: 1,
        }
    }

    /// Sets the depth.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the panel thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the number of shelves.
    pub fn with_shelves(mut self, shelves: i64) -> Self {
        self.shelves = shelves;
        self
    }

    /// Width between the two sides.
    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.thickness
    }

    /// Panels needed for this cabinet.
    pub fn parts(&self) -> Vec<PartRequirement> {
        let mut parts = vec![
            PartRequirement::new(self.label("Side"), self.height, self.depth).with_quantity(2),
            PartRequirement::new(self.label("Top/Bottom"), self.inner_width(), self.depth)
                .with_quantity(2),
            PartRequirement::new(self.label("Back"), self.width, self.height),
        ];
        if self.shelves != 0 {
            // Shelves stop short of the back panel.
            parts.push(
                PartRequirement::new(
                    self.label("Shelf"),
                    self.inner_width(),
                    self.depth - self.thickness,
                )
                .with_quantity(self.shelves),
            );
        }
        parts
    }

    fn label(&self, panel: &str) -> String {
        format!("{} {}", self.name, panel)
    }
}

/// Concatenates the panels of every cabinet, in cabinet order.
pub fn bill_of_materials(cabinets: &[CabinetSpec]) -> Vec<PartRequirement> {
    cabinets.iter().flat_map(CabinetSpec::parts).collect()
}
