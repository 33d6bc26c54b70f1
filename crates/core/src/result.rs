//! Packing result representation.

use crate::error::PartError;
use crate::part::{PartInstance, PartLabel};
use crate::sheet::SheetSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position and size of one part inside a sheet.
///
/// `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Label of the placed part.
    pub label: PartLabel,
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Extent along the sheet width.
    pub width: f64,
    /// Extent along the sheet height.
    pub height: f64,
}

impl Placement {
    /// Places an instance with its lower-left corner at `(x, y)`.
    pub fn new(instance: &PartInstance, x: f64, y: f64) -> Self {
        Self {
            label: instance.label.clone(),
            x,
            y,
            width: instance.width,
            height: instance.height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Area of the placed part.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Placement, tolerance: f64) -> bool {
        self.x < other.right() - tolerance
            && other.x < self.right() - tolerance
            && self.y < other.top() - tolerance
            && other.y < self.top() - tolerance
    }

    /// Returns true if the placement lies entirely inside the sheet.
    pub fn within(&self, sheet: &SheetSpec, tolerance: f64) -> bool {
        self.x >= -tolerance
            && self.y >= -tolerance
            && self.right() <= sheet.width + tolerance
            && self.top() <= sheet.height + tolerance
    }
}

/// One stock sheet and the parts cut from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Zero-based position of the sheet in the result.
    pub index: usize,
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            placements: Vec::new(),
        }
    }

    /// Total area covered by parts.
    pub fn used_area(&self) -> f64 {
        self.placements.iter().map(Placement::area).sum()
    }

    /// Fraction of the sheet covered by parts (0.0 - 1.0).
    pub fn utilization(&self, spec: &SheetSpec) -> f64 {
        let area = spec.area();
        if area > 0.0 {
            self.used_area() / area
        } else {
            0.0
        }
    }

    /// Returns true if nothing was placed on the sheet.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// A requirement or instance excluded from the layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedPart {
    /// Label of the rejected part.
    pub label: PartLabel,
    /// Why it was rejected.
    pub error: PartError,
}

impl UnplacedPart {
    /// Creates an entry.
    pub fn new(label: impl Into<PartLabel>, error: PartError) -> Self {
        Self {
            label: label.into(),
            error,
        }
    }

    /// Error kind name (`"InvalidDimension"`, `"InvalidQuantity"`, `"PartTooLarge"`).
    pub fn reason(&self) -> &'static str {
        self.error.kind()
    }
}

/// Result of one optimization run.
///
/// Owned by the caller; the optimizer keeps no reference to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// Sheet size the layout was computed for.
    pub sheet: SheetSpec,

    /// Sheets in the order they were filled.
    pub sheets: Vec<Sheet>,

    /// Requirements and instances that could not be scheduled.
    /// Expansion errors come first, then `PartTooLarge` rejections.
    pub unplaced_errors: Vec<UnplacedPart>,
}

impl PackingResult {
    /// Creates an empty result for the given sheet size.
    pub fn new(sheet: SheetSpec) -> Self {
        Self {
            sheet,
            sheets: Vec::new(),
            unplaced_errors: Vec::new(),
        }
    }

    /// Number of stock sheets required.
    pub fn sheets_required(&self) -> usize {
        self.sheets.len()
    }

    /// Number of placed instances across all sheets.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.placements.len()).sum()
    }

    /// Number of instances rejected as too large for the sheet.
    pub fn too_large_count(&self) -> usize {
        self.unplaced_errors
            .iter()
            .filter(|u| u.error.is_too_large())
            .count()
    }

    /// Returns true if nothing was rejected.
    pub fn all_placed(&self) -> bool {
        self.unplaced_errors.is_empty()
    }

    /// Iterates all placements with the index of their sheet.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &Placement)> {
        self.sheets
            .iter()
            .flat_map(|s| s.placements.iter().map(move |p| (s.index, p)))
    }

    /// Total area of all placed parts.
    pub fn used_area(&self) -> f64 {
        self.sheets.iter().map(Sheet::used_area).sum()
    }

    /// Part area over total sheet area (0.0 - 1.0). Zero when no sheet is used.
    pub fn utilization(&self) -> f64 {
        let total = self.sheet.area() * self.sheets.len() as f64;
        if total > 0.0 {
            self.used_area() / total
        } else {
            0.0
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Computes summary statistics.
    pub fn summary(&self) -> PackingSummary {
        PackingSummary::from(self)
    }
}

/// Summary statistics for reports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingSummary {
    /// Stock sheets required.
    pub sheets_required: usize,
    /// Instances placed.
    pub parts_placed: usize,
    /// Unplaced entries (requirements and instances).
    pub parts_unplaced: usize,
    /// Area of all placed parts.
    pub total_part_area: f64,
    /// Area of all sheets used.
    pub total_sheet_area: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
}

impl From<&PackingResult> for PackingSummary {
    fn from(result: &PackingResult) -> Self {
        Self {
            sheets_required: result.sheets_required(),
            parts_placed: result.placed_count(),
            parts_unplaced: result.unplaced_errors.len(),
            total_part_area: result.used_area(),
            total_sheet_area: result.sheet.area() * result.sheets.len() as f64,
            utilization_percent: result.utilization() * 100.0,
        }
    }
}
