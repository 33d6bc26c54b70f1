//! Layout invariant checks.
//!
//! Not part of the optimization path; used by tests and by callers that want
//! to audit a result they received from elsewhere.

use std::fmt;

use crate::expand::expand;
use crate::part::PartRequirement;
use crate::result::PackingResult;
use crate::shelf::DEFAULT_TOLERANCE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One broken invariant in a [`PackingResult`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViolationReport {
    /// Two placements on the same sheet share interior area.
    Overlap {
        /// Sheet index.
        sheet: usize,
        /// Position of the first placement on the sheet.
        first: usize,
        /// Position of the second placement on the sheet.
        second: usize,
    },
    /// A placement extends past the sheet edge.
    OutOfBounds {
        /// Sheet index.
        sheet: usize,
        /// Position of the placement on the sheet.
        placement: usize,
    },
    /// Placements plus `PartTooLarge` rejections differ from the instance count.
    CountMismatch {
        /// Expanded instance count.
        expected: usize,
        /// Placements found.
        placed: usize,
        /// `PartTooLarge` entries found.
        too_large: usize,
    },
    /// Sheet indices are not `0..n` in order.
    SheetIndex {
        /// Position of the sheet in the result.
        position: usize,
        /// Index recorded on the sheet.
        index: usize,
    },
    /// A sheet with no placements.
    EmptySheet {
        /// Sheet index.
        sheet: usize,
    },
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlap {
                sheet,
                first,
                second,
            } => write!(
                f,
                "sheet {}: placements {} and {} overlap",
                sheet, first, second
            ),
            Self::OutOfBounds { sheet, placement } => {
                write!(f, "sheet {}: placement {} is out of bounds", sheet, placement)
            }
            Self::CountMismatch {
                expected,
                placed,
                too_large,
            } => write!(
                f,
                "expected {} instances, found {} placed + {} too large",
                expected, placed, too_large
            ),
            Self::SheetIndex { position, index } => {
                write!(f, "sheet at position {} has index {}", position, index)
            }
            Self::EmptySheet { sheet } => write!(f, "sheet {} has no placements", sheet),
        }
    }
}

/// Checks bounds, overlap, sheet numbering and instance conservation.
///
/// Returns an empty vector for a valid result. Uses the default fit
/// tolerance; see [`validate_with_tolerance`] for results packed with a
/// configured one.
pub fn validate(result: &PackingResult, expected_instances: usize) -> Vec<ViolationReport> {
    validate_with_tolerance(result, expected_instances, DEFAULT_TOLERANCE)
}

/// Same checks as [`validate`], allowing `tolerance` slack on bounds and overlap.
pub fn validate_with_tolerance(
    result: &PackingResult,
    expected_instances: usize,
    tolerance: f64,
) -> Vec<ViolationReport> {
    let mut violations = Vec::new();

    for (position, sheet) in result.sheets.iter().enumerate() {
        if sheet.index != position {
            violations.push(ViolationReport::SheetIndex {
                position,
                index: sheet.index,
            });
        }
        if sheet.is_empty() {
            violations.push(ViolationReport::EmptySheet { sheet: sheet.index });
        }

        for (i, placement) in sheet.placements.iter().enumerate() {
            if !placement.within(&result.sheet, tolerance) {
                violations.push(ViolationReport::OutOfBounds {
                    sheet: sheet.index,
                    placement: i,
                });
            }
            for (j, other) in sheet.placements.iter().enumerate().skip(i + 1) {
                if placement.overlaps(other, tolerance) {
                    violations.push(ViolationReport::Overlap {
                        sheet: sheet.index,
                        first: i,
                        second: j,
                    });
                }
            }
        }
    }

    let placed = result.placed_count();
    let too_large = result.too_large_count();
    if placed + too_large != expected_instances {
        violations.push(ViolationReport::CountMismatch {
            expected: expected_instances,
            placed,
            too_large,
        });
    }

    violations
}

/// Validates a result against the requirements it was computed from.
pub fn validate_expansion(
    requirements: &[PartRequirement],
    result: &PackingResult,
) -> Vec<ViolationReport> {
    validate(result, expand(requirements).instance_count())
}
