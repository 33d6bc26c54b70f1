//! Next-fit shelf packing.
//!
//! Parts are laid left to right in horizontal shelves. When a part no longer
//! fits the current shelf a new shelf is opened above it; when no shelf fits
//! the remaining sheet height a new sheet is started. A placed part is never
//! moved again.
//!
//! The packer state is the explicit [`ShelfState`] record. Deciding what to
//! do with the next part ([`ShelfState::classify`]) and moving to the next
//! state ([`ShelfState::advance`], [`ShelfState::next_shelf`],
//! [`ShelfState::next_sheet`]) are pure functions, so each transition can be
//! tested on its own.

use crate::error::PartError;
use crate::part::PartInstance;
use crate::result::{Placement, Sheet, UnplacedPart};
use crate::sheet::SheetSpec;

/// Default tolerance for fit comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Largest accepted tolerance. It only absorbs rounding in cursor sums, so
/// it stays far below any real part dimension.
pub const MAX_TOLERANCE: f64 = 1e-6;

/// What the packer does with the next instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Place at the cursor of the current shelf.
    PlaceOnShelf,
    /// Close the current shelf, open one above it, then place.
    OpenShelf,
    /// Finish the current sheet, start a new one, then place.
    OpenSheet,
    /// The instance can never fit the sheet; record it and move on.
    Reject,
}

/// Cursor state of the sheet being filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfState {
    /// Index of the sheet being filled.
    pub sheet_index: usize,
    /// Next free x on the current shelf.
    pub cursor_x: f64,
    /// Bottom of the current shelf.
    pub shelf_y: f64,
    /// Tallest part placed on the current shelf so far.
    pub shelf_max_height: f64,
}

impl ShelfState {
    /// Empty sheet 0, cursor at the origin.
    pub fn new() -> Self {
        Self {
            sheet_index: 0,
            cursor_x: 0.0,
            shelf_y: 0.0,
            shelf_max_height: 0.0,
        }
    }

    /// Chooses the transition for `instance`.
    ///
    /// `kerf` is the gap left between neighbouring parts and shelves.
    pub fn classify(
        &self,
        instance: &PartInstance,
        sheet: &SheetSpec,
        kerf: f64,
        tolerance: f64,
    ) -> Transition {
        if !sheet.fits(instance) {
            return Transition::Reject;
        }

        let fits_across = self.cursor_x + instance.width <= sheet.width + tolerance;
        let fits_up = self.shelf_y + instance.height <= sheet.height + tolerance;
        if fits_across && fits_up {
            return Transition::PlaceOnShelf;
        }

        let next_shelf_y = self.shelf_y + self.shelf_max_height + kerf;
        if next_shelf_y + instance.height <= sheet.height + tolerance {
            return Transition::OpenShelf;
        }

        Transition::OpenSheet
    }

    /// Position the next part is placed at.
    pub fn position(&self) -> (f64, f64) {
        (self.cursor_x, self.shelf_y)
    }

    /// State after placing a `width` x `height` part at the cursor.
    pub fn advance(self, width: f64, height: f64, kerf: f64) -> Self {
        Self {
            cursor_x: self.cursor_x + width + kerf,
            shelf_max_height: self.shelf_max_height.max(height),
            ..self
        }
    }

    /// State after closing the current shelf.
    pub fn next_shelf(self, kerf: f64) -> Self {
        Self {
            cursor_x: 0.0,
            shelf_y: self.shelf_y + self.shelf_max_height + kerf,
            shelf_max_height: 0.0,
            ..self
        }
    }

    /// State after finishing the current sheet.
    pub fn next_sheet(self) -> Self {
        Self {
            sheet_index: self.sheet_index + 1,
            ..Self::new()
        }
    }
}

impl Default for ShelfState {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of [`ShelfPacker::pack`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedSheets {
    /// Filled sheets, indices `0..n` in order.
    pub sheets: Vec<Sheet>,
    /// Instances rejected as [`PartError::PartTooLarge`], in input order.
    pub rejected: Vec<UnplacedPart>,
}

/// Single-pass shelf packer over a fixed sheet size.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    sheet: SheetSpec,
    kerf: f64,
    tolerance: f64,
}

impl ShelfPacker {
    /// Creates a packer for the given sheet with no kerf.
    pub fn new(sheet: SheetSpec) -> Self {
        Self {
            sheet,
            kerf: 0.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the gap left between neighbouring parts and shelves.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf.max(0.0);
        self
    }

    /// Sets the tolerance for fit comparisons, clamped to `0..=MAX_TOLERANCE`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.clamp(0.0, MAX_TOLERANCE);
        self
    }

    /// Returns the sheet size.
    pub fn sheet(&self) -> &SheetSpec {
        &self.sheet
    }

    /// Packs instances in the given order.
    ///
    /// Callers normally sort with [`crate::ordering::order`] first. A sheet is
    /// only opened when a part is placed on it, so input with no placeable
    /// instance yields no sheets.
    pub fn pack(&self, instances: &[PartInstance]) -> PackedSheets {
        let mut packed = PackedSheets::default();
        let mut state = ShelfState::new();
        let mut current: Option<Sheet> = None;

        for instance in instances {
            let transition = state.classify(instance, &self.sheet, self.kerf, self.tolerance);
            match transition {
                Transition::Reject => {
                    log::warn!(
                        "Part '{}' ({} x {}) does not fit sheet {} x {}",
                        instance.label,
                        instance.width,
                        instance.height,
                        self.sheet.width,
                        self.sheet.height
                    );
                    packed.rejected.push(UnplacedPart::new(
                        instance.label.clone(),
                        PartError::PartTooLarge {
                            width: instance.width,
                            height: instance.height,
                            sheet_width: self.sheet.width,
                            sheet_height: self.sheet.height,
                        },
                    ));
                    continue;
                }
                Transition::OpenShelf => {
                    state = state.next_shelf(self.kerf);
                    log::debug!(
                        "Sheet {}: new shelf at y={}",
                        state.sheet_index,
                        state.shelf_y
                    );
                }
                Transition::OpenSheet => {
                    if let Some(full) = current.take() {
                        packed.sheets.push(full);
                    }
                    state = state.next_sheet();
                    log::debug!("Opened sheet {}", state.sheet_index);
                }
                Transition::PlaceOnShelf => {}
            }

            let (x, y) = state.position();
            current
                .get_or_insert_with(|| Sheet::new(state.sheet_index))
                .placements
                .push(Placement::new(instance, x, y));
            state = state.advance(instance.width, instance.height, self.kerf);
        }

        if let Some(last) = current {
            packed.sheets.push(last);
        }
        packed
    }
}
