//! # U-CutList Core
//!
//! Sheet cut-list optimizer for cabinet and furniture work.
//!
//! Given the rectangular parts a job needs, this crate lays them out on
//! fixed-size stock sheets so the result can be used directly as a cutting
//! guide.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Expand | [`expand`] | Requirements to one instance per physical part, long side as width |
//! | Order | [`ordering`] | Height descending, width descending, stable |
//! | Pack | [`shelf`] | Next-fit shelf packing, one pass, no backtracking |
//! | Report | [`result`] | Sheets, placements, unplaced parts, summary |
//!
//! [`validate`](validate::validate) checks a result for overlap, bounds and
//! instance conservation. [`bom`] turns cabinet dimensions into part
//! requirements.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_cutlist_core::{CutListOptimizer, Config, PartRequirement};
//!
//! let parts = vec![
//!     PartRequirement::new("Side", 34.5, 24.0).with_quantity(2),
//!     PartRequirement::new("Shelf", 28.0, 22.0).with_quantity(3),
//! ];
//!
//! let optimizer = CutListOptimizer::try_new(Config::new().with_sheet_size(96.0, 48.0)).unwrap();
//! let result = optimizer.optimize(&parts);
//!
//! assert_eq!(result.sheets_required(), 1);
//! assert_eq!(result.placed_count(), 5);
//! assert!(result.all_placed());
//! ```
//!
//! ## Errors
//!
//! A run never fails. Invalid requirements (`InvalidQuantity`,
//! `InvalidDimension`) and parts larger than the sheet (`PartTooLarge`) are
//! listed in [`PackingResult::unplaced_errors`] and the rest of the batch is
//! packed. Only constructing an optimizer with a bad [`Config`] returns an
//! [`Error`]; the one-shot [`optimize`] builds one and fails the same way.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod bom;
pub mod error;
pub mod expand;
pub mod ordering;
pub mod part;
pub mod result;
pub mod sheet;
pub mod shelf;
pub mod solver;
pub mod validate;

// Re-exports
pub use bom::{bill_of_materials, CabinetSpec};
pub use error::{Error, PartError, Result};
pub use expand::{expand, Expansion};
pub use ordering::order;
pub use part::{PartInstance, PartLabel, PartRequirement};
pub use result::{PackingResult, PackingSummary, Placement, Sheet, UnplacedPart};
pub use sheet::SheetSpec;
pub use shelf::{PackedSheets, ShelfPacker, ShelfState, Transition, MAX_TOLERANCE};
pub use solver::{optimize, Config, CutListOptimizer};
pub use validate::{validate, validate_expansion, validate_with_tolerance, ViolationReport};
