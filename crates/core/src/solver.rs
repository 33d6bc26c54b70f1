//! Optimizer configuration and entry points.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::expand::expand;
use crate::ordering::order;
use crate::part::PartRequirement;
use crate::result::PackingResult;
use crate::sheet::SheetSpec;
use crate::shelf::{ShelfPacker, DEFAULT_TOLERANCE, MAX_TOLERANCE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optimizer configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Stock sheet size.
    pub sheet: SheetSpec,

    /// Saw blade allowance left between neighbouring parts and shelves.
    pub kerf: f64,

    /// Tolerance for fit comparisons, at most [`MAX_TOLERANCE`].
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: SheetSpec::default(),
            kerf: 0.0,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sheet spec.
    pub fn with_sheet(mut self, sheet: SheetSpec) -> Self {
        self.sheet = sheet;
        self
    }

    /// Sets the sheet size.
    pub fn with_sheet_size(mut self, width: f64, height: f64) -> Self {
        self.sheet = SheetSpec::new(width, height);
        self
    }

    /// Sets the kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Sets the fit tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.sheet.validate()?;
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::ConfigError(format!(
                "kerf must be zero or positive, got {}",
                self.kerf
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::ConfigError(format!(
                "tolerance must be zero or positive, got {}",
                self.tolerance
            )));
        }
        if self.tolerance > MAX_TOLERANCE {
            return Err(Error::ConfigError(format!(
                "tolerance must not exceed {}, got {}",
                MAX_TOLERANCE, self.tolerance
            )));
        }
        Ok(())
    }
}

/// Cut-list optimizer: expand, order, shelf-pack.
///
/// Holds only its configuration; every call builds its own state and returns
/// an owned [`PackingResult`], so one optimizer can serve many threads.
#[derive(Debug, Clone)]
pub struct CutListOptimizer {
    config: Config,
}

impl CutListOptimizer {
    /// Creates an optimizer, rejecting an invalid configuration.
    pub fn try_new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates an optimizer with the default 96 x 48 sheet.
    pub fn default_config() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn packer(&self) -> ShelfPacker {
        ShelfPacker::new(self.config.sheet)
            .with_kerf(self.config.kerf)
            .with_tolerance(self.config.tolerance)
    }

    /// Lays out all requirements on as few sheets as the shelf heuristic finds.
    ///
    /// Never fails: invalid requirements and oversize parts are reported in
    /// [`PackingResult::unplaced_errors`], expansion errors first.
    pub fn optimize(&self, requirements: &[PartRequirement]) -> PackingResult {
        let expansion = expand(requirements);
        let instances = order(expansion.instances);
        let packed = self.packer().pack(&instances);

        let mut result = PackingResult::new(self.config.sheet);
        result.sheets = packed.sheets;
        result.unplaced_errors = expansion.errors;
        result.unplaced_errors.extend(packed.rejected);

        log::info!(
            "Packed {} parts on {} sheets ({} unplaced, utilization {})",
            result.placed_count(),
            result.sheets_required(),
            result.unplaced_errors.len(),
            result.utilization_percent()
        );

        result
    }

    /// Optimizes independent jobs in parallel, one result per job in input order.
    pub fn optimize_batch(&self, jobs: &[Vec<PartRequirement>]) -> Vec<PackingResult> {
        jobs.par_iter().map(|job| self.optimize(job)).collect()
    }
}

impl Default for CutListOptimizer {
    fn default() -> Self {
        Self::default_config()
    }
}

/// One-shot optimization with default kerf and tolerance.
///
/// Fails with [`Error::InvalidSheet`] when `sheet` has a non-positive or
/// non-finite dimension.
pub fn optimize(requirements: &[PartRequirement], sheet: SheetSpec) -> Result<PackingResult> {
    let optimizer = CutListOptimizer::try_new(Config::default().with_sheet(sheet))?;
    Ok(optimizer.optimize(requirements))
}
