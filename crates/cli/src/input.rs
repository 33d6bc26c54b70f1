//! Input files: configuration, requirements, cabinets, synthetic data.

use anyhow::Context;
use rand::prelude::*;
use std::path::Path;
use u_cutlist_core::{CabinetSpec, Config, PartRequirement, SheetSpec};

/// Loads a TOML configuration file.
///
/// ```toml
/// kerf = 0.125
///
/// [sheet]
/// width = 96.0
/// height = 48.0
/// ```
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_config(content: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(content)?;
    // Serde fills the fields as written; restore the width >= height convention.
    config.sheet = SheetSpec::new(config.sheet.width, config.sheet.height);
    log::debug!("Loaded config: {:?}", config);
    Ok(config)
}

/// Loads a JSON array of part requirements.
pub fn load_requirements(path: &Path) -> anyhow::Result<Vec<PartRequirement>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse requirements in {}", path.display()))
}

/// Loads a JSON array of cabinet specs.
pub fn load_cabinets(path: &Path) -> anyhow::Result<Vec<CabinetSpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cabinets in {}", path.display()))
}

/// Generates cabinet-like part requirements, reproducible by seed.
///
/// Lengths are rounded to 1/8 and stay within a 96 x 48 sheet.
pub fn synthetic_requirements(count: usize, seed: u64) -> Vec<PartRequirement> {
    let mut rng = StdRng::seed_from_u64(seed);
    const KINDS: [&str; 6] = ["Side", "Top", "Bottom", "Back", "Shelf", "Divider"];

    (0..count)
        .map(|i| {
            let kind = KINDS[rng.gen_range(0..KINDS.len())];
            let a = eighths(rng.gen_range(6.0..96.0));
            let b = eighths(rng.gen_range(4.0..48.0));
            PartRequirement::new(format!("{} {}", kind, i + 1), a, b)
                .with_quantity(rng.gen_range(1..=4))
        })
        .collect()
}

fn eighths(value: f64) -> f64 {
    (value * 8.0).round() / 8.0
}
