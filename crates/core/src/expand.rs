//! Part expansion: requirements to individual instances.

use crate::part::{PartInstance, PartRequirement};
use crate::result::UnplacedPart;

/// Output of [`expand`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    /// Normalized instances, in requirement order.
    pub instances: Vec<PartInstance>,

    /// One entry per requirement that failed validation.
    pub errors: Vec<UnplacedPart>,
}

impl Expansion {
    /// Number of instances produced.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

/// Upper bound on the up-front allocation made by [`expand`].
const MAX_CAPACITY_HINT: usize = 1 << 16;

/// Instance count to reserve for, saturating instead of overflowing on huge
/// quantities.
fn capacity_hint(requirements: &[PartRequirement]) -> usize {
    requirements
        .iter()
        .filter(|r| r.validate().is_ok())
        .map(|r| usize::try_from(r.quantity).unwrap_or(usize::MAX))
        .fold(0usize, usize::saturating_add)
        .min(MAX_CAPACITY_HINT)
}

/// Expands each valid requirement into `quantity` normalized instances.
///
/// Invalid requirements are skipped and reported in [`Expansion::errors`];
/// they never abort the batch.
pub fn expand(requirements: &[PartRequirement]) -> Expansion {
    let mut expansion = Expansion {
        instances: Vec::with_capacity(capacity_hint(requirements)),
        errors: Vec::new(),
    };

    for requirement in requirements {
        if let Err(error) = requirement.validate() {
            log::warn!("Skipping requirement '{}': {}", requirement.label, error);
            expansion
                .errors
                .push(UnplacedPart::new(requirement.label.clone(), error));
            continue;
        }

        let instance = requirement.normalized();
        for _ in 0..requirement.quantity {
            expansion.instances.push(instance.clone());
        }
    }

    log::debug!(
        "Expanded {} requirements into {} instances ({} rejected)",
        requirements.len(),
        expansion.instances.len(),
        expansion.errors.len()
    );

    expansion
}
