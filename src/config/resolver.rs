use tracing::{debug, warn};

use crate::checker::{CheckRegistry, Importance};
use crate::error::Result;

use super::ConfigOverrides;

/// What applying overrides changed in a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedOverrides {
    pub skipped: Vec<String>,
    pub reassigned: Vec<(String, Importance)>,
    /// Listed names that matched no registered check.
    pub unknown: Vec<String>,
}

/// Apply `overrides` to `registry`.
///
/// Buckets are applied in declared order, so when a name is listed twice the later
/// bucket wins. `SKIP` removes the check from the registry, which makes it terminal:
/// a later bucket naming an already skipped check has nothing left to change.
///
/// # Errors
/// Never fails for levels accepted by [`super::OverrideLevel`]; the `Result` carries the
/// registry's own validation.
pub fn apply_overrides(
    registry: &mut CheckRegistry,
    overrides: &ConfigOverrides,
) -> Result<AppliedOverrides> {
    let mut applied = AppliedOverrides::default();

    for (level, names) in overrides.entries() {
        for name in names {
            match level.importance() {
                None => {
                    if registry.remove(name).is_some() {
                        debug!(check = %name, "skipping check");
                        applied.skipped.push(name.clone());
                    } else if !applied.skipped.contains(name) {
                        applied.unknown.push(name.clone());
                    }
                }
                Some(importance) => {
                    if registry.set_importance(name, importance)? {
                        debug!(check = %name, %importance, "reassigning importance");
                        applied.reassigned.push((name.clone(), importance));
                    } else if !applied.skipped.contains(name) {
                        applied.unknown.push(name.clone());
                    }
                }
            }
        }
    }

    for name in &applied.unknown {
        warn!(check = %name, "configuration names an unregistered check");
    }

    Ok(applied)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
