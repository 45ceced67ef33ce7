//! Generation flow: catalog preparation, scheduling and rendering.
//!
//! Ties the pure core together with the configured empty-group policy and RNG
//! source. Only the rendered text leaves this module; the structural routine
//! is dropped once rendered.

use anyhow::{Result, anyhow, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::core::invariants::{validate_catalog, validate_schedule};
use crate::core::render::render_routine;
use crate::core::schedule::{assign_groups, pick_exercises};
use crate::core::types::Catalog;
use crate::io::catalog::load_catalog;
use crate::io::config::{EmptyGroupPolicy, RoutineConfig};

/// Training days and session length chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub days: u32,
    pub session_minutes: u32,
}

impl GenerationRequest {
    /// Check the request against the configured ranges.
    pub fn validate(&self, config: &RoutineConfig) -> Result<()> {
        if !config.days.contains(i64::from(self.days)) {
            bail!(
                "days must be between {} and {}, got {}",
                config.days.min,
                config.days.max,
                self.days
            );
        }
        if !config.session_minutes.contains(i64::from(self.session_minutes)) {
            bail!(
                "session minutes must be between {} and {}, got {}",
                config.session_minutes.min,
                config.session_minutes.max,
                self.session_minutes
            );
        }
        Ok(())
    }
}

/// RNG for generation: seeded when `seed` is set, from OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Apply the empty-group policy to a freshly loaded catalog.
pub fn prepare_catalog(mut catalog: Catalog, policy: EmptyGroupPolicy) -> Result<Catalog> {
    match policy {
        EmptyGroupPolicy::Reject => {
            let errors = validate_catalog(&catalog);
            if !errors.is_empty() {
                bail!("invalid catalog:\n- {}", errors.join("\n- "));
            }
        }
        EmptyGroupPolicy::Skip => {
            for group in catalog.remove_empty_groups() {
                warn!(group = %group, "skipping muscle group without exercises");
            }
        }
    }
    Ok(catalog)
}

/// Load the configured catalog and apply the empty-group policy.
///
/// The catalog is read from disk on every call.
pub fn load_prepared_catalog(config: &RoutineConfig) -> Result<Catalog> {
    let catalog = load_catalog(&config.catalog_path)?;
    prepare_catalog(catalog, config.empty_groups)
}

/// Generate and render a routine from an already prepared catalog.
pub fn generate_routine<R: Rng + ?Sized>(
    catalog: &Catalog,
    request: GenerationRequest,
    rng: &mut R,
) -> Result<String> {
    let days = usize::try_from(request.days).map_err(|_| anyhow!("days out of range"))?;
    let schedule = assign_groups(&catalog.group_names(), days, rng)?;
    let errors = validate_schedule(&schedule, catalog, days);
    if !errors.is_empty() {
        bail!("schedule invariants failed: {}", errors.join("; "));
    }
    debug!(days, groups = catalog.len(), "groups assigned");

    let routine = pick_exercises(&schedule, catalog, rng)?;
    let text = render_routine(&routine, request.days, request.session_minutes);
    info!(
        days = request.days,
        session_minutes = request.session_minutes,
        "routine generated"
    );
    Ok(text)
}

/// One-shot generation from config: load catalog, validate, generate.
pub fn generate_from_config<R: Rng + ?Sized>(
    config: &RoutineConfig,
    request: GenerationRequest,
    rng: &mut R,
) -> Result<String> {
    request.validate(config)?;
    let catalog = load_prepared_catalog(config)?;
    generate_routine(&catalog, request, rng)
}
