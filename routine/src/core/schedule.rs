//! Routine generation: spread muscle groups over training days and draw
//! one exercise per group.
//!
//! Randomness is injected so a seeded RNG gives reproducible routines.

use anyhow::{Result, anyhow, bail};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::types::{Assignment, Catalog, DayPlan, Routine, RoutineDay, Schedule, day_label};

/// Shuffle `groups` and deal them round-robin into `days` buckets.
///
/// The i-th shuffled group lands on day `(i mod days) + 1`, so every group is
/// scheduled exactly once and bucket sizes differ by at most one. Surplus days
/// stay empty when there are fewer groups than days.
pub fn assign_groups<R: Rng + ?Sized>(
    groups: &[&str],
    days: usize,
    rng: &mut R,
) -> Result<Schedule> {
    if days == 0 {
        bail!("days must be > 0");
    }

    let mut shuffled: Vec<&str> = groups.to_vec();
    shuffled.shuffle(rng);

    let mut buckets: Vec<DayPlan> = (1..=days)
        .map(|number| DayPlan {
            label: day_label(number),
            groups: Vec::new(),
        })
        .collect();
    for (i, group) in shuffled.into_iter().enumerate() {
        buckets[i % days].groups.push(group.to_string());
    }

    Ok(Schedule { days: buckets })
}

/// Draw one exercise uniformly at random for every scheduled group.
///
/// Draws are independent, so the same exercise may appear on several days.
pub fn pick_exercises<R: Rng + ?Sized>(
    schedule: &Schedule,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Routine> {
    let mut days = Vec::with_capacity(schedule.days.len());
    for day in &schedule.days {
        let mut assignments = Vec::with_capacity(day.groups.len());
        for group in &day.groups {
            let exercises = catalog
                .exercises(group)
                .ok_or_else(|| anyhow!("muscle group '{}' is not in the catalog", group))?;
            let exercise = exercises
                .choose(rng)
                .ok_or_else(|| anyhow!("muscle group '{}' has no exercises", group))?;
            assignments.push(Assignment {
                group: group.clone(),
                exercise: exercise.clone(),
            });
        }
        days.push(RoutineDay {
            label: day.label.clone(),
            assignments,
        });
    }
    Ok(Routine { days })
}
