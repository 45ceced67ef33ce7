//! Catalog and schedule invariants checked before and after generation.

use std::collections::HashSet;

use crate::core::types::{Catalog, Schedule};

/// Check that every catalog group can be drawn from:
/// - No group has an empty exercise list
/// - No exercise name is blank
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();
    for group in catalog.groups() {
        if group.exercises.is_empty() {
            errors.push(format!("muscle group '{}' has no exercises", group.name));
        }
        if group.exercises.iter().any(|e| e.trim().is_empty()) {
            errors.push(format!("muscle group '{}' has a blank exercise", group.name));
        }
    }
    errors
}

/// Check that `schedule` partitions the catalog's groups:
/// - Exactly `days` day buckets
/// - Every group scheduled exactly once
/// - No group outside the catalog
pub fn validate_schedule(schedule: &Schedule, catalog: &Catalog, days: usize) -> Vec<String> {
    let mut errors = Vec::new();
    if schedule.days.len() != days {
        errors.push(format!(
            "expected {} days, schedule has {}",
            days,
            schedule.days.len()
        ));
    }

    let known: HashSet<&str> = catalog.group_names().into_iter().collect();
    let mut seen = HashSet::new();
    for day in &schedule.days {
        for group in &day.groups {
            if !known.contains(group.as_str()) {
                errors.push(format!("{}: unknown muscle group '{}'", day.label, group));
            }
            if !seen.insert(group.as_str()) {
                errors.push(format!("{}: muscle group '{}' scheduled twice", day.label, group));
            }
        }
    }

    for name in catalog.group_names() {
        if !seen.contains(name) {
            errors.push(format!("muscle group '{}' is not scheduled", name));
        }
    }
    errors
}
