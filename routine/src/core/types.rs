//! Shared deterministic types for routine generation.
//!
//! These types carry no I/O state. The catalog keeps first-appearance order of
//! groups so that a seeded generator always produces the same routine.

/// Exercises available for one muscle group, in source row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleGroup {
    pub name: String,
    pub exercises: Vec<String>,
}

/// Muscle group → exercises mapping loaded from the exercise table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: Vec<MuscleGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `group` without adding an exercise to it.
    ///
    /// Returns the group so callers can append in place.
    pub fn ensure_group(&mut self, group: &str) -> &mut MuscleGroup {
        let index = match self.groups.iter().position(|g| g.name == group) {
            Some(index) => index,
            None => {
                self.groups.push(MuscleGroup {
                    name: group.to_string(),
                    exercises: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    /// Append `exercise` to `group`, creating the group on first use.
    pub fn push(&mut self, group: &str, exercise: &str) {
        self.ensure_group(group).exercises.push(exercise.to_string());
    }

    pub fn groups(&self) -> &[MuscleGroup] {
        &self.groups
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn exercises(&self, group: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.exercises.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drop groups without exercises, returning the names that were removed.
    pub fn remove_empty_groups(&mut self) -> Vec<String> {
        let mut removed = Vec::new();
        self.groups.retain(|g| {
            if g.exercises.is_empty() {
                removed.push(g.name.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}

/// One training day and the muscle groups assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    /// Display label, `Día {n}` with `n` starting at 1.
    pub label: String,
    pub groups: Vec<String>,
}

/// Day-by-day partition of the catalog's groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub days: Vec<DayPlan>,
}

/// A muscle group paired with the exercise drawn for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub group: String,
    pub exercise: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineDay {
    pub label: String,
    pub assignments: Vec<Assignment>,
}

/// A schedule with one exercise chosen per (day, group) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub days: Vec<RoutineDay>,
}

/// Label for the 1-indexed training day `number`.
pub fn day_label(number: usize) -> String {
    format!("Día {number}")
}
