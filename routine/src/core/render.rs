//! Plain-text rendering of a generated routine.

use std::fmt::Write;

use crate::core::types::Routine;

/// Render `routine` as the text shown to the user and written to disk.
///
/// Header lines state the day count and session length, then each day lists
/// `  - {Group}: {exercise}` lines followed by a blank line. Days without
/// groups still get their label.
pub fn render_routine(routine: &Routine, days: u32, session_minutes: u32) -> String {
    let mut out = String::new();
    out.push_str("Rutina de entrenamiento\n");
    let _ = writeln!(out, "Días por semana: {days}");
    let _ = writeln!(out, "Tiempo por sesión: {session_minutes} minutos");
    out.push('\n');

    for day in &routine.days {
        let _ = writeln!(out, "{}:", day.label);
        for assignment in &day.assignments {
            let _ = writeln!(
                out,
                "  - {}: {}",
                capitalize(&assignment.group),
                assignment.exercise
            );
        }
        out.push('\n');
    }
    out
}

/// Upper-case the first character and lower-case the rest.
///
/// The first character uses its full uppercase mapping, not titlecase, so a
/// leading `ß` becomes `SS` and a digraph such as `ǆ` becomes `Ǆ` rather than `ǅ`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
