//! Deterministic, pure logic for routine generation.
//!
//! Core modules must be free of I/O side effects. Randomness comes in through
//! a caller-supplied RNG, so a seeded generator yields the same routine on
//! every run.

pub mod invariants;
pub mod render;
pub mod schedule;
pub mod types;
