//! Weekly workout routine generator.
//!
//! Builds a randomized training week from an exercise catalog: muscle groups
//! are dealt across the chosen number of days so each appears once, then one
//! exercise is drawn per group. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (scheduling, exercise draws, rendering, invariants).
//!   No I/O; randomness is injected so seeded runs are reproducible.
//! - **[`io`]**: Side-effecting operations (catalog CSV, console prompts, saved
//!   routines, config file).
//!
//! Orchestration modules ([`generate`], [`menu`]) coordinate core logic with I/O
//! to implement the CLI commands and the interactive menu.

pub mod core;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
pub mod menu;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
