//! Stable exit codes for routine CLI commands.

/// Command succeeded (including leaving the menu).
pub const OK: i32 = 0;
/// Command failed: bad config, unreadable catalog, invalid arguments or I/O errors.
pub const INVALID: i32 = 1;
