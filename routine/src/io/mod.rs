//! I/O helpers: catalog file, console prompts, saved routines, config.

pub mod catalog;
pub mod config;
pub mod init;
pub mod prompt;
pub mod store;
