//! Start-up initialization and `routine init` scaffolding.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use super::config::{RoutineConfig, write_config};
use super::store::RoutineStore;

/// Options for `init_config`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config file.
    pub force: bool,
}

/// Explicit start-up step: make sure the routines directory exists.
///
/// Called once from the entry point before any command runs.
pub fn prepare_store(config: &RoutineConfig) -> Result<RoutineStore> {
    let store = RoutineStore::new(&config.routines_dir);
    store.ensure_dir()?;
    debug!(dir = %store.dir().display(), "routines directory ready");
    Ok(store)
}

/// Write a default config file at `path` and create its routines directory.
///
/// Fails if the file already exists unless `options.force` is set. Relative
/// `routines_dir` values are resolved against the config file's directory.
pub fn init_config(path: &Path, options: &InitOptions) -> Result<PathBuf> {
    if path.exists() && !options.force {
        return Err(anyhow!(
            "routine init: {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    if path.is_dir() {
        return Err(anyhow!("routine init: {} is a directory", path.display()));
    }

    let config = RoutineConfig::default();
    write_config(path, &config)?;

    let base = path.parent().unwrap_or(Path::new(""));
    let routines_dir = base.join(&config.routines_dir);
    RoutineStore::new(&routines_dir).ensure_dir()?;
    info!(config = %path.display(), routines_dir = %routines_dir.display(), "initialized");
    Ok(routines_dir)
}
