//! Routine configuration stored in `routine.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::prompt::RetryPolicy;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "routine.toml";

/// Routine configuration (TOML).
///
/// Meant to be edited by hand. Missing fields fall back to the defaults of
/// the original console program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutineConfig {
    /// CSV file with `grupo_muscular` and `ejercicio` columns.
    pub catalog_path: PathBuf,

    /// Directory holding saved routines (`<name>.txt`).
    pub routines_dir: PathBuf,

    /// What to do with muscle groups that have no exercises.
    pub empty_groups: EmptyGroupPolicy,

    /// Fixed RNG seed; `None` draws from the thread RNG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Accepted training days per week.
    pub days: IntRange,

    /// Accepted session length in minutes.
    pub session_minutes: IntRange,

    pub prompt: PromptConfig,
}

/// Closed integer range `[min, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyGroupPolicy {
    /// Fail generation, listing every empty group.
    #[default]
    Reject,
    /// Drop empty groups before scheduling.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PromptConfig {
    /// Rejected answers tolerated per question; omitted means retry forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

impl PromptConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        match self.max_attempts {
            Some(attempts) => RetryPolicy::Limited(attempts),
            None => RetryPolicy::Unbounded,
        }
    }
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("ejercicios.csv"),
            routines_dir: PathBuf::from("rutinas"),
            empty_groups: EmptyGroupPolicy::default(),
            seed: None,
            days: IntRange::new(3, 5),
            session_minutes: IntRange::new(45, 90),
            prompt: PromptConfig::default(),
        }
    }
}

impl RoutineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(anyhow!("catalog_path must not be empty"));
        }
        if self.routines_dir.as_os_str().is_empty() {
            return Err(anyhow!("routines_dir must not be empty"));
        }
        validate_range("days", self.days)?;
        validate_range("session_minutes", self.session_minutes)?;
        if self.prompt.max_attempts == Some(0) {
            return Err(anyhow!("prompt.max_attempts must be > 0"));
        }
        Ok(())
    }
}

fn validate_range(name: &str, range: IntRange) -> Result<()> {
    if range.min <= 0 {
        return Err(anyhow!("{name}.min must be > 0"));
    }
    if range.min > range.max {
        return Err(anyhow!(
            "{name}.min ({}) must not exceed {name}.max ({})",
            range.min,
            range.max
        ));
    }
    Ok(())
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RoutineConfig::default()`.
pub fn load_config(path: &Path) -> Result<RoutineConfig> {
    if !path.exists() {
        let cfg = RoutineConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RoutineConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RoutineConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RoutineConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("routine.toml");
        let cfg = RoutineConfig {
            seed: Some(7),
            empty_groups: EmptyGroupPolicy::Skip,
            prompt: PromptConfig {
                max_attempts: Some(4),
            },
            ..RoutineConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("routine.toml");
        fs::write(&path, "routines_dir = \"saved\"\n\n[days]\nmin = 2\nmax = 6\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.routines_dir, PathBuf::from("saved"));
        assert_eq!(cfg.days, IntRange::new(2, 6));
        assert_eq!(cfg.session_minutes, IntRange::new(45, 90));
        assert_eq!(cfg.prompt.retry_policy(), RetryPolicy::Unbounded);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let cfg = RoutineConfig {
            session_minutes: IntRange::new(90, 45),
            ..RoutineConfig::default()
        };
        let err = cfg.validate().expect_err("inverted range");
        assert!(err.to_string().contains("session_minutes.min (90)"));
    }
}
