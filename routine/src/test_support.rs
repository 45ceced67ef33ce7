//! Test-only helpers for building catalogs and scratch workspaces.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::types::Catalog;
use crate::io::config::{CONFIG_FILE, RoutineConfig, write_config};

/// Exercise table with four groups and a few exercises each.
pub const SAMPLE_CSV: &str = "\
grupo_muscular,ejercicio
pecho,press banca
pecho,fondos
espalda,remo con barra
espalda,dominadas
piernas,sentadilla
piernas,peso muerto
hombros,press militar
";

/// Catalog equivalent to [`SAMPLE_CSV`].
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for line in SAMPLE_CSV.lines().skip(1) {
        if let Some((group, exercise)) = line.split_once(',') {
            catalog.push(group, exercise);
        }
    }
    catalog
}

/// Write [`SAMPLE_CSV`] as `ejercicios.csv` inside `dir`.
pub fn write_catalog_csv(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("ejercicios.csv");
    fs::write(&path, SAMPLE_CSV).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Temporary working directory with a catalog and a config pointing at it.
pub struct TestWorkspace {
    temp: TempDir,
    pub config: RoutineConfig,
}

impl TestWorkspace {
    /// Create a workspace with the sample catalog and a fixed seed.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let catalog_path = write_catalog_csv(temp.path())?;
        let config = RoutineConfig {
            catalog_path,
            routines_dir: temp.path().join("rutinas"),
            seed: Some(42),
            ..RoutineConfig::default()
        };
        Ok(Self { temp, config })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Persist the workspace config as `routine.toml`.
    pub fn write_config(&self) -> Result<PathBuf> {
        let path = self.temp.path().join(CONFIG_FILE);
        write_config(&path, &self.config)?;
        Ok(path)
    }
}
