//! Exercise catalog loading from CSV.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::core::types::Catalog;

/// Column holding the muscle group name.
pub const GROUP_COLUMN: &str = "grupo_muscular";
/// Column holding the exercise name.
pub const EXERCISE_COLUMN: &str = "ejercicio";

/// Load the catalog from a CSV file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    debug!(path = %path.display(), "loading catalog");
    let file = File::open(path).with_context(|| format!("open catalog {}", path.display()))?;
    let catalog =
        read_catalog(file).with_context(|| format!("parse catalog {}", path.display()))?;
    debug!(groups = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse a catalog from CSV with `grupo_muscular` and `ejercicio` columns.
///
/// Other columns are ignored. Row order is preserved within each group.
/// Rows may be shorter or longer than the header; missing cells read as blank.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut rows = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rows.headers().context("read header")?.clone();
    let group_idx = column_index(&headers, GROUP_COLUMN)?;
    let exercise_idx = column_index(&headers, EXERCISE_COLUMN)?;

    let mut catalog = Catalog::new();
    for (row, record) in rows.records().enumerate() {
        let record = record.with_context(|| format!("read row {}", row + 1))?;
        let group = record.get(group_idx).unwrap_or_default();
        if group.is_empty() {
            warn!(row = row + 1, "skipping row without muscle group");
            continue;
        }
        match record.get(exercise_idx).unwrap_or_default() {
            "" => {
                warn!(row = row + 1, group, "row without exercise");
                catalog.ensure_group(group);
            }
            exercise => catalog.push(group, exercise),
        }
    }
    Ok(catalog)
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| anyhow!("missing required column '{}'", column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_exercises_in_row_order() {
        let csv = "grupo_muscular,ejercicio\n\
                   pecho,press banca\n\
                   espalda,remo\n\
                   pecho,aperturas\n";
        let catalog = read_catalog(csv.as_bytes()).expect("catalog");

        assert_eq!(catalog.group_names(), vec!["pecho", "espalda"]);
        assert_eq!(
            catalog.exercises("pecho").expect("pecho"),
            &["press banca".to_string(), "aperturas".to_string()]
        );
    }

    #[test]
    fn column_order_and_extra_columns_are_ignored() {
        let csv = "ejercicio,notas,grupo_muscular\nsentadilla,x,piernas\n";
        let catalog = read_catalog(csv.as_bytes()).expect("catalog");
        assert_eq!(
            catalog.exercises("piernas").expect("piernas"),
            &["sentadilla".to_string()]
        );
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "grupo,ejercicio\npecho,press banca\n";
        let err = read_catalog(csv.as_bytes()).expect_err("missing column");
        assert!(err.to_string().contains("'grupo_muscular'"));
    }

    #[test]
    fn blank_exercise_registers_empty_group() {
        let csv = "grupo_muscular,ejercicio\ngemelos,\n,remo\n";
        let catalog = read_catalog(csv.as_bytes()).expect("catalog");
        assert_eq!(catalog.group_names(), vec!["gemelos"]);
        assert!(catalog.exercises("gemelos").expect("gemelos").is_empty());
    }

    #[test]
    fn short_row_registers_group_without_exercise() {
        let csv = "grupo_muscular,ejercicio,notas\npecho,press banca\ngemelos\n";
        let catalog = read_catalog(csv.as_bytes()).expect("catalog");

        assert_eq!(catalog.group_names(), vec!["pecho", "gemelos"]);
        assert_eq!(
            catalog.exercises("pecho").expect("pecho"),
            &["press banca".to_string()]
        );
        assert!(catalog.exercises("gemelos").expect("gemelos").is_empty());
    }

    #[test]
    fn long_row_extra_cells_are_ignored() {
        let csv = "grupo_muscular,ejercicio\npecho,press banca,\nespalda,remo,4x10,pesado\n";
        let catalog = read_catalog(csv.as_bytes()).expect("catalog");

        assert_eq!(
            catalog.exercises("pecho").expect("pecho"),
            &["press banca".to_string()]
        );
        assert_eq!(
            catalog.exercises("espalda").expect("espalda"),
            &["remo".to_string()]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_catalog(&temp.path().join("ejercicios.csv")).expect_err("missing");
        assert!(format!("{err:#}").contains("open catalog"));
    }
}
