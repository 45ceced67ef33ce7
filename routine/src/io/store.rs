//! Saved routines: plain text files under the routines directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

/// Extension appended to saved routine names.
pub const ROUTINE_EXTENSION: &str = "txt";

/// Suffix of in-progress writes; never listed as a saved routine.
const TEMP_SUFFIX: &str = ".tmp";

/// Filesystem store for rendered routines (`<dir>/<name>.txt`).
#[derive(Debug, Clone)]
pub struct RoutineStore {
    dir: PathBuf,
}

impl RoutineStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the routines directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            bail!("{} exists but is not a directory", self.dir.display());
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create routines directory {}", self.dir.display()))
    }

    /// Write `text` to `<dir>/<name>.txt`, replacing any existing file.
    pub fn save(&self, name: &str, text: &str) -> Result<PathBuf> {
        validate_name(name)?;
        self.ensure_dir()?;
        let path = self.dir.join(format!("{name}.{ROUTINE_EXTENSION}"));
        write_atomic(&path, text)?;
        info!(path = %path.display(), "routine saved");
        Ok(path)
    }

    /// File names in the routines directory, in filesystem enumeration order.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("read {}", self.dir.display()))?
        {
            let entry = entry.context("read entry")?;
            let file_type = entry.file_type().context("read entry type")?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(TEMP_SUFFIX) {
                debug!(name = %name, "skipping leftover temp file");
                continue;
            }
            names.push(name);
        }
        debug!(count = names.len(), "routines listed");
        Ok(names)
    }

    /// Read the full text of a saved routine by file name.
    pub fn load(&self, file_name: &str) -> Result<String> {
        validate_name(file_name)?;
        let path = self.dir.join(file_name);
        fs::read_to_string(&path).with_context(|| format!("read routine {}", path.display()))
    }

    /// Load the `choice`-th entry (1-based) of a listing returned by [`Self::list`].
    ///
    /// Returns `None` when `choice` is outside the listing.
    pub fn load_selected(&self, files: &[String], choice: usize) -> Result<Option<String>> {
        let Some(file_name) = choice.checked_sub(1).and_then(|i| files.get(i)) else {
            return Ok(None);
        };
        self.load(file_name).map(Some)
    }

    /// Resolve a user-supplied routine reference, with or without `.txt`.
    pub fn resolve(&self, reference: &str) -> Result<String> {
        let files = self.list()?;
        if files.iter().any(|f| f == reference) {
            return Ok(reference.to_string());
        }
        let with_extension = format!("{reference}.{ROUTINE_EXTENSION}");
        if files.contains(&with_extension) {
            return Ok(with_extension);
        }
        bail!("no saved routine named '{}' in {}", reference, self.dir.display())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("routine name must not be empty");
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("routine name '{}' must be a plain file name", name);
    }
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension(format!("{ROUTINE_EXTENSION}{TEMP_SUFFIX}"));
    let written = fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp routine {}", tmp_path.display()))
        .and_then(|()| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("replace routine {}", path.display()))
        });
    if written.is_err() && tmp_path.exists() {
        if let Err(err) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), error = %err, "failed to remove temp routine");
        }
    }
    written
}
