//! Built-in variables available to every template.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::table::VarTable;

/// Names of the variables computed for every render.
pub const BUILTIN_NAMES: &[&str] = &["filename", "filepath", "year", "date"];

/// Where a rendered template is going to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    /// File name as entered by the user, extension included.
    pub filename: String,
    /// Directory the file is created in.
    pub target_dir: PathBuf,
    pub workspace_root: PathBuf,
}

impl RenderTarget {
    pub fn new(
        filename: impl Into<String>,
        target_dir: impl Into<PathBuf>,
        workspace_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filename: filename.into(),
            target_dir: target_dir.into(),
            workspace_root: workspace_root.into(),
        }
    }

    /// Full path of the file to create.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.target_dir.join(&self.filename)
    }
}

/// Build the built-in variables for `target` as of `today`.
///
/// - `filename`: target file name without its last extension
/// - `filepath`: target directory relative to the workspace root
/// - `year`: e.g. `2026`
/// - `date`: e.g. `7 Mar 2026`
pub fn builtin_variables(target: &RenderTarget, today: NaiveDate) -> VarTable {
    let mut vars = VarTable::new();
    vars.insert("filename", strip_extension(&target.filename));
    vars.insert("filepath", relative_dir(&target.target_dir, &target.workspace_root));
    vars.insert("year", today.format("%Y").to_string());
    vars.insert("date", today.format("%-d %b %Y").to_string());
    vars
}

/// Remove the last extension from a file name.
///
/// Only the final `.ext` segment of the last path component is removed:
/// `Foo.test.ts` becomes `Foo.test`, `dir.d/Makefile` is unchanged and a
/// dotfile such as `.env` becomes empty.
#[must_use]
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => {
            let ext = &filename[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                filename
            } else {
                &filename[..idx]
            }
        }
        None => filename,
    }
}

fn relative_dir(dir: &Path, root: &Path) -> String {
    match dir.strip_prefix(root) {
        Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
        Err(_) => dir.to_string_lossy().to_string(),
    }
}
