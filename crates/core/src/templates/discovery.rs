use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Path relative to the templates directory, `/`-separated, extension kept.
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("templates directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to create templates directory {0}: {1}")]
    CreateDir(String, #[source] std::io::Error),
}

/// Discover template files below `root`.
///
/// Every regular file is a template except hidden files and anything inside
/// hidden directories. Results are sorted by logical name.
pub fn discover_templates(root: &Path) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        return Err(TemplateDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut out = Vec::new();
    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| e.depth() == 0 || !is_hidden(e)) {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        out.push(TemplateInfo {
            logical_name: logical_name_from_relative(rel),
            path: path.to_path_buf(),
        });
    }

    out.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    Ok(out)
}

/// Create the templates directory if it does not exist yet.
pub fn ensure_templates_dir(root: &Path) -> Result<bool, TemplateDiscoveryError> {
    if root.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(root)
        .map_err(|e| TemplateDiscoveryError::CreateDir(root.display().to_string(), e))?;
    Ok(true)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}

fn logical_name_from_relative(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_name_joins_with_slash() {
        let rel = Path::new("react").join("Component.tsx");
        assert_eq!(logical_name_from_relative(&rel), "react/Component.tsx");
    }
}
