use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::vars::VarTable;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    /// Literal values keyed by variable name, shared by every profile.
    #[serde(default)]
    pub overrides: VarTable,
    /// Variables that may reference other variables, shared by every profile.
    #[serde(default)]
    pub variables: VarTable,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub workspace_root: String,
    /// Defaults to `{{workspace_root}}/.templates`.
    pub templates_dir: Option<String>,
    /// Entries here win over the global `[overrides]` table.
    #[serde(default)]
    pub overrides: VarTable,
    /// Entries here win over the global `[variables]` table.
    #[serde(default)]
    pub variables: VarTable,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub workspace_root: PathBuf,
    pub templates_dir: PathBuf,
    pub overrides: VarTable,
    pub variables: VarTable,
    pub logging: LoggingConfig,
}
