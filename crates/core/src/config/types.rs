use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::diagnostics::DEFAULT_HISTORY_LIMIT;
use crate::query::DEFAULT_PAGE_SIZE;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Directory holding this profile's library.
    pub data_dir: String,
    /// Override for the library file (defaults to `{{data_dir}}/library.json`).
    pub library_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LibraryConfig {
    /// Prompts per page in list views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self { page_size: default_page_size() }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
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

/// Bounded error history kept in memory while the library is open.
#[derive(Debug, Deserialize, Clone)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { history_limit: default_history_limit() }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub data_dir: PathBuf,
    pub library_file: PathBuf,
    pub page_size: usize,
    pub history_limit: usize,
    pub logging: LoggingConfig,
}
