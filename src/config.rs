//! Configuration for the calendar shell.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CALENDAR_EXPORT_DIR)
//! 2. Config file (.calendar/config.yaml)
//! 3. Defaults (Downloads directory, tourist mode, verbatim times)
//!
//! Config file discovery:
//! - Searches current directory and parents for .calendar/config.yaml
//! - Paths in config file are relative to the project root (parent of .calendar/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::AudienceMode;
use crate::export::{ExportSettings, TimeConvention, DEFAULT_PRODUCT_ID};

/// Environment override for the export directory
pub const EXPORT_DIR_ENV: &str = "CALENDAR_EXPORT_DIR";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub audience: AudienceConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudienceConfig {
    /// Mode used when the shell is not told otherwise
    pub default_mode: Option<AudienceMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    pub product_id: Option<String>,
    pub time_convention: Option<TimeConvention>,
    /// Export directory (relative to the project root)
    pub output_dir: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where exported calendars are written
    pub export_dir: PathBuf,
    /// Audience mode when none is given
    pub default_mode: AudienceMode,
    /// ICS output settings
    pub export: ExportSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".calendar").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Downloads directory, or the current directory when there is none
fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Merge a parsed config file (if any) with the environment
fn resolve(
    config: Option<(ConfigFile, PathBuf)>,
    env_export_dir: Option<String>,
) -> ResolvedConfig {
    let (file, config_file) = match config {
        Some((file, path)) => (Some(file), Some(path)),
        None => (None, None),
    };

    // Project root is the parent of .calendar/
    let base_dir = config_file
        .as_deref()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let export_dir = if let Some(dir) = env_export_dir {
        PathBuf::from(dir)
    } else if let Some(dir) = file.as_ref().and_then(|f| f.export.output_dir.as_deref()) {
        resolve_path(&base_dir, dir)
    } else {
        default_export_dir()
    };

    let default_mode = file
        .as_ref()
        .and_then(|f| f.audience.default_mode)
        .unwrap_or_default();

    let export = ExportSettings {
        product_id: file
            .as_ref()
            .and_then(|f| f.export.product_id.clone())
            .unwrap_or_else(|| DEFAULT_PRODUCT_ID.to_string()),
        time_convention: file
            .as_ref()
            .and_then(|f| f.export.time_convention)
            .unwrap_or_default(),
    };

    ResolvedConfig {
        export_dir,
        default_mode,
        export,
        config_file,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config = match find_config_file() {
        Some(path) => Some((load_config_file(&path)?, path)),
        None => None,
    };

    Ok(resolve(config, std::env::var(EXPORT_DIR_ENV).ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
