use crate::api::{PhonebookApi, PhonebookPaths};
use crate::config::PhonebookConfig;
use crate::error::{PhonebookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory (config and default contacts file).
pub const HOME_ENV: &str = "PHONEBOOK_HOME";
/// Overrides the contacts file path.
pub const DATA_ENV: &str = "PHONEBOOK_DATA";

pub struct PhonebookContext {
    pub api: PhonebookApi<FileStore>,
    pub config: PhonebookConfig,
}

/// `PHONEBOOK_HOME` if set, otherwise the platform data directory.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            PhonebookError::Config(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

/// Picks the contacts file: explicit override, then `PHONEBOOK_DATA`, then config.
pub fn resolve_paths(
    data_dir: &Path,
    config: &PhonebookConfig,
    file_override: Option<PathBuf>,
    env_data_file: Option<PathBuf>,
) -> PhonebookPaths {
    let data_file = file_override
        .or(env_data_file)
        .unwrap_or_else(|| config.data_file_path(data_dir));

    PhonebookPaths {
        data_dir: data_dir.to_path_buf(),
        data_file,
    }
}

pub fn initialize(file_override: Option<PathBuf>) -> Result<PhonebookContext> {
    let data_dir = resolve_data_dir()?;

    let config = PhonebookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        PhonebookConfig::default()
    });

    let env_data_file = std::env::var_os(DATA_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let paths = resolve_paths(&data_dir, &config, file_override, env_data_file);
    debug!(data_dir = %paths.data_dir.display(), data_file = %paths.data_file.display(), "paths resolved");

    let store = FileStore::new(paths.data_file.clone());
    let api = PhonebookApi::open(store, paths);

    Ok(PhonebookContext { api, config })
}
