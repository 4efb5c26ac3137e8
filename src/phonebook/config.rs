use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.dat";

pub const KEY_DATA_FILE: &str = "data-file";
pub const KEY_CONFIRM_DELETE: &str = "confirm-delete";

/// Configuration for the phone book, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Contacts file. Relative paths are resolved against the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Ask before deleting a whole contact in the interactive shell
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// The contacts file, resolved against `data_dir` when relative.
    pub fn data_file_path(&self, data_dir: &Path) -> PathBuf {
        let path = PathBuf::from(&self.data_file);
        if path.is_absolute() {
            path
        } else {
            data_dir.join(path)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(self.data_file.clone()),
            KEY_CONFIRM_DELETE => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(PhonebookError::Config(format!("{} cannot be empty", key)));
                }
                self.data_file = value.to_string();
                Ok(())
            }
            KEY_CONFIRM_DELETE => {
                self.confirm_delete = parse_bool(value).ok_or_else(|| {
                    PhonebookError::Config(format!(
                        "{} expects true or false, got '{}'",
                        key, value
                    ))
                })?;
                Ok(())
            }
            _ => Err(PhonebookError::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_DATA_FILE, self.data_file.clone()),
            (KEY_CONFIRM_DELETE, self.confirm_delete.to_string()),
        ]
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.data_file, "contacts.dat");
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = PhonebookConfig::load(temp.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("fresh");

        let mut config = PhonebookConfig::default();
        config.set(KEY_DATA_FILE, "work.dat").unwrap();
        config.set(KEY_CONFIRM_DELETE, "no").unwrap();
        config.save(&dir).unwrap();

        let loaded = PhonebookConfig::load(&dir).unwrap();
        assert_eq!(loaded.data_file, "work.dat");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"confirm_delete": false}"#).unwrap();

        let loaded = PhonebookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "contacts.dat");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_data_file_path_resolution() {
        let dir = Path::new("/var/lib/phonebook");
        let config = PhonebookConfig::default();
        assert_eq!(
            config.data_file_path(dir),
            PathBuf::from("/var/lib/phonebook/contacts.dat")
        );

        let mut absolute = PhonebookConfig::default();
        absolute.set(KEY_DATA_FILE, "/tmp/other.dat").unwrap();
        assert_eq!(absolute.data_file_path(dir), PathBuf::from("/tmp/other.dat"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = PhonebookConfig::default();
        assert!(config.set(KEY_CONFIRM_DELETE, "maybe").is_err());
        assert!(config.set(KEY_DATA_FILE, "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_get_and_list_all() {
        let config = PhonebookConfig::default();
        assert_eq!(config.get(KEY_CONFIRM_DELETE).as_deref(), Some("true"));
        assert_eq!(config.get("nope"), None);
        assert_eq!(config.list_all().len(), 2);
    }
}
