use super::DataStore;
use crate::error::{PhonebookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write_error(&self, source: std::io::Error) -> PhonebookError {
        PhonebookError::PersistenceWrite {
            location: self.location(),
            source,
        }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PhonebookError::PersistenceRead {
                location: self.location(),
                source,
            }),
        }
    }

    fn save(&mut self, text: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.write_error(e))?;
        }

        // Atomic write
        let tmp_path = dir.join(format!(".contacts-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, text) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }

        debug!(path = %self.path.display(), bytes = text.len(), "contacts flushed");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("contacts.dat"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_dirs_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("contacts.dat");
        let mut store = FileStore::new(path.clone());

        store.save("Ann,\"123\"\n").unwrap();
        store.save("Bob,\"456\"\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Bob,\"456\"\n");
        assert_eq!(store.load().unwrap().as_deref(), Some("Bob,\"456\"\n"));
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("contacts.dat"));
        store.save("Ann,\"123\"\n").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("contacts.dat")]);
    }

    #[test]
    fn test_unreadable_file_is_read_failure() {
        let temp = TempDir::new().unwrap();
        // A directory in place of the file cannot be read as text
        let path = temp.path().join("contacts.dat");
        fs::create_dir(&path).unwrap();

        let store = FileStore::new(path);
        assert!(matches!(
            store.load(),
            Err(PhonebookError::PersistenceRead { .. })
        ));
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.dat");
        let mut store = FileStore::new(path.clone());
        store.save("Ann,\"123\"\n").unwrap();

        // Renaming a file over a non-empty directory fails on every platform
        let blocked = temp.path().join("blocked");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("keep"), "x").unwrap();
        let mut blocked_store = FileStore::new(blocked.clone());
        assert!(matches!(
            blocked_store.save("Bob,\"456\"\n"),
            Err(PhonebookError::PersistenceWrite { .. })
        ));

        assert_eq!(fs::read_to_string(&path).unwrap(), "Ann,\"123\"\n");
        assert!(blocked.is_dir());
        let leftovers = fs::read_dir(temp.path())
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".tmp")
            })
            .count();
        assert_eq!(leftovers, 0);
    }
}
