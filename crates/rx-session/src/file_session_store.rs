use crate::{Result as SessionResult, SessionError, SessionStore};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// JSON-file store: one flat object of string keys to string values.
///
/// Every mutation is written through with the temp-file + fsync + rename
/// pattern so a crash never leaves a half-written session behind.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty session. A corrupted file is renamed to
    /// `<name>.corrupted.<timestamp>` and the session starts empty.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();

        if !path.exists() {
            debug!("No session file at {path:?}");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| SessionError::store_io(path.clone(), e))?;

        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                Self::backup_corrupted(&path)?;
                BTreeMap::new()
            }
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> SessionResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| SessionError::store_io(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::store_io(temp_path.clone(), e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::store_io(temp_path.clone(), e))?;
            file.sync_all()
                .map_err(|e| SessionError::store_io(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::store_io(self.path.clone(), e)
        })
    }

    fn backup_corrupted(path: &Path) -> SessionResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"));
        let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(path, &backup_path)
            .map_err(|e| SessionError::store_io(path.to_path_buf(), e))?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(backup_path)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn delete(&mut self, key: &str) -> SessionResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> SessionResult<()> {
        self.entries.clear();
        self.persist()
    }
}
