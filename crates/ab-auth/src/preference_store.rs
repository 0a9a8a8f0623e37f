use crate::error::{AuthError, Result as AuthResult};

use ab_core::file_safe_name;

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";
const NAMESPACE_EXTENSION: &str = "json";

type Entries = BTreeMap<String, String>;

/// What was found on disk for a namespace.
enum Stored {
    Missing,
    Entries(Entries),
    Corrupted,
}

/// Flat string key-value namespaces, one JSON file each under `root`.
///
/// Missing and unparseable files both read as empty. An unparseable file is
/// moved aside to `<file>.corrupted.<timestamp>` the next time its namespace
/// is written.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `namespace`.
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.root
            .join(format!("{}.{NAMESPACE_EXTENSION}", file_safe_name(namespace)))
    }

    pub fn get(&self, namespace: &str, key: &str) -> AuthResult<Option<String>> {
        Ok(self.entries(namespace)?.remove(key))
    }

    pub fn contains(&self, namespace: &str, key: &str) -> AuthResult<bool> {
        Ok(self.entries(namespace)?.contains_key(key))
    }

    /// All entries of `namespace`, empty when the file is missing or corrupted.
    pub fn entries(&self, namespace: &str) -> AuthResult<Entries> {
        match self.read(namespace)? {
            Stored::Entries(entries) => Ok(entries),
            Stored::Missing | Stored::Corrupted => Ok(Entries::new()),
        }
    }

    /// Write several keys in one atomic file replacement.
    pub fn put_all(&self, namespace: &str, pairs: &[(&str, &str)]) -> AuthResult<()> {
        let mut entries = self.entries_for_write(namespace)?;
        for (key, value) in pairs {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        self.write(namespace, &entries)
    }

    pub fn put(&self, namespace: &str, key: &str, value: &str) -> AuthResult<()> {
        self.put_all(namespace, &[(key, value)])
    }

    /// Remove keys. Removing from an absent namespace succeeds without
    /// creating it.
    pub fn remove_all(&self, namespace: &str, keys: &[&str]) -> AuthResult<()> {
        if matches!(self.read(namespace)?, Stored::Missing) {
            return Ok(());
        }

        let mut entries = self.entries_for_write(namespace)?;
        for key in keys {
            entries.remove(*key);
        }
        self.write(namespace, &entries)
    }

    /// Drop the whole namespace.
    pub fn clear(&self, namespace: &str) -> AuthResult<()> {
        let path = self.namespace_path(namespace);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Cleared namespace file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::file_remove(path, e)),
        }
    }

    fn read(&self, namespace: &str) -> AuthResult<Stored> {
        let path = self.namespace_path(namespace);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Stored::Missing),
            Err(e) => return Err(AuthError::file_read(path, e)),
        };

        match serde_json::from_str::<Entries>(&contents) {
            Ok(entries) => Ok(Stored::Entries(entries)),
            Err(e) => {
                warn!("Namespace file corrupted at {path:?}: {e}");
                Ok(Stored::Corrupted)
            }
        }
    }

    /// Current entries, moving a corrupted file aside first.
    fn entries_for_write(&self, namespace: &str) -> AuthResult<Entries> {
        match self.read(namespace)? {
            Stored::Entries(entries) => Ok(entries),
            Stored::Missing => Ok(Entries::new()),
            Stored::Corrupted => {
                self.backup_corrupted(namespace)?;
                Ok(Entries::new())
            }
        }
    }

    /// Temp file, fsync, then rename over the namespace file.
    fn write(&self, namespace: &str, entries: &Entries) -> AuthResult<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| AuthError::dir_creation(self.root.clone(), e))?;

        let final_path = self.namespace_path(namespace);
        let temp_path = final_path.with_extension(format!(
            "{NAMESPACE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote {} key(s) to {final_path:?}", entries.len());
        Ok(())
    }

    fn backup_corrupted(&self, namespace: &str) -> AuthResult<PathBuf> {
        let path = self.namespace_path(namespace);
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = path.with_extension(format!(
            "{NAMESPACE_EXTENSION}.corrupted.{timestamp}"
        ));

        fs::rename(&path, &backup_path).map_err(|e| AuthError::backup_failed(path, e))?;

        warn!("Backed up corrupted namespace to {backup_path:?}");
        Ok(backup_path)
    }
}
