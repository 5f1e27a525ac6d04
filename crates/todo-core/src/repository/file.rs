//! JSON File Repository
//!
//! One file plays the role of the persistence key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::codec;
use super::traits::ListRepository;
use crate::domain::{DomainError, DomainResult, Item};

pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `<dir>/<key>.json`
    pub fn in_dir(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", key)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ListRepository for JsonFileRepository {
    fn load(&self) -> DomainResult<Option<Vec<Item>>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => codec::decode(&raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        let raw = codec::encode(items)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write-then-rename: readers never see a truncated list
        let tmp = self.tmp_path();
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            DomainError::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })
    }
}
