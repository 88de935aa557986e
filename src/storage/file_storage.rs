// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::io;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Storage slot backed by a single file. The contents are replaced through
/// a sibling temp file and a rename, so an interrupted write cannot clobber
/// the previous contents.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(err)),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StorageError::Write)?;
            }
        }

        let staging = self.path.with_extension("tmp");
        std::fs::write(&staging, contents).map_err(StorageError::Write)?;
        std::fs::rename(&staging, &self.path).map_err(StorageError::Write)
    }
}
