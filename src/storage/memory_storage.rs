// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use super::{Storage, StorageError};

/// In-memory storage slot for tests and ephemeral stores. Clones share the
/// slot, so a test can keep a handle for assertions while the repository
/// owns another. Writes can be made to fail to exercise the rollback path.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<MemoryStorageInner>,
}

#[derive(Default)]
struct MemoryStorageInner {
    contents: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.inner.contents.replace(Some(contents.into()));
        storage
    }

    pub fn contents(&self) -> Option<String> {
        self.inner.contents.borrow().clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.inner.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        if self.inner.fail_writes.get() {
            return Err(StorageError::Write(io::Error::other("writes disabled")));
        }

        self.inner.contents.replace(Some(contents.to_string()));
        Ok(())
    }
}
