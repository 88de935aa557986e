// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod file_storage;
pub use file_storage::FileStorage;

mod memory_storage;
pub use memory_storage::MemoryStorage;

/// Error type returned by [`Storage`] operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Cannot read the storage slot
    #[error("Cannot read the storage slot: {0}")]
    Read(std::io::Error),
    /// Cannot write the storage slot
    #[error("Cannot write the storage slot: {0}")]
    Write(std::io::Error),
}

/// A single named slot of string contents, the persistence seam of the task
/// store. `read` returns `Ok(None)` when the slot has never been written.
/// `write` replaces the whole slot; a failed write must leave the previous
/// contents intact.
pub trait Storage {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}
