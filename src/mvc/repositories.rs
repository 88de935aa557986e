// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod mock_date_time_repository;
pub use mock_date_time_repository::*;

mod mock_task_repository;
pub use mock_task_repository::*;

mod storage_task_repository;
pub use storage_task_repository::*;

mod system_date_time_repository;
pub use system_date_time_repository::*;

pub mod traits;

use std::path::PathBuf;

use crate::storage::FileStorage;

/// Task repository persisting to a single JSON file slot.
pub fn task_repo(path: impl Into<PathBuf>) -> impl traits::TaskRepository {
    StorageTaskRepository::new(FileStorage::new(path), SystemDateTimeRepository)
}
