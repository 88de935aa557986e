// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod date_time_repository;
pub use date_time_repository::DateTimeRepository;

mod task_repository;
pub use task_repository::TaskRepository;
