// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task_model;
pub use task_model::{TaskId, TaskModel};

mod task_list_model;
pub use task_list_model::TaskListModel;
