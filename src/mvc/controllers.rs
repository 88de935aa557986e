// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod confirmation_controller;
pub use confirmation_controller::*;

mod reorder_controller;
pub use reorder_controller::*;

mod task_list_controller;
pub use task_list_controller::*;
