// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! State-management core of a task list application: an id-addressed
//! [`mvc::traits::TaskRepository`] persisting to a single storage slot, a
//! renderer-facing [`mvc::TaskListModel`] implementing [`slint::Model`], and
//! controllers for user intents, confirmation prompts and drag reordering.
//! The view layer is an external collaborator wired up through the model
//! and the controller callbacks.

mod callback;
pub use callback::*;

pub mod mvc;
pub mod storage;
