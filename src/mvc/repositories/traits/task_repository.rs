// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{NaiveDate, NaiveTime};

use crate::mvc::{TaskId, TaskModel};

/// Contract of the authoritative task store. Tasks are addressed by their
/// stable id, never by row. Implementations persist the whole list on every
/// successful mutation; `true` means the change is durable, `false` means
/// nothing changed (unknown id, rejected input, or a failed persist that
/// rolled back).
pub trait TaskRepository {
    /// Snapshot of the authoritative list, in display order.
    fn tasks(&self) -> Vec<TaskModel>;
    fn task_count(&self) -> usize;
    fn get_task(&self, index: usize) -> Option<TaskModel>;
    fn task_position(&self, id: TaskId) -> Option<usize>;

    /// Appends a task with a fresh id and no completion or due data.
    /// Returns `None` without side effect when `text` trims to empty.
    fn add_task(&self, text: &str) -> Option<TaskModel>;
    fn toggle_completed(&self, id: TaskId) -> bool;
    /// Stores the trimmed text. Text trimming to empty preserves the
    /// previous value (the caller restores its own fallback, see
    /// `TaskListController::commit_edit`).
    fn update_text(&self, id: TaskId, text: &str) -> bool;
    /// `None` clears the date.
    fn update_due_date(&self, id: TaskId, due_date: Option<NaiveDate>) -> bool;
    /// `None` clears the time.
    fn update_due_time(&self, id: TaskId, due_time: Option<NaiveTime>) -> bool;
    fn remove_task(&self, id: TaskId) -> bool;
    fn clear_all(&self) -> bool;
    /// Rebuilds the list to contain exactly the tasks whose ids appear in
    /// `order`, in that order. Unknown ids are dropped from `order`; stored
    /// tasks missing from `order` are dropped from the list.
    fn reorder(&self, order: &[TaskId]) -> bool;
}
