// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};
use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskId, TaskModel};
use crate::mvc::traits::TaskRepository;

/// The renderer-facing list: a [`slint::Model`] over the authoritative
/// repository. Mutations forward to the repository and, when the repository
/// reports a change, notify the view with row granularity. A no-op outcome
/// (unknown id, rejected input, failed persist) notifies nothing.
#[derive(Clone)]
pub struct TaskListModel {
    repo: Rc<dyn TaskRepository>,
    notify: Rc<ModelNotify>,
}

impl TaskListModel {
    pub fn new(repo: impl TaskRepository + 'static) -> Self {
        Self { repo: Rc::new(repo), notify: Rc::new(Default::default()) }
    }

    pub fn tasks(&self) -> Vec<TaskModel> {
        self.repo.tasks()
    }

    pub fn task(&self, id: TaskId) -> Option<TaskModel> {
        self.repo.task_position(id).and_then(|row| self.repo.get_task(row))
    }

    pub fn add_task(&self, text: &str) -> Option<TaskModel> {
        let task = self.repo.add_task(text)?;
        self.notify.row_added(self.row_count() - 1, 1);
        Some(task)
    }

    pub fn toggle_completed(&self, id: TaskId) -> bool {
        let Some(row) = self.repo.task_position(id) else {
            return false;
        };
        if !self.repo.toggle_completed(id) {
            return false;
        }

        self.notify.row_changed(row);
        true
    }

    pub fn update_text(&self, id: TaskId, text: &str) -> bool {
        let Some(row) = self.repo.task_position(id) else {
            return false;
        };
        if !self.repo.update_text(id, text) {
            return false;
        }

        self.notify.row_changed(row);
        true
    }

    pub fn update_due_date(&self, id: TaskId, due_date: Option<NaiveDate>) -> bool {
        let Some(row) = self.repo.task_position(id) else {
            return false;
        };
        if !self.repo.update_due_date(id, due_date) {
            return false;
        }

        self.notify.row_changed(row);
        true
    }

    pub fn update_due_time(&self, id: TaskId, due_time: Option<NaiveTime>) -> bool {
        let Some(row) = self.repo.task_position(id) else {
            return false;
        };
        if !self.repo.update_due_time(id, due_time) {
            return false;
        }

        self.notify.row_changed(row);
        true
    }

    pub fn remove_task(&self, id: TaskId) -> bool {
        let Some(row) = self.repo.task_position(id) else {
            return false;
        };
        if !self.repo.remove_task(id) {
            return false;
        }

        self.notify.row_removed(row, 1);
        true
    }

    pub fn clear_all(&self) -> bool {
        if !self.repo.clear_all() {
            return false;
        }

        self.notify.reset();
        true
    }

    /// Rebuilds the list to exactly the known ids in `order`; see
    /// [`TaskRepository::reorder`] for the filtering rules.
    pub fn reorder(&self, order: &[TaskId]) -> bool {
        if !self.repo.reorder(order) {
            return false;
        }

        self.notify.reset();
        true
    }
}

impl Model for TaskListModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.repo.task_count()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.repo.get_task(row)
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc;

    fn test_model() -> TaskListModel {
        TaskListModel::new(mvc::MockTaskRepository::new(vec![
            TaskModel { id: 1, text: "Item 1".into(), completed: true, ..Default::default() },
            TaskModel { id: 2, text: "Item 2".into(), ..Default::default() },
        ]))
    }

    #[test]
    fn test_row_access() {
        let model = test_model();

        assert_eq!(model.row_count(), 2);
        assert_eq!(model.row_data(0).unwrap().text, "Item 1");
        assert_eq!(model.row_data(1).unwrap().text, "Item 2");
        assert!(model.row_data(2).is_none());
    }

    #[test]
    fn test_add_task() {
        let model = test_model();

        let task = model.add_task("Item 3").unwrap();
        assert_eq!(model.row_count(), 3);
        assert_eq!(model.row_data(2).unwrap(), task);
    }

    #[test]
    fn test_add_task_rejects_blank_text() {
        let model = test_model();

        assert!(model.add_task("   ").is_none());
        assert_eq!(model.row_count(), 2);
    }

    #[test]
    fn test_toggle_completed_by_id() {
        let model = test_model();

        assert!(model.toggle_completed(2));
        assert!(model.row_data(1).unwrap().completed);

        assert!(!model.toggle_completed(99));
    }

    #[test]
    fn test_remove_task_by_id() {
        let model = test_model();

        assert!(model.remove_task(1));
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.row_data(0).unwrap().id, 2);

        assert!(!model.remove_task(1));
    }

    #[test]
    fn test_reorder() {
        let model = test_model();
        model.add_task("Item 3").unwrap();

        assert!(model.reorder(&[3, 1, 2]));
        let ids: Vec<TaskId> = model.tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_clear_all() {
        let model = test_model();

        assert!(model.clear_all());
        assert_eq!(model.row_count(), 0);
    }
}
