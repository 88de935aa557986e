// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};

use super::traits::TaskRepository;
use crate::mvc::{TaskId, TaskModel};

/// In-memory repository for tests and renderer bring-up. Same contract as
/// the storage-backed repository, minus durability; fresh ids count up from
/// the highest seeded id.
#[derive(Clone)]
pub struct MockTaskRepository {
    tasks: Rc<RefCell<Vec<TaskModel>>>,
}

impl MockTaskRepository {
    pub fn new(tasks: Vec<TaskModel>) -> Self {
        Self { tasks: Rc::new(RefCell::new(tasks)) }
    }
}

impl TaskRepository for MockTaskRepository {
    fn tasks(&self) -> Vec<TaskModel> {
        self.tasks.borrow().clone()
    }

    fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn get_task(&self, index: usize) -> Option<TaskModel> {
        self.tasks.borrow().get(index).cloned()
    }

    fn task_position(&self, id: TaskId) -> Option<usize> {
        self.tasks.borrow().iter().position(|task| task.id == id)
    }

    fn add_task(&self, text: &str) -> Option<TaskModel> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self
            .tasks
            .borrow()
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(1, |highest| highest + 1);
        let task = TaskModel { id, text: text.into(), ..Default::default() };
        self.tasks.borrow_mut().push(task.clone());

        Some(task)
    }

    fn toggle_completed(&self, id: TaskId) -> bool {
        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
            return true;
        }

        false
    }

    fn update_text(&self, id: TaskId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|task| task.id == id) {
            task.text = text.into();
            return true;
        }

        false
    }

    fn update_due_date(&self, id: TaskId, due_date: Option<NaiveDate>) -> bool {
        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|task| task.id == id) {
            task.due_date = due_date;
            return true;
        }

        false
    }

    fn update_due_time(&self, id: TaskId, due_time: Option<NaiveTime>) -> bool {
        if let Some(task) = self.tasks.borrow_mut().iter_mut().find(|task| task.id == id) {
            task.due_time = due_time;
            return true;
        }

        false
    }

    fn remove_task(&self, id: TaskId) -> bool {
        let position = self.tasks.borrow().iter().position(|task| task.id == id);
        if let Some(position) = position {
            self.tasks.borrow_mut().remove(position);
            return true;
        }

        false
    }

    fn clear_all(&self) -> bool {
        self.tasks.borrow_mut().clear();
        true
    }

    fn reorder(&self, order: &[TaskId]) -> bool {
        let mut remaining = std::mem::take(&mut *self.tasks.borrow_mut());
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in order {
            if let Some(position) = remaining.iter().position(|task| task.id == *id) {
                reordered.push(remaining.remove(position));
            }
        }
        *self.tasks.borrow_mut() = reordered;

        true
    }
}
