// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

use chrono::{NaiveDate, NaiveTime};

use super::traits::{DateTimeRepository, TaskRepository};
use crate::mvc::{TaskId, TaskModel};
use crate::storage::Storage;

/// The authoritative task store: an in-memory list mirrored into a single
/// JSON storage slot. Every mutation is read-modify-write over the whole
/// list; the in-memory list only takes the new state once the slot write
/// succeeded, so callers never observe a half-applied mutation and a failed
/// persist leaves the store at its last durable state.
pub struct StorageTaskRepository {
    tasks: RefCell<Vec<TaskModel>>,
    storage: Box<dyn Storage>,
    date_time: Box<dyn DateTimeRepository>,
}

impl StorageTaskRepository {
    /// Loads the slot once. An absent, unreadable or malformed slot loads
    /// as the empty list, never as an error.
    pub fn new(
        storage: impl Storage + 'static,
        date_time: impl DateTimeRepository + 'static,
    ) -> Self {
        let tasks = load_tasks(&storage);
        Self {
            tasks: RefCell::new(tasks),
            storage: Box::new(storage),
            date_time: Box::new(date_time),
        }
    }

    fn commit(&self, updated: Vec<TaskModel>) -> bool {
        let serialized = match serde_json::to_string(&updated) {
            Ok(serialized) => serialized,
            Err(err) => {
                log::warn!("cannot serialize task list: {err}");
                return false;
            }
        };

        if let Err(err) = self.storage.write(&serialized) {
            log::warn!("failed to persist task list, keeping previous state: {err}");
            return false;
        }

        *self.tasks.borrow_mut() = updated;
        true
    }

    /// Creation timestamp, bumped past the highest assigned id so that a
    /// frozen or rewound clock cannot produce a duplicate.
    fn next_id(&self) -> TaskId {
        let now = self.date_time.timestamp_millis();
        match self.tasks.borrow().iter().map(|task| task.id).max() {
            Some(highest) => now.max(highest.saturating_add(1)),
            None => now,
        }
    }
}

fn load_tasks(storage: &dyn Storage) -> Vec<TaskModel> {
    let contents = match storage.read() {
        Ok(Some(contents)) => contents,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("task slot unreadable, starting empty: {err}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(tasks) => tasks,
        Err(err) => {
            log::debug!("discarding malformed task slot: {err}");
            Vec::new()
        }
    }
}

impl TaskRepository for StorageTaskRepository {
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

        let task = TaskModel { id: self.next_id(), text: text.into(), ..Default::default() };
        let mut updated = self.tasks.borrow().clone();
        updated.push(task.clone());

        self.commit(updated).then_some(task)
    }

    fn toggle_completed(&self, id: TaskId) -> bool {
        let mut updated = self.tasks.borrow().clone();
        let Some(task) = updated.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.completed = !task.completed;

        self.commit(updated)
    }

    fn update_text(&self, id: TaskId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let mut updated = self.tasks.borrow().clone();
        let Some(task) = updated.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.text = text.into();

        self.commit(updated)
    }

    fn update_due_date(&self, id: TaskId, due_date: Option<NaiveDate>) -> bool {
        let mut updated = self.tasks.borrow().clone();
        let Some(task) = updated.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.due_date = due_date;

        self.commit(updated)
    }

    fn update_due_time(&self, id: TaskId, due_time: Option<NaiveTime>) -> bool {
        let mut updated = self.tasks.borrow().clone();
        let Some(task) = updated.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.due_time = due_time;

        self.commit(updated)
    }

    fn remove_task(&self, id: TaskId) -> bool {
        let mut updated = self.tasks.borrow().clone();
        let Some(position) = updated.iter().position(|task| task.id == id) else {
            return false;
        };
        updated.remove(position);

        self.commit(updated)
    }

    fn clear_all(&self) -> bool {
        self.commit(Vec::new())
    }

    fn reorder(&self, order: &[TaskId]) -> bool {
        let mut remaining = self.tasks.borrow().clone();
        let mut updated = Vec::with_capacity(remaining.len());
        for id in order {
            // pulling from the pool also keeps a duplicated id from
            // duplicating its task
            if let Some(position) = remaining.iter().position(|task| task.id == *id) {
                updated.push(remaining.remove(position));
            }
        }

        self.commit(updated)
    }
}
