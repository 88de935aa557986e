// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveTime};

use super::ConfirmationController;
use crate::mvc::traits::TaskRepository;
use crate::mvc::{TaskId, TaskListModel, TaskModel};
use crate::Callback;

/// The renderer's intent surface. One public method per user intent; state
/// flows back to the view through the model's change notifications and the
/// `on_refresh` callback. Deletion and clear-all are routed through the
/// injected [`ConfirmationController`] and only mutate on an affirmative
/// answer.
pub struct TaskListController {
    model: TaskListModel,
    confirmation: Rc<ConfirmationController>,
    // pre-edit text per task in edit mode; edits on different tasks are
    // independent
    edit_fallbacks: RefCell<HashMap<TaskId, String>>,
    refresh_callback: Rc<Callback<TaskListModel>>,
}

impl TaskListController {
    pub fn new(
        repo: impl TaskRepository + 'static,
        confirmation: Rc<ConfirmationController>,
    ) -> Rc<Self> {
        Rc::new(Self {
            model: TaskListModel::new(repo),
            confirmation,
            edit_fallbacks: RefCell::new(HashMap::new()),
            refresh_callback: Rc::new(Callback::default()),
        })
    }

    pub fn model(&self) -> TaskListModel {
        self.model.clone()
    }

    /// The view's hook for receiving the authoritative model; invoked by
    /// [`refresh`](Self::refresh) once the view is wired up.
    pub fn on_refresh(&self, mut handler: impl FnMut(TaskListModel) + 'static) {
        self.refresh_callback.on(move |model| handler(model.clone()));
    }

    pub fn refresh(&self) {
        self.refresh_callback.invoke(&self.model);
    }

    pub fn add_task(&self, text: &str) -> Option<TaskModel> {
        self.model.add_task(text)
    }

    pub fn toggle_completed(&self, id: TaskId) -> bool {
        self.model.toggle_completed(id)
    }

    pub fn update_due_date(&self, id: TaskId, due_date: Option<NaiveDate>) -> bool {
        self.model.update_due_date(id, due_date)
    }

    pub fn update_due_time(&self, id: TaskId, due_time: Option<NaiveTime>) -> bool {
        self.model.update_due_time(id, due_time)
    }

    /// Puts the task into edit mode, capturing its current text as the
    /// fallback for an empty commit. No-op on unknown ids.
    pub fn begin_edit(&self, id: TaskId) -> bool {
        let Some(task) = self.model.task(id) else {
            return false;
        };
        self.edit_fallbacks.borrow_mut().insert(id, task.text);
        true
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit_fallbacks.borrow().contains_key(&id)
    }

    /// Ends edit mode with the input's final value; the view calls this for
    /// both the Enter key and focus loss. An input trimming to empty
    /// restores the captured fallback, so an empty edit never produces an
    /// empty task. A commit for a task not in edit mode is a no-op.
    pub fn commit_edit(&self, id: TaskId, input: &str) {
        let Some(fallback) = self.edit_fallbacks.borrow_mut().remove(&id) else {
            return;
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.model.update_text(id, &fallback);
        } else {
            self.model.update_text(id, trimmed);
        }
    }

    /// Asks for confirmation; removes the task only on an affirmative
    /// answer.
    pub fn request_remove(&self, id: TaskId) {
        let model = self.model.clone();
        self.confirmation.request("Are you sure you want to delete this task?", move || {
            model.remove_task(id);
        });
    }

    /// Asks for confirmation; clears the list only on an affirmative
    /// answer.
    pub fn request_clear_all(&self) {
        let model = self.model.clone();
        self.confirmation.request("Are you sure you want to clear all tasks?", move || {
            model.clear_all();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvc;
    use slint::Model;
    use std::cell::Cell;

    fn test_controller() -> (Rc<TaskListController>, Rc<ConfirmationController>) {
        let confirmation = ConfirmationController::new();
        let controller = TaskListController::new(
            mvc::MockTaskRepository::new(vec![
                TaskModel { id: 1, text: "Item 1".into(), completed: true, ..Default::default() },
                TaskModel { id: 2, text: "Item 2".into(), ..Default::default() },
            ]),
            confirmation.clone(),
        );
        (controller, confirmation)
    }

    #[test]
    fn test_refresh_hands_out_the_model() {
        let (controller, _) = test_controller();
        let refreshed = Rc::new(Cell::new(false));

        controller.on_refresh({
            let refreshed = refreshed.clone();
            move |model| {
                assert_eq!(model.row_count(), 2);
                refreshed.set(true);
            }
        });

        controller.refresh();

        assert!(refreshed.get());
    }

    #[test]
    fn test_add_task() {
        let (controller, _) = test_controller();

        let task = controller.add_task("Item 3").unwrap();
        assert_eq!(task.text, "Item 3");
        assert_eq!(controller.model().row_count(), 3);
    }

    #[test]
    fn test_toggle_completed() {
        let (controller, _) = test_controller();

        assert!(controller.toggle_completed(1));
        assert!(!controller.model().row_data(0).unwrap().completed);
    }

    #[test]
    fn test_commit_edit_stores_the_trimmed_input() {
        let (controller, _) = test_controller();

        assert!(controller.begin_edit(1));
        assert!(controller.is_editing(1));

        controller.commit_edit(1, "  Item 1 changed  ");

        assert!(!controller.is_editing(1));
        assert_eq!(controller.model().row_data(0).unwrap().text, "Item 1 changed");
    }

    #[test]
    fn test_empty_commit_restores_the_pre_edit_text() {
        let (controller, _) = test_controller();

        controller.begin_edit(1);
        controller.commit_edit(1, "   ");

        assert_eq!(controller.model().row_data(0).unwrap().text, "Item 1");
        assert!(!controller.is_editing(1));
    }

    #[test]
    fn test_commit_without_begin_is_a_noop() {
        let (controller, _) = test_controller();

        controller.commit_edit(1, "ignored");

        assert_eq!(controller.model().row_data(0).unwrap().text, "Item 1");
    }

    #[test]
    fn test_edits_on_two_tasks_are_independent() {
        let (controller, _) = test_controller();

        controller.begin_edit(1);
        controller.begin_edit(2);
        controller.commit_edit(2, "Item 2 changed");

        assert!(controller.is_editing(1));
        assert_eq!(controller.model().row_data(1).unwrap().text, "Item 2 changed");

        controller.commit_edit(1, "");
        assert_eq!(controller.model().row_data(0).unwrap().text, "Item 1");
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let (controller, _) = test_controller();

        assert!(!controller.begin_edit(99));
        assert!(!controller.is_editing(99));
    }

    #[test]
    fn test_remove_waits_for_confirmation() {
        let (controller, confirmation) = test_controller();

        controller.request_remove(1);

        // nothing happens until the prompt is answered
        assert_eq!(controller.model().row_count(), 2);
        assert!(confirmation.is_pending());

        confirmation.resolve(true);

        assert_eq!(controller.model().row_count(), 1);
        assert_eq!(controller.model().row_data(0).unwrap().id, 2);
    }

    #[test]
    fn test_declined_remove_keeps_the_task() {
        let (controller, confirmation) = test_controller();

        controller.request_remove(1);
        confirmation.resolve(false);

        assert_eq!(controller.model().row_count(), 2);
    }

    #[test]
    fn test_clear_all_waits_for_confirmation() {
        let (controller, confirmation) = test_controller();

        controller.request_clear_all();
        assert_eq!(controller.model().row_count(), 2);

        confirmation.resolve(true);
        assert_eq!(controller.model().row_count(), 0);
    }

    #[test]
    fn test_other_intents_stay_usable_while_a_prompt_is_pending() {
        let (controller, confirmation) = test_controller();

        controller.request_remove(1);
        controller.add_task("Item 3").unwrap();
        controller.toggle_completed(2);

        confirmation.resolve(true);

        let ids: Vec<TaskId> =
            controller.model().tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_add_toggle_due_date_remove_round_trip() {
        let (controller, confirmation) = test_controller();
        controller.request_clear_all();
        confirmation.resolve(true);

        let task = controller.add_task("Buy milk").unwrap();
        assert!(!task.completed);
        assert_eq!(task.due_date, None);

        controller.toggle_completed(task.id);
        assert!(controller.model().row_data(0).unwrap().completed);

        controller.update_due_date(task.id, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(
            controller.model().row_data(0).unwrap().due_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );

        controller.request_remove(task.id);
        confirmation.resolve(true);
        assert_eq!(controller.model().row_count(), 0);
    }
}
