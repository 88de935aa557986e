// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;
use std::rc::Rc;

use crate::mvc::{TaskId, TaskListModel};

/// Geometry of one rendered, non-dragged row, in logical pixels. The view
/// reports these on every drag move; the controller never touches the
/// widget tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemRect {
    pub id: TaskId,
    pub top: f32,
    pub height: f32,
}

/// Tracks the in-progress drag and computes the live insertion point; on
/// drop, commits the final visual order so the persisted order always
/// matches what the view last rendered.
pub struct ReorderController {
    model: TaskListModel,
    dragged: Cell<Option<TaskId>>,
}

impl ReorderController {
    pub fn new(model: TaskListModel) -> Rc<Self> {
        Rc::new(Self { model, dragged: Cell::new(None) })
    }

    pub fn drag_started(&self, id: TaskId) {
        self.dragged.set(Some(id));
    }

    pub fn dragged_task(&self) -> Option<TaskId> {
        self.dragged.get()
    }

    /// The item the dragged row would be inserted before, given the pointer
    /// position: among the rows whose vertical midpoint lies below the
    /// pointer, the one closest to it. `None` means append at the end.
    /// Linear scan, recomputed per drag-move event.
    pub fn insertion_anchor(&self, pointer_y: f32, items: &[ItemRect]) -> Option<TaskId> {
        let dragged = self.dragged.get();
        let mut closest: Option<(f32, TaskId)> = None;

        for item in items {
            if dragged == Some(item.id) {
                continue;
            }
            let offset = pointer_y - (item.top + item.height / 2.0);
            if offset < 0.0 && closest.is_none_or(|(best, _)| offset > best) {
                closest = Some((offset, item.id));
            }
        }

        closest.map(|(_, id)| id)
    }

    /// Commits the view's final visual order and ends the drag.
    pub fn drag_completed(&self, visual_order: &[TaskId]) {
        self.dragged.set(None);
        self.model.reorder(visual_order);
    }

    pub fn drag_canceled(&self) {
        self.dragged.set(None);
    }
}
