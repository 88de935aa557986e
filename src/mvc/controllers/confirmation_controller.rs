// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

use crate::Callback;

struct PendingConfirmation {
    message: String,
    on_confirm: Box<dyn FnOnce()>,
}

/// A generic yes/no prompt capability. `request` parks a continuation and
/// raises `on_show`; nothing blocks, the rest of the UI stays usable until
/// the view calls `resolve`. The continuation only runs on an affirmative
/// answer. A new request while one is pending replaces it, which is
/// indistinguishable from the superseded prompt being declined.
pub struct ConfirmationController {
    pending: RefCell<Option<PendingConfirmation>>,
    show_callback: Rc<Callback<str>>,
}

impl ConfirmationController {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { pending: RefCell::new(None), show_callback: Rc::new(Callback::default()) })
    }

    /// The view's hook for displaying the prompt.
    pub fn on_show(&self, handler: impl FnMut(&str) + 'static) {
        self.show_callback.on(handler);
    }

    pub fn request(&self, message: &str, on_confirm: impl FnOnce() + 'static) {
        self.pending.replace(Some(PendingConfirmation {
            message: message.into(),
            on_confirm: Box::new(on_confirm),
        }));
        self.show_callback.invoke(message);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn message(&self) -> Option<String> {
        self.pending.borrow().as_ref().map(|pending| pending.message.clone())
    }

    /// Resolves the pending prompt; a no-op when none is pending.
    pub fn resolve(&self, confirmed: bool) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if confirmed {
            (pending.on_confirm)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_confirm_runs_the_continuation() {
        let controller = ConfirmationController::new();
        let confirmed = Rc::new(Cell::new(false));

        controller.request("Delete?", {
            let confirmed = confirmed.clone();
            move || confirmed.set(true)
        });

        assert!(controller.is_pending());
        assert_eq!(controller.message().as_deref(), Some("Delete?"));

        controller.resolve(true);

        assert!(confirmed.get());
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_decline_drops_the_continuation() {
        let controller = ConfirmationController::new();
        let confirmed = Rc::new(Cell::new(false));

        controller.request("Delete?", {
            let confirmed = confirmed.clone();
            move || confirmed.set(true)
        });
        controller.resolve(false);

        assert!(!confirmed.get());
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_resolve_without_pending_prompt() {
        let controller = ConfirmationController::new();
        controller.resolve(true);
        controller.resolve(false);
    }

    #[test]
    fn test_new_request_replaces_the_pending_one() {
        let controller = ConfirmationController::new();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        controller.request("First?", {
            let first = first.clone();
            move || first.set(true)
        });
        controller.request("Second?", {
            let second = second.clone();
            move || second.set(true)
        });

        assert_eq!(controller.message().as_deref(), Some("Second?"));

        controller.resolve(true);

        assert!(!first.get());
        assert!(second.get());
    }

    #[test]
    fn test_show_callback_receives_the_message() {
        let controller = ConfirmationController::new();
        let shown = Rc::new(RefCell::new(String::new()));

        controller.on_show({
            let shown = shown.clone();
            move |message| *shown.borrow_mut() = message.to_string()
        });

        controller.request("Clear all tasks?", || {});

        assert_eq!(*shown.borrow(), "Clear all tasks?");
    }
}
