// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

/// A single-threaded notification seam: controllers invoke it, the view
/// layer registers a handler on it. At most one handler; registering again
/// replaces the previous one. Invoking without a handler is a no-op.
pub struct Callback<Arguments: ?Sized> {
    handler: Cell<Option<Box<dyn FnMut(&Arguments)>>>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handler: Cell::new(None) }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, handler: impl FnMut(&Arguments) + 'static) {
        self.handler.set(Some(Box::new(handler)));
    }

    pub fn invoke(&self, arguments: &Arguments) {
        // take/restore keeps a reentrant invoke from aliasing the handler
        if let Some(mut handler) = self.handler.take() {
            handler(arguments);
            match self.handler.take() {
                // a handler registered during the invocation replaces this one
                Some(registered) => self.handler.set(Some(registered)),
                None => self.handler.set(Some(handler)),
            }
        }
    }
}
