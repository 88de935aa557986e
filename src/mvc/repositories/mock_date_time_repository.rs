// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;
use std::rc::Rc;

use super::traits::DateTimeRepository;

/// A settable clock. Clones share the value, so a test can move the clock
/// while the repository holds its own handle.
#[derive(Clone)]
pub struct MockDateTimeRepository {
    timestamp_millis: Rc<Cell<i64>>,
}

impl MockDateTimeRepository {
    pub fn new(timestamp_millis: i64) -> Self {
        Self { timestamp_millis: Rc::new(Cell::new(timestamp_millis)) }
    }

    pub fn set_timestamp_millis(&self, timestamp_millis: i64) {
        self.timestamp_millis.set(timestamp_millis);
    }
}

impl DateTimeRepository for MockDateTimeRepository {
    fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis.get()
    }
}
