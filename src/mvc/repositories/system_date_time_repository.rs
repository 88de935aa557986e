// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::Utc;

use super::traits::DateTimeRepository;

/// Clock backed by the system time.
#[derive(Clone, Copy, Default)]
pub struct SystemDateTimeRepository;

impl DateTimeRepository for SystemDateTimeRepository {
    fn timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
