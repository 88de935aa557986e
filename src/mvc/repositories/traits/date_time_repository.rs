// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Clock seam for task id generation.
pub trait DateTimeRepository {
    /// Milliseconds since the Unix epoch.
    fn timestamp_millis(&self) -> i64;
}
