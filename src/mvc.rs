// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod controllers;
pub use controllers::*;

mod models;
pub use models::*;

mod repositories;
pub use repositories::*;
