//! Builders for large synthetic inputs, used by the demo and load checks.

use crate::domain::summary::Summary;
use crate::domain::ui_model::{UiModel, summaries_to_list_items};
use crate::domain::user::User;

/// Models built by [`many_ui_models`] cycle through this many sizes.
pub const MANY_MODELS_CYCLE: u32 = 20;

/// Users `User-0` .. `User-<count - 1>`; every third user (from 0) is inactive.
#[must_use]
pub fn sequential_users(count: u32) -> Vec<User> {
    (0..count)
        .map(|i| User::new(i64::from(i), format!("User-{i}"), None, i % 3 != 0))
        .collect()
}

/// Model with `count` synthetic rows under the header `Large model <count>`.
#[must_use]
pub fn large_ui_model(count: u32) -> UiModel {
    let summaries: Vec<Summary> = (0..count)
        .map(|i| Summary {
            id: i64::from(i),
            name: format!("User-{i}"),
            // Truncates like 32-bit integer arithmetic.
            checksum: (i64::from(i) * 17) as i32,
            active: i % 2 == 0,
        })
        .collect();
    UiModel {
        header: format!("Large model {count}"),
        items: summaries_to_list_items(&summaries),
        loading: false,
        error: None,
    }
}

/// `repeat` large models whose sizes cycle through 1..=20.
#[must_use]
pub fn many_ui_models(repeat: u32) -> Vec<UiModel> {
    (0..repeat)
        .map(|i| large_ui_model(i % MANY_MODELS_CYCLE + 1))
        .collect()
}
