//! Personal records kept in local storage: emotion diary, boundaries and the
//! defense plan.

pub mod boundaries;
pub mod defense_plan;
pub mod diary;

use chrono::{DateTime, Local};

pub use boundaries::{load_boundaries, save_boundaries, Boundaries, BoundariesUpdate};
pub use defense_plan::{load_plan, save_plan, DefensePlan, DefensePlanUpdate};
pub use diary::{EmotionDiary, EmotionEntry};

/// Format a time the way Russian-locale browsers print it.
#[must_use]
pub fn format_timestamp(when: &DateTime<Local>) -> String {
    when.format("%d.%m.%Y, %H:%M:%S").to_string()
}
