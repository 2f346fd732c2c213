//! Self-defense plan against manipulation.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::format_timestamp;
use crate::error::PsySafeError;
use crate::output::Notification;
use crate::storage::KeyValueStore;

/// Storage key for the plan.
pub const DEFENSE_PLAN_KEY: &str = "defensePlan";

/// A saved plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefensePlan {
    /// Situations that trigger manipulation.
    pub triggers: String,
    /// Prepared responses.
    pub auto_responses: String,
    /// People and services to turn to.
    pub support: String,
    /// Local time of the last save.
    pub updated: String,
}

/// Field edits for [`DefensePlan`]. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct DefensePlanUpdate {
    /// New triggers.
    pub triggers: Option<String>,
    /// New prepared responses.
    pub auto_responses: Option<String>,
    /// New support contacts.
    pub support: Option<String>,
}

impl DefensePlan {
    /// The "plan loaded" notice, if the plan has been saved before.
    #[must_use]
    pub fn loaded_notice(&self) -> Option<Notification> {
        (!self.updated.is_empty())
            .then(|| Notification::info(format!("План загружен (обновлен: {})", self.updated)))
    }
}

/// Load the stored plan.
///
/// # Errors
///
/// Returns an error if the stored record cannot be read.
pub fn load_plan(store: &KeyValueStore) -> Result<Option<DefensePlan>, PsySafeError> {
    store.get_json(DEFENSE_PLAN_KEY)
}

/// Apply `update` to the stored plan and save it with the current time.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn save_plan(
    store: &KeyValueStore,
    update: DefensePlanUpdate,
) -> Result<Notification, PsySafeError> {
    save_plan_at(store, update, Local::now())
}

/// Apply `update` and save with `when` as the update stamp.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn save_plan_at(
    store: &KeyValueStore,
    update: DefensePlanUpdate,
    when: DateTime<Local>,
) -> Result<Notification, PsySafeError> {
    let mut plan = load_plan(store)?.unwrap_or_default();

    if let Some(triggers) = update.triggers {
        plan.triggers = triggers.trim().to_string();
    }
    if let Some(responses) = update.auto_responses {
        plan.auto_responses = responses.trim().to_string();
    }
    if let Some(support) = update.support {
        plan.support = support.trim().to_string();
    }
    plan.updated = format_timestamp(&when);

    store.set_json(DEFENSE_PLAN_KEY, &plan)?;
    Ok(Notification::success("План самообороны сохранен!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_save_and_load() {
        let store = KeyValueStore::in_memory().unwrap();
        let when = Local.with_ymd_and_hms(2024, 11, 2, 18, 30, 0).unwrap();

        save_plan_at(
            &store,
            DefensePlanUpdate {
                triggers: Some(" Guilt trips ".to_string()),
                auto_responses: Some("I need time to think".to_string()),
                support: None,
            },
            when,
        )
        .unwrap();

        let plan = load_plan(&store).unwrap().unwrap();
        assert_eq!(plan.triggers, "Guilt trips");
        assert_eq!(plan.updated, "02.11.2024, 18:30:00");
        assert_eq!(
            plan.loaded_notice().map(|n| n.message),
            Some("План загружен (обновлен: 02.11.2024, 18:30:00)".to_string())
        );
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let store = KeyValueStore::in_memory().unwrap();
        let first = Local.with_ymd_and_hms(2024, 11, 2, 18, 30, 0).unwrap();
        let second = Local.with_ymd_and_hms(2024, 11, 3, 9, 0, 0).unwrap();

        save_plan_at(
            &store,
            DefensePlanUpdate {
                triggers: Some("Deadlines".to_string()),
                auto_responses: Some("Let me check".to_string()),
                support: Some("Anna".to_string()),
            },
            first,
        )
        .unwrap();
        save_plan_at(
            &store,
            DefensePlanUpdate {
                triggers: None,
                auto_responses: None,
                support: Some("Team lead".to_string()),
            },
            second,
        )
        .unwrap();

        let plan = load_plan(&store).unwrap().unwrap();
        assert_eq!(plan.triggers, "Deadlines");
        assert_eq!(plan.auto_responses, "Let me check");
        assert_eq!(plan.support, "Team lead");
        assert_eq!(plan.updated, "03.11.2024, 09:00:00");
    }

    #[test]
    fn test_camel_case_keys() {
        let store = KeyValueStore::in_memory().unwrap();
        save_plan(
            &store,
            DefensePlanUpdate {
                auto_responses: Some("No.".to_string()),
                ..DefensePlanUpdate::default()
            },
        )
        .unwrap();

        let raw = store.get_raw(DEFENSE_PLAN_KEY).unwrap().unwrap();
        assert!(raw.contains("\"autoResponses\":\"No.\""));
    }

    #[test]
    fn test_no_notice_without_stamp() {
        assert!(DefensePlan::default().loaded_notice().is_none());
    }
}
