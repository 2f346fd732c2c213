//! Personal boundaries.

use serde::{Deserialize, Serialize};

use crate::error::PsySafeError;
use crate::output::Notification;
use crate::storage::KeyValueStore;

/// Storage key for boundaries.
pub const BOUNDARIES_KEY: &str = "personalBoundaries";

/// The four boundary areas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boundaries {
    /// Work boundaries.
    pub work: String,
    /// Relationship boundaries.
    pub relationship: String,
    /// Emotional boundaries.
    pub emotional: String,
    /// Digital boundaries.
    pub digital: String,
}

/// Field edits for [`Boundaries`]. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct BoundariesUpdate {
    /// New work boundary.
    pub work: Option<String>,
    /// New relationship boundary.
    pub relationship: Option<String>,
    /// New emotional boundary.
    pub emotional: Option<String>,
    /// New digital boundary.
    pub digital: Option<String>,
}

impl Boundaries {
    /// Check whether every area is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Non-blank areas with their display labels.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("Рабочие", self.work.as_str()),
            ("Отношения", self.relationship.as_str()),
            ("Эмоциональные", self.emotional.as_str()),
            ("Цифровые", self.digital.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }

    fn apply(mut self, update: BoundariesUpdate) -> Self {
        let set = |field: &mut String, value: Option<String>| {
            if let Some(v) = value {
                *field = v.trim().to_string();
            }
        };
        set(&mut self.work, update.work);
        set(&mut self.relationship, update.relationship);
        set(&mut self.emotional, update.emotional);
        set(&mut self.digital, update.digital);
        self
    }
}

/// Load the stored boundaries.
///
/// # Errors
///
/// Returns an error if the stored record cannot be read.
pub fn load_boundaries(store: &KeyValueStore) -> Result<Option<Boundaries>, PsySafeError> {
    store.get_json(BOUNDARIES_KEY)
}

/// Apply `update` to the stored boundaries and save them.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` if every area would be blank.
pub fn save_boundaries(
    store: &KeyValueStore,
    update: BoundariesUpdate,
) -> Result<Notification, PsySafeError> {
    let merged = load_boundaries(store)?.unwrap_or_default().apply(update);

    if merged.is_empty() {
        return Err(PsySafeError::Validation(
            "Пожалуйста, определите хотя бы одну границу".to_string(),
        ));
    }

    store.set_json(BOUNDARIES_KEY, &merged)?;
    Ok(Notification::success("Границы сохранены!"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_blank_rejected() {
        let store = KeyValueStore::in_memory().unwrap();
        let update = BoundariesUpdate {
            work: Some("  ".to_string()),
            ..BoundariesUpdate::default()
        };
        assert!(matches!(
            save_boundaries(&store, update),
            Err(PsySafeError::Validation(_))
        ));
        assert!(load_boundaries(&store).unwrap().is_none());
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let store = KeyValueStore::in_memory().unwrap();
        save_boundaries(
            &store,
            BoundariesUpdate {
                work: Some("No calls after 19:00".to_string()),
                ..BoundariesUpdate::default()
            },
        )
        .unwrap();
        save_boundaries(
            &store,
            BoundariesUpdate {
                digital: Some("Phone off at dinner".to_string()),
                ..BoundariesUpdate::default()
            },
        )
        .unwrap();

        let loaded = load_boundaries(&store).unwrap().unwrap();
        assert_eq!(loaded.work, "No calls after 19:00");
        assert_eq!(loaded.digital, "Phone off at dinner");
        assert_eq!(
            loaded.entries().map(|(label, _)| label).collect::<Vec<_>>(),
            vec!["Рабочие", "Цифровые"]
        );
    }

    #[test]
    fn test_clearing_last_field_rejected() {
        let store = KeyValueStore::in_memory().unwrap();
        save_boundaries(
            &store,
            BoundariesUpdate {
                emotional: Some("x".to_string()),
                ..BoundariesUpdate::default()
            },
        )
        .unwrap();

        let result = save_boundaries(
            &store,
            BoundariesUpdate {
                emotional: Some(String::new()),
                ..BoundariesUpdate::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(load_boundaries(&store).unwrap().unwrap().emotional, "x");
    }

    #[test]
    fn test_partial_record_deserializes() {
        let store = KeyValueStore::in_memory().unwrap();
        store.set_raw(BOUNDARIES_KEY, r#"{"work":"w"}"#).unwrap();
        let loaded = load_boundaries(&store).unwrap().unwrap();
        assert_eq!(loaded.work, "w");
        assert!(loaded.digital.is_empty());
    }
}
