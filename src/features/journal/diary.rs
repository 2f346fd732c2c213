//! Emotion diary.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::format_timestamp;
use crate::error::PsySafeError;
use crate::output::Notification;
use crate::storage::KeyValueStore;

/// Storage key for the diary.
pub const DIARY_KEY: &str = "emotionDiary";

/// One diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionEntry {
    /// What the user wrote.
    pub text: String,
    /// Selected emotion tags.
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Local time of writing, `DD.MM.YYYY, HH:MM:SS`.
    pub timestamp: String,
}

/// Diary backed by the key-value store.
pub struct EmotionDiary<'a> {
    store: &'a KeyValueStore,
}

impl<'a> EmotionDiary<'a> {
    /// Wrap a store.
    #[must_use]
    pub const fn new(store: &'a KeyValueStore) -> Self {
        Self { store }
    }

    /// All entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored diary cannot be read.
    pub fn entries(&self) -> Result<Vec<EmotionEntry>, PsySafeError> {
        Ok(self.store.get_json(DIARY_KEY)?.unwrap_or_default())
    }

    /// Save an entry stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::Validation` if the text is blank.
    pub fn save(&self, text: &str, emotions: &[String]) -> Result<Notification, PsySafeError> {
        self.save_at(text, emotions, Local::now())
    }

    /// Save an entry stamped with `when`.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::Validation` if the text is blank.
    pub fn save_at(
        &self,
        text: &str,
        emotions: &[String],
        when: DateTime<Local>,
    ) -> Result<Notification, PsySafeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PsySafeError::Validation(
                "Пожалуйста, опишите ваше эмоциональное состояние".to_string(),
            ));
        }

        let entry = EmotionEntry {
            text: text.to_string(),
            emotions: normalize_emotions(emotions),
            timestamp: format_timestamp(&when),
        };

        let mut entries = self.entries()?;
        entries.insert(0, entry);
        self.store.set_json(DIARY_KEY, &entries)?;

        Ok(Notification::success("Запись сохранена!"))
    }

    /// Delete every entry. Returns true if there was anything to delete.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the delete.
    pub fn clear(&self) -> Result<bool, PsySafeError> {
        self.store.remove(DIARY_KEY)
    }
}

fn normalize_emotions(emotions: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for emotion in emotions {
        let emotion = emotion.trim();
        if !emotion.is_empty() && !out.iter().any(|e| e == emotion) {
            out.push(emotion.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn when(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 8, hour, 5, 9).unwrap()
    }

    #[test]
    fn test_blank_text_rejected() {
        let store = KeyValueStore::in_memory().unwrap();
        let diary = EmotionDiary::new(&store);

        let err = diary.save("   ", &[]).unwrap_err();
        assert!(matches!(err, PsySafeError::Validation(_)));
        assert!(store.get_raw(DIARY_KEY).unwrap().is_none());
    }

    #[test]
    fn test_newest_first() {
        let store = KeyValueStore::in_memory().unwrap();
        let diary = EmotionDiary::new(&store);

        diary.save_at("first", &[], when(9)).unwrap();
        diary
            .save_at(" second ", &["Радость".to_string()], when(10))
            .unwrap();

        let entries = diary.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "second");
        assert_eq!(entries[0].emotions, vec!["Радость".to_string()]);
        assert_eq!(entries[0].timestamp, "08.03.2024, 10:05:09");
        assert_eq!(entries[1].text, "first");
    }

    #[test]
    fn test_emotions_trimmed_and_deduplicated() {
        let emotions = vec![
            " Страх ".to_string(),
            String::new(),
            "Страх".to_string(),
            "Гнев".to_string(),
        ];
        assert_eq!(
            normalize_emotions(&emotions),
            vec!["Страх".to_string(), "Гнев".to_string()]
        );
    }

    #[test]
    fn test_stored_shape() {
        let store = KeyValueStore::in_memory().unwrap();
        EmotionDiary::new(&store)
            .save_at("text", &["Грусть".to_string()], when(12))
            .unwrap();

        let raw = store.get_raw(DIARY_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["text"], "text");
        assert_eq!(value[0]["emotions"][0], "Грусть");
        assert_eq!(value[0]["timestamp"], "08.03.2024, 12:05:09");
    }
}
