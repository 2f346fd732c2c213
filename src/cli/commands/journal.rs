//! Diary, boundaries and defense plan commands.

use crate::cli::args::{BoundariesCommands, DiaryCommands, OutputFormat, PlanCommands};
use crate::error::PsySafeError;
use crate::features::journal::{
    load_boundaries, load_plan, save_boundaries, save_plan, BoundariesUpdate, DefensePlanUpdate,
    EmotionDiary,
};
use crate::output::{
    format_boundaries, format_diary, format_notification, format_plan, Notification,
};
use crate::storage::KeyValueStore;

/// Execute diary subcommands.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` for a blank entry or an unconfirmed
/// clear, or a storage error.
pub fn diary(
    store: &KeyValueStore,
    cmd: DiaryCommands,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    let diary = EmotionDiary::new(store);

    match cmd {
        DiaryCommands::Add { text, emotions } => {
            let notice = diary.save(&text, &emotions)?;
            format_notification(&notice, format)
        }
        DiaryCommands::History => format_diary(&diary.entries()?, format),
        DiaryCommands::Clear { force } => {
            if !force {
                return Err(PsySafeError::Validation(
                    "This deletes every diary entry. Re-run with --force to confirm.".to_string(),
                ));
            }
            let notice = if diary.clear()? {
                Notification::success("Дневник очищен")
            } else {
                Notification::info("Пока нет сохраненных записей.")
            };
            format_notification(&notice, format)
        }
    }
}

/// Execute boundaries subcommands.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` if every area would be blank, or a
/// storage error.
pub fn boundaries(
    store: &KeyValueStore,
    cmd: BoundariesCommands,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match cmd {
        BoundariesCommands::Set {
            work,
            relationship,
            emotional,
            digital,
        } => {
            let notice = save_boundaries(
                store,
                BoundariesUpdate {
                    work,
                    relationship,
                    emotional,
                    digital,
                },
            )?;
            format_notification(&notice, format)
        }
        BoundariesCommands::Show => format_boundaries(load_boundaries(store)?.as_ref(), format),
    }
}

/// Execute plan subcommands.
///
/// # Errors
///
/// Returns a storage error.
pub fn plan(
    store: &KeyValueStore,
    cmd: PlanCommands,
    format: OutputFormat,
) -> Result<String, PsySafeError> {
    match cmd {
        PlanCommands::Set {
            triggers,
            auto_responses,
            support,
        } => {
            let notice = save_plan(
                store,
                DefensePlanUpdate {
                    triggers,
                    auto_responses,
                    support,
                },
            )?;
            format_notification(&notice, format)
        }
        PlanCommands::Show => format_plan(load_plan(store)?.as_ref(), format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diary_add_then_history() {
        let store = KeyValueStore::in_memory().unwrap();
        let out = diary(
            &store,
            DiaryCommands::Add {
                text: "Долгий день".to_string(),
                emotions: vec!["Усталость".to_string()],
            },
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "success");
        assert_eq!(value["message"], "Запись сохранена!");

        let out = diary(&store, DiaryCommands::History, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["emotions"][0], "Усталость");
    }

    #[test]
    fn test_diary_clear_needs_force() {
        let store = KeyValueStore::in_memory().unwrap();
        let result = diary(&store, DiaryCommands::Clear { force: false }, OutputFormat::Pretty);
        assert!(matches!(result, Err(PsySafeError::Validation(_))));
    }

    #[test]
    fn test_boundaries_merge_across_sets() {
        let store = KeyValueStore::in_memory().unwrap();
        boundaries(
            &store,
            BoundariesCommands::Set {
                work: Some("Без звонков в выходные".to_string()),
                relationship: None,
                emotional: None,
                digital: None,
            },
            OutputFormat::Pretty,
        )
        .unwrap();
        boundaries(
            &store,
            BoundariesCommands::Set {
                work: None,
                relationship: None,
                emotional: None,
                digital: Some("Телефон после 22:00 выключен".to_string()),
            },
            OutputFormat::Pretty,
        )
        .unwrap();

        let out = boundaries(&store, BoundariesCommands::Show, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["work"], "Без звонков в выходные");
        assert_eq!(value["digital"], "Телефон после 22:00 выключен");
    }

    #[test]
    fn test_plan_show_empty_is_null() {
        let store = KeyValueStore::in_memory().unwrap();
        let out = plan(&store, PlanCommands::Show, OutputFormat::Json).unwrap();
        assert_eq!(out, "null");
    }
}
