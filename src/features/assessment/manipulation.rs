//! Manipulation awareness checklist.

use serde::Serialize;

use crate::error::PsySafeError;
use crate::output::NotificationKind;

/// Number of items on the checklist.
pub const CHECKLIST_ITEMS: u8 = 6;

/// How exposed the answers suggest the user is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManipulationBand {
    /// No signs checked.
    Protected,
    /// One or two signs.
    Attention,
    /// Three or four signs.
    Alarming,
    /// Five or more signs.
    Critical,
}

impl ManipulationBand {
    /// Band for a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Protected,
            1..=2 => Self::Attention,
            3..=4 => Self::Alarming,
            _ => Self::Critical,
        }
    }

    /// Advice shown with the score.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Protected => "Отличный результат! Вы хорошо защищены от манипуляций.",
            Self::Attention => "Внимание! Есть признаки возможных манипуляций. Рекомендуется развивать навыки распознавания.",
            Self::Alarming => "Тревожный сигнал! Вы подвергаетесь систематическим манипуляциям. Рекомендуется обратиться к психологу.",
            Self::Critical => "Критическая ситуация! Необходима срочная психологическая помощь и изменение окружения.",
        }
    }

    /// Severity used for coloring.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Protected => NotificationKind::Success,
            Self::Attention => NotificationKind::Warning,
            Self::Alarming | Self::Critical => NotificationKind::Danger,
        }
    }
}

/// Scored checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManipulationResult {
    /// Number of checked items.
    pub score: u8,
    /// Number of items on the checklist.
    pub max: u8,
    /// Result band.
    pub band: ManipulationBand,
    /// Advice text.
    pub message: &'static str,
    /// Severity.
    pub kind: NotificationKind,
}

impl ManipulationResult {
    /// Headline, e.g. "Результат: 2 из 6".
    #[must_use]
    pub fn headline(&self) -> String {
        format!("Результат: {} из {}", self.score, self.max)
    }
}

/// Score a checklist from the 1-based numbers of the checked items.
///
/// Duplicate numbers count once.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` for item numbers outside 1..=6.
pub fn score_checklist(checked: &[u8]) -> Result<ManipulationResult, PsySafeError> {
    if let Some(bad) = checked
        .iter()
        .find(|&&item| item == 0 || item > CHECKLIST_ITEMS)
    {
        return Err(PsySafeError::Validation(format!(
            "Checklist item {bad} does not exist (items are 1-{CHECKLIST_ITEMS})"
        )));
    }

    let mut seen = [false; CHECKLIST_ITEMS as usize];
    for &item in checked {
        seen[usize::from(item - 1)] = true;
    }
    #[allow(clippy::cast_possible_truncation)]
    let score = seen.iter().filter(|&&s| s).count() as u8;

    let band = ManipulationBand::from_score(score);
    Ok(ManipulationResult {
        score,
        max: CHECKLIST_ITEMS,
        band,
        message: band.message(),
        kind: band.kind(),
    })
}
