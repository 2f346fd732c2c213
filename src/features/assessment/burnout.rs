//! Burnout self-test.
//!
//! Each symptom is rated from 0 (absent) to 5 (constant). The overall risk is
//! the rounded share of the maximum possible score.

use serde::Serialize;

use crate::error::PsySafeError;
use crate::output::NotificationKind;

/// Number of symptoms in the test.
pub const SYMPTOM_COUNT: usize = 5;

/// Highest rating for one symptom.
pub const MAX_LEVEL: u8 = 5;

/// Burnout risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnoutRisk {
    /// Up to 20%.
    Low,
    /// Up to 50%.
    Moderate,
    /// Up to 80%.
    High,
    /// Above 80%.
    Critical,
}

impl BurnoutRisk {
    /// Band for a percentage.
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=20 => Self::Low,
            21..=50 => Self::Moderate,
            51..=80 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Title of the band.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Low => "Низкий риск выгорания",
            Self::Moderate => "Умеренный риск",
            Self::High => "Высокий риск выгорания",
            Self::Critical => "Критический уровень",
        }
    }

    /// What to do about it.
    #[must_use]
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Self::Low => &[
                "Продолжайте практиковать здоровые привычки",
                "Регулярно занимайтесь профилактикой стресса",
            ],
            Self::Moderate => &[
                "Увеличьте время отдыха и восстановления",
                "Обсудите нагрузку с руководителем",
                "Введите регулярные физические упражнения",
            ],
            Self::High => &[
                "Срочно снизьте рабочую нагрузку",
                "Обратитесь к психологу или врачу",
                "Возьмите отпуск для восстановления",
            ],
            Self::Critical => &[
                "Немедленно обратитесь за медицинской помощью",
                "Свяжитесь с психологической службой",
                "Временно прекратите рабочую деятельность",
            ],
        }
    }

    /// Severity used for coloring.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Low => NotificationKind::Success,
            Self::Moderate => NotificationKind::Warning,
            Self::High | Self::Critical => NotificationKind::Danger,
        }
    }
}

/// Scored burnout test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BurnoutResult {
    /// Sum of all ratings.
    pub score: u32,
    /// Highest possible sum.
    pub max_score: u32,
    /// Rounded percentage of the maximum.
    pub percentage: u8,
    /// Risk band.
    pub risk: BurnoutRisk,
    /// Band title.
    pub title: &'static str,
    /// Recommendations for the band.
    pub recommendations: Vec<&'static str>,
}

impl BurnoutResult {
    /// Summary, e.g. "Умеренный риск (10 баллов из 25)".
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} ({} баллов из {})", self.title, self.score, self.max_score)
    }
}

/// Score one rating per symptom.
///
/// # Errors
///
/// Returns `PsySafeError::Validation` if the number of ratings is not
/// [`SYMPTOM_COUNT`] or a rating exceeds [`MAX_LEVEL`].
pub fn score_burnout(levels: &[u8]) -> Result<BurnoutResult, PsySafeError> {
    if levels.len() != SYMPTOM_COUNT {
        return Err(PsySafeError::Validation(format!(
            "Expected {SYMPTOM_COUNT} symptom ratings, got {}",
            levels.len()
        )));
    }
    if let Some(bad) = levels.iter().find(|&&l| l > MAX_LEVEL) {
        return Err(PsySafeError::Validation(format!(
            "Symptom rating {bad} is out of range (0-{MAX_LEVEL})"
        )));
    }

    let score: u32 = levels.iter().map(|&l| u32::from(l)).sum();
    #[allow(clippy::cast_possible_truncation)]
    let max_score = (SYMPTOM_COUNT as u32) * u32::from(MAX_LEVEL);
    let percentage = rounded_percentage(score, max_score);
    let risk = BurnoutRisk::from_percentage(percentage);

    Ok(BurnoutResult {
        score,
        max_score,
        percentage,
        risk,
        title: risk.title(),
        recommendations: risk.recommendations().to_vec(),
    })
}

/// Round half up, like `Math.round` for non-negative values.
fn rounded_percentage(score: u32, max_score: u32) -> u8 {
    if max_score == 0 {
        return 0;
    }
    let rounded = (score * 200 + max_score) / (2 * max_score);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_is_low() {
        let result = score_burnout(&[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(result.percentage, 0);
        assert_eq!(result.risk, BurnoutRisk::Low);
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_band_edges() {
        // 5/25 = 20%
        assert_eq!(score_burnout(&[1, 1, 1, 1, 1]).unwrap().risk, BurnoutRisk::Low);
        // 6/25 = 24%
        assert_eq!(score_burnout(&[2, 1, 1, 1, 1]).unwrap().risk, BurnoutRisk::Moderate);
        // 20/25 = 80%
        assert_eq!(score_burnout(&[4, 4, 4, 4, 4]).unwrap().risk, BurnoutRisk::High);
        // 21/25 = 84%
        assert_eq!(score_burnout(&[5, 4, 4, 4, 4]).unwrap().risk, BurnoutRisk::Critical);
    }

    #[test]
    fn test_summary() {
        let result = score_burnout(&[2, 2, 2, 2, 2]).unwrap();
        assert_eq!(result.percentage, 40);
        assert_eq!(result.summary(), "Умеренный риск (10 баллов из 25)");
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(rounded_percentage(1, 8), 13); // 12.5
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
    }

    #[test]
    fn test_validation() {
        assert!(score_burnout(&[1, 2, 3]).is_err());
        assert!(matches!(
            score_burnout(&[6, 0, 0, 0, 0]),
            Err(PsySafeError::Validation(_))
        ));
    }
}
