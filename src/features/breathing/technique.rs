//! Breathing techniques and their phase tables.

use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::PsySafeError;

/// What the body does during a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathAction {
    /// Breathe in.
    Inhale,
    /// Hold with full lungs.
    Hold,
    /// Breathe out.
    Exhale,
    /// Rest with empty lungs.
    Pause,
}

impl BreathAction {
    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inhale => "inhale",
            Self::Hold => "hold",
            Self::Exhale => "exhale",
            Self::Pause => "pause",
        }
    }
}

impl std::fmt::Display for BreathAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed step of a technique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    /// Instruction shown while the phase runs.
    pub label: &'static str,
    /// Body action for the phase.
    pub action: BreathAction,
    /// How long the phase lasts, always positive.
    pub duration_millis: u64,
}

impl Phase {
    const fn new(label: &'static str, action: BreathAction, duration_millis: u64) -> Self {
        Self {
            label,
            action,
            duration_millis,
        }
    }

    /// Phase length as a `Duration`.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }
}

/// A named, immutable cycle of phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technique {
    /// Lookup key.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Phases in execution order. Never empty.
    pub phases: Vec<Phase>,
}

impl Technique {
    /// Number of phases in one cycle.
    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Length of one full cycle.
    #[must_use]
    pub fn cycle_duration(&self) -> Duration {
        self.phases.iter().map(Phase::duration).sum()
    }

    /// Look up a built-in technique by key or alias.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::UnknownTechnique` if no technique matches.
    pub fn lookup(key: &str) -> Result<&'static Self, PsySafeError> {
        let normalized = key.trim().to_lowercase();
        let canonical = match normalized.as_str() {
            "4-7-8" => "478",
            other => other,
        };

        TECHNIQUES
            .iter()
            .find(|t| t.key == canonical)
            .ok_or_else(|| PsySafeError::UnknownTechnique(key.to_string()))
    }

    /// All built-in techniques in menu order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &TECHNIQUES
    }
}

static TECHNIQUES: Lazy<Vec<Technique>> = Lazy::new(|| {
    use BreathAction::{Exhale, Hold, Inhale, Pause};

    vec![
        Technique {
            key: "square",
            name: "Квадратное дыхание",
            phases: vec![
                Phase::new("Вдох", Inhale, 4000),
                Phase::new("Задержка", Hold, 4000),
                Phase::new("Выдох", Exhale, 4000),
                Phase::new("Пауза", Pause, 4000),
            ],
        },
        Technique {
            key: "478",
            name: "Техника 4-7-8",
            phases: vec![
                Phase::new("Вдох (4 сек)", Inhale, 4000),
                Phase::new("Задержка (7 сек)", Hold, 7000),
                Phase::new("Выдох (8 сек)", Exhale, 8000),
            ],
        },
        Technique {
            key: "belly",
            name: "Диафрагмальное дыхание",
            phases: vec![
                Phase::new("Медленный вдох животом", Inhale, 4000),
                Phase::new("Пауза", Hold, 2000),
                Phase::new("Медленный выдох", Exhale, 6000),
            ],
        },
    ]
});
