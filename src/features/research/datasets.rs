//! Survey figures behind the research charts.

use serde::Serialize;

/// How a dataset is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bars, values in percent.
    Bar,
    /// Share of a whole.
    Doughnut,
    /// Scores on several axes, 0-100.
    Radar,
    /// Values over time, in percent.
    Line,
}

/// A labelled series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    /// Lookup key.
    pub key: &'static str,
    /// Chart title.
    pub title: &'static str,
    /// Series name.
    pub series: &'static str,
    /// Chart type.
    pub kind: ChartKind,
    /// Label and value pairs.
    pub points: &'static [(&'static str, u32)],
}

impl Dataset {
    /// Sum of all values.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points.iter().map(|(_, v)| v).sum()
    }

    /// Largest value, if any.
    #[must_use]
    pub fn peak(&self) -> Option<(&'static str, u32)> {
        self.points.iter().copied().max_by_key(|(_, v)| *v)
    }

    /// Whether values are read as percentages.
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        matches!(self.kind, ChartKind::Bar | ChartKind::Line | ChartKind::Doughnut)
    }
}

/// Burnout symptoms by age group.
pub const AGE: Dataset = Dataset {
    key: "age",
    title: "Выгорание по возрастам",
    series: "Процент с симптомами выгорания",
    kind: ChartKind::Bar,
    points: &[
        ("18-25", 35),
        ("26-35", 48),
        ("36-45", 52),
        ("46-55", 45),
        ("56+", 38),
    ],
};

/// Most common manipulation types.
pub const MANIPULATION: Dataset = Dataset {
    key: "manipulation",
    title: "Типы манипуляций",
    series: "Доля случаев",
    kind: ChartKind::Doughnut,
    points: &[
        ("Чувство вины", 35),
        ("Газлайтинг", 25),
        ("Давление группой", 20),
        ("Игра в жертву", 15),
        ("Другие", 5),
    ],
};

/// Effectiveness of defense methods.
pub const EFFECTIVENESS: Dataset = Dataset {
    key: "effectiveness",
    title: "Эффективность методов защиты",
    series: "Эффективность",
    kind: ChartKind::Radar,
    points: &[
        ("Распознавание", 85),
        ("Дистанцирование", 75),
        ("Вопросы", 90),
        ("Отказ", 95),
        ("Поддержка", 80),
        ("Обучение", 70),
    ],
};

/// Stress level over the year.
pub const STRESS: Dataset = Dataset {
    key: "stress",
    title: "Динамика стресса",
    series: "Уровень стресса",
    kind: ChartKind::Line,
    points: &[
        ("Янв", 65),
        ("Фев", 59),
        ("Мар", 70),
        ("Апр", 65),
        ("Май", 60),
        ("Июн", 55),
        ("Июл", 45),
        ("Авг", 40),
        ("Сен", 50),
        ("Окт", 60),
        ("Ноя", 70),
        ("Дек", 75),
    ],
};

/// Every dataset in display order.
pub const ALL: [&Dataset; 4] = [&AGE, &MANIPULATION, &EFFECTIVENESS, &STRESS];

/// Find a dataset by key.
#[must_use]
pub fn find(key: &str) -> Option<&'static Dataset> {
    let key = key.trim().to_lowercase();
    ALL.into_iter().find(|d| d.key == key)
}
