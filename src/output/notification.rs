//! User-facing notifications.

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Input needs attention.
    Warning,
    /// Something is seriously wrong.
    Danger,
    /// Neutral information.
    #[default]
    Info,
}

impl NotificationKind {
    /// Icon prefix.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Warning => "⚠",
            Self::Danger => "✖",
            Self::Info => "ℹ",
        }
    }

    /// Terminal color used for the icon and accents.
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Danger => Color::Red,
            Self::Info => Color::TrueColor {
                r: 0x60,
                g: 0x3F,
                b: 0x2B,
            },
        }
    }
}

/// A message with a severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
}

impl Notification {
    /// Create a notification.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    /// Info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    /// Render as a single colored line.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{} {}",
            self.kind.icon().color(self.kind.color()),
            self.message
        )
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.icon(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        let n = Notification::success("Запись сохранена!");
        assert_eq!(n.to_string(), "✔ Запись сохранена!");
    }

    #[test]
    fn test_warning_render() {
        let n = Notification::warning("careful");
        assert_eq!(n.kind, NotificationKind::Warning);
        assert!(n.render().contains("⚠"));
        assert!(n.render().ends_with(" careful"));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }
}
