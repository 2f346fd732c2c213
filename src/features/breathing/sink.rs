//! Presentation seam for the breathing sequencer.

#[cfg(test)]
use mockall::automock;

use super::technique::BreathAction;

/// Receives everything the sequencer wants shown.
#[cfg_attr(test, automock)]
pub trait PresentationSink {
    /// A new phase began.
    fn on_phase_change(&mut self, label: &str, action: BreathAction);

    /// Elapsed session time, already formatted as `MM:SS`.
    fn on_elapsed_tick(&mut self, elapsed: &str);

    /// The session ended and the display should return to idle.
    fn on_idle(&mut self);
}

/// A notification captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// Phase change with label and action.
    Phase(String, BreathAction),
    /// Elapsed tick.
    Tick(String),
    /// Returned to idle.
    Idle,
}

/// Sink that keeps every notification in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    /// Notifications received so far.
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Only the phase notifications, in order.
    #[must_use]
    pub fn phases(&self) -> Vec<(String, BreathAction)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Phase(label, action) => Some((label.clone(), *action)),
                _ => None,
            })
            .collect()
    }

    /// Only the tick notifications, in order.
    #[must_use]
    pub fn ticks(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Tick(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    /// Forget everything received so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn on_phase_change(&mut self, label: &str, action: BreathAction) {
        self.events.push(SinkEvent::Phase(label.to_string(), action));
    }

    fn on_elapsed_tick(&mut self, elapsed: &str) {
        self.events.push(SinkEvent::Tick(elapsed.to_string()));
    }

    fn on_idle(&mut self) {
        self.events.push(SinkEvent::Idle);
    }
}
