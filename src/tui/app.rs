//! Application state for the breathing screen.

use std::time::Duration;

use crate::error::PsySafeError;
use crate::features::breathing::{
    format_elapsed, BreathAction, BreathingSequencer, Clock, PresentationSink, SystemClock,
    Technique, IDLE_INSTRUCTION,
};

const HELP: &str = "space:start/stop | 1-3/tab:technique | q:quit";

/// What the breathing panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSink {
    /// Instruction text in the circle.
    pub instruction: String,
    /// Action styling the circle, `None` while idle.
    pub action: Option<BreathAction>,
    /// Elapsed timer text. Kept after a stop.
    pub timer: String,
}

impl Default for ScreenSink {
    fn default() -> Self {
        Self {
            instruction: IDLE_INSTRUCTION.to_string(),
            action: None,
            timer: format_elapsed(0),
        }
    }
}

impl PresentationSink for ScreenSink {
    fn on_phase_change(&mut self, label: &str, action: BreathAction) {
        self.instruction = label.to_string();
        self.action = Some(action);
    }

    fn on_elapsed_tick(&mut self, elapsed: &str) {
        self.timer = elapsed.to_string();
    }

    fn on_idle(&mut self) {
        self.instruction = IDLE_INSTRUCTION.to_string();
        self.action = None;
    }
}

/// Application state.
pub struct App<C: Clock = SystemClock> {
    sequencer: BreathingSequencer<ScreenSink, C>,
    /// Index of the highlighted technique.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether to draw the timer.
    pub show_elapsed: bool,
    limit: Option<Duration>,
}

impl App<SystemClock> {
    /// Create the app on the system clock.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::UnknownTechnique` if `technique` is not known.
    pub fn new(
        technique: &str,
        tick_interval: Duration,
        limit: Option<Duration>,
    ) -> Result<Self, PsySafeError> {
        Self::with_clock(technique, tick_interval, limit, SystemClock::new())
    }
}

impl<C: Clock> App<C> {
    /// Create the app reading time from `clock`. Nothing runs until
    /// [`App::toggle`] or [`App::select`] is called.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::UnknownTechnique` if `technique` is not known.
    pub fn with_clock(
        technique: &str,
        tick_interval: Duration,
        limit: Option<Duration>,
        clock: C,
    ) -> Result<Self, PsySafeError> {
        let key = Technique::lookup(technique)?.key;
        let selected = Technique::all()
            .iter()
            .position(|t| t.key == key)
            .unwrap_or_default();

        Ok(Self {
            sequencer: BreathingSequencer::with_clock(ScreenSink::default(), clock)
                .tick_interval(tick_interval),
            selected,
            status: Some(HELP.to_string()),
            show_elapsed: true,
            limit,
        })
    }

    /// The highlighted technique.
    #[must_use]
    pub fn technique(&self) -> &'static Technique {
        let all = Technique::all();
        &all[self.selected.min(all.len() - 1)]
    }

    /// What the panel shows.
    #[must_use]
    pub const fn screen(&self) -> &ScreenSink {
        self.sequencer.sink()
    }

    /// Check whether a session is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Start the highlighted technique, or stop the running one.
    ///
    /// # Errors
    ///
    /// Returns an error if the technique cannot be started.
    pub fn toggle(&mut self) -> Result<(), PsySafeError> {
        if self.is_running() {
            self.sequencer.stop();
            self.status = Some("Stopped".to_string());
            Ok(())
        } else {
            self.start_selected()
        }
    }

    /// Highlight technique `index`. A running session switches over.
    ///
    /// # Errors
    ///
    /// Returns an error if the technique cannot be started.
    pub fn select(&mut self, index: usize) -> Result<(), PsySafeError> {
        if index >= Technique::all().len() {
            return Ok(());
        }
        self.selected = index;
        if self.is_running() {
            self.start_selected()
        } else {
            self.status = Some(format!("Selected: {}", self.technique().name));
            Ok(())
        }
    }

    /// Highlight the next technique, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns an error if the technique cannot be started.
    pub fn select_next(&mut self) -> Result<(), PsySafeError> {
        self.select((self.selected + 1) % Technique::all().len())
    }

    /// Fire due timers and apply the session limit.
    pub fn tick(&mut self) {
        self.sequencer.run_due();

        if let (Some(limit), Some(elapsed)) = (self.limit, self.sequencer.elapsed()) {
            if self.is_running() && elapsed >= limit {
                self.sequencer.stop();
                let total = format_elapsed(limit.as_secs());
                self.status = Some(format!("Session complete ({total})"));
            }
        }
    }

    /// How long the event loop may block before the next update.
    #[must_use]
    pub fn poll_timeout(&self, max: Duration) -> Duration {
        let mut timeout = self.sequencer.time_until_next().map_or(max, |t| t.min(max));
        if let (Some(limit), Some(elapsed)) = (self.limit, self.sequencer.elapsed()) {
            timeout = timeout.min(limit.saturating_sub(elapsed));
        }
        timeout
    }

    /// Stop timers without touching the screen.
    pub fn dispose(&mut self) {
        self.sequencer.dispose();
    }

    fn start_selected(&mut self) -> Result<(), PsySafeError> {
        let technique = self.technique();
        self.sequencer.start(technique.key)?;
        self.status = Some(format!("{} | {HELP}", technique.name));
        Ok(())
    }
}
