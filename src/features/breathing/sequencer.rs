//! Breathing phase sequencer.
//!
//! Runs one technique at a time as an endless cycle of timed phases and
//! reports elapsed session time once per tick interval. The sequencer never
//! sleeps; the host calls [`BreathingSequencer::run_due`] whenever it wakes.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::sink::PresentationSink;
use super::technique::{Phase, Technique};
use super::timer::{format_elapsed, Clock, Fired, SystemClock, TimerId, TimerQueue};
use crate::error::PsySafeError;

/// Default spacing of elapsed-time notifications.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    PhaseElapsed,
    ElapsedTick,
}

/// Mutable state of the current session.
///
/// `pending_phase_timer` is `Some` exactly while a session runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Technique being run.
    pub active_technique: Option<&'static Technique>,
    /// Index into the technique's phases.
    pub current_phase_index: usize,
    /// Clock reading when the session started.
    pub session_start: Option<Duration>,
    /// Timer that will advance to the next phase.
    pub pending_phase_timer: Option<TimerId>,
    /// Recurring elapsed-time timer.
    pub elapsed_tick_timer: Option<TimerId>,
}

/// Externally visible sequencer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Nothing is running.
    Idle,
    /// A technique is cycling through its phases.
    Running {
        /// Key of the running technique.
        technique: &'static str,
        /// Index of the current phase.
        phase_index: usize,
    },
}

/// Drives a breathing technique and notifies a presentation sink.
pub struct BreathingSequencer<S: PresentationSink, C: Clock = SystemClock> {
    clock: C,
    sink: S,
    timers: TimerQueue<Wake>,
    session: SessionState,
    tick_interval: Duration,
}

impl<S: PresentationSink> BreathingSequencer<S, SystemClock> {
    /// Create a sequencer on the system clock.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, SystemClock::new())
    }
}

impl<S: PresentationSink, C: Clock> BreathingSequencer<S, C> {
    /// Create a sequencer reading time from `clock`.
    #[must_use]
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self {
            clock,
            sink,
            timers: TimerQueue::new(),
            session: SessionState::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Override the elapsed-time notification interval.
    #[must_use]
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Start `technique_key`, replacing any running session.
    ///
    /// The key is validated before anything changes, so a rejected key leaves
    /// a running session untouched.
    ///
    /// # Errors
    ///
    /// Returns `PsySafeError::UnknownTechnique` if the key is not registered.
    pub fn start(&mut self, technique_key: &str) -> Result<(), PsySafeError> {
        let technique = Technique::lookup(technique_key).inspect_err(|_| {
            warn!(key = technique_key, "ignoring start for unknown technique");
        })?;

        self.cancel_timers();

        let now = self.clock.now();
        self.session = SessionState {
            active_technique: Some(technique),
            current_phase_index: 0,
            session_start: Some(now),
            pending_phase_timer: None,
            elapsed_tick_timer: None,
        };
        info!(technique = technique.key, "breathing session started");

        self.emit_elapsed(now);
        self.session.elapsed_tick_timer = Some(self.timers.schedule_every(
            now + self.tick_interval,
            self.tick_interval,
            Wake::ElapsedTick,
        ));

        self.enter_phase(now);
        Ok(())
    }

    /// Stop the session and return the display to idle.
    ///
    /// Safe to call at any time. Always emits one idle notification.
    pub fn stop(&mut self) {
        if let Some(technique) = self.session.active_technique {
            info!(
                technique = technique.key,
                elapsed = %self.elapsed_display(),
                "breathing session stopped"
            );
        }
        self.reset();
        self.sink.on_idle();
    }

    /// Cancel all timers without notifying the sink.
    ///
    /// Used when the hosting view goes away.
    pub fn dispose(&mut self) {
        if self.is_running() {
            debug!("disposing running breathing session");
        }
        self.reset();
    }

    /// Fire every timer due at the current clock reading.
    ///
    /// Timers are dispatched one at a time, so work done by one callback is
    /// visible to the next. Returns the number of timers dispatched.
    pub fn run_due(&mut self) -> usize {
        let mut dispatched = 0;
        while let Some(fired) = self.timers.pop_due(self.clock.now()) {
            self.dispatch(fired);
            dispatched += 1;
        }
        dispatched
    }

    /// Time until the next timer is due, zero if one is overdue.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SequencerState {
        match (self.session.active_technique, self.session.pending_phase_timer) {
            (Some(technique), Some(_)) => SequencerState::Running {
                technique: technique.key,
                phase_index: self.session.current_phase_index,
            },
            _ => SequencerState::Idle,
        }
    }

    /// Check whether a session is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.session.pending_phase_timer.is_some()
    }

    /// The session record.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// The phase currently shown, if running.
    #[must_use]
    pub fn current_phase(&self) -> Option<&'static Phase> {
        if !self.is_running() {
            return None;
        }
        self.session
            .active_technique
            .and_then(|t| t.phases.get(self.session.current_phase_index))
    }

    /// Time since the session started.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.session
            .session_start
            .map(|start| self.clock.now().saturating_sub(start))
    }

    /// Number of armed timers (one phase and one tick timer while running).
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.timers.len()
    }

    /// The presentation sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the presentation sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn dispatch(&mut self, fired: Fired<Wake>) {
        match fired.event {
            Wake::PhaseElapsed => {
                if self.session.pending_phase_timer != Some(fired.id) {
                    return;
                }
                let Some(technique) = self.session.active_technique else {
                    return;
                };
                self.session.current_phase_index =
                    (self.session.current_phase_index + 1) % technique.phase_count();
                debug!(
                    technique = technique.key,
                    phase = self.session.current_phase_index,
                    "phase advanced"
                );
                // Chain from the deadline so late wake-ups do not drift the cycle.
                self.enter_phase(fired.deadline);
            }
            Wake::ElapsedTick => {
                if self.session.elapsed_tick_timer != Some(fired.id) {
                    return;
                }
                self.emit_elapsed(self.clock.now());
            }
        }
    }

    fn enter_phase(&mut self, at: Duration) {
        let Some(technique) = self.session.active_technique else {
            return;
        };
        let Some(phase) = technique.phases.get(self.session.current_phase_index) else {
            return;
        };

        self.sink.on_phase_change(phase.label, phase.action);
        self.session.pending_phase_timer = Some(
            self.timers
                .schedule_at(at + phase.duration(), Wake::PhaseElapsed),
        );
    }

    fn emit_elapsed(&mut self, now: Duration) {
        let Some(start) = self.session.session_start else {
            return;
        };
        let seconds = now.saturating_sub(start).as_secs();
        self.sink.on_elapsed_tick(&format_elapsed(seconds));
    }

    fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed().map_or(0, |d| d.as_secs()))
    }

    fn cancel_timers(&mut self) {
        if let Some(id) = self.session.pending_phase_timer.take() {
            self.timers.cancel(id);
        }
        if let Some(id) = self.session.elapsed_tick_timer.take() {
            self.timers.cancel(id);
        }
    }

    fn reset(&mut self) {
        self.cancel_timers();
        self.session = SessionState::default();
    }
}

impl<S: PresentationSink, C: Clock> Drop for BreathingSequencer<S, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::breathing::sink::{MockPresentationSink, RecordingSink, SinkEvent};
    use crate::features::breathing::technique::BreathAction;
    use crate::features::breathing::timer::ManualClock;

    fn sequencer() -> (BreathingSequencer<RecordingSink, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (
            BreathingSequencer::with_clock(RecordingSink::default(), clock.clone()),
            clock,
        )
    }

    fn phase(label: &str, action: BreathAction) -> (String, BreathAction) {
        (label.to_string(), action)
    }

    #[test]
    fn test_478_scenario() {
        let (mut seq, clock) = sequencer();
        seq.start("478").unwrap();
        assert_eq!(
            seq.sink().phases(),
            vec![phase("Вдох (4 сек)", BreathAction::Inhale)]
        );

        clock.advance_millis(3999);
        seq.run_due();
        assert_eq!(seq.sink().phases().len(), 1);

        clock.advance_millis(1);
        seq.run_due();
        assert_eq!(
            seq.sink().phases().last().cloned(),
            Some(phase("Задержка (7 сек)", BreathAction::Hold))
        );

        clock.advance_millis(7000);
        seq.run_due();
        assert_eq!(
            seq.sink().phases().last().cloned(),
            Some(phase("Выдох (8 сек)", BreathAction::Exhale))
        );

        clock.advance_millis(8000);
        seq.run_due();
        assert_eq!(
            seq.sink().phases().last().cloned(),
            Some(phase("Вдох (4 сек)", BreathAction::Inhale))
        );
        assert_eq!(seq.sink().phases().len(), 4);
    }

    #[test]
    fn test_square_wraps_after_four_phases() {
        let (mut seq, clock) = sequencer();
        seq.start("square").unwrap();

        for _ in 0..4 {
            clock.advance_millis(4000);
            seq.run_due();
        }

        assert_eq!(
            seq.state(),
            SequencerState::Running {
                technique: "square",
                phase_index: 0
            }
        );
        let phases = seq.sink().phases();
        assert_eq!(phases.len(), 5);
        assert_eq!(phases[0], phases[4]);
        assert_eq!(phases[0], phase("Вдох", BreathAction::Inhale));
        assert_eq!(phases[3], phase("Пауза", BreathAction::Pause));
    }

    #[test]
    fn test_cycle_is_exact_despite_late_polling() {
        let (mut seq, clock) = sequencer();
        seq.start("belly").unwrap();

        // One late wake-up per cycle still produces every phase and keeps the
        // next deadline on the cycle grid.
        for cycle in 1..=3u64 {
            clock.advance_millis(12_000);
            seq.run_due();
            assert_eq!(seq.sink().phases().len() as u64, 1 + 3 * cycle);
            assert_eq!(seq.session().current_phase_index, 0);
        }

        clock.advance_millis(3999);
        seq.run_due();
        assert_eq!(seq.session().current_phase_index, 0);
        clock.advance_millis(1);
        seq.run_due();
        assert_eq!(seq.session().current_phase_index, 1);
    }

    #[test]
    fn test_restart_leaves_single_timer_pair() {
        let (mut seq, clock) = sequencer();
        seq.start("square").unwrap();
        assert_eq!(seq.armed_timers(), 2);

        clock.advance_millis(1000);
        seq.run_due();
        seq.start("belly").unwrap();
        assert_eq!(seq.armed_timers(), 2);

        seq.sink_mut().clear();
        clock.advance_millis(4000);
        seq.run_due();
        assert_eq!(seq.sink().phases(), vec![phase("Пауза", BreathAction::Hold)]);
    }

    #[test]
    fn test_stop_silences_session() {
        let (mut seq, clock) = sequencer();
        seq.start("square").unwrap();
        seq.stop();

        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(seq.armed_timers(), 0);
        assert_eq!(seq.sink().events.last(), Some(&SinkEvent::Idle));

        seq.sink_mut().clear();
        clock.advance(Duration::from_secs(3600));
        assert_eq!(seq.run_due(), 0);
        assert!(seq.sink().events.is_empty());
    }

    #[test]
    fn test_stop_then_start_other_technique() {
        let (mut seq, clock) = sequencer();
        seq.start("square").unwrap();
        clock.advance_millis(1500);
        seq.run_due();
        seq.stop();
        seq.start("belly").unwrap();

        let phases = seq.sink().phases();
        assert_eq!(
            phases.last(),
            Some(&phase("Медленный вдох животом", BreathAction::Inhale))
        );

        // Square's second phase would have been due at 4000 ms.
        clock.advance_millis(2500);
        seq.run_due();
        assert!(!seq
            .sink()
            .phases()
            .contains(&phase("Задержка", BreathAction::Hold)));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut seq, _clock) = sequencer();
        seq.stop();
        seq.stop();
        assert_eq!(seq.sink().events, vec![SinkEvent::Idle, SinkEvent::Idle]);
        assert_eq!(seq.state(), SequencerState::Idle);
    }

    #[test]
    fn test_next_start_begins_at_phase_zero() {
        let (mut seq, clock) = sequencer();
        seq.start("478").unwrap();
        clock.advance_millis(4000);
        seq.run_due();
        assert_eq!(seq.session().current_phase_index, 1);

        seq.stop();
        seq.start("478").unwrap();
        assert_eq!(seq.session().current_phase_index, 0);
        assert_eq!(seq.current_phase().map(|p| p.label), Some("Вдох (4 сек)"));
    }

    #[test]
    fn test_unknown_technique_keeps_running_session() {
        let (mut seq, _clock) = sequencer();
        seq.start("square").unwrap();
        let before = seq.session().clone();
        let events_before = seq.sink().events.len();

        let err = seq.start("nope").unwrap_err();
        assert!(matches!(err, PsySafeError::UnknownTechnique(_)));
        assert_eq!(seq.session(), &before);
        assert_eq!(seq.sink().events.len(), events_before);
        assert_eq!(seq.armed_timers(), 2);
    }

    #[test]
    fn test_unknown_technique_when_idle() {
        let (mut seq, _clock) = sequencer();
        assert!(seq.start("").is_err());
        assert_eq!(seq.state(), SequencerState::Idle);
        assert!(seq.sink().events.is_empty());
    }

    #[test]
    fn test_elapsed_ticks() {
        let (mut seq, clock) = sequencer();
        seq.start("square").unwrap();
        assert_eq!(seq.sink().ticks(), vec!["00:00".to_string()]);

        for _ in 0..125 {
            clock.advance_millis(1000);
            seq.run_due();
        }

        let ticks = seq.sink().ticks();
        assert_eq!(ticks.len(), 126);
        assert_eq!(ticks[1], "00:01");
        assert_eq!(ticks.last().map(String::as_str), Some("02:05"));
    }

    #[test]
    fn test_tick_floors_partial_seconds() {
        let (mut seq, clock) = sequencer();
        seq.start("belly").unwrap();
        clock.advance_millis(1999);
        seq.run_due();
        assert_eq!(seq.sink().ticks().last().map(String::as_str), Some("00:01"));
    }

    #[test]
    fn test_custom_tick_interval() {
        let clock = ManualClock::new();
        let mut seq = BreathingSequencer::with_clock(RecordingSink::default(), clock.clone())
            .tick_interval(Duration::from_millis(500));
        seq.start("square").unwrap();
        clock.advance_millis(2000);
        seq.run_due();
        assert_eq!(seq.sink().ticks().len(), 5);
    }

    #[test]
    fn test_dispose_is_silent() {
        let (mut seq, clock) = sequencer();
        seq.start("square").unwrap();
        seq.sink_mut().clear();

        seq.dispose();
        assert_eq!(seq.armed_timers(), 0);
        assert!(!seq.is_running());

        clock.advance_millis(10_000);
        seq.run_due();
        assert!(seq.sink().events.is_empty());
    }

    #[test]
    fn test_sink_contract_with_mock() {
        let mut sink = MockPresentationSink::new();
        sink.expect_on_elapsed_tick()
            .withf(|elapsed: &str| elapsed == "00:00")
            .times(1)
            .return_const(());
        sink.expect_on_phase_change()
            .withf(|label: &str, action: &BreathAction| {
                label == "Вдох" && *action == BreathAction::Inhale
            })
            .times(1)
            .return_const(());
        sink.expect_on_idle().times(1).return_const(());

        let clock = ManualClock::new();
        let mut seq = BreathingSequencer::with_clock(sink, clock.clone());
        seq.start("square").unwrap();
        clock.advance_millis(500);
        assert_eq!(seq.run_due(), 0);
        seq.stop();
    }
}
