//! Clock and timer queue used by the breathing sequencer.
//!
//! Time is measured as a `Duration` since the clock's origin. The queue is
//! driven by the host: it never fires on its own, the host asks it for due
//! entries one at a time. Cancelling a handle removes the entry, so a stale
//! handle can never fire.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move time forward by whole milliseconds.
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Handle identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    /// Handle of the timer.
    pub id: TimerId,
    /// Deadline the timer was armed for.
    pub deadline: Duration,
    /// Payload supplied when scheduling.
    pub event: E,
}

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
    event: E,
}

/// Host-driven queue of one-shot and repeating timers.
#[derive(Debug)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

impl<E: Clone> TimerQueue<E> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Arm a one-shot timer for an absolute deadline.
    pub fn schedule_at(&mut self, deadline: Duration, event: E) -> TimerId {
        let id = self.allocate_id();
        self.entries.push(Entry {
            id,
            deadline,
            period: None,
            event,
        });
        id
    }

    /// Arm a repeating timer whose first deadline is `first`.
    ///
    /// A zero period is clamped to one millisecond so the timer cannot spin.
    pub fn schedule_every(&mut self, first: Duration, period: Duration, event: E) -> TimerId {
        let id = self.allocate_id();
        self.entries.push(Entry {
            id,
            deadline: first,
            period: Some(period.max(Duration::from_millis(1))),
            event,
        });
        id
    }

    /// Cancel a timer. Returns false if it was already gone.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Check whether a handle is still armed.
    #[must_use]
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of armed timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no timers are armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest armed deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Take the earliest timer due at `now`.
    ///
    /// Ties are broken by scheduling order. Repeating timers are re-armed one
    /// period after the deadline that fired.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<E>> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[index];
        let fired = Fired {
            id: entry.id,
            deadline: entry.deadline,
            event: entry.event.clone(),
        };

        match entry.period {
            Some(period) => entry.deadline += period,
            None => {
                self.entries.swap_remove(index);
            }
        }

        Some(fired)
    }
}

impl<E: Clone> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format whole seconds as `MM:SS`. Minutes are not wrapped at 60.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is read as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<u64>() {
        let seconds = minutes.checked_mul(60)?;
        return (seconds > 0).then(|| Duration::from_secs(seconds));
    }

    let mut total_seconds: u64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if !current_num.is_empty() {
            let num: u64 = current_num.parse().ok()?;
            current_num.clear();

            let unit = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        } else {
            return None;
        }
    }

    if !current_num.is_empty() {
        let num: u64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    (total_seconds > 0).then(|| Duration::from_secs(total_seconds))
}
