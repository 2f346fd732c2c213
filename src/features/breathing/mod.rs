//! Breathing exercises.
//!
//! - Built-in techniques (square, 4-7-8, belly)
//! - A host-driven timer queue and clocks
//! - The phase sequencer and its presentation seam

pub mod sequencer;
pub mod sink;
pub mod technique;
pub mod timer;

pub use sequencer::{BreathingSequencer, SequencerState, SessionState, DEFAULT_TICK_INTERVAL};
pub use sink::{PresentationSink, RecordingSink, SinkEvent};
pub use technique::{BreathAction, Phase, Technique};
pub use timer::{
    format_elapsed, parse_duration, Clock, ManualClock, SystemClock, TimerId, TimerQueue,
};

/// Instruction shown when no session is running.
pub const IDLE_INSTRUCTION: &str = "Выберите технику для начала";
