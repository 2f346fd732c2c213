//! Command implementations for psysafe.
//!
//! Every command returns the text to print; the caller decides where it goes.

mod assessment;
mod breathe;
mod completions;
mod journal;
mod research;

pub use assessment::{burnout, checklist};
pub use breathe::{breathe, run_plain, techniques, ConsoleSink};
pub use completions::completions;
pub use journal::{boundaries, diary, plan};
pub use research::research;
