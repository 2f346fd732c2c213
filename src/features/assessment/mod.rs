//! Self-assessment tools: manipulation checklist and burnout test.

pub mod burnout;
pub mod manipulation;

pub use burnout::{score_burnout, BurnoutResult, BurnoutRisk};
pub use manipulation::{score_checklist, ManipulationBand, ManipulationResult};
