//! Feature implementations for psysafe.
//!
//! - Breathing exercises
//! - Self-assessment (manipulation checklist, burnout test)
//! - Journal records (emotion diary, boundaries, defense plan)
//! - Research figures

pub mod assessment;
pub mod breathing;
pub mod journal;
pub mod research;
