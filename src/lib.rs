//! psysafe - psychological safety toolkit for the terminal
//!
//! Guided breathing driven by a host-polled phase sequencer, a manipulation
//! checklist, a burnout self-test and personal records (emotion diary,
//! boundaries, defense plan) kept in a local `SQLite` key-value store.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PsySafeError;
pub use features::breathing::{BreathingSequencer, PresentationSink, Technique};
