//! Storage layer for psysafe.
//!
//! `SQLite` persistence for the local key-value records (emotion diary,
//! personal boundaries, defense plan).

mod database;
mod kv;
mod migrations;

pub use database::Database;
pub use kv::KeyValueStore;
