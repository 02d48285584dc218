//! mediai-core
//!
//! Pure domain types and storage key conventions.
//! No I/O — this is the shared vocabulary of the Medi AI system.

pub mod error;
pub mod models;
pub mod storage_keys;
