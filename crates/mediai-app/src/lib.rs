//! mediai-app library root.
//!
//! Host wiring for the Medi AI core: configuration, shared state, and the
//! command surface a presentation layer calls. Re-exported so integration
//! tests can drive the commands without the console front-end.

pub mod commands;
pub mod config;
pub mod notify;
pub mod state;
