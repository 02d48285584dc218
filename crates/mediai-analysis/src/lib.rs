//! mediai-analysis
//!
//! Demo document analysis: collects uploaded files and returns a fixed
//! sample report. No file content is ever inspected.

pub mod error;
pub mod report;
pub mod upload;
