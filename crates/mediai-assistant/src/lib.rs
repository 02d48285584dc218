//! mediai-assistant
//!
//! Rule-based health assistant. Pure data and string matching — no model,
//! no network.

pub mod chat;
pub mod error;
pub mod responder;
pub mod rules;

pub use responder::{KeywordRule, ResponderConfig, TopicResponder};
