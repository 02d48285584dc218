//! mediai-auth
//!
//! The single-user session: sign-in, sign-out, and restore from durable
//! client-local storage.

pub mod error;
pub mod observer;
pub mod provider;
pub mod session;
