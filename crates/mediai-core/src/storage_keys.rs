//! Client-local storage key conventions.
//!
//! Pure string constants. These define the canonical names of the records
//! kept in durable client-local storage.

/// The signed-in user record. At most one exists at a time.
pub const SESSION_USER: &str = "mediAiUser";
