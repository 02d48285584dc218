pub mod chat;
pub mod notice;
pub mod user;
