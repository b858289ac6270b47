//! Routed pages

pub mod admin;
pub mod chat;
pub mod login;
