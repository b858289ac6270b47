//! View controllers
//!
//! Each controller owns the state one page renders and exposes the page's
//! actions. Submissions are split in two so a reactive UI can update its
//! signals before and after the request:
//!
//! 1. `begin_submit` validates preconditions, clears the previous message,
//!    raises `loading` and returns what must be sent (or nothing).
//! 2. `finish_submit` lowers `loading` and turns the API result into the
//!    message the page shows.
//!
//! `loading` doubles as the in-flight guard: while it is set,
//! `begin_submit` refuses to start another request.

pub mod admin;
pub mod chat;
pub mod login;
