//! Reusable UI components

pub mod header;
pub mod loading;
pub mod status;

pub use header::Header;
pub use loading::{LoadingSpinner, SubmitButton};
pub use status::StatusBanner;
