//! Load job script templates and render them

/// Read template documents from disk and decide which template to use
pub mod read;

/// Substitute placeholders with job values
pub mod render;
