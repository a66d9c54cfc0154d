//! What a single batch job looks like before it is rendered into a script

/// The per-invocation job record and the values derived from it
pub mod descriptor;

/// The fixed set of `&name` markers a template may contain
pub mod placeholder;
