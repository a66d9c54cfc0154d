//! Write rendered scripts to disk and hand them to the batch scheduler
//!
//! A run is linear: write the script, make it executable, then (unless submission is switched
//! off) run the scheduler's submit command on it and wait for that command to exit.

pub mod error;
/// Persist a rendered script and set its permissions
pub mod script;
/// Run the scheduler's submit command (`qsub`)
pub mod scheduler;
/// Tie the steps together and summarise what happened
pub mod run;
