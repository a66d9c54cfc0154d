use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::job::descriptor::JobDescriptor;
use crate::submit::error::SubmitError;
use crate::submit::scheduler::Scheduler;
use crate::submit::script::write_script;
use crate::template::render::RenderedScript;

/// What a run produced, printed with `--json`
#[derive(Debug, Serialize)]
pub struct SubmitReport {
    pub job_name: String,
    pub script: PathBuf,
    pub queue_name: String,
    pub nodes: u32,
    pub ppn: u32,
    pub submitted: bool,
    /// Trimmed stdout of the submit command (the job id for qsub), absent when nothing was
    /// submitted
    pub scheduler_output: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Write the script for `job` and submit it if a scheduler is given
///
/// Without a scheduler the script is still written and made executable, but no process is
/// started.
pub fn run(script: &RenderedScript,
           job: &JobDescriptor,
           scheduler: Option<&Scheduler>) -> Result<SubmitReport, SubmitError> {
    let path = job.script_path();
    write_script(script, &path)?;
    let generated_at = Utc::now();
    info!("Job script generated");

    let scheduler_output = match scheduler {
        Some(scheduler) => {
            let output = scheduler.submit(&path)?;
            info!("Submitted to queue {}", job.queue_name);
            Some(output)
        }
        None => {
            info!("Submission switched off, not submitting {}", path.display());
            None
        }
    };

    Ok(SubmitReport {
        job_name: job.job_name().to_string(),
        script: path,
        queue_name: job.queue_name.clone(),
        nodes: job.nodes,
        ppn: job.ppn,
        submitted: scheduler_output.is_some(),
        scheduler_output,
        generated_at,
    })
}
