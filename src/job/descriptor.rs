use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::job::placeholder::Placeholder;
use crate::preset::ScriptNaming;

static ERR_SUFFIX: &str = ".err";
static OUT_SUFFIX: &str = ".out";

#[derive(Debug, Error)]
pub enum JobError {
    #[error("executable name {0:?} has no file name")]
    InvalidExecutable(String),
    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),
}

/// Everything needed to render one job script
///
/// Built once from the command line and never changed afterwards. The job name used inside the
/// script (and for the script's own file name) is the executable's file stem.
#[derive(Debug, Clone)]
pub struct JobDescriptor {
    executable: String,
    directory: PathBuf,
    job_name: String,
    pub queue_name: String,
    pub nodes: u32,
    pub ppn: u32,
    naming: ScriptNaming,
}

impl JobDescriptor {
    pub fn new(executable: &str,
               directory: &Path,
               queue_name: &str,
               nodes: u32,
               ppn: u32,
               naming: ScriptNaming) -> Result<JobDescriptor, JobError> {
        if nodes == 0 { return Err(JobError::ZeroCount("node count")); }
        if ppn == 0 { return Err(JobError::ZeroCount("processors per node")); }

        let job_name = Path::new(executable)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| JobError::InvalidExecutable(executable.to_string()))?
            .to_string();

        Ok(JobDescriptor {
            executable: executable.to_string(),
            directory: directory.to_path_buf(),
            job_name,
            queue_name: queue_name.to_string(),
            nodes,
            ppn,
            naming,
        })
    }

    /// Executable name with its extension stripped, e.g. `analyze.py` -> `analyze`
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn executable_path(&self) -> PathBuf {
        self.directory.join(&self.executable)
    }

    /// Where the rendered script is written
    pub fn script_path(&self) -> PathBuf {
        self.directory.join(self.naming.file_name(&self.job_name))
    }

    /// Replacement text for a placeholder
    pub fn value(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::JobName => self.job_name.clone(),
            Placeholder::ErrFileName => format!("{}{ERR_SUFFIX}", self.job_name),
            Placeholder::OutFileName => format!("{}{OUT_SUFFIX}", self.job_name),
            Placeholder::ExecutablePath => self.executable_path().display().to_string(),
            Placeholder::QueueName => self.queue_name.clone(),
            Placeholder::Nodes => self.nodes.to_string(),
            Placeholder::Ppn => self.ppn.to_string(),
        }
    }
}
