use std::io::Read;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{info, warn};
use wait_timeout::ChildExt;

use crate::submit::error::SubmitError;

pub static DEFAULT_SUBMIT_COMMAND: &str = "qsub";

/// The external scheduler, reached through a single command that takes the script path as its
/// only argument. Its stdout (normally the job id) is captured but not parsed, only the exit
/// status decides success.
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub command: String,
    /// Give up (and kill the command) after this long. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Scheduler {
    /// Submit a script and block until the submit command exits, returning its trimmed stdout
    pub fn submit(&self, script_path: &Path) -> Result<String, SubmitError> {
        let mut cmd = Command::new(&self.command);
        cmd.arg(script_path).stdout(Stdio::piped());
        info!("Running submit process");
        info!("{:?}", &cmd);

        let mut child = cmd.spawn().map_err(|source| SubmitError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        // read on a separate thread, a full pipe would block the child
        let reader = child.stdout.take().map(read_output);
        let status = self.wait(&mut child)?;
        info!("Submit command exited with {status}");

        let output = match reader.map(|handle| handle.join()) {
            Some(Ok(output)) => output,
            Some(Err(_)) => {
                warn!("Can't read output of submit command");
                String::new()
            }
            None => String::new(),
        };
        let output = output.trim().to_string();
        if !output.is_empty() {
            info!("Submit command output: {output}");
        }

        if status.success() {
            Ok(output)
        } else {
            Err(SubmitError::Rejected { command: self.command.clone(), status })
        }
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, SubmitError> {
        let wait_error = |source| SubmitError::Wait { command: self.command.clone(), source };

        let Some(timeout) = self.timeout else {
            return child.wait().map_err(wait_error);
        };

        match child.wait_timeout(timeout).map_err(wait_error)? {
            Some(status) => Ok(status),
            None => {
                warn!("Submit command still running after {}s, killing it", timeout.as_secs());
                if let Err(err) = child.kill() {
                    warn!("Can't kill submit command: {err}");
                }
                // reap so no zombie is left behind
                if let Err(err) = child.wait() {
                    warn!("Can't reap submit command: {err}");
                }
                Err(SubmitError::TimedOut { command: self.command.clone(), after: timeout })
            }
        }
    }
}

fn read_output(mut stdout: ChildStdout) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = String::new();
        if let Err(err) = stdout.read_to_string(&mut buffer) {
            warn!("Can't read output of submit command: {err}");
        }
        buffer
    })
}
