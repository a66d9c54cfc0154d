use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use crate::job::descriptor::JobDescriptor;
use crate::preset::Preset;
use crate::submit::run::{run, SubmitReport};
use crate::submit::scheduler::{Scheduler, DEFAULT_SUBMIT_COMMAND};
use crate::template::read::{resolve_template_path, Template};
use crate::template::render::render;

mod job;
mod preset;
mod submit;
mod template;

/// Create a PBS batch script for an executable from a template, and qsub the job.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Name of the file you want to submit as a PBS job
    #[arg(value_name = "NAME.py")]
    filename: String,
    /// Directory containing the file, defaults to the current directory
    path: Option<PathBuf>,
    /// Queue to run the job in [default: from --preset]
    #[arg(short, long = "queue-name", alias = "queue_name")]
    queue_name: Option<String>,
    /// Number of nodes
    #[arg(short, long = "n-nodes", alias = "n_nodes", default_value_t = 1)]
    n_nodes: u32,
    /// Number of processors per node [default: from --preset]
    #[arg(long)]
    ppn: Option<u32>,
    /// Template file to use instead of the default, relative to the current directory
    #[arg(short, long, value_name = "TEMPLATE_FILE_NAME")]
    template: Option<PathBuf>,
    /// Template used when --template isn't given
    #[arg(long, env = "PBSGEN_TEMPLATE")]
    default_template: Option<PathBuf>,
    /// Only create the job script, don't submit it
    #[arg(long = "no-sub", visible_alias = "no-submit", alias = "no_sub")]
    no_sub: bool,
    /// Default queue, processors per node and script naming
    #[arg(long, value_enum, env = "PBSGEN_PRESET", default_value_t = Preset::Standard)]
    preset: Preset,
    /// Command used to submit the job script
    #[arg(long, env = "PBSGEN_SUBMIT_COMMAND", default_value = DEFAULT_SUBMIT_COMMAND)]
    submit_command: String,
    /// Kill the submit command if it hasn't finished after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
    /// Print a JSON summary of the job on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run_job(&args) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        error!("Can't serialise report: {err}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("job {} failed: {:#}", args.filename, err);
            ExitCode::FAILURE
        }
    }
}

fn run_job(args: &Args) -> Result<SubmitReport> {
    let cwd = env::current_dir().context("Can't read current directory")?;
    let directory = args.path.clone().unwrap_or_else(|| cwd.clone());
    let queue_name = args.queue_name.as_deref().unwrap_or(args.preset.queue_name());
    let ppn = args.ppn.unwrap_or(args.preset.ppn());

    let job = JobDescriptor::new(&args.filename, &directory, queue_name, args.n_nodes, ppn,
                                 args.preset.naming())?;
    info!("Generating PBS script for {}", job.executable_path().display());
    info!("User requests queue \"{}\", {} node(s), ppn = {} ({} preset)",
          job.queue_name, job.nodes, job.ppn, args.preset);

    let template_path = resolve_template_path(args.template.as_deref(),
                                              args.default_template.as_deref(), &cwd)?;
    let template = Template::read(&template_path)?;
    let script = render(&template, &job);

    let scheduler = Scheduler {
        command: args.submit_command.clone(),
        timeout: args.timeout.map(Duration::from_secs),
    };
    let scheduler = if args.no_sub { None } else { Some(&scheduler) };

    let report = run(&script, &job, scheduler)
        .with_context(|| format!("Submitting {}", job.script_path().display()))?;
    Ok(report)
}
