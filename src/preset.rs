use std::fmt;
use clap::ValueEnum;

/// Two flavours of the batch utility have been in use, and they disagree on defaults. Rather than
/// guess which one is right, both are selectable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Preset {
    /// queue `low`, 1 processor per node, script written to `<job>.pbs`
    #[default]
    Standard,
    /// queue `high`, 2 processors per node, script written to `pbs_<job>.sh`
    Extended,
}

impl Preset {
    pub fn queue_name(&self) -> &'static str {
        match self {
            Preset::Standard => "low",
            Preset::Extended => "high",
        }
    }

    pub fn ppn(&self) -> u32 {
        match self {
            Preset::Standard => 1,
            Preset::Extended => 2,
        }
    }

    pub fn naming(&self) -> ScriptNaming {
        match self {
            Preset::Standard => ScriptNaming::Suffix(".pbs"),
            Preset::Extended => ScriptNaming::Affix { prefix: "pbs_", suffix: ".sh" },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Preset::Standard => write!(f, "standard"),
            Preset::Extended => write!(f, "extended"),
        }
    }
}

/// How the generated script file is named from the job name
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScriptNaming {
    Suffix(&'static str),
    Affix { prefix: &'static str, suffix: &'static str },
}

impl ScriptNaming {
    pub fn file_name(&self, job_name: &str) -> String {
        match self {
            ScriptNaming::Suffix(suffix) => format!("{job_name}{suffix}"),
            ScriptNaming::Affix { prefix, suffix } => format!("{prefix}{job_name}{suffix}"),
        }
    }
}
