/// A recognised template marker
///
/// Markers are plain text, there is no escaping. Anything that starts with `&` but isn't one of
/// these is left alone by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    JobName,
    ErrFileName,
    OutFileName,
    ExecutablePath,
    QueueName,
    Nodes,
    Ppn,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::JobName,
        Placeholder::ErrFileName,
        Placeholder::OutFileName,
        Placeholder::ExecutablePath,
        Placeholder::QueueName,
        Placeholder::Nodes,
        Placeholder::Ppn,
    ];

    /// Every token starts with this character
    pub const SIGIL: char = '&';

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::JobName => "&job_name",
            Placeholder::ErrFileName => "&job_errfile_name",
            Placeholder::OutFileName => "&job_outfile_name",
            Placeholder::ExecutablePath => "&path_to_executable_program_name",
            Placeholder::QueueName => "&queue_name",
            Placeholder::Nodes => "&n_nodes",
            Placeholder::Ppn => "&ppn",
        }
    }

    /// Longest token that `text` starts with, if any
    pub fn match_prefix(text: &str) -> Option<Placeholder> {
        Placeholder::ALL
            .iter()
            .filter(|p| text.starts_with(p.token()))
            .max_by_key(|p| p.token().len())
            .copied()
    }
}
