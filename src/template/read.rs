use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("can't read template at {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no template given and no default template configured (set PBSGEN_TEMPLATE)")]
    NoTemplate,
}

/// A template document: ordered lines, each keeping its own line terminator
///
/// Keeping terminators means joining the lines back together gives the original bytes, so a
/// template without placeholders renders to exactly itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    lines: Vec<String>,
}

impl Template {
    pub fn read(path: &Path) -> Result<Template, TemplateError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                info!("Reading template: {}", path.display());
                Ok(Template::from_text(&text))
            }
            Err(source) => {
                warn!("Can't read template at path: {}", path.display());
                Err(TemplateError::Unavailable { path: path.to_path_buf(), source })
            }
        }
    }

    pub fn from_text(text: &str) -> Template {
        Template { lines: text.split_inclusive('\n').map(String::from).collect() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Pick the template path for this run
///
/// An explicit template is resolved against the working directory (absolute paths are kept as
/// they are). Without one, fall back to the configured default.
pub fn resolve_template_path(explicit: Option<&Path>,
                             default: Option<&Path>,
                             cwd: &Path) -> Result<PathBuf, TemplateError> {
    match (explicit, default) {
        (Some(path), _) => Ok(cwd.join(path)),
        (None, Some(path)) => Ok(path.to_path_buf()),
        (None, None) => Err(TemplateError::NoTemplate),
    }
}
