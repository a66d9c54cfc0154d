use std::fs;
use std::path::Path;

use log::info;

use crate::submit::error::SubmitError;
use crate::template::render::RenderedScript;

/// rwxr-xr-x
pub static SCRIPT_MODE: u32 = 0o755;

/// Write a rendered script, replacing any file already at `path`, and make it executable
pub fn write_script(script: &RenderedScript, path: &Path) -> Result<(), SubmitError> {
    info!("Writing {} line job script to {}", script.lines().len(), path.display());
    fs::write(path, script.contents())
        .map_err(|source| SubmitError::Write { path: path.to_path_buf(), source })?;
    set_mode(path)
}

#[cfg(unix)]
fn set_mode(path: &Path) -> Result<(), SubmitError> {
    use std::os::unix::fs::PermissionsExt;

    info!("Setting mode {:o} on {}", SCRIPT_MODE, path.display());
    fs::set_permissions(path, fs::Permissions::from_mode(SCRIPT_MODE))
        .map_err(|source| SubmitError::Permissions { path: path.to_path_buf(), source })
}

#[cfg(not(unix))]
fn set_mode(path: &Path) -> Result<(), SubmitError> {
    log::warn!("File modes aren't supported on this platform, leaving {} as is", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::read::Template;

    fn script(text: &str) -> RenderedScript {
        let job = crate::job::descriptor::JobDescriptor::new(
            "a.py", Path::new("/x"), "low", 1, 1, crate::preset::Preset::Standard.naming()).unwrap();
        crate::template::render::render(&Template::from_text(text), &job)
    }

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.pbs");
        fs::write(&path, "old contents that are longer\n").unwrap();

        write_script(&script("#PBS -N &job_name\n"), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#PBS -N a\n");
    }

    #[cfg(unix)]
    #[test]
    fn script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.pbs");
        write_script(&script("echo hi\n"), &path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("a.pbs");
        let result = write_script(&script("echo hi\n"), &path);
        assert!(matches!(result, Err(SubmitError::Write { .. })));
    }
}
