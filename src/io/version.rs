//! Version string from git

use std::path::Path;
use std::process::{Command, Stdio};

/// Describe the git checkout containing `dir` as `-git-<description>`.
///
/// Runs `git describe --abbrev=8 --dirty --always --tags` with `dir` as
/// the working directory of the child process. Returns an empty string
/// when git is missing, `dir` is not inside a repository, or the command
/// fails in any other way.
pub fn git_version(dir: impl AsRef<Path>) -> String {
    let dir = dir.as_ref();
    let output = Command::new("git")
        .args(["describe", "--abbrev=8", "--dirty", "--always", "--tags"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let description = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if description.is_empty() {
                return String::new();
            }
            format!("-git-{}", description)
        }
        Ok(out) => {
            log::debug!("git describe in {} exited with {}", dir.display(), out.status);
            String::new()
        }
        Err(err) => {
            log::debug!("git describe in {} failed: {}", dir.display(), err);
            String::new()
        }
    }
}

/// [`git_version`] of the checkout this crate was built from
pub fn crate_git_version() -> String {
    git_version(env!("CARGO_MANIFEST_DIR"))
}
