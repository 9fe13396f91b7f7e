//! Precondition checks and symlink creation for the hook slot

use std::fs;
use std::path::Path;

use crate::{InstallError, InstallReport, InstallResult, GIT_DIR, HOOK_SCRIPT, HOOK_SLOT, LINK_TARGET};

/// Install the pre-commit hook link into the repository at `root`.
///
/// Checks the three preconditions in order and creates the symlink at
/// `.git/hooks/pre-commit` only once all of them pass. Failure paths
/// perform zero filesystem mutations; the link creation is the single
/// mutating step and the last action taken.
///
/// Re-running after a successful install fails with
/// [`InstallError::HookAlreadyInstalled`] and leaves the existing link
/// untouched.
pub fn install(root: impl AsRef<Path>) -> InstallResult<InstallReport> {
    let root = root.as_ref();

    let git_dir = root.join(GIT_DIR);
    let script_path = root.join(HOOK_SCRIPT);
    let hook_path = root.join(HOOK_SLOT);

    // 1. Must be run from the repository root
    if !git_dir.is_dir() {
        return Err(InstallError::NotRepositoryRoot);
    }

    // 2. The tracked hook script must exist and be executable
    if !is_executable_file(&script_path) {
        return Err(InstallError::HookScriptMissing { path: script_path });
    }

    // 3. Never overwrite an existing hook. symlink_metadata doesn't follow
    //    links, so a dangling link still counts as occupied.
    if fs::symlink_metadata(&hook_path).is_ok() {
        return Err(InstallError::HookAlreadyInstalled { path: hook_path });
    }

    // Link, don't copy: edits to the tracked script take effect without
    // re-installation. Symlink creation is create-exclusive, so a lost
    // race against a concurrent install surfaces as AlreadyExists.
    match symlink(LINK_TARGET, &hook_path) {
        Ok(()) => Ok(InstallReport {
            hook_path,
            script_path,
            link_target: LINK_TARGET.to_string(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(InstallError::HookAlreadyInstalled { path: hook_path })
        }
        Err(e) => Err(e.into()),
    }
}

/// True if `path` is a regular file the owner can execute.
///
/// The executable bit only exists on Unix; elsewhere git falls back to
/// the hooks' shebang lines, so existence is the whole check.
fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o100 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(unix)]
fn symlink(target: &str, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &str, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
