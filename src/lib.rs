//! Hook Link - Install a repository-tracked git pre-commit hook as a symlink
//!
//! This crate wires the hook script tracked at `scripts/git-pre-commit-hook`
//! into git's pre-commit hook slot (`.git/hooks/pre-commit`) by creating a
//! symbolic link. Because the slot is a link rather than a copy, later edits
//! to the tracked script take effect without re-installation.
//!
//! Three preconditions gate the install, checked in order; the first failure
//! aborts before anything on disk is touched:
//!
//! 1. `.git` exists as a directory under the target root
//! 2. the tracked hook script exists and is executable
//! 3. the hook slot is empty (an existing hook is never overwritten)
//!
//! # Example
//!
//! ```no_run
//! use hook_link::install;
//!
//! let report = install(".").unwrap();
//! println!("{} -> {}", report.hook_path.display(), report.link_target);
//! ```

mod installer;

use std::path::PathBuf;
use thiserror::Error;

pub use installer::install;

/// Version-control metadata directory expected at the repository root
pub const GIT_DIR: &str = ".git";

/// Repository-relative path of the tracked hook script
pub const HOOK_SCRIPT: &str = "scripts/git-pre-commit-hook";

/// Repository-relative path of git's pre-commit hook slot
pub const HOOK_SLOT: &str = ".git/hooks/pre-commit";

/// Link target written into the hook slot: the script path expressed
/// relative to the slot's containing directory (`.git/hooks/`)
pub const LINK_TARGET: &str = "../../scripts/git-pre-commit-hook";

/// What a successful install did
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InstallReport {
    /// Path of the created hook slot link
    pub hook_path: PathBuf,
    /// Path of the tracked script the link resolves to
    pub script_path: PathBuf,
    /// The literal (relative) target written into the link
    pub link_target: String,
}

/// Errors that can occur during installation
///
/// Every variant is terminal: there is no transient failure class here,
/// each one requires operator intervention (wrong directory, missing
/// script, or a hook that is already in place).
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("no .git directory here; re-run from the repository root (the directory containing .git)")]
    NotRepositoryRoot,

    #[error("hook script {} is missing or not executable", .path.display())]
    HookScriptMissing { path: PathBuf },

    #[error("{} already exists; refusing to overwrite it", .path.display())]
    HookAlreadyInstalled { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for install operations
pub type InstallResult<T> = Result<T, InstallError>;
