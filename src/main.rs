//! Hook Link CLI - Wire the tracked pre-commit hook into .git/hooks
//!
//! Usage:
//!   hook-link            # Install into the repository at cwd
//!   hook-link <path>     # Install into a specific repository root
//!   hook-link --json     # Machine-readable result for provisioning scripts

use std::env;
use std::path::PathBuf;

use clap::Parser;
use console::style;
use serde_json::json;

use hook_link::{install, InstallError};

#[derive(Parser)]
#[command(name = "hook-link")]
#[command(about = "Install the tracked pre-commit hook as a symlink in .git/hooks")]
#[command(version)]
struct Cli {
    /// Output the result as JSON instead of styled text
    #[arg(long)]
    json: bool,

    /// Repository root to install into (defaults to current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let root = cli
        .path
        .unwrap_or_else(|| env::current_dir().expect("Failed to get current directory"));

    match install(&root) {
        Ok(report) => {
            if cli.json {
                let out = json!({
                    "installed": true,
                    "hook_path": report.hook_path,
                    "script_path": report.script_path,
                    "link_target": report.link_target,
                });
                println!("{}", serde_json::to_string_pretty(&out).expect("Failed to serialize to JSON"));
            } else {
                println!(
                    "{} Installed {} -> {}",
                    style("✓").green(),
                    report.hook_path.display(),
                    report.link_target
                );
            }
        }
        Err(e) => {
            if cli.json {
                let out = json!({
                    "installed": false,
                    "kind": error_kind(&e),
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out).expect("Failed to serialize to JSON"));
            } else {
                eprintln!("{} {}", style("✗").red(), e);
            }
            std::process::exit(1);
        }
    }
}

/// Stable machine-readable name for each failure
fn error_kind(e: &InstallError) -> &'static str {
    match e {
        InstallError::NotRepositoryRoot => "not_repository_root",
        InstallError::HookScriptMissing { .. } => "hook_script_missing",
        InstallError::HookAlreadyInstalled { .. } => "hook_already_installed",
        InstallError::Io(_) => "io",
    }
}
