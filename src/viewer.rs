//! # Default-Application Viewer
//!
//! Thin wrapper around the platform's "open this file" command, used in
//! compare mode to hand a divergent playlist to whatever the user edits
//! M3U files with. The spawned process is not waited on; only failure to
//! spawn is an error.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::process::Command;

/// Open `path` with the OS-default application.
///
/// # Errors
///
/// Returns an error if the platform opener cannot be spawned (e.g.
/// `xdg-open` is not installed).
pub fn open_in_default_app(path: &Path) -> Result<()> {
    info!("Opening {} in the default application", path.display());
    opener_command(path)
        .spawn()
        .with_context(|| {
            format!(
                "Failed to open {} in the default application",
                path.display()
            )
        })?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    // `start` is a cmd built-in; the empty string is the window title slot.
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
