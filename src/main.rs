//! # m3u-sync - M3U Playlist Reconciliation
//!
//! Keeps an M3U playlist in step with the music directories it mirrors:
//! either regenerates the playlist from the directories (update mode) or
//! compares the directories against it and opens the playlist for editing
//! when they diverge (compare mode, the default).
//!
//! ## Usage
//!
//! ```bash
//! # Compare (default): scan, extract, byte-compare, report
//! m3u-sync --dirs ~/Music/Rock ~/Music/Jazz --playlist ~/Music/all.m3u
//!
//! # Update: back up the playlist, then regenerate it from the scan
//! m3u-sync -d ~/Music/Rock -p ~/Music/rock.m3u --update
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;
use m3u_sync::{cli, completion, config, reconciler};

/// Main entry point.
///
/// Initializes logging, parses command-line arguments, builds the per-run
/// configuration and hands it to the reconciler. All failures propagate
/// as `anyhow::Result` and are reported with their context chain.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug m3u-sync ...` - Enable debug logging
/// - `RUST_LOG=m3u_sync::scanner=trace m3u-sync ...` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = cli::Args::command();
        completion::generate_completions(shell, &mut cmd);
        return Ok(());
    }

    // Clap enforces --playlist unless --completions was given, which
    // returned above.
    let Some(playlist) = args.playlist.as_deref() else {
        anyhow::bail!("--playlist is required");
    };

    let run = config::RunConfig::new(&args.dirs, playlist, args.update)?;
    info!(
        "Reconciling {} directories against {} ({} mode)",
        run.root_dirs.len(),
        run.playlist.display(),
        if run.update { "update" } else { "compare" }
    );

    reconciler::run(&run)
}
