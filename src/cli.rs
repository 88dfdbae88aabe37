//! # Command-Line Interface Module
//!
//! This module defines the command-line interface using Clap derive
//! macros. The tool is a single command with options rather than
//! subcommands: the directories and the playlist are always required,
//! and a flag switches between compare and update mode.
//!
//! ## Examples
//!
//! ```bash
//! # Compare directories against the playlist (default mode)
//! m3u-sync -d ~/Music/Rock ~/Music/Jazz -p ~/Music/all.m3u
//!
//! # Regenerate the playlist from the directories
//! m3u-sync -d ~/Music/Rock -p ~/Music/rock.m3u --update
//! ```

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main application arguments structure.
///
/// Uses Clap derive macros to automatically generate argument parsing,
/// help text, and validation. Malformed arguments are reported with the
/// usage text before any file operation takes place.
#[derive(Parser)]
#[command(name = "m3u-sync")]
#[command(about = "Reconcile music directories with an M3U playlist")]
#[command(version)]
pub struct Args {
    /// One or more directories to read the music files from
    ///
    /// Each directory is scanned recursively for mp3 and flac files.
    /// Duplicate directories are collapsed before scanning.
    #[arg(
        short,
        long,
        value_name = "DIR",
        num_args = 1..,
        required_unless_present = "completions"
    )]
    pub dirs: Vec<PathBuf>,

    /// M3U playlist file to check
    ///
    /// In compare mode the playlist is only read; in update mode it is
    /// replaced after a timestamped backup has been written.
    #[arg(
        short,
        long,
        value_name = "FILE",
        required_unless_present = "completions"
    )]
    pub playlist: Option<PathBuf>,

    /// Regenerate the playlist from the directories instead of comparing
    #[arg(short, long)]
    pub update: bool,

    /// Generate shell completions and exit
    ///
    /// Usage: m3u-sync --completions bash > ~/.local/share/bash-completion/completions/m3u-sync
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_compare_invocation() {
        let args = Args::try_parse_from(["m3u-sync", "-d", "/m/A", "/m/B", "-p", "/m/out.m3u"])
            .unwrap();

        assert_eq!(args.dirs.len(), 2);
        assert_eq!(args.playlist, Some(PathBuf::from("/m/out.m3u")));
        assert!(!args.update);
    }

    #[test]
    fn test_parses_update_flag() {
        let args =
            Args::try_parse_from(["m3u-sync", "-d", "/m/A", "-p", "/m/out.m3u", "-u"]).unwrap();
        assert!(args.update);
    }

    #[test]
    fn test_missing_required_options_fail_to_parse() {
        assert!(Args::try_parse_from(["m3u-sync"]).is_err());
        assert!(Args::try_parse_from(["m3u-sync", "-d", "/m/A"]).is_err());
        assert!(Args::try_parse_from(["m3u-sync", "-p", "/m/out.m3u"]).is_err());
    }

    #[test]
    fn test_completions_suspends_required_options() {
        let args = Args::try_parse_from(["m3u-sync", "--completions", "bash"]).unwrap();
        assert!(args.completions.is_some());
        assert!(args.dirs.is_empty());
        assert!(args.playlist.is_none());
    }
}
