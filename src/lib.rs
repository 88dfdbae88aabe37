//! Reconcile music directories with an M3U playlist.
//!
//! Core modules:
//! - [`scanner`] - Recursive music-file discovery and relativization
//! - [`ordering`] - Deterministic segment-wise path ordering
//! - [`playlist`] - Artifact serialization, entry filtering, backup/replace
//! - [`reconciler`] - Compare and update mode orchestration
//!
//! ### Supporting Modules
//!
//! - [`config`] - Per-run configuration built once from the CLI values
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`viewer`] - Hand-off to the OS-default application on divergence
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use m3u_sync::{config, reconciler};
//! use std::path::{Path, PathBuf};
//!
//! // Compare two music directories against a playlist
//! let run = config::RunConfig::new(
//!     &[PathBuf::from("/music/Rock"), PathBuf::from("/music/Jazz")],
//!     Path::new("/music/all.m3u"),
//!     false,
//! )?;
//!
//! match reconciler::compare(&run)? {
//!     reconciler::CompareOutcome::Synced => println!("nothing to do"),
//!     outcome => println!("{outcome:?}"),
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Operating Modes
//!
//! **Compare** (default): the directories are scanned into
//! `_fileEntries.txt`, the matching subset of the playlist is extracted
//! into `_playlistEntries.txt`, and the two files are compared
//! byte-for-byte. On divergence the playlist is opened in the OS-default
//! application for manual editing.
//!
//! **Update** (`-u`): the scan result replaces the playlist. Any previous
//! playlist is first copied to `<name>.<epoch millis>` next to the
//! artifacts, and the backup is verified to exist before the original is
//! deleted.
//!
//! ## Error Handling
//!
//! All fallible functions return `anyhow::Result`. Traversal and I/O
//! failures abort the run with a context chain; informational outcomes of
//! a comparison (synced, different, no playlist) are ordinary return
//! values, not errors.

pub mod cli;
pub mod completion;
pub mod config;
pub mod ordering;
pub mod playlist;
pub mod reconciler;
pub mod scanner;
pub mod viewer;
