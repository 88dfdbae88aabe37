//! # Reconciler
//!
//! Orchestrates the two operating modes against a [`RunConfig`]:
//!
//! - **Update**: scan the music directories, write the files artifact,
//!   back up any existing playlist, and install the fresh artifact at the
//!   playlist path.
//! - **Compare** (default): scan the music directories, extract the
//!   matching subset of the existing playlist into a second artifact, and
//!   compare the two byte-for-byte.
//!
//! Informational outcomes (synced, different, playlist missing) are not
//! errors; they are returned as a [`CompareOutcome`] so the caller decides
//! how to report them. Only real I/O failures travel through `Err`.

use crate::config::RunConfig;
use crate::ordering;
use crate::playlist;
use crate::scanner;
use crate::viewer;
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Terminal outcome of a compare run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    /// The playlist does not exist; nothing to compare against.
    NoPlaylist(PathBuf),
    /// Generated and extracted artifacts are byte-identical.
    Synced,
    /// The artifacts diverge; carries the playlist to open for inspection.
    Different(PathBuf),
}

/// Execute the mode selected in `config` and report to the console.
///
/// In compare mode a divergent playlist is additionally handed to the
/// OS-default application so the user can inspect and edit it.
pub fn run(config: &RunConfig) -> Result<()> {
    if config.update {
        return update(config);
    }

    match compare(config)? {
        CompareOutcome::NoPlaylist(path) => {
            println!("No such playlist: {}", path.display());
            Ok(())
        }
        CompareOutcome::Synced => {
            println!("You are SYNCED!");
            Ok(())
        }
        CompareOutcome::Different(path) => {
            println!("The content is DIFFERENT!");
            println!("{}", path.display());
            viewer::open_in_default_app(&path)
        }
    }
}

/// Generate a fresh playlist from the music directories and install it at
/// the playlist path, backing up any previous playlist first.
pub fn update(config: &RunConfig) -> Result<()> {
    let generated = generate_files_artifact(config)?;
    playlist::replace_playlist(&config.playlist, &generated, &config.output_dir)?;
    println!("New playlist at: {}", config.playlist.display());
    Ok(())
}

/// Compare the directory scan against the existing playlist.
///
/// Playlist lines are filtered by the root directories' short names
/// before comparison, so entries belonging to directories outside this
/// run are ignored rather than reported as divergence.
pub fn compare(config: &RunConfig) -> Result<CompareOutcome> {
    let generated = generate_files_artifact(config)?;

    if !config.playlist.is_file() {
        return Ok(CompareOutcome::NoPlaylist(config.playlist.clone()));
    }

    let prefixes = config.short_dir_names()?;
    debug!("Filtering playlist lines by prefixes {prefixes:?}");
    let retained = playlist::read_matching_entries(&config.playlist, &prefixes)?;

    let entries: HashSet<String> = retained.into_iter().collect();
    let extracted = config.playlist_artifact();
    playlist::write_playlist(&extracted, &ordering::into_ordered(entries))?;

    let generated_bytes = fs::read(&generated)
        .with_context(|| format!("Failed to read artifact {}", generated.display()))?;
    let extracted_bytes = fs::read(&extracted)
        .with_context(|| format!("Failed to read artifact {}", extracted.display()))?;

    if generated_bytes == extracted_bytes {
        info!("Artifacts are byte-identical");
        Ok(CompareOutcome::Synced)
    } else {
        info!(
            "Artifacts differ: {} vs {} bytes",
            generated_bytes.len(),
            extracted_bytes.len()
        );
        Ok(CompareOutcome::Different(config.playlist.clone()))
    }
}

/// Scan every root directory anchored at the playlist's parent, union the
/// results, and write them as the files artifact. Returns the artifact
/// path.
fn generate_files_artifact(config: &RunConfig) -> Result<PathBuf> {
    let anchor = config.playlist_parent()?;

    let mut entries: HashSet<String> = HashSet::new();
    for dir in &config.root_dirs {
        info!("Scanning {}", dir.display());
        entries.extend(scanner::scan_music_files(dir, anchor)?);
    }

    let ordered = ordering::into_ordered(entries);
    let artifact = config.files_artifact();
    playlist::write_playlist(&artifact, &ordered)?;
    info!("Wrote {} entries to {}", ordered.len(), artifact.display());
    Ok(artifact)
}
