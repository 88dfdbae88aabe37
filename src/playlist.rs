//! # Playlist Writer
//!
//! Serialization of an ordered entry set into the on-disk playlist format,
//! extraction of matching entry lines from an existing playlist, and the
//! backup-then-replace sequence used when a playlist is updated in place.
//!
//! ## On-disk format
//!
//! ```text
//! <UTF-8 BOM>#EXTM3U\r\n
//! <relative-path-1>\r\n
//! <relative-path-2>\r\n
//! ```
//!
//! Two playlists are considered identical only when byte-for-byte equal,
//! BOM, header and line terminators included.

use anyhow::{ensure, Context, Result};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Byte-order mark every generated playlist starts with.
const BOM: &str = "\u{feff}";
/// Fixed header line following the BOM.
const HEADER: &str = "#EXTM3U";

/// Write `entries` to `path` in playlist format, replacing any existing
/// file.
///
/// The header stage and the entry block go through one buffered writer,
/// so under this tool's single-process access pattern no reader can
/// observe the header without the entries.
///
/// # Errors
///
/// Any I/O error (permission denied, disk full, invalid path) is fatal to
/// the run; no partial-file cleanup is attempted.
pub fn write_playlist(path: &Path, entries: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create playlist file at {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write!(out, "{BOM}{HEADER}\r\n")
        .with_context(|| format!("Failed to write playlist header to {}", path.display()))?;
    for entry in entries {
        write!(out, "{entry}\r\n")
            .with_context(|| format!("Failed to write playlist entry to {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("Failed to flush playlist file {}", path.display()))?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Read `path` line-by-line and keep every line that starts with one of
/// `prefixes`, literally and case-sensitively. First match wins; a line
/// only needs to match one prefix to be retained.
///
/// The BOM is stripped before matching, so the `#EXTM3U` header line is
/// dropped like any other non-matching line. Note that the match is a
/// plain string prefix, not path-segment aware: a prefix `MusicA` also
/// retains lines under `MusicA2`.
pub fn read_matching_entries(path: &Path, prefixes: &[String]) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist {}", path.display()))?;
    let content = raw.strip_prefix(BOM).unwrap_or(&raw);

    let entries: Vec<String> = content
        .lines()
        .filter(|line| prefixes.iter().any(|prefix| line.starts_with(prefix.as_str())))
        .map(str::to_string)
        .collect();

    debug!(
        "{} playlist lines matched a directory prefix in {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}

/// Install `generated` at `playlist`, backing up any existing playlist
/// into `backup_dir` first.
///
/// The backup is the previous playlist's file name suffixed with the
/// current epoch-millisecond timestamp. Its presence is verified before
/// the original is deleted; a crash between those steps leaves the backup
/// behind, never a lost playlist.
pub fn replace_playlist(playlist: &Path, generated: &Path, backup_dir: &Path) -> Result<()> {
    if playlist.is_file() {
        let backup = backup_path(playlist, backup_dir)?;
        info!(
            "Backing up {} to {}",
            playlist.display(),
            backup.display()
        );
        fs::copy(playlist, &backup).with_context(|| {
            format!(
                "Failed to back up {} to {}",
                playlist.display(),
                backup.display()
            )
        })?;
        ensure!(
            backup.is_file(),
            "Backup {} not present after copy; refusing to delete {}",
            backup.display(),
            playlist.display()
        );
        fs::remove_file(playlist)
            .with_context(|| format!("Failed to delete old playlist {}", playlist.display()))?;
    }

    fs::copy(generated, playlist).with_context(|| {
        format!(
            "Failed to copy {} over {}",
            generated.display(),
            playlist.display()
        )
    })?;
    Ok(())
}

/// Backup file path: `<backup_dir>/<playlist file name>.<epoch millis>`.
fn backup_path(playlist: &Path, backup_dir: &Path) -> Result<PathBuf> {
    let name = playlist
        .file_name()
        .with_context(|| format!("Playlist path {} has no file name", playlist.display()))?
        .to_string_lossy();
    Ok(backup_dir.join(format!("{}.{}", name, epoch_millis()?)))
}

fn epoch_millis() -> Result<u128> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is set before the Unix epoch")?;
    Ok(elapsed.as_millis())
}
