//! # Directory Scanner
//!
//! Recursively walks a music directory and emits every recognized audio
//! file as a path relative to an anchor directory (the playlist's parent).
//! Traversal is unordered and unbounded in depth; any filesystem error
//! during the walk aborts the run. Symlink cycles are not defended
//! against.

use anyhow::{ensure, Context, Result};
use log::{debug, trace};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as music, matched case-insensitively.
const MUSIC_EXTENSIONS: [&str; 2] = ["mp3", "flac"];

/// Recursively collect every music file under `dir`, each expressed
/// relative to `anchor`.
///
/// Validates the root before walking: a missing path or a non-directory
/// is a traversal error surfaced to the caller, not an empty result.
/// Duplicate entries across overlapping roots collapse through the
/// returned set.
///
/// # Errors
///
/// Returns an error if `dir` does not exist, is not a directory, or any
/// entry within it cannot be read during the walk.
pub fn scan_music_files(dir: &Path, anchor: &Path) -> Result<HashSet<String>> {
    ensure!(
        dir.exists(),
        "Music directory `{}` does not exist!",
        dir.display()
    );
    ensure!(
        dir.is_dir(),
        "Argument `{}` is not a directory!",
        dir.display()
    );

    debug!(
        "Scanning {} relative to {}",
        dir.display(),
        anchor.display()
    );

    let mut entries = HashSet::new();
    for entry in WalkDir::new(dir) {
        let entry = entry
            .with_context(|| format!("Failed to walk music directory {}", dir.display()))?;

        if !entry.file_type().is_file() || !is_music_file(entry.path()) {
            continue;
        }

        let relative = relativize(anchor, entry.path());
        trace!("Found music file {}", relative.display());
        entries.insert(relative.to_string_lossy().into_owned());
    }

    debug!("{} music files under {}", entries.len(), dir.display());
    Ok(entries)
}

/// A file counts as music when its lower-cased extension is in
/// [`MUSIC_EXTENSIONS`].
fn is_music_file(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => MUSIC_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Express `path` relative to `anchor`.
///
/// Walks off the shared component prefix, then climbs out of the
/// remaining anchor components with `..` before descending into the
/// remaining path components. Roots that are not below the anchor thus
/// still produce a usable relative path. Both inputs are expected to be
/// absolute and normalized; identical inputs produce an empty path.
pub fn relativize(anchor: &Path, path: &Path) -> PathBuf {
    let anchor_parts: Vec<Component> = anchor.components().collect();
    let path_parts: Vec<Component> = path.components().collect();

    let shared = anchor_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..anchor_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[shared..] {
        relative.push(part);
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_scan_filters_to_recognized_extensions() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Music");
        touch(&root.join("one.mp3"));
        touch(&root.join("two.flac"));
        touch(&root.join("cover.jpg"));
        touch(&root.join("notes.txt"));
        touch(&root.join("Album/three.mp3"));

        let entries = scan_music_files(&root, temp.path()).unwrap();

        assert_eq!(entries.len(), 3);
        assert!(entries.contains(&relativize(temp.path(), &root.join("one.mp3")).to_string_lossy().into_owned()));
        assert!(entries.contains(&relativize(temp.path(), &root.join("Album/three.mp3")).to_string_lossy().into_owned()));
    }

    #[test]
    fn test_scan_matches_extensions_case_insensitively() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Music");
        touch(&root.join("loud.MP3"));
        touch(&root.join("quiet.Flac"));

        let entries = scan_music_files(&root, temp.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_scan_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let result = scan_music_files(&missing, temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_rejects_regular_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("song.mp3");
        touch(&file);

        let result = scan_music_files(&file, temp.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_of_empty_directory_is_empty_not_an_error() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Empty");
        fs::create_dir_all(&root).unwrap();

        let entries = scan_music_files(&root, temp.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_relativize_below_anchor() {
        let anchor = Path::new("/music/playlists");
        let path = Path::new("/music/playlists/Rock/song.mp3");
        assert_eq!(relativize(anchor, path), PathBuf::from("Rock/song.mp3"));
    }

    #[test]
    fn test_relativize_sibling_of_anchor() {
        let anchor = Path::new("/music/playlists");
        let path = Path::new("/music/library/Jazz/track.flac");
        assert_eq!(
            relativize(anchor, path),
            PathBuf::from("../library/Jazz/track.flac")
        );
    }

    #[test]
    fn test_relativize_identical_paths_is_empty() {
        let anchor = Path::new("/music");
        assert_eq!(relativize(anchor, anchor), PathBuf::new());
    }
}
