//! # Run Configuration
//!
//! Everything a reconciliation run needs is resolved once, up front, into
//! a [`RunConfig`] that is passed into each component. The original
//! playlist tooling this replaces kept the output directory and the path
//! comparator as process-wide constants; here they are plain values with
//! no global state.
//!
//! All paths are absolutized at construction time, so the scanner, writer
//! and reconciler never have to care about the working directory again.

use anyhow::{Context, Result};
use path_absolutize::Absolutize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File name of the artifact generated from the directory scan.
pub const FILES_ARTIFACT: &str = "_fileEntries.txt";
/// File name of the artifact extracted from the existing playlist.
pub const PLAYLIST_ARTIFACT: &str = "_playlistEntries.txt";

/// Configuration for a single reconciliation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Deduplicated absolute music directories, in a reproducible order.
    pub root_dirs: Vec<PathBuf>,
    /// Absolute path of the playlist under reconciliation.
    pub playlist: PathBuf,
    /// Directory artifacts and backups are written to.
    pub output_dir: PathBuf,
    /// Regenerate the playlist instead of comparing against it.
    pub update: bool,
}

impl RunConfig {
    /// Build a run configuration from raw command-line values.
    ///
    /// Root directories are absolutized and deduplicated; supplying the
    /// same directory twice, or once relative and once absolute, scans it
    /// once. The output directory is the process working directory,
    /// absolute-normalized.
    pub fn new(dirs: &[PathBuf], playlist: &Path, update: bool) -> Result<Self> {
        let mut unique_dirs = BTreeSet::new();
        for dir in dirs {
            let absolute = dir
                .absolutize()
                .with_context(|| format!("Failed to resolve music directory {}", dir.display()))?
                .into_owned();
            unique_dirs.insert(absolute);
        }

        let playlist = playlist
            .absolutize()
            .with_context(|| format!("Failed to resolve playlist path {}", playlist.display()))?
            .into_owned();

        let output_dir = Path::new(".")
            .absolutize()
            .context("Failed to resolve the current working directory")?
            .into_owned();

        Ok(Self {
            root_dirs: unique_dirs.into_iter().collect(),
            playlist,
            output_dir,
            update,
        })
    }

    /// Redirect artifact and backup output, mainly for tests.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Path of the directory-scan artifact for this run.
    pub fn files_artifact(&self) -> PathBuf {
        self.output_dir.join(FILES_ARTIFACT)
    }

    /// Path of the filtered-playlist artifact for this run.
    pub fn playlist_artifact(&self) -> PathBuf {
        self.output_dir.join(PLAYLIST_ARTIFACT)
    }

    /// The anchor directory scan results are relativized against.
    pub fn playlist_parent(&self) -> Result<&Path> {
        self.playlist.parent().with_context(|| {
            format!(
                "Playlist path {} has no parent directory",
                self.playlist.display()
            )
        })
    }

    /// Final path segment of every root directory, used as the literal
    /// prefixes for playlist-line filtering in compare mode.
    pub fn short_dir_names(&self) -> Result<Vec<String>> {
        self.root_dirs
            .iter()
            .map(|dir| {
                dir.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .with_context(|| {
                        format!("Music directory {} has no final path segment", dir.display())
                    })
            })
            .collect()
    }
}
