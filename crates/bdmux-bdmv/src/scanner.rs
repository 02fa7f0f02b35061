//! Disc structure validation and playlist discovery.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{BdmvError, Result};
use crate::layout::{self, CLIP_INFO_DIR, INDEX_FILE, PLAYLIST_DIR, STREAM_DIR};

/// Validated view of a disc root.
#[derive(Debug, Clone, Serialize)]
pub struct DiscStructure {
    /// Root of the BDMV tree
    pub root_dir: PathBuf,
    /// `<root>/PLAYLIST`
    pub playlist_dir: PathBuf,
    /// `<root>/STREAM`
    pub stream_dir: PathBuf,
    /// `<root>/CLIPINF`, located but never read
    pub clip_info_dir: PathBuf,
    /// Playlist file names in directory enumeration order
    pub playlist_files: Vec<String>,
}

impl DiscStructure {
    /// Full path of a playlist file name under the PLAYLIST directory.
    pub fn playlist_path(&self, name: &str) -> PathBuf {
        self.playlist_dir.join(name)
    }

    /// Full paths of every discovered playlist.
    pub fn playlist_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.playlist_files
            .iter()
            .map(|name| self.playlist_path(name))
    }
}

/// Validate `root_dir` against the BDMV layout and enumerate its playlists.
///
/// Checks run in a fixed order and stop at the first failure: the root
/// itself, then PLAYLIST, STREAM and CLIPINF, then `index.bdmv`, then the
/// playlist enumeration. Nothing on disk is modified.
pub fn scan<P: AsRef<Path>>(root_dir: P) -> Result<DiscStructure> {
    let root_dir = root_dir.as_ref();

    if !root_dir.is_dir() {
        return Err(BdmvError::NotADiscRoot(root_dir.to_path_buf()));
    }

    let playlist_dir = root_dir.join(PLAYLIST_DIR);
    let stream_dir = root_dir.join(STREAM_DIR);
    let clip_info_dir = root_dir.join(CLIP_INFO_DIR);

    for (name, path) in [
        (PLAYLIST_DIR, &playlist_dir),
        (STREAM_DIR, &stream_dir),
        (CLIP_INFO_DIR, &clip_info_dir),
    ] {
        if !path.is_dir() {
            return Err(BdmvError::MissingSubdirectory {
                name,
                path: path.clone(),
            });
        }
    }

    if !root_dir.join(INDEX_FILE).exists() {
        return Err(BdmvError::MissingIndex(root_dir.to_path_buf()));
    }

    let playlist_files = list_playlists(&playlist_dir)?;
    if playlist_files.is_empty() {
        return Err(BdmvError::NoPlaylistsFound(playlist_dir));
    }

    info!(
        "Found {} playlist files in {}",
        playlist_files.len(),
        playlist_dir.display()
    );

    Ok(DiscStructure {
        root_dir: root_dir.to_path_buf(),
        playlist_dir,
        stream_dir,
        clip_info_dir,
        playlist_files,
    })
}

/// Non-recursive listing of `.mpls` regular files.
///
/// Only a failure to read the directory itself is an error. Entries that
/// cannot be inspected, such as dangling symlinks, are skipped.
fn list_playlists(playlist_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(playlist_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(BdmvError::io(playlist_dir, e.into())),
            Err(e) => {
                debug!("Skipping unreadable playlist entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !layout::is_playlist_file(entry.path()) {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => debug!("Skipping non UTF-8 playlist name: {:?}", entry.file_name()),
        }
    }

    Ok(names)
}
