//! Fixed names of the BDMV directory layout.
//!
//! A disc root looks like:
//!
//! ```text
//! BDMV/
//! ├── index.bdmv
//! ├── PLAYLIST/00800.mpls
//! ├── STREAM/00055.m2ts
//! └── CLIPINF/00055.clpi
//! ```

use std::path::{Path, PathBuf};

/// Directory holding playlist descriptors.
pub const PLAYLIST_DIR: &str = "PLAYLIST";

/// Directory holding media segments.
pub const STREAM_DIR: &str = "STREAM";

/// Directory holding clip info files.
pub const CLIP_INFO_DIR: &str = "CLIPINF";

/// Disc index marker file at the root.
pub const INDEX_FILE: &str = "index.bdmv";

/// Playlist descriptor extension (without the dot).
pub const PLAYLIST_EXTENSION: &str = "mpls";

/// Media segment extension (without the dot).
pub const SEGMENT_EXTENSION: &str = "m2ts";

/// Required subdirectories, in the order the scanner checks them.
pub const REQUIRED_DIRS: [&str; 3] = [PLAYLIST_DIR, STREAM_DIR, CLIP_INFO_DIR];

/// File name of the media segment for a clip index, e.g. `00055.m2ts`.
pub fn segment_file_name(clip_index: u16) -> String {
    format!("{:05}.{}", clip_index, SEGMENT_EXTENSION)
}

/// Full path of the media segment for a clip index.
pub fn segment_path(media_dir: &Path, clip_index: u16) -> PathBuf {
    media_dir.join(segment_file_name(clip_index))
}

/// Check if a path carries the playlist extension.
///
/// The comparison is exact: `00800.MPLS` does not match.
pub fn is_playlist_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == PLAYLIST_EXTENSION)
        .unwrap_or(false)
}
