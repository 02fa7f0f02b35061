//! Error types for bdmux-bdmv

use std::path::PathBuf;

/// Result type for bdmux-bdmv operations.
pub type Result<T> = std::result::Result<T, BdmvError>;

/// Errors that can occur while scanning a disc, decoding a playlist or
/// selecting the main feature.
#[derive(Debug, thiserror::Error)]
pub enum BdmvError {
    /// Root path does not exist or is not a directory
    #[error("Not a disc root: {}", .0.display())]
    NotADiscRoot(PathBuf),

    /// One of PLAYLIST/STREAM/CLIPINF is absent or not a directory
    #[error("{name} directory not found: {}", .path.display())]
    MissingSubdirectory { name: &'static str, path: PathBuf },

    /// Root has no index.bdmv
    #[error("index.bdmv not found in {}", .0.display())]
    MissingIndex(PathBuf),

    /// PLAYLIST directory contains no .mpls files
    #[error("No .mpls files found in {}", .0.display())]
    NoPlaylistsFound(PathBuf),

    /// Buffer is shorter than the fixed playlist header
    #[error("Playlist too short: {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    /// First four bytes are not the playlist signature
    #[error("Bad playlist magic: 0x{found:08X}")]
    BadMagic { found: u32 },

    /// Chunk search reached the end of the buffer without a play item table
    #[error("No play item table found in {scanned} bytes")]
    NoPlayItemTable { scanned: usize },

    /// Play item table exists but declares zero items
    #[error("Play item table at offset {offset} has no items")]
    EmptyPlayItemTable { offset: usize },

    /// A play item record (or one of its fields) runs past the buffer
    #[error("Play item {index} truncated: needs {end} bytes, buffer has {len}")]
    TruncatedRecord { index: u32, end: usize, len: usize },

    /// Out time is not after in time
    #[error("Play item {index} has non-positive duration ({start_ms}ms..{end_ms}ms)")]
    NonPositiveDuration {
        index: u32,
        start_ms: u64,
        end_ms: u64,
    },

    /// Running total of segment durations does not fit in a u64
    #[error("Play item {index} overflows the total duration")]
    DurationOverflow { index: u32 },

    /// A referenced clip has no media file on disk
    #[error("Segment file not found: {}", .0.display())]
    SegmentFileMissing(PathBuf),

    /// Every candidate playlist failed to decode
    #[error("None of the {candidates} playlists could be decoded")]
    NoUsablePlaylists { candidates: usize },

    /// Filesystem read failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`BdmvError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Disc layout problems found by the scanner
    Structure,
    /// Playlist format problems found by the decoder
    Decode,
    /// Main playlist selection failed
    Selection,
    /// Underlying filesystem error
    Io,
}

impl BdmvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotADiscRoot(_)
            | Self::MissingSubdirectory { .. }
            | Self::MissingIndex(_)
            | Self::NoPlaylistsFound(_) => ErrorKind::Structure,
            Self::TooShort { .. }
            | Self::BadMagic { .. }
            | Self::NoPlayItemTable { .. }
            | Self::EmptyPlayItemTable { .. }
            | Self::TruncatedRecord { .. }
            | Self::NonPositiveDuration { .. }
            | Self::DurationOverflow { .. }
            | Self::SegmentFileMissing(_) => ErrorKind::Decode,
            Self::NoUsablePlaylists { .. } => ErrorKind::Selection,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// True for errors raised while decoding a playlist buffer.
    pub fn is_decode_error(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }
}
