//! Disc root to playlist descriptor, in one call.

use std::path::{Path, PathBuf};

use bdmux_bdmv::{
    decode, layout, scan, select_main, DiscStructure, PlaylistDescriptor, Result,
    SelectionWarning,
};
use tracing::{info, warn};

use crate::config::AUTO_PLAYLIST;

/// Which playlist to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistChoice {
    /// Pick the main feature heuristically
    Auto,
    /// A file name under PLAYLIST
    Named(String),
}

impl PlaylistChoice {
    /// Parse a command line or config value.
    ///
    /// `auto` selects the main feature; anything else names a playlist file,
    /// with `.mpls` appended when no extension is given.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == AUTO_PLAYLIST {
            return Self::Auto;
        }

        if Path::new(value).extension().is_some() {
            Self::Named(value.to_string())
        } else {
            Self::Named(format!("{}.{}", value, layout::PLAYLIST_EXTENSION))
        }
    }
}

/// A fully resolved title.
#[derive(Debug)]
pub struct ResolvedTitle {
    pub disc: DiscStructure,
    pub playlist_path: PathBuf,
    pub descriptor: PlaylistDescriptor,
    /// Set only for automatic selection
    pub warning: Option<SelectionWarning>,
}

/// Scan `root`, pick the playlist and decode it against the STREAM directory.
pub fn resolve(root: &Path, choice: &PlaylistChoice) -> Result<ResolvedTitle> {
    let disc = scan(root)?;

    let (playlist_path, descriptor, warning) = match choice {
        PlaylistChoice::Auto => {
            let selection = select_main(&disc)?;
            for rejected in &selection.rejected {
                warn!(
                    "Failed to parse playlist {}: {}",
                    rejected.path.display(),
                    rejected.error
                );
            }
            if let Some(warning) = selection.warning {
                warn!("{}", warning);
            }
            (
                selection.summary.path,
                selection.descriptor,
                selection.warning,
            )
        }
        PlaylistChoice::Named(name) => {
            let path = disc.playlist_path(name);
            let descriptor = decode(&path, &disc.stream_dir)?;
            (path, descriptor, None)
        }
    };

    info!("Using playlist: {}", playlist_path.display());

    Ok(ResolvedTitle {
        disc,
        playlist_path,
        descriptor,
        warning,
    })
}
