//! Main feature playlist selection.
//!
//! Every playlist on the disc is decoded and the longest one wins, with the
//! segment count breaking duration ties. Playlists that fail to decode are
//! dropped from the pool instead of failing the selection.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::clock::format_duration;
use crate::error::{BdmvError, Result};
use crate::mpls::{self, PlaylistDescriptor};
use crate::scanner::DiscStructure;

/// Per-playlist figures compared during selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateSummary {
    pub path: PathBuf,
    pub total_duration_ms: u64,
    pub segment_count: usize,
}

impl CandidateSummary {
    pub fn new(path: impl Into<PathBuf>, descriptor: &PlaylistDescriptor) -> Self {
        Self {
            path: path.into(),
            total_duration_ms: descriptor.total_duration_ms,
            segment_count: descriptor.segment_count(),
        }
    }
}

/// Soft heuristic failure reported alongside a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionWarning {
    /// The winner is made of a single segment, so it may not be the feature
    SingleSegment,
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleSegment => write!(
                f,
                "No playlist with segment count > 1 found, using longest duration"
            ),
        }
    }
}

/// A playlist excluded from the candidate pool.
#[derive(Debug)]
pub struct RejectedPlaylist {
    pub path: PathBuf,
    pub error: BdmvError,
}

/// Outcome of [`select_main`].
#[derive(Debug)]
pub struct Selection {
    pub summary: CandidateSummary,
    /// Decoded winner, so callers need not decode it again
    pub descriptor: PlaylistDescriptor,
    pub warning: Option<SelectionWarning>,
    pub rejected: Vec<RejectedPlaylist>,
}

impl Selection {
    pub fn path(&self) -> &PathBuf {
        &self.summary.path
    }
}

/// Order candidates by duration, then by segment count.
pub fn compare_candidates(a: &CandidateSummary, b: &CandidateSummary) -> Ordering {
    a.total_duration_ms
        .cmp(&b.total_duration_ms)
        .then_with(|| a.segment_count.cmp(&b.segment_count))
}

/// Index of the maximum candidate under [`compare_candidates`].
///
/// Among fully equal candidates the first one wins.
pub fn pick_main(candidates: &[CandidateSummary]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .reduce(|best, current| {
            if compare_candidates(current.1, best.1) == Ordering::Greater {
                current
            } else {
                best
            }
        })
        .map(|(index, _)| index)
}

/// Soft warning for a chosen candidate, if any.
pub fn warning_for(candidate: &CandidateSummary) -> Option<SelectionWarning> {
    (candidate.segment_count <= 1).then_some(SelectionWarning::SingleSegment)
}

/// Decode every playlist on the disc and pick the main feature.
///
/// Candidates are decoded one after another against `disc.stream_dir`.
/// Fails with [`BdmvError::NoUsablePlaylists`] only when none decodes.
pub fn select_main(disc: &DiscStructure) -> Result<Selection> {
    let mut summaries = Vec::new();
    let mut descriptors = Vec::new();
    let mut rejected = Vec::new();

    for path in disc.playlist_paths() {
        match mpls::decode(&path, &disc.stream_dir) {
            Ok(descriptor) => {
                summaries.push(CandidateSummary::new(path, &descriptor));
                descriptors.push(descriptor);
            }
            Err(error) => {
                debug!("Skipping playlist {}: {}", path.display(), error);
                rejected.push(RejectedPlaylist { path, error });
            }
        }
    }

    let index = pick_main(&summaries).ok_or(BdmvError::NoUsablePlaylists {
        candidates: disc.playlist_files.len(),
    })?;

    let summary = summaries.swap_remove(index);
    let descriptor = descriptors.swap_remove(index);
    let warning = warning_for(&summary);

    info!("Selected main playlist: {}", summary.path.display());
    info!("Duration: {}", format_duration(summary.total_duration_ms));
    info!("Segments: {}", summary.segment_count);

    Ok(Selection {
        summary,
        descriptor,
        warning,
        rejected,
    })
}
