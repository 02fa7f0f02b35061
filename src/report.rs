//! Human-readable and JSON reports for the CLI.

use std::fmt::Write;
use std::path::PathBuf;

use bdmux_bdmv::clock::{format_duration, format_timestamp};
use bdmux_bdmv::{CandidateSummary, Chapter, DiscStructure, Segment, Selection};
use serde::Serialize;

use crate::ResolvedTitle;

/// JSON shape of `bdmux select`.
#[derive(Debug, Serialize)]
pub struct SelectionReport {
    pub selected: CandidateSummary,
    pub warning: Option<String>,
    pub rejected: Vec<RejectedReport>,
}

#[derive(Debug, Serialize)]
pub struct RejectedReport {
    pub path: PathBuf,
    pub error: String,
}

impl From<&Selection> for SelectionReport {
    fn from(selection: &Selection) -> Self {
        Self {
            selected: selection.summary.clone(),
            warning: selection.warning.map(|w| w.to_string()),
            rejected: selection
                .rejected
                .iter()
                .map(|r| RejectedReport {
                    path: r.path.clone(),
                    error: r.error.to_string(),
                })
                .collect(),
        }
    }
}

/// JSON shape of `bdmux inspect`.
#[derive(Debug, Serialize)]
pub struct TitleReport<'a> {
    pub playlist: &'a PathBuf,
    pub total_duration_ms: u64,
    pub segments: &'a [Segment],
    pub chapter_marks_ms: &'a [u64],
    pub chapters: Vec<Chapter>,
    pub warning: Option<String>,
}

impl<'a> From<&'a ResolvedTitle> for TitleReport<'a> {
    fn from(title: &'a ResolvedTitle) -> Self {
        Self {
            playlist: &title.playlist_path,
            total_duration_ms: title.descriptor.total_duration_ms,
            segments: &title.descriptor.segments,
            chapter_marks_ms: &title.descriptor.chapter_marks_ms,
            chapters: title.descriptor.chapters(),
            warning: title.warning.map(|w| w.to_string()),
        }
    }
}

pub fn render_scan(disc: &DiscStructure) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Disc root: {}", disc.root_dir.display());
    let _ = writeln!(out, "Stream dir: {}", disc.stream_dir.display());
    let _ = writeln!(out, "\nPlaylists: {}", disc.playlist_files.len());

    let mut names = disc.playlist_files.clone();
    names.sort();
    for name in names {
        let _ = writeln!(out, "  {}", name);
    }
    out
}

pub fn render_selection(selection: &Selection) -> String {
    let mut out = String::new();
    let summary = &selection.summary;
    let _ = writeln!(out, "Main playlist: {}", summary.path.display());
    let _ = writeln!(
        out,
        "Duration: {}",
        format_duration(summary.total_duration_ms)
    );
    let _ = writeln!(out, "Segments: {}", summary.segment_count);
    if let Some(warning) = selection.warning {
        let _ = writeln!(out, "Warning: {}", warning);
    }
    if !selection.rejected.is_empty() {
        let _ = writeln!(out, "\nSkipped playlists: {}", selection.rejected.len());
        for rejected in &selection.rejected {
            let _ = writeln!(out, "  {}: {}", rejected.path.display(), rejected.error);
        }
    }
    out
}

pub fn render_title(title: &ResolvedTitle) -> String {
    let mut out = String::new();
    let desc = &title.descriptor;

    let _ = writeln!(out, "Playlist: {}", title.playlist_path.display());
    let _ = writeln!(
        out,
        "Duration: {} ({})",
        format_timestamp(desc.total_duration_ms),
        format_duration(desc.total_duration_ms)
    );

    let _ = writeln!(out, "\nSegments: {}", desc.segment_count());
    for (i, segment) in desc.segments.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{}] {} {} - {}",
            i + 1,
            segment.media_path.display(),
            format_timestamp(segment.start_ms),
            format_timestamp(segment.end_ms)
        );
    }

    let chapters = desc.chapters();
    let _ = writeln!(out, "\nChapters: {}", chapters.len());
    for chapter in &chapters {
        let _ = writeln!(
            out,
            "  {:>2}. {} - {}",
            chapter.number,
            format_timestamp(chapter.start_ms),
            format_timestamp(chapter.end_ms)
        );
    }

    if let Some(warning) = title.warning {
        let _ = writeln!(out, "\nWarning: {}", warning);
    }
    out
}
