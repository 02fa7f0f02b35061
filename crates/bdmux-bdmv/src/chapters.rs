//! Chapter spans derived from cumulative chapter marks, and OGM export.

use std::fmt::Write;

use serde::Serialize;

use crate::clock::format_timestamp;

/// A numbered chapter span, one per play item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// 1-based chapter number
    pub number: u32,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl Chapter {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// Pair consecutive marks into chapters numbered from 1.
///
/// Fewer than two marks yields no chapters.
pub fn from_marks(marks: &[u64]) -> Vec<Chapter> {
    marks
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Chapter {
            number: i as u32 + 1,
            start_ms: pair[0],
            end_ms: pair[1],
        })
        .collect()
}

/// Default chapter title, e.g. `Chapter 3`.
pub fn default_title(number: u32) -> String {
    format!("Chapter {}", number)
}

/// Render chapters in the OGM text format accepted by mkvmerge:
///
/// ```text
/// CHAPTER01=00:00:00.000
/// CHAPTER01NAME=Chapter 1
/// ```
pub fn to_ogm<F>(chapters: &[Chapter], title: F) -> String
where
    F: Fn(u32) -> String,
{
    let mut out = String::new();
    for chapter in chapters {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "CHAPTER{:02}={}",
            chapter.number,
            format_timestamp(chapter.start_ms)
        );
        let _ = writeln!(out, "CHAPTER{:02}NAME={}", chapter.number, title(chapter.number));
    }
    out
}
