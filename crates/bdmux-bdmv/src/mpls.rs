//! MPLS playlist descriptor decoding.
//!
//! Only the play item table is interpreted. The decoder does not walk the
//! full playlist grammar: it searches for the `PITM` chunk on a 4-byte
//! stride starting after the 16-byte header and reads fixed-stride records
//! from there.
//!
//! Record layout, relative to the record base:
//!
//! | Offset | Size | Field                       |
//! |--------|------|-----------------------------|
//! | 16     | 2    | clip index                  |
//! | 20     | 8    | in time (disc clock ticks)  |
//! | 28     | 8    | out time (disc clock ticks) |

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::chapters::{self, Chapter};
use crate::clock::{format_duration, ticks_to_ms};
use crate::error::{BdmvError, Result};
use crate::layout;
use crate::reader::{ByteReader, ChunkType};

/// Big-endian u32 every playlist buffer must start with.
pub const PLAYLIST_MAGIC: u32 = 0x504D_4C53;

/// Smallest buffer that can hold the playlist header.
pub const MIN_PLAYLIST_LEN: usize = 16;

/// First byte offset examined by the chunk search.
const SCAN_START: usize = 16;

/// Chunk search stride.
const SCAN_STRIDE: usize = 4;

/// Header bytes the chunk length covers beyond the record stride.
const CHUNK_HEADER_LEN: u32 = 8;

const ITEM_COUNT_OFFSET: usize = 8;
const ITEMS_OFFSET: usize = 12;

const CLIP_INDEX_OFFSET: usize = 16;
const IN_TIME_OFFSET: usize = 20;
const OUT_TIME_OFFSET: usize = 28;

/// One contiguous unit of playable media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Clip index from the play item record
    pub clip_index: u16,
    /// Path to the media segment file
    pub media_path: PathBuf,
    /// In point within the media file, milliseconds
    pub start_ms: u64,
    /// Out point within the media file, milliseconds
    pub end_ms: u64,
}

impl Segment {
    /// Length of the span, always positive for decoded segments.
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// Decoded content of one playlist file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistDescriptor {
    /// Sum of all segment durations
    pub total_duration_ms: u64,
    /// Segments in play order, never empty
    pub segments: Vec<Segment>,
    /// Cumulative boundaries, one more than the number of segments
    pub chapter_marks_ms: Vec<u64>,
}

impl PlaylistDescriptor {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Numbered chapter spans, one per segment.
    pub fn chapters(&self) -> Vec<Chapter> {
        chapters::from_marks(&self.chapter_marks_ms)
    }
}

/// Decode the playlist at `playlist_path`, resolving clips against `media_dir`.
///
/// The whole file is read into memory and released before returning.
pub fn decode<P, M>(playlist_path: P, media_dir: M) -> Result<PlaylistDescriptor>
where
    P: AsRef<Path>,
    M: AsRef<Path>,
{
    let playlist_path = playlist_path.as_ref();
    let buffer =
        std::fs::read(playlist_path).map_err(|e| BdmvError::io(playlist_path, e))?;

    let descriptor = decode_bytes(&buffer, media_dir.as_ref())?;

    debug!("Parsed playlist: {}", playlist_path.display());
    debug!(
        "Segments: {}, duration: {}, chapters: {}",
        descriptor.segment_count(),
        format_duration(descriptor.total_duration_ms),
        descriptor.chapter_marks_ms.len() - 1
    );

    Ok(descriptor)
}

/// Decode a playlist already held in memory.
///
/// Every referenced segment must exist under `media_dir`; the first
/// missing one fails the whole decode.
pub fn decode_bytes(data: &[u8], media_dir: &Path) -> Result<PlaylistDescriptor> {
    let reader = ByteReader::new(data);

    if reader.len() < MIN_PLAYLIST_LEN {
        return Err(BdmvError::TooShort {
            len: reader.len(),
            min: MIN_PLAYLIST_LEN,
        });
    }

    let magic = reader.u32_be(0).unwrap_or_default();
    if magic != PLAYLIST_MAGIC {
        return Err(BdmvError::BadMagic { found: magic });
    }

    let table = reader
        .chunks(SCAN_START, SCAN_STRIDE)
        .find(|chunk| chunk.chunk_type == ChunkType::PLAY_ITEMS)
        .ok_or(BdmvError::NoPlayItemTable {
            scanned: reader.len(),
        })?;

    let truncated = |index: u32, end: usize| BdmvError::TruncatedRecord {
        index,
        end,
        len: reader.len(),
    };

    let item_count = reader
        .u32_be(table.offset + ITEM_COUNT_OFFSET)
        .ok_or_else(|| truncated(0, table.offset + ITEM_COUNT_OFFSET + 4))?;
    if item_count == 0 {
        return Err(BdmvError::EmptyPlayItemTable {
            offset: table.offset,
        });
    }

    let table_start = table.offset + ITEMS_OFFSET;
    // A length at or below the header size leaves no usable stride
    let stride = table
        .length
        .checked_sub(CHUNK_HEADER_LEN)
        .filter(|&stride| stride > 0)
        .ok_or_else(|| truncated(0, usize::MAX))? as usize;

    debug!(
        "Play item table at offset {}: {} items, {} byte stride",
        table.offset, item_count, stride
    );

    let mut segments = Vec::new();
    let mut chapter_marks_ms = Vec::new();
    let mut total_duration_ms = 0u64;

    for index in 0..item_count {
        let base = stride
            .checked_mul(index as usize)
            .and_then(|offset| offset.checked_add(table_start))
            .ok_or_else(|| truncated(index, usize::MAX))?;
        let record_end = base
            .checked_add(stride)
            .ok_or_else(|| truncated(index, usize::MAX))?;
        if record_end > reader.len() {
            return Err(truncated(index, record_end));
        }

        let clip_index = reader
            .u16_be(base + CLIP_INDEX_OFFSET)
            .ok_or_else(|| truncated(index, base + CLIP_INDEX_OFFSET + 2))?;
        let in_time = reader
            .u64_be(base + IN_TIME_OFFSET)
            .ok_or_else(|| truncated(index, base + IN_TIME_OFFSET + 8))?;
        let out_time = reader
            .u64_be(base + OUT_TIME_OFFSET)
            .ok_or_else(|| truncated(index, base + OUT_TIME_OFFSET + 8))?;

        let start_ms = ticks_to_ms(in_time);
        let end_ms = ticks_to_ms(out_time);
        if end_ms <= start_ms {
            return Err(BdmvError::NonPositiveDuration {
                index,
                start_ms,
                end_ms,
            });
        }

        let media_path = layout::segment_path(media_dir, clip_index);
        if !media_path.exists() {
            return Err(BdmvError::SegmentFileMissing(media_path));
        }

        chapter_marks_ms.push(total_duration_ms);
        total_duration_ms = total_duration_ms
            .checked_add(end_ms - start_ms)
            .ok_or(BdmvError::DurationOverflow { index })?;

        segments.push(Segment {
            clip_index,
            media_path,
            start_ms,
            end_ms,
        });
    }

    chapter_marks_ms.push(total_duration_ms);

    Ok(PlaylistDescriptor {
        total_duration_ms,
        segments,
        chapter_marks_ms,
    })
}
