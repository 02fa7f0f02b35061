//! Bounds-checked big-endian reads and chunk search over an untrusted buffer.

use std::fmt;

/// Four-character chunk type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    /// Play item table.
    pub const PLAY_ITEMS: Self = Self(*b"PITM");

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Get the 4-char code as a string.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only view over a byte buffer with typed big-endian accessors.
///
/// Every accessor returns `None` when the requested range does not fit in
/// the buffer, including when `offset + width` overflows.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    fn array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        let end = offset.checked_add(N)?;
        self.buf.get(offset..end)?.try_into().ok()
    }

    pub fn u16_be(&self, offset: usize) -> Option<u16> {
        self.array(offset).map(u16::from_be_bytes)
    }

    pub fn u32_be(&self, offset: usize) -> Option<u32> {
        self.array(offset).map(u32::from_be_bytes)
    }

    pub fn u64_be(&self, offset: usize) -> Option<u64> {
        self.array(offset).map(u64::from_be_bytes)
    }

    pub fn chunk_type(&self, offset: usize) -> Option<ChunkType> {
        self.array(offset).map(ChunkType::from_bytes)
    }

    /// Iterate chunk headers at every `stride` bytes starting at `start`.
    pub fn chunks(&self, start: usize, stride: usize) -> ChunkScan<'a> {
        ChunkScan {
            reader: *self,
            pos: start,
            // The scan never looks at the final 8 bytes as a header start
            end: self.buf.len().saturating_sub(8),
            stride: stride.max(1),
        }
    }
}

/// Chunk header found at a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Byte offset of the type field
    pub offset: usize,
    pub chunk_type: ChunkType,
    /// Raw length field following the type
    pub length: u32,
}

/// Fixed-stride cursor that reads a (type, length) pair at each position.
///
/// This is a search, not a structural walk: the cursor advances by the
/// stride regardless of the length it just read.
#[derive(Debug, Clone)]
pub struct ChunkScan<'a> {
    reader: ByteReader<'a>,
    pos: usize,
    end: usize,
    stride: usize,
}

impl Iterator for ChunkScan<'_> {
    type Item = ChunkHeader;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }

        let offset = self.pos;
        self.pos = self.pos.saturating_add(self.stride);

        let chunk_type = self.reader.chunk_type(offset)?;
        let length = self.reader.u32_be(offset + 4)?;

        Some(ChunkHeader {
            offset,
            chunk_type,
            length,
        })
    }
}
