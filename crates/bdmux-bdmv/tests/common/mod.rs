//! Fixture disc trees for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bdmux_bdmv::mpls::PLAYLIST_MAGIC;
use tempfile::TempDir;

/// One play item: clip index, in time, out time (disc clock ticks).
pub type Item = (u16, u64, u64);

/// Ticks for a whole number of seconds.
pub fn secs(s: u64) -> u64 {
    s * 45_000
}

/// Encode a playlist with a PITM table of 36-byte records.
pub fn playlist_bytes(items: &[Item]) -> Vec<u8> {
    let mut data = PLAYLIST_MAGIC.to_be_bytes().to_vec();
    data.extend_from_slice(b"0200");
    data.extend_from_slice(&[0u8; 8]);
    data.extend_from_slice(b"PITM");
    data.extend_from_slice(&44u32.to_be_bytes());
    data.extend_from_slice(&(items.len() as u32).to_be_bytes());
    for &(clip, in_time, out_time) in items {
        let mut record = [0u8; 36];
        record[16..18].copy_from_slice(&clip.to_be_bytes());
        record[20..28].copy_from_slice(&in_time.to_be_bytes());
        record[28..36].copy_from_slice(&out_time.to_be_bytes());
        data.extend_from_slice(&record);
    }
    data
}

/// A temporary BDMV tree.
pub struct DiscFixture {
    dir: TempDir,
}

impl DiscFixture {
    /// Complete layout with index.bdmv and no playlists or clips.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for sub in ["PLAYLIST", "STREAM", "CLIPINF"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        fs::write(dir.path().join("index.bdmv"), b"INDX0200").unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn stream_dir(&self) -> PathBuf {
        self.root().join("STREAM")
    }

    /// Create empty clip files.
    pub fn with_clips(self, clips: &[u16]) -> Self {
        for clip in clips {
            fs::write(self.stream_dir().join(format!("{:05}.m2ts", clip)), b"").unwrap();
        }
        self
    }

    /// Write a well-formed playlist.
    pub fn with_playlist(self, name: &str, items: &[Item]) -> Self {
        self.with_raw_playlist(name, &playlist_bytes(items))
    }

    /// Write arbitrary bytes as a playlist.
    pub fn with_raw_playlist(self, name: &str, data: &[u8]) -> Self {
        fs::write(self.root().join("PLAYLIST").join(name), data).unwrap();
        self
    }

    pub fn remove(self, relative: &str) -> Self {
        let path = self.root().join(relative);
        if path.is_dir() {
            fs::remove_dir_all(path).unwrap();
        } else {
            fs::remove_file(path).unwrap();
        }
        self
    }
}
