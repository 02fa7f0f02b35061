//! Shared test harness for integration tests.
//!
//! Provides [`DiscFixture`], a temporary BDMV tree with hand-encoded MPLS
//! playlists and empty clip files.

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

pub struct DiscFixture {
    dir: TempDir,
}

impl DiscFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        for sub in ["PLAYLIST", "STREAM", "CLIPINF"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        fs::write(dir.path().join("index.bdmv"), b"INDX0200").unwrap();
        Self { dir }
    }

    /// A typical disc: a 3-chapter feature, a trailer and a broken menu loop.
    pub fn feature_disc() -> Self {
        Self::new()
            .with_clips(&[1, 2, 3, 10])
            .with_playlist(
                "00800.mpls",
                &[
                    (1, 0, secs(600)),
                    (2, secs(1), secs(1201)),
                    (3, 0, secs(300)),
                ],
            )
            .with_playlist("00001.mpls", &[(10, 0, secs(120))])
            .with_raw_playlist("00002.mpls", b"MPLS")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn with_clips(self, clips: &[u16]) -> Self {
        for clip in clips {
            fs::write(self.path(&format!("STREAM/{:05}.m2ts", clip)), b"").unwrap();
        }
        self
    }

    pub fn with_playlist(self, name: &str, items: &[Item]) -> Self {
        self.with_raw_playlist(name, &playlist_bytes(items))
    }

    pub fn with_raw_playlist(self, name: &str, data: &[u8]) -> Self {
        fs::write(self.path(&format!("PLAYLIST/{}", name)), data).unwrap();
        self
    }
}
