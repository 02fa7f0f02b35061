//! # bdmux-bdmv
//!
//! Blu-ray BDMV structure resolution in pure Rust.
//!
//! This crate answers "which media files make up this title, in what order,
//! and where do its chapters fall" without the caller knowing the on-disc
//! binary layout.
//!
//! ## Features
//!
//! - Disc layout validation: `index.bdmv`, `PLAYLIST`, `STREAM`, `CLIPINF`
//! - MPLS play item decoding with bounds-checked big-endian reads
//! - Disc clock (45 kHz) to millisecond conversion
//! - Main feature selection across all playlists on a disc
//! - Chapter spans and OGM chapter text export
//!
//! ## Example
//!
//! ```no_run
//! let disc = bdmux_bdmv::scan("/mnt/disc/BDMV").unwrap();
//! let selection = bdmux_bdmv::select_main(&disc).unwrap();
//!
//! if let Some(warning) = selection.warning {
//!     eprintln!("warning: {}", warning);
//! }
//!
//! println!("Main playlist: {}", selection.path().display());
//! for segment in &selection.descriptor.segments {
//!     println!(
//!         "  {} [{}ms..{}ms]",
//!         segment.media_path.display(),
//!         segment.start_ms,
//!         segment.end_ms
//!     );
//! }
//! ```

pub mod chapters;
pub mod clock;
pub mod error;
pub mod layout;
pub mod mpls;
mod reader;
pub mod scanner;
pub mod selector;

pub use chapters::Chapter;
pub use error::{BdmvError, ErrorKind, Result};
pub use mpls::{decode, decode_bytes, PlaylistDescriptor, Segment};
pub use scanner::{scan, DiscStructure};
pub use selector::{
    compare_candidates, pick_main, select_main, CandidateSummary, RejectedPlaylist, Selection,
    SelectionWarning,
};
