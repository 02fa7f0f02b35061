use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bdmux")]
#[command(author, version, about = "Blu-ray playlist resolver and chapter exporter")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a BDMV directory and list its playlists
    Scan {
        /// BDMV root directory
        #[arg(required = true)]
        root: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the main feature playlist
    Select {
        /// BDMV root directory
        #[arg(required = true)]
        root: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a playlist and show its segments and chapters
    Inspect {
        /// BDMV root directory
        #[arg(required = true)]
        root: PathBuf,

        /// Playlist file name or "auto" (defaults to the configured playlist)
        #[arg(short, long)]
        playlist: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export chapters in OGM format
    Chapters {
        /// BDMV root directory
        #[arg(required = true)]
        root: PathBuf,

        /// Playlist file name or "auto" (defaults to the configured playlist)
        #[arg(short, long)]
        playlist: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config or defaults if not specified)
        #[arg(value_name = "CONFIG")]
        file: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
