use serde::{Deserialize, Serialize};

/// Playlist selector value that triggers main feature detection.
pub const AUTO_PLAYLIST: &str = "auto";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub chapters: ChapterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default log level when RUST_LOG is unset and --verbose is off
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistConfig {
    /// Playlist used when none is given on the command line:
    /// "auto" or an .mpls file name
    #[serde(default = "default_playlist")]
    pub default: String,
}

fn default_playlist() -> String {
    AUTO_PLAYLIST.to_string()
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            default: default_playlist(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChapterConfig {
    /// Chapter title template; `{n}` is the chapter number, `{nn}` the
    /// two-digit chapter number
    #[serde(default = "default_title_template")]
    pub title_template: String,
}

fn default_title_template() -> String {
    "Chapter {n}".to_string()
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            title_template: default_title_template(),
        }
    }
}

impl ChapterConfig {
    /// Expand the title template for a 1-based chapter number.
    pub fn title_for(&self, number: u32) -> String {
        self.title_template
            .replace("{nn}", &format!("{:02}", number))
            .replace("{n}", &number.to_string())
    }
}
