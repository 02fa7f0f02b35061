mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./bdmux.toml",
        "~/.config/bdmux/config.toml",
        "/etc/bdmux/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let level = config.general.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        anyhow::bail!(
            "Unknown log level '{}' (expected one of: {})",
            config.general.log_level,
            LOG_LEVELS.join(", ")
        );
    }

    let playlist = config.playlist.default.trim();
    if playlist.is_empty() {
        anyhow::bail!("Default playlist cannot be empty (use \"auto\")");
    }
    if playlist != AUTO_PLAYLIST && !playlist.ends_with(".mpls") {
        anyhow::bail!(
            "Default playlist '{}' must be \"auto\" or an .mpls file name",
            playlist
        );
    }

    if config.chapters.title_template.trim().is_empty() {
        anyhow::bail!("Chapter title template cannot be empty");
    }

    Ok(())
}
