mod cli;

use bdmux::{
    config::{self, Config},
    report, resolve, PlaylistChoice,
};

use anyhow::{Context, Result};
use bdmux_bdmv::chapters;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate loads its own file; everything else needs the config up front
    // for the default log level
    let config = match cli.command {
        Commands::Validate { .. } => Config::default(),
        _ => config::load_config_or_default(cli.config.as_deref())?,
    };

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "bdmux=debug,bdmux_bdmv=debug".to_string()
        } else {
            let level = config.general.log_level.to_lowercase();
            format!("bdmux={0},bdmux_bdmv={0}", level)
        }
    });

    // Reports go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan { root, json } => scan_disc(&root, json),
        Commands::Select { root, json } => select_playlist(&root, json),
        Commands::Inspect {
            root,
            playlist,
            json,
        } => inspect_playlist(&root, playlist.as_deref(), json, &config),
        Commands::Chapters {
            root,
            playlist,
            output,
        } => export_chapters(&root, playlist.as_deref(), output.as_deref(), &config),
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("bdmux {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn scan_disc(root: &Path, json: bool) -> Result<()> {
    let disc = bdmux_bdmv::scan(root)
        .with_context(|| format!("Failed to scan Blu-ray structure: {:?}", root))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&disc)?);
    } else {
        print!("{}", report::render_scan(&disc));
    }

    Ok(())
}

fn select_playlist(root: &Path, json: bool) -> Result<()> {
    let disc = bdmux_bdmv::scan(root)
        .with_context(|| format!("Failed to scan Blu-ray structure: {:?}", root))?;
    let selection = bdmux_bdmv::select_main(&disc).context("Failed to find main playlist")?;

    for rejected in &selection.rejected {
        tracing::warn!(
            "Failed to parse playlist {}: {}",
            rejected.path.display(),
            rejected.error
        );
    }
    if let Some(warning) = selection.warning {
        tracing::warn!("{}", warning);
    }

    if json {
        let report = report::SelectionReport::from(&selection);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_selection(&selection));
    }

    Ok(())
}

fn playlist_choice(playlist: Option<&str>, config: &Config) -> PlaylistChoice {
    PlaylistChoice::parse(playlist.unwrap_or(&config.playlist.default))
}

fn inspect_playlist(
    root: &Path,
    playlist: Option<&str>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let choice = playlist_choice(playlist, config);
    let title = resolve(root, &choice)
        .with_context(|| format!("Failed to resolve playlist in {:?}", root))?;

    if json {
        let report = report::TitleReport::from(&title);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_title(&title));
    }

    Ok(())
}

fn export_chapters(
    root: &Path,
    playlist: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let choice = playlist_choice(playlist, config);
    let title = resolve(root, &choice)
        .with_context(|| format!("Failed to resolve playlist in {:?}", root))?;

    let chapters = title.descriptor.chapters();
    let ogm = chapters::to_ogm(&chapters, |n| config.chapters.title_for(n));

    match output {
        Some(path) => {
            std::fs::write(path, &ogm)
                .with_context(|| format!("Failed to write chapter file: {:?}", path))?;
            tracing::info!("Wrote {} chapters to {:?}", chapters.len(), path);
        }
        None => print!("{}", ogm),
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Log level: {}", config.general.log_level);
            println!("  Default playlist: {}", config.playlist.default);
            println!("  Chapter titles: {}", config.chapters.title_template);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            println!("Default config:");
            println!("  Log level: {}", config.general.log_level);
            println!("  Default playlist: {}", config.playlist.default);
        }
    }

    Ok(())
}
