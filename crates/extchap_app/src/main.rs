//! External chapters command line tool.
//!
//! Usage:
//!   extchap scan "/media/Movie (2010)/Movie (2010).mkv"
//!   extchap scan /tv/Show/S01E05.mkv --episode 5
//!   extchap item 9c1e --library library.toml
//!   extchap init-config ~/.config/extchap.toml
//!
//! Chapters are printed to stdout as a JSON array of
//! `{"name", "startPositionTicks"}` objects. Logs go to stderr.

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use extchap_core::config::{ConfigManager, Settings};
use extchap_core::discovery::discover_chapters;
use extchap_core::library::{ExternalChapterService, LibraryManifest};
use extchap_core::logging::init_tracing;
use extchap_core::ChapterList;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => {
            let mut manager = ConfigManager::new(path);
            manager
                .load()
                .with_context(|| format!("loading settings from {}", path.display()))?;
            manager.settings().clone()
        }
        None => Settings::default(),
    };

    let level = if cli.verbose {
        settings.logging.level.more_verbose()
    } else {
        settings.logging.level
    };
    init_tracing(level, settings.logging.show_target);

    match cli.command {
        Commands::Scan(args) => {
            let media_path = resolve_media_path(&args.media_path)
                .with_context(|| format!("resolving {}", args.media_path.display()))?;
            let chapters = discover_chapters(&media_path, args.episode);
            if chapters.is_empty() {
                tracing::info!("No external chapters found for {}", media_path.display());
            }
            println!("{}", render(&chapters, settings.output.pretty)?);
        }
        Commands::Item(args) => {
            let library = LibraryManifest::load(&args.library)?;
            tracing::debug!("Loaded {} library items", library.len());
            let chapters = ExternalChapterService::new(&library)
                .get_chapters(&args.item_id)
                .with_context(|| format!("item {}", args.item_id))?;
            println!("{}", render(&chapters, settings.output.pretty)?);
        }
        Commands::InitConfig(args) => {
            let mut manager = ConfigManager::new(&args.path);
            if manager.load_or_create()? {
                tracing::info!("Wrote default settings to {}", args.path.display());
            } else {
                tracing::info!("Settings already exist at {}", args.path.display());
            }
        }
    }

    Ok(())
}

/// Make a command-line media path absolute so a bare file name still has a
/// directory to search.
fn resolve_media_path(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Serialize chapters as JSON.
fn render(chapters: &ChapterList, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(chapters)
    } else {
        serde_json::to_string(chapters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extchap_core::chapters::parse_chapter_txt;
    use extchap_core::discovery::candidates_for_media;

    #[test]
    fn render_compact() {
        let chapters = parse_chapter_txt("CHAPTER01=00:00:01.000\nCHAPTER01NAME=One");
        assert_eq!(
            render(&chapters, false).unwrap(),
            r#"[{"name":"One","startPositionTicks":10000000}]"#
        );
    }

    #[test]
    fn bare_file_name_gets_a_directory() {
        let resolved = resolve_media_path(Path::new("movie.mkv")).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved.file_name().unwrap(), "movie.mkv");
        assert!(candidates_for_media(&resolved, None).is_some());
    }

    #[test]
    fn absolute_path_is_unchanged() {
        let path = std::env::temp_dir().join("Show").join("S01E05.mkv");
        assert_eq!(resolve_media_path(&path).unwrap(), path);
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(&ChapterList::new(), false).unwrap(), "[]");
        assert_eq!(render(&ChapterList::new(), true).unwrap(), "[]");
    }
}
