use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "extchap")]
#[command(about = "Find and parse external chapter files", long_about = None)]
pub struct Cli {
    /// Settings file (defaults are used when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More verbose logging than the configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover chapters for a media file
    Scan(ScanArgs),
    /// Discover chapters for a library item
    Item(ItemArgs),
    /// Write a default settings file if none exists
    InitConfig(InitConfigArgs),
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Path to the media file
    pub media_path: PathBuf,

    /// Episode number, enables `<N>_chapters.*` candidates
    #[arg(long, short)]
    pub episode: Option<i32>,
}

#[derive(clap::Args, Debug)]
pub struct ItemArgs {
    /// Item id as listed in the library manifest
    pub item_id: String,

    /// Library manifest (TOML)
    #[arg(long, value_name = "PATH")]
    pub library: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the settings file
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scan() {
        let cli =
            Cli::try_parse_from(["extchap", "scan", "/tv/S01E05.mkv", "--episode", "5"]).unwrap();
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.media_path, PathBuf::from("/tv/S01E05.mkv"));
                assert_eq!(args.episode, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_item_with_globals() {
        let cli = Cli::try_parse_from([
            "extchap", "item", "abc", "--library", "lib.toml", "-v", "--config", "c.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Commands::Item(ref a) if a.item_id == "abc"));
    }

    #[test]
    fn item_requires_library() {
        assert!(Cli::try_parse_from(["extchap", "item", "abc"]).is_err());
    }
}
