//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use gamehub_core::{ConfigOverride, GameId};

#[derive(Parser, Debug)]
#[command(
    name = "gamehub",
    version,
    about = "Load GameHub download listings into a page or the terminal"
)]
pub struct Cli {
    /// GameHub home directory (default: $GAMEHUB_HOME or ~/.gamehub)
    #[arg(long, value_name = "DIR", global = true)]
    pub home: Option<PathBuf>,

    /// Backend origin, overrides base_url from config.toml
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Game to load (repeatable, keeps the given order)
    #[arg(short = 'g', long = "game", value_name = "ID", global = true)]
    pub games: Vec<GameId>,

    /// Do not append the t=<millis> cache-busting parameter
    #[arg(long = "no-cache-bust", global = true)]
    pub no_cache_bust: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fill the file containers of a page template
    Render {
        /// Page template containing <id>-files containers
        #[arg(long, value_name = "FILE")]
        page: PathBuf,
        /// Where to write the rendered page (default: stdout)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print each game's files
    List {
        /// Emit one JSON object per game
        #[arg(long)]
        json: bool,
    },
    /// Print the backend's game catalog
    Games {
        /// Emit the catalog as a JSON object
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Overrides to merge onto config.toml.
    pub fn config_override(&self) -> ConfigOverride {
        ConfigOverride {
            base_url: self.base_url.clone(),
            games: (!self.games.is_empty()).then(|| self.games.clone()),
            cache_bust: self.no_cache_bust.then_some(false),
            request_timeout_seconds: self.timeout,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
