use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotpaper::{
    cli,
    config::{self, Settings},
    error,
    types::{BackgroundMode, PkceToken},
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Defaults to `generate` when omitted
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Create wallpapers from album covers and set a random one
    Generate(GenerateOptions),

    /// Set a random wallpaper from the wallpaper folder
    Shuffle,

    /// List wallpapers in the wallpaper folder
    List,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Number of tracks to fetch (overrides SPOTIFY_QUERY_COUNT)
    #[clap(long)]
    pub count: Option<u32>,

    /// Index of the first track (overrides SPOTIFY_QUERY_OFFSET)
    #[clap(long)]
    pub offset: Option<u32>,

    /// Background fill: average, blurred, grain, r,g,b or #rrggbb
    #[clap(long)]
    pub background: Option<BackgroundMode>,

    /// Output folder (overrides WALLPAPER_FOLDER)
    #[clap(long)]
    pub folder: Option<PathBuf>,

    /// Only create the wallpapers, leave the desktop alone
    #[clap(long)]
    pub no_set: bool,
}

impl GenerateOptions {
    fn apply(&self, settings: Settings) -> Settings {
        Settings {
            count: self.count.unwrap_or(settings.count),
            offset: self.offset.unwrap_or(settings.offset),
            background: self.background.unwrap_or(settings.background),
            folder: self.folder.clone().unwrap_or(settings.folder.clone()),
            ..settings
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    match cli.command.unwrap_or(Command::Generate(GenerateOptions::default())) {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result), &settings).await;
        }
        Command::Generate(opt) => cli::generate(&opt.apply(settings), !opt.no_set).await,
        Command::Shuffle => cli::shuffle(&settings).await,
        Command::List => cli::list(&settings).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
