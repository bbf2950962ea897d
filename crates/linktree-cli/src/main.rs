//! Link Tree CLI
//!
//! Thin wrapper around linktree-core for terminal use. Shares the desktop
//! app's default data directory and preference database. While the desktop
//! app holds the database open, theme commands work on a session-only copy.
//!
//! ## Usage
//!
//! ```bash
//! # List link cards in render order
//! linktree links
//!
//! # Same, as JSON
//! linktree links --json
//!
//! # Show the resolved theme
//! linktree theme show
//!
//! # Persist a theme
//! linktree theme set dark
//!
//! # Flip the persisted theme
//! linktree theme toggle
//!
//! # Print the document head (title, meta and link tags)
//! linktree head
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use linktree_core::render::{self, CardAction};
use linktree_core::{links, NoColorScheme, PreferenceStore, SiteMetadata, Theme};

/// Link Tree - personal link page
#[derive(Parser)]
#[command(name = "linktree")]
#[command(version = "0.1.0")]
#[command(about = "Link Tree - personal link page")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: <platform data dir>/linktree)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List link cards in render order
    Links {
        /// Emit card view models as JSON
        #[arg(long)]
        json: bool,
    },

    /// Theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Print the document head tags
    Head,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the resolved theme
    Show,
    /// Persist a theme (light or dark)
    Set { theme: String },
    /// Flip the persisted theme
    Toggle,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Terminals have no color-scheme signal; resolution falls back to light.
fn open_preferences(data_dir: &Path) -> PreferenceStore {
    PreferenceStore::resolve_initial(linktree_core::open_or_memory(data_dir), &NoColorScheme)
}

fn print_links() {
    let links = links::shipped();
    println!("Links ({}):", links.len());
    for (i, card) in render::cards(&links).iter().enumerate() {
        match &card.action {
            CardAction::External { href, .. } => {
                println!("  {}. {} [{}]", i + 1, card.title, card.icon.name());
                println!("     {}", href);
            }
            CardAction::Disabled { badge } => {
                println!("  {}. {} [{}] ({})", i + 1, card.title, card.icon.name(), badge);
                if let Some(description) = &card.description {
                    println!("     {}", description);
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(linktree_core::default_data_dir);

    match cli.command {
        Commands::Links { json } => {
            if json {
                let cards = render::cards(&links::shipped());
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                print_links();
            }
        }

        Commands::Theme { action } => {
            let mut prefs = open_preferences(&data_dir);
            match action {
                ThemeAction::Show => {
                    println!("Theme: {}", prefs.theme());
                }
                ThemeAction::Set { theme } => {
                    let theme = Theme::parse(&theme)?;
                    prefs.set(theme.is_dark());
                    println!("Theme set: {}", prefs.theme());
                }
                ThemeAction::Toggle => {
                    prefs.toggle();
                    println!("Theme set: {}", prefs.theme());
                }
            }
        }

        Commands::Head => {
            print!("{}", SiteMetadata::shipped().to_html());
        }
    }

    Ok(())
}
