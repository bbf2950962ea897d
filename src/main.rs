#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use linktree_core::SiteMetadata;

use crate::context::SharedStore;

/// AK1RA Link Tree - desktop view
#[derive(Parser, Debug)]
#[command(name = "linktree-desktop")]
#[command(about = "Personal link tree with a persistent dark/light theme")]
struct Args {
    /// Data directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: linktree-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 520.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

impl Args {
    fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        let base = linktree_core::default_data_dir();
        match &self.name {
            Some(name) => base.with_file_name(format!("linktree-{}", name)),
            None => base,
        }
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    setup_logging();

    let args = Args::parse();
    let data_dir = args.data_dir();
    let metadata = SiteMetadata::shipped();

    tracing::info!("Starting with data dir: {:?}", data_dir);

    let store = SharedStore::open_or_memory(&data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(metadata.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(store)
        .launch(app::App);
}
