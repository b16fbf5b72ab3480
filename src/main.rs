use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::KeyResolver;

mod app;
mod cli;
mod component;
mod config;
mod model;
mod screen;
mod theme;
mod tui;
mod ui;
mod widget;

pub use theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting selectmenu");

    let args = cli::Args::parse();

    let config = config::load(args.config.as_deref())?;
    let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings)));

    let theme_name = args.theme.unwrap_or(config.theme.name);
    let theme = theme::find_theme(&theme_name).unwrap_or_else(|| {
        warn!("Unknown theme {theme_name:?}, falling back to {}", theme::DEFAULT_THEME);
        Theme::default()
    });

    let mut app = App::new(resolver, theme);
    app.run().await?;

    Ok(())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("selectmenu").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "selectmenu.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
