use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "selectmenu", version, about = "Pick one fruit and one sandwich from a menu")]
pub struct Args {
    /// Theme name (e.g., "Catppuccin Latte"), overrides the config file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Path to a config file instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
