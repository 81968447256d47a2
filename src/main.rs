use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use todoman::core::config::{self, TodomanConfig};
use todoman::tui;

#[derive(Parser)]
#[command(name = "todoman", about = "Terminal todo list manager")]
struct Args {
    /// Todo data file (overrides `storage.data_file`)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Read this config file instead of ~/.todoman/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        eprintln!("Ignoring config: {e}");
        TodomanConfig::default()
    });
    let resolved = config::resolve(&file_config, args.file.as_deref());

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    for warning in &resolved.warnings {
        eprintln!("{warning}");
        log::warn!("{}", warning);
    }
    match &args.config {
        Some(path) => log::info!("Using config at {}", path.display()),
        None => config::ensure_default_config(),
    }

    log::info!(
        "todoman starting with data file {} (max {} todos)",
        resolved.data_file.display(),
        resolved.max_todos
    );

    tui::run(&resolved)
}
