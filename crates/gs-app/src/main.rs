use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod output;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Dispatcher la commande ; toute erreur remonte jusqu'ici
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&cli.command, &mut out)
}
