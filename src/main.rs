//! audiolib CLI
//!
//! Command-line interface for PCM conversion and WAV inspection.

use std::process;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use audiolib::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).try_init()?;

    info!("audiolib v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Info { paths, json } => commands::info(&paths, json),
        Commands::Convert {
            input,
            output,
            encoding,
        } => commands::convert(&input, &output, encoding),
        Commands::Table { path } => commands::table(&path),
    };

    if let Err(err) = result {
        error!("[{}] {}", err.error_code(), err);
        if err.is_recoverable() {
            for suggestion in err.recovery_suggestions() {
                error!("  - {}", suggestion);
            }
        }
        process::exit(1);
    }

    Ok(())
}
