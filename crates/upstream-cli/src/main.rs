//! Upstream Editor CLI
//!
//! The command-line interface for managing the `upstream servers { ... }`
//! block and reloading the consuming service.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;
use upstream_fs::NormalizedPath;

fn main() {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        // No verb given: print usage and exit non-success
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(2);
    };

    if let Err(e) = run(command, cli.config) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(command: Commands, config: Option<PathBuf>) -> Result<()> {
    let path = match config {
        Some(p) => NormalizedPath::new(p),
        None => upstream_fs::default_config_path()?,
    };

    match command {
        Commands::Create => commands::run_create(&path),
        Commands::List => commands::run_list(&path),
        Commands::Add { host, port } => commands::run_add(&path, &host, &port),
        Commands::Del { host, port } => commands::run_del(&path, &host, &port),
        Commands::Clear => commands::run_clear(&path),
        Commands::Reload => commands::run_reload(),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "upstream",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
