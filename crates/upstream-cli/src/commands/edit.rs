//! Server list command implementations
//!
//! Thin dispatch over [`upstream_core::Editor`]: validate nothing
//! ourselves, run the operation, format the outcome for humans.

use colored::Colorize;

use upstream_blocks::Entry;
use upstream_core::{Editor, Error as CoreError};
use upstream_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Run the create command
pub fn run_create(path: &NormalizedPath) -> Result<()> {
    println!(
        "{} Creating upstream file: {}",
        "=>".blue().bold(),
        path.as_str().cyan()
    );

    Editor::new(path.clone()).create()?;

    println!("{} Created with an empty server block.", "OK".green().bold());
    Ok(())
}

/// Run the list command
pub fn run_list(path: &NormalizedPath) -> Result<()> {
    let entries = map_missing(Editor::new(path.clone()).list(), path)?;
    print_entries(&entries);
    Ok(())
}

/// Run the add command, printing the updated server list
pub fn run_add(path: &NormalizedPath, host: &str, port: &str) -> Result<()> {
    println!(
        "{} Adding server: {}",
        "=>".blue().bold(),
        format!("{host}:{port}").cyan()
    );

    let entries = map_missing(Editor::new(path.clone()).add(host, port), path)?;

    println!("{} Server added.", "OK".green().bold());
    print_entries(&entries);
    Ok(())
}

/// Run the del command, printing the updated server list
pub fn run_del(path: &NormalizedPath, host: &str, port: &str) -> Result<()> {
    println!(
        "{} Removing server: {}",
        "=>".blue().bold(),
        format!("{host}:{port}").cyan()
    );

    let entries = map_missing(Editor::new(path.clone()).remove(host, port), path)?;

    println!("{} Server removed.", "OK".green().bold());
    print_entries(&entries);
    Ok(())
}

/// Run the clear command
pub fn run_clear(path: &NormalizedPath) -> Result<()> {
    println!(
        "{} Clearing all servers from: {}",
        "=>".blue().bold(),
        path.as_str().cyan()
    );

    map_missing(Editor::new(path.clone()).clear(), path)?;

    println!("{} Server block is now empty.", "OK".green().bold());
    Ok(())
}

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("   (no servers)");
        return;
    }
    for entry in entries {
        println!("   {} {}", "-".cyan(), entry);
    }
}

/// A missing file is operator-correctable; point at the create command.
fn map_missing<T>(result: upstream_core::Result<T>, path: &NormalizedPath) -> Result<T> {
    result.map_err(|e| match e {
        CoreError::Fs(upstream_fs::Error::NotFound { .. }) => CliError::user(format!(
            "Upstream file not found: {path}. Run 'upstream create' first."
        )),
        other => CliError::Core(other),
    })
}
