//! Service reload command implementation

use colored::Colorize;

use upstream_core::{ReloadCommand, reload};

use crate::error::Result;

/// Run the reload command
///
/// Success mirrors the external command's exit status; on failure the
/// error carries the exit code and the child's stderr.
pub fn run_reload() -> Result<()> {
    let command = ReloadCommand::default();

    println!(
        "{} Reloading service: {}",
        "=>".blue().bold(),
        format!("{} {}", command.program, command.args.join(" "))
            .trim_end()
            .cyan()
    );

    let outcome = reload(&command)?;

    let stdout = outcome.stdout.trim();
    if !stdout.is_empty() {
        println!("{stdout}");
    }
    println!("{} Service reloaded.", "OK".green().bold());
    Ok(())
}
