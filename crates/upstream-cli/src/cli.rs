//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Upstream Editor - manage the nginx upstream server list
#[derive(Parser, Debug)]
#[command(name = "upstream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the managed upstream file
    #[arg(short, long, global = true, env = "UPSTREAM_CONF", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the upstream file with an empty server block
    ///
    /// Fails if the file already exists. Parent directories are
    /// created as needed.
    Create,

    /// List configured servers in file order
    List,

    /// Add a server to the pool
    ///
    /// The new server is inserted at the top of the block, so the most
    /// recent add is listed first. Host and port are taken literally;
    /// adding an already-configured pair is an error.
    ///
    /// Examples:
    ///   upstream add 127.0.0.1 8080
    Add {
        /// Server host (literal, no normalization)
        host: String,

        /// Server port (literal, no numeric parsing)
        port: String,
    },

    /// Delete a server from the pool
    Del {
        /// Server host to remove
        host: String,

        /// Server port to remove
        port: String,
    },

    /// Remove every server from the block
    Clear,

    /// Reload the consuming service
    ///
    /// Runs the external reload command and reports its exit status.
    /// Typically requires elevated privilege.
    Reload,

    /// Generate shell completions
    ///
    /// Examples:
    ///   upstream completions bash > ~/.local/share/bash-completion/completions/upstream
    ///   upstream completions zsh > ~/.zfunc/_upstream
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
