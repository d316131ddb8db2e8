//! Core operations for Upstream Editor
//!
//! Sits between the CLI and the storage crates:
//!
//! - the [`Editor`] drives one load → mutate → save cycle per operation
//!   over the block store, enforcing entry uniqueness and idempotence;
//! - [`reload`] triggers the consuming service to re-read its
//!   configuration via an external command.
//!
//! ```text
//!        CLI
//!         |
//!   upstream-core
//!         |
//!   +-----+--------+
//!   |              |
//! upstream-blocks upstream-fs
//! ```

pub mod editor;
pub mod error;
pub mod reload;

pub use editor::Editor;
pub use error::{Error, Result};
pub use reload::{ReloadCommand, ReloadOutcome, reload};
