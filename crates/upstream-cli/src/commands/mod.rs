//! Command implementations for upstream-cli

pub mod edit;
pub mod reload;

pub use edit::{run_add, run_clear, run_create, run_del, run_list};
pub use reload::run_reload;
