//! Block store for the managed upstream file
//!
//! Treats the file as a semi-structured document: arbitrary preamble, one
//! `upstream servers { ... }` block holding an ordered list of
//! `server host:port;` entries, arbitrary epilogue. Parsing and rendering
//! surgically touch only the block's entries; everything else round-trips
//! verbatim.

pub mod document;
pub mod error;
pub mod parser;
pub mod store;

pub use document::{Document, Entry};
pub use error::{Error, Result};
pub use parser::{CLOSE_MARKER, OPEN_MARKER, parse};
pub use store::BlockStore;
