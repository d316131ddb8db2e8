//! Parsing of the managed file format
//!
//! The file is scanned line by line for the literal block markers:
//! ```text
//! upstream servers {
//!     server 127.0.0.1:8080;
//! }
//! ```
//! Text before the opening marker and after the closing marker is kept
//! verbatim. Lines inside the block that do not match the entry pattern
//! are preserved in position but are not entries.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{BlockLine, Document, Entry};
use crate::error::{Error, Result};

/// Opening marker line of the managed block.
pub const OPEN_MARKER: &str = "upstream servers {";

/// Closing marker line of the managed block.
pub const CLOSE_MARKER: &str = "}";

/// Matches one entry line: the `server` keyword, `host:port`, terminator.
/// Host and port are taken literally; neither may contain a colon.
static ENTRY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*server\s+([^\s:]+):([^\s:;]+);\s*$").expect("Invalid entry line regex")
});

enum State {
    Preamble,
    Block,
    Epilogue,
}

/// Parse file content into a [`Document`].
///
/// Fails with [`Error::Malformed`] when the opening marker is absent,
/// appears more than once, or the closing marker is missing. A malformed
/// file is never repaired; the caller surfaces the error and leaves the
/// file untouched.
pub fn parse(content: &str) -> Result<Document> {
    let mut state = State::Preamble;
    let mut preamble = String::new();
    let mut lines = Vec::new();
    let mut epilogue = String::new();

    for raw in content.split_inclusive('\n') {
        let line = raw.trim_end_matches('\n').trim_end_matches('\r');
        match state {
            State::Preamble => {
                if line == OPEN_MARKER {
                    state = State::Block;
                } else {
                    preamble.push_str(raw);
                }
            }
            State::Block => {
                if line == OPEN_MARKER {
                    return Err(Error::malformed(format!(
                        "opening marker `{OPEN_MARKER}` appears more than once"
                    )));
                }
                if line == CLOSE_MARKER {
                    state = State::Epilogue;
                } else if let Some(caps) = ENTRY_LINE_REGEX.captures(line) {
                    lines.push(BlockLine::Entry(Entry::new(&caps[1], &caps[2])));
                } else {
                    lines.push(BlockLine::Raw(line.to_string()));
                }
            }
            State::Epilogue => {
                if line == OPEN_MARKER {
                    return Err(Error::malformed(format!(
                        "opening marker `{OPEN_MARKER}` appears more than once"
                    )));
                }
                epilogue.push_str(raw);
            }
        }
    }

    match state {
        State::Preamble => Err(Error::malformed(format!(
            "opening marker `{OPEN_MARKER}` not found"
        ))),
        State::Block => Err(Error::malformed(format!(
            "closing marker `{CLOSE_MARKER}` not found before end of file"
        ))),
        State::Epilogue => Ok(Document {
            preamble,
            lines,
            epilogue,
        }),
    }
}
