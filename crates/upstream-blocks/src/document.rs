//! In-memory document model for the managed file

use std::fmt;

use crate::parser::{CLOSE_MARKER, OPEN_MARKER};

/// One backend address inside the block.
///
/// Identity is the literal (host, port) string pair. No normalization is
/// applied: `LOCALHOST` and `localhost` are distinct, as are ports `080`
/// and `80`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    host: String,
    port: String,
}

impl Entry {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Exact (host, port) comparison.
    pub fn matches(&self, host: &str, port: &str) -> bool {
        self.host == host && self.port == port
    }

    /// The canonical line form inside the block: 4-space indent, `server`
    /// keyword, `host:port`, statement terminator.
    pub fn render(&self) -> String {
        format!("    server {}:{};", self.host, self.port)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// One line between the block markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BlockLine {
    Entry(Entry),
    /// Non-entry text, preserved in position for round-trip fidelity.
    Raw(String),
}

/// The whole file in memory: preamble, block lines, epilogue.
///
/// Constructed fresh on every invocation (from [`crate::parse`] or
/// [`Document::empty`]), mutated by exactly one operation, then rendered
/// back to text. The file on disk is the only persistent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) preamble: String,
    pub(crate) lines: Vec<BlockLine>,
    pub(crate) epilogue: String,
}

impl Document {
    /// A document with an empty block and no surrounding text.
    ///
    /// Renders as exactly `upstream servers {\n}\n`.
    pub fn empty() -> Self {
        Self {
            preamble: String::new(),
            lines: Vec::new(),
            epilogue: String::new(),
        }
    }

    /// The block's entries in file order.
    pub fn entries(&self) -> Vec<&Entry> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                BlockLine::Entry(entry) => Some(entry),
                BlockLine::Raw(_) => None,
            })
            .collect()
    }

    /// Whether an entry with the exact (host, port) pair exists.
    pub fn contains(&self, host: &str, port: &str) -> bool {
        self.entries().iter().any(|e| e.matches(host, port))
    }

    /// Insert as the first block line, immediately after the opening
    /// marker. The most recently added entry therefore lists first.
    pub fn insert_first(&mut self, entry: Entry) {
        self.lines.insert(0, BlockLine::Entry(entry));
    }

    /// Remove the entry with the exact (host, port) pair.
    ///
    /// Returns whether an entry was removed. Raw lines are never touched.
    pub fn remove(&mut self, host: &str, port: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| match line {
            BlockLine::Entry(entry) => !entry.matches(host, port),
            BlockLine::Raw(_) => true,
        });
        self.lines.len() != before
    }

    /// Drop every block line, entry or not, leaving the empty-block
    /// state. Preamble and epilogue are untouched.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Render the document back to text: preamble, opening marker, block
    /// lines in order, closing marker, epilogue.
    ///
    /// Deterministic, and a fixed point under parse: rendering a parsed
    /// rendering yields the same text.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len() + self.epilogue.len() + 32 * (self.lines.len() + 2),
        );
        out.push_str(&self.preamble);
        out.push_str(OPEN_MARKER);
        out.push('\n');
        for line in &self.lines {
            match line {
                BlockLine::Entry(entry) => out.push_str(&entry.render()),
                BlockLine::Raw(raw) => out.push_str(raw),
            }
            out.push('\n');
        }
        out.push_str(CLOSE_MARKER);
        out.push('\n');
        out.push_str(&self.epilogue);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_renders_bare_block() {
        assert_eq!(Document::empty().render(), "upstream servers {\n}\n");
    }

    #[test]
    fn entry_renders_canonical_line() {
        let entry = Entry::new("127.0.0.1", "8080");
        assert_eq!(entry.render(), "    server 127.0.0.1:8080;");
        assert_eq!(entry.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn insert_first_puts_newest_entry_on_top() {
        let mut doc = Document::empty();
        doc.insert_first(Entry::new("10.0.0.1", "80"));
        doc.insert_first(Entry::new("10.0.0.2", "81"));

        let entries = doc.entries();
        assert_eq!(entries[0].to_string(), "10.0.0.2:81");
        assert_eq!(entries[1].to_string(), "10.0.0.1:80");
        assert_eq!(
            doc.render(),
            "upstream servers {\n    server 10.0.0.2:81;\n    server 10.0.0.1:80;\n}\n"
        );
    }

    #[test]
    fn remove_deletes_only_the_matching_entry() {
        let mut doc = Document::empty();
        doc.insert_first(Entry::new("10.0.0.1", "80"));
        doc.insert_first(Entry::new("10.0.0.2", "81"));

        assert!(doc.remove("10.0.0.1", "80"));
        assert!(!doc.remove("10.0.0.1", "80"));

        let entries = doc.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].to_string(), "10.0.0.2:81");
    }

    #[test]
    fn identity_is_literal_no_port_normalization() {
        let mut doc = Document::empty();
        doc.insert_first(Entry::new("a", "80"));

        assert!(!doc.contains("a", "080"));
        assert!(!doc.contains("A", "80"));
        assert!(doc.contains("a", "80"));
    }

    #[test]
    fn clear_drops_every_block_line() {
        let mut doc = Document::empty();
        doc.insert_first(Entry::new("a", "1"));
        doc.lines.push(BlockLine::Raw("    # stray comment".to_string()));
        doc.insert_first(Entry::new("b", "2"));

        doc.clear();

        assert!(doc.entries().is_empty());
        assert_eq!(doc.render(), "upstream servers {\n}\n");
    }

    #[test]
    fn clear_twice_is_idempotent() {
        let mut doc = Document::empty();
        doc.insert_first(Entry::new("a", "1"));

        doc.clear();
        let first = doc.render();
        doc.clear();
        assert_eq!(doc.render(), first);
    }

    #[test]
    fn render_keeps_preamble_and_epilogue_verbatim() {
        let doc = Document {
            preamble: "# managed file\n\n".to_string(),
            lines: vec![BlockLine::Entry(Entry::new("a", "1"))],
            epilogue: "\n# trailing note\n".to_string(),
        };
        assert_eq!(
            doc.render(),
            "# managed file\n\nupstream servers {\n    server a:1;\n}\n\n# trailing note\n"
        );
    }
}
