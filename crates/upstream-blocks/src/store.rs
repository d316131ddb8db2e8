//! Load and save of the managed document

use upstream_fs::{NormalizedPath, io};

use crate::document::Document;
use crate::error::Result;
use crate::parser;

/// Reads and writes the managed file as a [`Document`].
///
/// Each load reads the whole file from disk and each save rewrites it
/// atomically; there is no in-memory state between operations.
#[derive(Debug, Clone)]
pub struct BlockStore {
    path: NormalizedPath,
}

impl BlockStore {
    pub fn new(path: NormalizedPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Read and parse the file.
    pub fn load(&self) -> Result<Document> {
        let content = io::read_text(&self.path)?;
        parser::parse(&content)
    }

    /// Render and atomically write the document.
    pub fn save(&self, document: &Document) -> Result<()> {
        tracing::debug!(
            path = %self.path,
            entries = document.entries().len(),
            "saving upstream document"
        );
        io::write_atomic(&self.path, document.render().as_bytes())?;
        Ok(())
    }
}
