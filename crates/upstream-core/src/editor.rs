//! Editor operations over the managed file
//!
//! Each operation is one load → mutate → render → atomic save cycle.
//! Every operation except `create` preflights the file first: it must
//! exist and be openable for read and write before any parsing happens.
//! Mutating operations that find nothing to do (`add` of an existing
//! pair, `remove` of an absent pair) fail without writing, so the file
//! on disk stays byte-identical.

use upstream_blocks::{BlockStore, Document, Entry};
use upstream_fs::{NormalizedPath, io};

use crate::error::{Error, Result};

/// The operation layer over one managed file.
///
/// Holds no document state; the file path is the only configuration.
#[derive(Debug, Clone)]
pub struct Editor {
    store: BlockStore,
}

impl Editor {
    pub fn new(path: NormalizedPath) -> Self {
        Self {
            store: BlockStore::new(path),
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        self.store.path()
    }

    fn preflight(&self) -> Result<()> {
        io::check_read_write(self.store.path())?;
        Ok(())
    }

    /// Create the managed file with an empty block.
    ///
    /// Fails with [`Error::AlreadyExists`] when the target is present;
    /// parent directories are created as needed.
    pub fn create(&self) -> Result<()> {
        let path = self.store.path();
        if path.exists() {
            return Err(Error::AlreadyExists {
                path: path.to_native(),
            });
        }
        tracing::debug!(path = %path, "creating empty upstream file");
        self.store.save(&Document::empty())?;
        Ok(())
    }

    /// The block's entries in file order.
    ///
    /// An empty block is a normal result, not an error.
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.preflight()?;
        let document = self.store.load()?;
        Ok(document.entries().into_iter().cloned().collect())
    }

    /// Add a server as the first entry of the block.
    ///
    /// Fails with [`Error::DuplicateEntry`] when the literal (host, port)
    /// pair is already present; the file is not written in that case.
    /// Returns the updated entry list.
    pub fn add(&self, host: &str, port: &str) -> Result<Vec<Entry>> {
        self.preflight()?;
        let mut document = self.store.load()?;

        if document.contains(host, port) {
            return Err(Error::DuplicateEntry {
                host: host.to_string(),
                port: port.to_string(),
            });
        }

        document.insert_first(Entry::new(host, port));
        self.store.save(&document)?;
        tracing::debug!(host, port, "added upstream server");

        Ok(document.entries().into_iter().cloned().collect())
    }

    /// Remove the server with the exact (host, port) pair.
    ///
    /// Fails with [`Error::EntryNotFound`] when the pair is absent; the
    /// file is not written in that case. Returns the updated entry list.
    pub fn remove(&self, host: &str, port: &str) -> Result<Vec<Entry>> {
        self.preflight()?;
        let mut document = self.store.load()?;

        if !document.remove(host, port) {
            return Err(Error::EntryNotFound {
                host: host.to_string(),
                port: port.to_string(),
            });
        }

        self.store.save(&document)?;
        tracing::debug!(host, port, "removed upstream server");

        Ok(document.entries().into_iter().cloned().collect())
    }

    /// Empty the block unconditionally, leaving the same state `create`
    /// produces. Preamble and epilogue survive.
    pub fn clear(&self) -> Result<()> {
        self.preflight()?;
        let mut document = self.store.load()?;
        document.clear();
        self.store.save(&document)?;
        tracing::debug!(path = %self.store.path(), "cleared upstream block");
        Ok(())
    }
}
