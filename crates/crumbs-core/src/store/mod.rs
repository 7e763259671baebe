//! The crumb store and its YAML backing document.
//!
//! A [`Store`] is loaded once from disk, mutated in memory, and written back
//! whole with [`Store::save`]. Nothing is written incrementally.

mod row;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::crypto::Cipher;
use crate::error::{CrumbsError, Result};
use crate::record::Record;

pub use row::{parse_document, render_document, Document, RecordRow};

/// Name → crumb mapping, iterated in name order.
#[derive(Debug, Default)]
pub struct Store {
    records: BTreeMap<String, Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the document at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `CrumbsError::StoreCorrupt` if the document is not a mapping of
    /// names to `{content, is_encrypted}`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no store file yet");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(CrumbsError::Io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut records = BTreeMap::new();
        for (name, row) in parse_document(&text)? {
            validate_name(&name).map_err(|e| CrumbsError::StoreCorrupt(e.to_string()))?;
            records.insert(name.clone(), row.into_record(name));
        }
        tracing::debug!(path = %path.display(), count = records.len(), "store loaded");
        Ok(Self { records })
    }

    /// Replace the document at `path` with the current contents.
    ///
    /// The previous file is left untouched if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let document: Document = self
            .records
            .iter()
            .map(|(name, record)| (name.clone(), RecordRow::from(record)))
            .collect();
        let text = render_document(&document)?;
        crate::fs::write_atomic(path, text.as_bytes())?;
        tracing::debug!(path = %path.display(), count = self.records.len(), "store saved");
        Ok(())
    }

    /// Add a new crumb, encrypting `initial_content` when asked.
    ///
    /// Nothing is inserted if the name is taken or encryption fails.
    pub fn insert(
        &mut self,
        name: &str,
        encrypted: bool,
        initial_content: &str,
        cipher: &dyn Cipher,
    ) -> Result<&Record> {
        validate_name(name)?;
        if self.records.contains_key(name) {
            return Err(CrumbsError::DuplicateName(name.to_string()));
        }

        let mut record = Record::plain(name, initial_content);
        if encrypted {
            record.encrypt(cipher)?;
        }
        let record = self.records.entry(name.to_string()).or_insert(record);
        Ok(&*record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Delete a crumb, returning it.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| CrumbsError::NotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

/// Check a crumb name: non-empty, no surrounding whitespace, no control
/// characters. `/` is allowed and groups crumbs (`git/log`).
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CrumbsError::InvalidName("name cannot be empty".to_string()));
    }
    if name.trim() != name {
        return Err(CrumbsError::InvalidName(format!(
            "\"{}\" has leading or trailing whitespace",
            name
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(CrumbsError::InvalidName(format!(
            "{:?} contains control characters",
            name
        )));
    }
    Ok(())
}
