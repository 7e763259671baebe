//! Persisted form of a crumb.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CrumbsError, Result};
use crate::record::Record;

/// Raw document entry, before turning into a [`Record`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordRow {
    pub content: String,
    pub is_encrypted: bool,
}

/// The whole backing document: crumb name → row.
pub type Document = BTreeMap<String, RecordRow>;

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            content: record.content().to_string(),
            is_encrypted: record.is_encrypted(),
        }
    }
}

impl RecordRow {
    pub fn into_record(self, name: String) -> Record {
        Record::from_parts(name, self.content, self.is_encrypted)
    }
}

/// Parse a YAML document. Blank input and a bare `null` are an empty store.
pub fn parse_document(text: &str) -> Result<Document> {
    if text.trim().is_empty() {
        return Ok(Document::new());
    }
    let parsed: Option<Document> =
        serde_yaml::from_str(text).map_err(|e| CrumbsError::StoreCorrupt(e.to_string()))?;
    Ok(parsed.unwrap_or_default())
}

pub fn render_document(document: &Document) -> Result<String> {
    serde_yaml::to_string(document)
        .map_err(|e| CrumbsError::Io(format!("Failed to serialize store: {}", e)))
}
