//! One load → operate → save cycle over the store.
//!
//! A [`Session`] owns the loaded [`Store`] for the lifetime of a single
//! command. Every operation checks its preconditions before touching the
//! store, and [`Session::commit`] writes the document back only when an
//! operation actually changed something.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::crypto::Cipher;
use crate::editor::EditorInvoker;
use crate::error::{CrumbsError, Result};
use crate::record::{EditOutcome, Record};
use crate::runner::CommandRunner;
use crate::store::Store;

/// One line of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: String,
    pub encrypted: bool,
    /// Plaintext template, only for detailed listings of unencrypted crumbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// What `edit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditReport {
    /// The crumb did not exist and a plaintext placeholder was created.
    pub created: bool,
    pub outcome: EditOutcome,
}

pub struct Session<'c> {
    path: PathBuf,
    store: Store,
    cipher: &'c dyn Cipher,
    dirty: bool,
}

impl<'c> Session<'c> {
    /// Load the store at `path`.
    pub fn open(path: impl Into<PathBuf>, cipher: &'c dyn Cipher) -> Result<Self> {
        let path = path.into();
        let store = Store::load(&path)?;
        Ok(Self {
            path,
            store,
            cipher,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Whether an operation has changed the store since it was loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn record(&self, name: &str) -> Result<&Record> {
        self.store
            .get(name)
            .ok_or_else(|| CrumbsError::NotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.store
            .get_mut(name)
            .ok_or_else(|| CrumbsError::NotFound(name.to_string()))
    }

    /// Crumbs whose name starts with `prefix`, in name order.
    ///
    /// Encrypted crumbs are never decrypted for listing.
    pub fn list(&self, prefix: Option<&str>, detailed: bool) -> Vec<Listing> {
        self.store
            .iter()
            .filter(|record| prefix.map_or(true, |p| record.name().starts_with(p)))
            .map(|record| Listing {
                name: record.name().to_string(),
                encrypted: record.is_encrypted(),
                content: match detailed && !record.is_encrypted() {
                    true => Some(record.content().to_string()),
                    false => None,
                },
            })
            .collect()
    }

    pub fn insert(&mut self, name: &str, cmdline: &str, encrypt: bool) -> Result<()> {
        self.store.insert(name, encrypt, cmdline, self.cipher)?;
        self.dirty = true;
        tracing::debug!(name, encrypt, "crumb inserted");
        Ok(())
    }

    /// The plaintext template of `name`.
    pub fn show(&self, name: &str) -> Result<String> {
        self.record(name)?.logical_content(self.cipher)
    }

    pub fn render(&self, name: &str, argv: &[String]) -> Result<String> {
        self.record(name)?.render(argv, self.cipher)
    }

    /// Render `name` and run it, returning the command's exit code.
    pub fn exec(&self, name: &str, argv: &[String], runner: &dyn CommandRunner) -> Result<i32> {
        let command_line = self.render(name, argv)?;
        let code = runner.run(&command_line)?;
        tracing::debug!(name, code, "command finished");
        Ok(code)
    }

    /// Edit `name` in an external editor, creating it first if missing.
    ///
    /// A created placeholder only survives if the editor succeeds.
    pub fn edit(&mut self, name: &str, editor: &dyn EditorInvoker) -> Result<EditReport> {
        let created = !self.store.has(name);
        if created {
            self.store.insert(name, false, "", self.cipher)?;
        }

        let cipher = self.cipher;
        let outcome = match self.record_mut(name)?.edit_interactively(cipher, editor) {
            Ok(outcome) => outcome,
            Err(e) => {
                if created {
                    let _ = self.store.remove(name);
                }
                return Err(e);
            }
        };

        match (created, outcome) {
            (true, EditOutcome::Cancelled) => {
                self.store.remove(name)?;
            }
            (true, _) | (false, EditOutcome::Changed) => self.dirty = true,
            (false, _) => {}
        }
        tracing::debug!(name, created, ?outcome, "edit finished");
        Ok(EditReport { created, outcome })
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.store.remove(name)?;
        self.dirty = true;
        tracing::debug!(name, "crumb deleted");
        Ok(())
    }

    pub fn encrypt(&mut self, name: &str) -> Result<()> {
        let cipher = self.cipher;
        self.record_mut(name)?.encrypt(cipher)?;
        self.dirty = true;
        Ok(())
    }

    pub fn decrypt(&mut self, name: &str) -> Result<()> {
        let cipher = self.cipher;
        self.record_mut(name)?.decrypt(cipher)?;
        self.dirty = true;
        Ok(())
    }

    /// Persist the store if it changed. Returns whether it was written.
    pub fn commit(self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }
        self.store.save(&self.path)?;
        Ok(true)
    }
}
