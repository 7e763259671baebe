//! A single named crumb.

use std::fs;
use std::io::Write;

use crate::crypto::Cipher;
use crate::editor::EditorInvoker;
use crate::error::{CrumbsError, Result};
use crate::template::{self, Bindings};

/// Stored content of a crumb.
///
/// The variant is the encryption flag, so the flag and the format of the
/// content cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    /// Literal command template
    Plain(String),
    /// Opaque ciphertext produced by a [`Cipher`]
    Encrypted(String),
}

/// Result of [`Record::edit_interactively`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// New content was written back
    Changed,
    /// The editor succeeded but the content is identical
    Unchanged,
    /// The editor failed or was abandoned; nothing was written
    Cancelled,
}

/// A named command template, plaintext or encrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    body: RecordBody,
}

impl Record {
    /// A plaintext crumb.
    pub fn plain(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: RecordBody::Plain(content.into()),
        }
    }

    /// Rebuild a crumb from its persisted fields.
    pub fn from_parts(name: impl Into<String>, content: String, is_encrypted: bool) -> Self {
        let body = if is_encrypted {
            RecordBody::Encrypted(content)
        } else {
            RecordBody::Plain(content)
        };
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self.body, RecordBody::Encrypted(_))
    }

    /// The stored content: the template, or the ciphertext when encrypted.
    pub fn content(&self) -> &str {
        match &self.body {
            RecordBody::Plain(text) | RecordBody::Encrypted(text) => text,
        }
    }

    /// The plaintext template, decrypting if needed. Never mutates.
    pub fn logical_content(&self, cipher: &dyn Cipher) -> Result<String> {
        match &self.body {
            RecordBody::Plain(text) => Ok(text.clone()),
            RecordBody::Encrypted(blob) => cipher.decrypt(blob),
        }
    }

    /// Replace the plaintext template, keeping the current encryption state.
    pub fn set_logical_content(&mut self, text: &str, cipher: &dyn Cipher) -> Result<()> {
        self.body = match &self.body {
            RecordBody::Plain(_) => RecordBody::Plain(text.to_string()),
            RecordBody::Encrypted(_) => RecordBody::Encrypted(cipher.encrypt(text)?),
        };
        Ok(())
    }

    /// Plaintext → encrypted. Leaves the crumb untouched on any failure.
    pub fn encrypt(&mut self, cipher: &dyn Cipher) -> Result<()> {
        let RecordBody::Plain(text) = &self.body else {
            return Err(CrumbsError::InvalidState(format!(
                "Crumb \"{}\" is already encrypted",
                self.name
            )));
        };
        let blob = cipher.encrypt(text)?;
        self.body = RecordBody::Encrypted(blob);
        tracing::debug!(name = %self.name, "crumb encrypted");
        Ok(())
    }

    /// Encrypted → plaintext. Leaves the crumb untouched on any failure.
    pub fn decrypt(&mut self, cipher: &dyn Cipher) -> Result<()> {
        let RecordBody::Encrypted(blob) = &self.body else {
            return Err(CrumbsError::InvalidState(format!(
                "Crumb \"{}\" is not encrypted",
                self.name
            )));
        };
        let text = cipher.decrypt(blob)?;
        self.body = RecordBody::Plain(text);
        tracing::debug!(name = %self.name, "crumb decrypted");
        Ok(())
    }

    /// Substitute `argv` into the template.
    pub fn render(&self, argv: &[String], cipher: &dyn Cipher) -> Result<String> {
        let template = self.logical_content(cipher)?;
        template::render(&template, &Bindings::new(&self.name, argv))
    }

    /// Let the user edit the plaintext template in an external editor.
    ///
    /// The plaintext goes to a private temporary file which is removed on
    /// every exit path, including errors.
    pub fn edit_interactively(
        &mut self,
        cipher: &dyn Cipher,
        editor: &dyn EditorInvoker,
    ) -> Result<EditOutcome> {
        let original = self.logical_content(cipher)?;

        let mut buffer = tempfile::Builder::new()
            .prefix("crumbs-")
            .suffix(".sh")
            .tempfile()
            .map_err(|e| CrumbsError::Io(format!("Failed to create temp file: {}", e)))?;
        buffer
            .write_all(original.as_bytes())
            .and_then(|_| buffer.flush())
            .map_err(|e| CrumbsError::Io(format!("Failed to write temp file: {}", e)))?;

        if !editor.edit(buffer.path())? {
            return Ok(EditOutcome::Cancelled);
        }

        let edited = fs::read_to_string(buffer.path())
            .map_err(|e| CrumbsError::Io(format!("Failed to read temp file: {}", e)))?;
        let edited = edited.trim_end_matches(['\n', '\r']);
        if edited == original.trim_end_matches(['\n', '\r']) {
            return Ok(EditOutcome::Unchanged);
        }

        self.set_logical_content(edited, cipher)?;
        Ok(EditOutcome::Changed)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::testing::{BROKEN, OK};

    /// Editor that writes fixed text, remembering which path it was given.
    struct ScriptedEditor {
        action: Action,
        seen: RefCell<Option<(PathBuf, String)>>,
    }

    enum Action {
        Write(&'static str),
        Keep,
        Cancel,
        Fail,
    }

    impl ScriptedEditor {
        fn new(action: Action) -> Self {
            Self {
                action,
                seen: RefCell::new(None),
            }
        }

        fn writing(text: &'static str) -> Self {
            Self::new(Action::Write(text))
        }

        fn cancelling() -> Self {
            Self::new(Action::Cancel)
        }

        fn seen_path(&self) -> PathBuf {
            self.seen.borrow().as_ref().unwrap().0.clone()
        }
    }

    impl EditorInvoker for ScriptedEditor {
        fn edit(&self, path: &Path) -> Result<bool> {
            let before = fs::read_to_string(path)?;
            *self.seen.borrow_mut() = Some((path.to_path_buf(), before));
            match self.action {
                Action::Write(text) => {
                    fs::write(path, text)?;
                    Ok(true)
                }
                Action::Keep => Ok(true),
                Action::Cancel => Ok(false),
                Action::Fail => Err(CrumbsError::Io("editor crashed".into())),
            }
        }
    }

    #[test]
    fn test_plain_logical_content_is_verbatim() {
        let record = Record::plain("ls", "ls -la {{ args[0] }}\n");
        assert_eq!(record.logical_content(&BROKEN).unwrap(), "ls -la {{ args[0] }}\n");
        assert!(!record.is_encrypted());
    }

    #[test]
    fn test_encrypt_then_decrypt_round_trips() {
        let mut record = Record::plain("db", "psql -h db.internal");
        record.encrypt(&OK).unwrap();
        assert!(record.is_encrypted());
        assert_ne!(record.content(), "psql -h db.internal");
        assert_eq!(record.logical_content(&OK).unwrap(), "psql -h db.internal");

        record.decrypt(&OK).unwrap();
        assert_eq!(record, Record::plain("db", "psql -h db.internal"));
    }

    #[test]
    fn test_wrong_state_transitions_fail_without_change() {
        let mut record = Record::plain("db", "psql");
        assert!(matches!(record.decrypt(&OK), Err(CrumbsError::InvalidState(_))));
        assert_eq!(record, Record::plain("db", "psql"));

        record.encrypt(&OK).unwrap();
        let snapshot = record.clone();
        assert!(matches!(record.encrypt(&OK), Err(CrumbsError::InvalidState(_))));
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_primitive_failure_leaves_state_untouched() {
        let mut record = Record::plain("db", "psql");
        assert!(matches!(record.encrypt(&BROKEN), Err(CrumbsError::Encryption(_))));
        assert_eq!(record, Record::plain("db", "psql"));

        record.encrypt(&OK).unwrap();
        let snapshot = record.clone();
        assert!(matches!(record.decrypt(&BROKEN), Err(CrumbsError::Decryption(_))));
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_set_logical_content_respects_state() {
        let mut record = Record::plain("x", "old");
        record.set_logical_content("new", &BROKEN).unwrap();
        assert_eq!(record.content(), "new");

        record.encrypt(&OK).unwrap();
        record.set_logical_content("newer", &OK).unwrap();
        assert!(record.is_encrypted());
        assert_eq!(record.logical_content(&OK).unwrap(), "newer");

        let snapshot = record.clone();
        assert!(record.set_logical_content("lost", &BROKEN).is_err());
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_render_uses_own_name() {
        let record = Record::plain("greet", "echo {{name}}, arg0={{args[0]}}");
        let out = record.render(&["world".to_string()], &OK).unwrap();
        assert_eq!(out, "echo greet, arg0=world");
    }

    #[test]
    fn test_render_encrypted_decrypts_first() {
        let mut record = Record::plain("greet", "echo {{ combined }}");
        record.encrypt(&OK).unwrap();
        let out = record.render(&["a b".to_string()], &OK).unwrap();
        assert_eq!(out, "echo \"a b\"");
        assert!(matches!(
            record.render(&[], &BROKEN),
            Err(CrumbsError::Decryption(_))
        ));
    }

    #[test]
    fn test_edit_writes_back_and_removes_buffer() {
        let mut record = Record::plain("x", "old command");
        let editor = ScriptedEditor::writing("new command\n");

        let outcome = record.edit_interactively(&OK, &editor).unwrap();
        assert_eq!(outcome, EditOutcome::Changed);
        assert_eq!(record.content(), "new command");

        let (path, seeded) = editor.seen.borrow().clone().unwrap();
        assert_eq!(seeded, "old command");
        assert!(!path.exists());
    }

    #[test]
    fn test_edit_encrypted_reencrypts() {
        let mut record = Record::plain("x", "secret one");
        record.encrypt(&OK).unwrap();
        let editor = ScriptedEditor::writing("secret two");

        record.edit_interactively(&OK, &editor).unwrap();
        assert!(record.is_encrypted());
        assert_eq!(record.logical_content(&OK).unwrap(), "secret two");
        assert_eq!(editor.seen.borrow().as_ref().unwrap().1, "secret one");
    }

    #[test]
    fn test_cancelled_edit_leaves_record_and_removes_buffer() {
        let mut record = Record::plain("x", "keep me");
        let editor = ScriptedEditor::cancelling();

        let outcome = record.edit_interactively(&OK, &editor).unwrap();
        assert_eq!(outcome, EditOutcome::Cancelled);
        assert_eq!(record, Record::plain("x", "keep me"));
        assert!(!editor.seen.borrow().as_ref().unwrap().0.exists());
    }

    #[test]
    fn test_unchanged_edit_is_reported() {
        let mut record = Record::plain("x", "same");
        let editor = ScriptedEditor::writing("same\n");
        assert_eq!(
            record.edit_interactively(&OK, &editor).unwrap(),
            EditOutcome::Unchanged
        );
    }

    #[test]
    fn test_untouched_buffer_keeps_trailing_newline() {
        let mut record = Record::plain("x", "line1\nline2\n");
        let editor = ScriptedEditor::new(Action::Keep);

        let outcome = record.edit_interactively(&OK, &editor).unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged);
        assert_eq!(record.content(), "line1\nline2\n");
    }

    #[test]
    fn test_untouched_encrypted_buffer_is_not_reencrypted() {
        let mut record = Record::plain("x", "secret\n");
        record.encrypt(&OK).unwrap();
        let before = record.clone();

        let outcome = record
            .edit_interactively(&OK, &ScriptedEditor::new(Action::Keep))
            .unwrap();
        assert_eq!(outcome, EditOutcome::Unchanged);
        assert_eq!(record, before);
    }

    #[test]
    fn test_failing_editor_removes_buffer() {
        let mut record = Record::plain("x", "keep me");
        let editor = ScriptedEditor::new(Action::Fail);

        assert!(record.edit_interactively(&OK, &editor).is_err());
        assert_eq!(record, Record::plain("x", "keep me"));
        assert!(!editor.seen_path().exists());
    }

    #[test]
    fn test_failed_write_back_removes_buffer() {
        let mut record = Record::plain("x", "secret");
        record.encrypt(&OK).unwrap();
        let editor = ScriptedEditor::writing("changed");

        // Decrypts with the working key, then fails to re-encrypt.
        let cipher = crate::testing::DecryptOnly;
        assert!(matches!(
            record.edit_interactively(&cipher, &editor),
            Err(CrumbsError::Encryption(_))
        ));
        assert_eq!(record.logical_content(&OK).unwrap(), "secret");
        assert!(!editor.seen_path().exists());
    }
}
