use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crumbs_core::{AgeCipher, CrumbsError, Session, StaticPassphrase, Store};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.yaml", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_encrypted_crumb_survives_reload() {
    let temp = TempFile::new("crumbs_encrypted_round_trip");
    let cipher = AgeCipher::new(StaticPassphrase::new("test-passphrase-secure-123"));

    let mut session = Session::open(&temp.path, &cipher).expect("open should succeed");
    session
        .insert("db", "psql -h {{ args[0] }}", true)
        .expect("insert should succeed");
    assert!(session.commit().expect("commit should succeed"));

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert!(on_disk.contains("-----BEGIN AGE ENCRYPTED FILE-----"));
    assert!(!on_disk.contains("psql"));

    let cipher = AgeCipher::new(StaticPassphrase::new("test-passphrase-secure-123"));
    let session = Session::open(&temp.path, &cipher).expect("reopen should succeed");
    assert_eq!(
        session.render("db", &["db.internal".to_string()]).unwrap(),
        "psql -h db.internal"
    );
}

#[test]
fn test_wrong_passphrase_cannot_show() {
    let temp = TempFile::new("crumbs_wrong_passphrase");
    let cipher = AgeCipher::new(StaticPassphrase::new("correct-passphrase-123"));

    let mut session = Session::open(&temp.path, &cipher).unwrap();
    session.insert("secret", "echo hunter2", true).unwrap();
    session.commit().unwrap();

    let wrong = AgeCipher::new(StaticPassphrase::new("wrong-passphrase-456"));
    let session = Session::open(&temp.path, &wrong).unwrap();
    assert!(matches!(
        session.show("secret"),
        Err(CrumbsError::Decryption(_))
    ));
}

#[test]
fn test_decrypt_rewrites_plaintext() {
    let temp = TempFile::new("crumbs_decrypt");
    let cipher = AgeCipher::new(StaticPassphrase::new("test-passphrase-secure-123"));

    let mut session = Session::open(&temp.path, &cipher).unwrap();
    session.insert("x", "echo one", true).unwrap();
    session.decrypt("x").unwrap();
    session.commit().unwrap();

    let store = Store::load(&temp.path).unwrap();
    let record = store.get("x").unwrap();
    assert!(!record.is_encrypted());
    assert_eq!(record.content(), "echo one");
}

#[test]
fn test_hand_written_document_loads() {
    let temp = TempFile::new("crumbs_hand_written");
    fs::write(
        &temp.path,
        "greet:\n  content: 'echo {{ name }} {{ args | join(\" \") }}'\n  is_encrypted: false\n",
    )
    .unwrap();

    let cipher = AgeCipher::new(StaticPassphrase::new("unused-passphrase"));
    let session = Session::open(&temp.path, &cipher).unwrap();
    let argv = vec!["a".to_string(), "b".to_string()];
    assert_eq!(session.render("greet", &argv).unwrap(), "echo greet a b");
}
