//! # Crumbs Core
//!
//! Core library for Crumbs - a store of named, optionally encrypted shell
//! command templates.
//!
//! This crate holds the domain logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **record**: a single crumb and its plaintext/encrypted state machine
//! - **store**: the name → crumb mapping and its YAML document
//! - **template**: positional-argument rendering
//! - **crypto**: the [`Cipher`] capability and its age implementation
//! - **editor** / **runner**: external editor and shell capabilities
//! - **session**: one load → operate → save cycle

pub mod crypto;
pub mod editor;
pub mod error;
pub mod fs;
pub mod record;
pub mod runner;
pub mod session;
pub mod store;
pub mod template;

#[cfg(test)]
mod testing;

pub use crypto::{AgeCipher, Cipher, PassphraseSource, StaticPassphrase};
pub use editor::{CommandEditor, EditorInvoker};
pub use error::{CrumbsError, Result};
pub use record::{EditOutcome, Record, RecordBody};
pub use runner::{CommandRunner, ShellRunner};
pub use session::{EditReport, Listing, Session};
pub use store::Store;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
