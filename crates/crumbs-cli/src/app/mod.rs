//! Application-level utilities for the Crumbs CLI.
//!
//! This module provides:
//! - Path resolution for config and store files
//! - Editor resolution
//! - The interactive passphrase source
//! - The per-invocation `AppContext`

mod context;
mod passphrase;
mod resolver;

// Re-export public API
pub use context::AppContext;
