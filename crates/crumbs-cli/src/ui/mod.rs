//! UI primitives for the Crumbs CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color styling
//! - **Render**: Tables, badges, hints, error lines

mod context;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, print, print_error, print_warning, simple_table, Column};
