//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying crumb listings
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::listing_json;
pub use text::print_listing;
