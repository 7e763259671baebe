//! JSON output formatting for listings.

use crumbs_core::Listing;

/// Render a listing as a pretty JSON array.
pub fn listing_json(listing: &[Listing]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(listing)?)
}
