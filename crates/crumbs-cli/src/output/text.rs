//! Text and table output formatting for listings.

use crumbs_core::Listing;

use crate::ui::{print, simple_table, Column, UiContext};

/// Shown in place of the command of an encrypted crumb.
pub const ENCRYPTED_MARKER: &str = "<encrypted>";

/// Print names, or names with commands when `detailed`.
pub fn print_listing(ctx: &UiContext, listing: &[Listing], detailed: bool) {
    if listing.is_empty() {
        return;
    }
    if !detailed {
        for item in listing {
            print(ctx, &item.name);
        }
        return;
    }

    let rows: Vec<Vec<String>> = listing
        .iter()
        .map(|item| {
            let command = item
                .content
                .clone()
                .unwrap_or_else(|| ENCRYPTED_MARKER.to_string());
            vec![item.name.clone(), command]
        })
        .collect();
    print(
        ctx,
        &simple_table(ctx, &[Column::new("NAME"), Column::new("COMMAND")], &rows),
    );
}
