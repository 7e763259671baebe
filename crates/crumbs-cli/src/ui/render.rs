//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a simple table without borders.
///
/// Pretty mode: dim header, padded columns
/// Plain mode: `first: rest` lines, no header
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2)); // 0 left, 2 right padding
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| match row.split_first() {
                Some((first, rest)) if !rest.is_empty() => {
                    format!("{}: {}", first, rest.join(" "))
                }
                Some((first, _)) => first.clone(),
                None => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout with proper mode handling.
///
/// In JSON mode, this does nothing (JSON output should be handled separately).
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error line with optional hint.
///
/// Always starts with `Error: ` so scripts can match on it.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let label = styled("Error:", styles::err(), ctx.color);
    let mut out = format!("{} {}", label, message);
    if let Some(h) = error_hint {
        out.push('\n');
        out.push_str(&styled(h, styles::dim(), ctx.color));
    }
    out
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

/// Print a warning badge to stderr.
pub fn print_warning(ctx: &UiContext, message: &str) {
    eprintln!("{}", badge(ctx, Badge::Warn, message));
}
