//! Plain-text table rendering for marketplace listings
//!
//! Rendering is pure: it takes the column names, the records and the base
//! URL (for image links), and returns the lines to print. Nothing here
//! touches the network, so the layout can be tested on its own.

use crate::marketplace::{resolve_image_url, IMAGE_URL_COLUMN};
use reqwest::Url;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Rendered in place of a field the record doesn't have.
pub const MISSING_PLACEHOLDER: &str = "N/A";

/// Rendered in place of a field that is present but null or empty.
pub const EMPTY_PLACEHOLDER: &str = "null";

pub const COLUMN_SEPARATOR: &str = " | ";

/// **Text shown in a single cell**
///
/// - Missing field: [`MISSING_PLACEHOLDER`].
/// - Null or empty string: [`EMPTY_PLACEHOLDER`].
/// - Strings as they are, without quotes.
/// - Everything else as compact JSON.
///
/// Image links in the [`IMAGE_URL_COLUMN`] are resolved against the base URL.
pub fn cell_text(record: &Value, column: &str, base_url: &Url) -> String {
    let text = match record.get(column) {
        None => return MISSING_PLACEHOLDER.to_string(),
        Some(Value::Null) => return EMPTY_PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => return EMPTY_PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    if column == IMAGE_URL_COLUMN {
        resolve_image_url(&text, base_url)
    } else {
        text
    }
}

/// **Width of every column**
///
/// The larger of the header label and the widest cell in that column.
pub fn column_widths(columns: &[&str], cells: &[Vec<String>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            cells
                .iter()
                .map(|row| row[idx].width())
                .fold(column.width(), usize::max)
        })
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn join_row<S: AsRef<str>>(row: &[S], widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .map(|(text, &width)| pad(text.as_ref(), width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// **Renders records as an aligned text table**
///
/// Produces, in order:
/// - the header row with upper-cased column labels;
/// - a dashed line as wide as the header row;
/// - one row per record, in input order;
/// - a closing dashed line.
///
/// So `N` records always give `N + 3` lines.
pub fn render_table(columns: &[&str], records: &[Value], base_url: &Url) -> Vec<String> {
    let cells = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| cell_text(record, column, base_url))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = column_widths(columns, &cells);

    let labels = columns
        .iter()
        .map(|column| column.to_uppercase())
        .collect::<Vec<_>>();
    let header = join_row(&labels, &widths);
    let rule = "-".repeat(header.width());

    let mut lines = Vec::with_capacity(cells.len() + 3);
    lines.push(header);
    lines.push(rule.clone());
    lines.extend(cells.iter().map(|row| join_row(row, &widths)));
    lines.push(rule);

    lines
}
