//! Row parsing for the published menu sheet.
//!
//! The export is plain comma-separated text: first row a header, fields
//! optionally double-quoted to allow embedded commas. Column order is
//! positional: identifier, category, name, price, image, and an optional
//! sixth per-item image. A row yields an item only if every required field
//! is non-empty after trimming/unquoting and the price parses non-negative;
//! anything else is dropped silently and never produces a partial item.

use samovar_core::{Currency, Item, ItemId, Price};

/// Required column count: id, category, name, price, image.
const MIN_COLUMNS: usize = 5;

/// Parse the full CSV export into items, in row order.
///
/// The first line is discarded as the header. Blank lines and malformed
/// rows are skipped.
#[must_use]
pub fn parse_menu(csv: &str, currency: Currency) -> Vec<Item> {
    csv.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_row(line, currency))
        .collect()
}

/// Parse a single data row, or `None` if it fails any validation check.
fn parse_row(line: &str, currency: Currency) -> Option<Item> {
    let fields = split_fields(line);
    if fields.len() < MIN_COLUMNS {
        return None;
    }

    let mut fields = fields.into_iter();
    let id = fields.next()?;
    let category = fields.next()?;
    let name = fields.next()?;
    let raw_price = fields.next()?;
    let image = fields.next()?;
    let item_image = fields.next().filter(|s| !s.is_empty());

    if id.is_empty() || category.is_empty() || name.is_empty() || image.is_empty() {
        return None;
    }
    let price = Price::parse(&raw_price, currency).ok()?;

    Some(Item {
        id: ItemId::new(id),
        category,
        name,
        price,
        image,
        item_image,
    })
}

/// Split one line into fields, honoring double-quoted fields with embedded
/// commas. Each field is trimmed and unquoted.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut raw = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                raw.push(c);
            }
            ',' if !in_quotes => {
                fields.push(clean_field(&raw));
                raw.clear();
            }
            _ => raw.push(c),
        }
    }
    fields.push(clean_field(&raw));
    fields
}

/// Trim surrounding whitespace, strip one pair of surrounding quotes, and
/// collapse doubled quotes (the export's escape for a literal quote).
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.replace("\"\"", "\"")
}
