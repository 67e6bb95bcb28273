/// Normalize a header or row-label cell for comparison: surrounding
/// whitespace and a leading byte-order marker are stripped, then lowercased.
///
/// Sheets exported from spreadsheet tools routinely carry a BOM on the very
/// first cell, which would otherwise make `date` unrecognizable.
#[must_use]
pub fn normalize_label(value: &str) -> String {
    value.trim().trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Find the position of the first header cell matching any alias.
///
/// Headers are expected to be pre-normalized with [`normalize_label`].
#[must_use]
pub fn position_of_alias(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| aliases.contains(&header.as_str()))
}
