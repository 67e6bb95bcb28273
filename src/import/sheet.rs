use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::SHEET_EXPORT_BASE;
use crate::import::error::SheetError;
use crate::utils::encode_query_component;

/// A resolved pointer to a spreadsheet, optionally narrowed to one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReference {
    pub sheet_id: String,
    /// The `gid` of a specific sheet tab, when the input URL named one.
    pub sheet_tab_id: Option<String>,
}

static BARE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{20,}$").expect("valid pattern"));
static SHEET_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)").expect("valid pattern"));

/// Parse user input naming a sheet: either a bare spreadsheet id or a
/// sharing URL containing a `/spreadsheets/d/<id>` path segment.
///
/// Empty input yields `Ok(None)`; the caller treats that as "show the
/// bundled sample", not as a failure.
///
/// # Errors
///
/// Returns [`SheetError::InvalidReference`] for non-empty input that is
/// neither a bare id nor a URL with a recognizable spreadsheet path.
pub fn parse_sheet_input(raw: &str) -> Result<Option<SheetReference>, SheetError> {
    let input = raw.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if BARE_ID.is_match(input) {
        return Ok(Some(SheetReference {
            sheet_id: input.to_string(),
            sheet_tab_id: None,
        }));
    }

    let (path, query) = split_url(input).ok_or(SheetError::InvalidReference)?;
    let captures = SHEET_PATH.captures(path).ok_or(SheetError::InvalidReference)?;

    Ok(Some(SheetReference {
        sheet_id: captures[1].to_string(),
        sheet_tab_id: query_param(query, "gid").map(ToString::to_string),
    }))
}

/// Format the CSV export URL for a sheet reference. Pure, no I/O.
#[must_use]
pub fn build_csv_url(reference: &SheetReference) -> String {
    let mut url = format!("{SHEET_EXPORT_BASE}/{}/export?format=csv", reference.sheet_id);
    if let Some(tab) = &reference.sheet_tab_id {
        url.push_str("&gid=");
        url.push_str(&encode_query_component(tab));
    }
    url
}

/// Split `scheme://host/path?query#fragment` into (path, query).
///
/// Only enough URL structure for sheet links: the fragment is discarded so
/// a `#gid=...` suffix never masquerades as a query parameter.
fn split_url(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once("://")?;
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }

    let rest = rest.split('#').next().unwrap_or(rest);
    let (before_query, query) = match rest.split_once('?') {
        Some((path_part, query)) => (path_part, query),
        None => (rest, ""),
    };

    let path = before_query
        .find('/')
        .map_or("", |slash| &before_query[slash..]);
    Some((path, query))
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_none() {
        assert_eq!(parse_sheet_input(""), Ok(None));
        assert_eq!(parse_sheet_input("   "), Ok(None));
    }

    #[test]
    fn test_bare_id() {
        let parsed = parse_sheet_input("1PTA6YysWIE5XVwFPLQGRm8a4h56O017PZV8IwpFVQ34")
            .expect("should parse")
            .expect("should be a reference");
        assert_eq!(parsed.sheet_id, "1PTA6YysWIE5XVwFPLQGRm8a4h56O017PZV8IwpFVQ34");
        assert_eq!(parsed.sheet_tab_id, None);
    }

    #[test]
    fn test_sharing_url_with_gid() {
        let parsed = parse_sheet_input(
            "https://docs.google.com/spreadsheets/d/1PTA6YysWIE5XVwFPLQGRm8a4h56O017PZV8IwpFVQ34/edit?gid=0#gid=0",
        )
        .expect("should parse")
        .expect("should be a reference");
        assert_eq!(parsed.sheet_id, "1PTA6YysWIE5XVwFPLQGRm8a4h56O017PZV8IwpFVQ34");
        assert_eq!(parsed.sheet_tab_id, Some("0".to_string()));
    }

    #[test]
    fn test_url_without_gid() {
        let parsed = parse_sheet_input("https://docs.google.com/spreadsheets/d/abc123def456/view")
            .expect("should parse")
            .expect("should be a reference");
        assert_eq!(parsed.sheet_id, "abc123def456");
        assert_eq!(parsed.sheet_tab_id, None);
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(parse_sheet_input("not a sheet"), Err(SheetError::InvalidReference));
        assert_eq!(parse_sheet_input("shortid123"), Err(SheetError::InvalidReference));
        assert_eq!(
            parse_sheet_input("https://example.com/other/path"),
            Err(SheetError::InvalidReference)
        );
    }

    #[test]
    fn test_build_csv_url() {
        let reference = SheetReference {
            sheet_id: "abc".to_string(),
            sheet_tab_id: None,
        };
        assert_eq!(
            build_csv_url(&reference),
            "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
        );
    }

    #[test]
    fn test_build_csv_url_with_tab() {
        let reference = SheetReference {
            sheet_id: "abc".to_string(),
            sheet_tab_id: Some("17 2".to_string()),
        };
        assert_eq!(
            build_csv_url(&reference),
            "https://docs.google.com/spreadsheets/d/abc/export?format=csv&gid=17%202"
        );
    }
}
