use crate::import::error::SheetError;
use crate::import::shared::{normalize_label, position_of_alias};
use crate::models::ItineraryItem;

// Recognized header spellings, English and zh-TW, per field
const DATE_ALIASES: &[&str] = &["date", "日期"];
const TIME_ALIASES: &[&str] = &["time", "時間"];
const TITLE_ALIASES: &[&str] = &["title", "標題", "event", "行程"];
const LOCATION_ALIASES: &[&str] = &["location", "地點"];
const NOTE_ALIASES: &[&str] = &["note", "備註"];

struct ColumnIndexes {
    date: usize,
    time: usize,
    title: usize,
    location: usize,
    note: Option<usize>,
}

fn resolve_columns(headers: &[String]) -> Result<ColumnIndexes, SheetError> {
    let date = position_of_alias(headers, DATE_ALIASES);
    let time = position_of_alias(headers, TIME_ALIASES);
    let title = position_of_alias(headers, TITLE_ALIASES);
    let location = position_of_alias(headers, LOCATION_ALIASES);
    let note = position_of_alias(headers, NOTE_ALIASES);

    match (date, time, title, location) {
        (Some(date), Some(time), Some(title), Some(location)) => Ok(ColumnIndexes {
            date,
            time,
            title,
            location,
            note,
        }),
        _ => Err(SheetError::MissingColumns),
    }
}

/// Interpret tokenized rows as one-event-per-row data: a header row maps
/// column aliases to positions, every following row becomes one item.
///
/// Rows missing any required value are dropped silently; exported sheets
/// routinely contain half-filled rows.
///
/// # Errors
///
/// - [`SheetError::InsufficientData`] with fewer than 2 rows
/// - [`SheetError::MissingColumns`] when the header lacks a required alias
/// - [`SheetError::NoValidItems`] when no data row survived
pub fn parse_direct_rows(rows: &[Vec<String>]) -> Result<Vec<ItineraryItem>, SheetError> {
    if rows.len() < 2 {
        return Err(SheetError::InsufficientData);
    }

    let headers: Vec<String> = rows[0].iter().map(|cell| normalize_label(cell)).collect();
    let columns = resolve_columns(&headers)?;

    let items: Vec<ItineraryItem> = rows[1..]
        .iter()
        .filter_map(|cols| row_to_item(cols, &columns))
        .collect();

    if items.is_empty() {
        return Err(SheetError::NoValidItems);
    }

    Ok(items)
}

fn cell_at(cols: &[String], index: usize) -> &str {
    cols.get(index).map_or("", |cell| cell.trim())
}

fn row_to_item(cols: &[String], columns: &ColumnIndexes) -> Option<ItineraryItem> {
    let date = cell_at(cols, columns.date);
    let time = cell_at(cols, columns.time);
    let title = cell_at(cols, columns.title);
    let location = cell_at(cols, columns.location);

    if date.is_empty() || time.is_empty() || title.is_empty() || location.is_empty() {
        return None;
    }

    let note = columns
        .note
        .map(|index| cell_at(cols, index))
        .filter(|note| !note.is_empty())
        .map(ToString::to_string);

    Some(ItineraryItem {
        date: date.to_string(),
        time: time.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::csv::parse_csv;

    #[test]
    fn test_parse_direct_rows_complete() {
        let rows = parse_csv(
            "date,time,title,location,note\n2026-02-09,09:00,啟程,台北車站,集合\n2026-02-09,12:30,午餐,中山區,便當\n",
        );
        let items = parse_direct_rows(&rows).expect("should parse");

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            ItineraryItem {
                date: "2026-02-09".to_string(),
                time: "09:00".to_string(),
                title: "啟程".to_string(),
                location: "台北車站".to_string(),
                note: Some("集合".to_string()),
            }
        );
    }

    #[test]
    fn test_chinese_header_aliases() {
        let rows = parse_csv("日期,時間,行程,地點\n10/14,08:00,早餐,便利商店\n");
        let items = parse_direct_rows(&rows).expect("should parse");
        assert_eq!(items[0].title, "早餐");
        assert_eq!(items[0].note, None);
    }

    #[test]
    fn test_bom_on_first_header() {
        let rows = parse_csv("\u{feff}DATE,Time,Title,Location\n10/14,08:00,x,y\n");
        assert!(parse_direct_rows(&rows).is_ok());
    }

    #[test]
    fn test_row_missing_location_is_dropped() {
        let rows = parse_csv("date,time,title,location\n10/14,08:00,早餐,超商\n10/15,09:00,出發,\n");
        let items = parse_direct_rows(&rows).expect("should parse");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].date, "10/14");
    }

    #[test]
    fn test_all_rows_dropped_is_no_valid_items() {
        let rows = parse_csv("date,time,title,location\n10/14,,早餐,超商\n");
        assert_eq!(parse_direct_rows(&rows), Err(SheetError::NoValidItems));
    }

    #[test]
    fn test_missing_required_column() {
        let rows = parse_csv("date,time,title\n10/14,08:00,早餐\n");
        assert_eq!(parse_direct_rows(&rows), Err(SheetError::MissingColumns));
    }

    #[test]
    fn test_header_only_is_insufficient() {
        let rows = parse_csv("date,time,title,location\n");
        assert_eq!(parse_direct_rows(&rows), Err(SheetError::InsufficientData));
    }

    #[test]
    fn test_empty_note_stays_absent() {
        let rows = parse_csv("date,time,title,location,note\n10/14,08:00,早餐,超商,\n");
        let items = parse_direct_rows(&rows).expect("should parse");
        assert_eq!(items[0].note, None);
    }
}
