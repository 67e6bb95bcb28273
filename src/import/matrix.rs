use once_cell::sync::Lazy;
use regex::Regex;

use crate::import::shared::normalize_label;
use crate::models::ItineraryItem;

/// Section-label patterns tried in order; the first match decides the
/// time of day for every item on that activity row.
static SECTION_TIME_HINTS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("早餐|breakfast", "08:00"),
        ("上午|morning", "10:00"),
        ("午餐|中午|lunch", "12:30"),
        ("下午|afternoon", "15:00"),
        ("晚餐|dinner", "18:30"),
        ("晚上|夜|night|hotel|住宿|飯店", "21:00"),
        ("主要行程|大綱|overview", "09:00"),
    ]
    .into_iter()
    .map(|(pattern, time)| {
        (
            Regex::new(&format!("(?i){pattern}")).expect("valid pattern"),
            time,
        )
    })
    .collect()
});

static YMD_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$").expect("valid pattern"));
static MD_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[/-](\d{1,2})$").expect("valid pattern"));

/// Normalize a date-row cell: `YYYY[-/]M[-/]D` becomes zero-padded ISO,
/// `M[-/]D` becomes zero-padded `MM/DD` (year-less; the year is assumed
/// downstream at sort time, never written into the item), any other
/// non-empty text passes through as a label. Empty cells are unusable and
/// deactivate their column.
#[must_use]
pub fn normalize_date_cell(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(caps) = YMD_DATE.captures(value) {
        return Some(format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]));
    }

    if let Some(caps) = MD_DATE.captures(value) {
        return Some(format!("{:0>2}/{:0>2}", &caps[1], &caps[2]));
    }

    Some(value.to_string())
}

/// Interpret tokenized rows as a "days across columns, activity categories
/// down rows" sheet. Never fails: an unrecognized shape yields an empty
/// sequence so the dispatcher can surface the direct-format error instead.
#[must_use]
pub fn parse_matrix_rows(rows: &[Vec<String>]) -> Vec<ItineraryItem> {
    if rows.len() < 3 {
        return Vec::new();
    }

    // The row labeled `date` supplies per-column dates; without it this is
    // not a matrix sheet.
    let Some(date_row_index) = rows
        .iter()
        .position(|row| row.first().is_some_and(|cell| normalize_label(cell) == "date"))
    else {
        return Vec::new();
    };

    let day_header = &rows[0];
    let date_row = &rows[date_row_index];
    let max_columns = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut active_columns: Vec<(usize, String)> = Vec::new();
    for column in 1..max_columns {
        let raw = date_row.get(column).map_or("", String::as_str);
        if let Some(date) = normalize_date_cell(raw) {
            active_columns.push((column, date));
        }
    }

    if active_columns.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    for (row_index, row) in rows.iter().enumerate().skip(date_row_index + 1) {
        let row_label = row.first().map_or("", String::as_str).trim();
        let normalized = normalize_label(row_label);

        // `date` / `weekday` rows are structural, not activities
        if row_label.is_empty() || normalized == "date" || normalized == "weekday" {
            continue;
        }

        for (column, date) in &active_columns {
            let raw_cell = row.get(*column).map_or("", String::as_str).trim();
            if raw_cell.is_empty() {
                continue;
            }

            let lines: Vec<&str> = raw_cell
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            let Some(&location) = lines.first() else {
                continue;
            };

            let day_label = day_header.get(*column).map_or("", String::as_str).trim();
            let mut note_parts: Vec<String> = Vec::new();
            if !day_label.is_empty() {
                note_parts.push(day_label.to_string());
            }
            if lines.len() > 1 {
                note_parts.push(lines[1..].join(" / "));
            }

            items.push(ItineraryItem {
                date: date.clone(),
                time: infer_section_time(row_label, row_index),
                title: row_label.to_string(),
                location: location.to_string(),
                note: (!note_parts.is_empty()).then(|| note_parts.join(" | ")),
            });
        }
    }

    items
}

/// Time of day for an activity row: first matching hint wins, otherwise
/// `6 + row_index` o'clock clamped to 23. The fallback keys off the row's
/// absolute position in the table, header and structural rows included.
fn infer_section_time(row_label: &str, row_index: usize) -> String {
    for (pattern, time) in SECTION_TIME_HINTS.iter() {
        if pattern.is_match(row_label) {
            return (*time).to_string();
        }
    }

    let hour = (6 + row_index).min(23);
    format!("{hour:02}:00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::csv::parse_csv;

    const MATRIX_CSV: &str = ",,Day 1,Day 2,Day 3\n\
        DATE,10/14,10/15,10/16,10/17\n\
        WEEKDAY,六,日,一,二\n\
        早餐,,,便利商店,咖啡店\n\
        上午,,,池袋站搭山手線30min到新宿車站,\n\
        午餐,,,壽司郎,烏龍麵\n\
        晚上,,回飯店,夜景散步,泡湯\n";

    #[test]
    fn test_matrix_basic_shape() {
        let items = parse_matrix_rows(&parse_csv(MATRIX_CSV));
        assert!(!items.is_empty());

        assert!(items.iter().any(|item| item.date == "10/16"
            && item.title == "早餐"
            && item.location == "便利商店"
            && item.time == "08:00"));
        assert!(items.iter().any(|item| item.date == "10/17"
            && item.title == "午餐"
            && item.location == "烏龍麵"
            && item.time == "12:30"));
    }

    #[test]
    fn test_weekday_row_is_not_an_activity() {
        let items = parse_matrix_rows(&parse_csv(MATRIX_CSV));
        assert!(items.iter().all(|item| normalize_label(&item.title) != "weekday"));
    }

    #[test]
    fn test_day_label_lands_in_note() {
        let items = parse_matrix_rows(&parse_csv(MATRIX_CSV));
        let breakfast = items
            .iter()
            .find(|item| item.date == "10/16" && item.title == "早餐")
            .expect("breakfast item");
        assert_eq!(breakfast.note.as_deref(), Some("Day 2"));
    }

    #[test]
    fn test_multiline_cell_splits_location_and_note() {
        let csv = ",Day 1\nDATE,10/16\n午餐,\"壽司郎\n推薦\"\nfiller,x\n";
        let items = parse_matrix_rows(&parse_csv(csv));
        let lunch = items.iter().find(|item| item.title == "午餐").expect("lunch item");
        assert_eq!(lunch.location, "壽司郎");
        assert_eq!(lunch.note.as_deref(), Some("Day 1 | 推薦"));
    }

    #[test]
    fn test_night_hint() {
        let items = parse_matrix_rows(&parse_csv(MATRIX_CSV));
        let night = items.iter().find(|item| item.title == "晚上").expect("night item");
        assert_eq!(night.time, "21:00");
    }

    #[test]
    fn test_too_few_rows_is_empty() {
        assert!(parse_matrix_rows(&parse_csv("a,b\nDATE,10/14\n")).is_empty());
    }

    #[test]
    fn test_no_date_row_is_empty() {
        let csv = "a,b\nc,d\ne,f\n";
        assert!(parse_matrix_rows(&parse_csv(csv)).is_empty());
    }

    #[test]
    fn test_no_usable_date_columns_is_empty() {
        let csv = "label,x\nDATE,\nmorning,walk\n";
        assert!(parse_matrix_rows(&parse_csv(csv)).is_empty());
    }

    #[test]
    fn test_inactive_column_ignored() {
        let csv = ",Day 1,Day 2\nDATE,10/14,\n下午,散步,博物館\n";
        let items = parse_matrix_rows(&parse_csv(csv));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].location, "散步");
    }

    #[test]
    fn test_fallback_hour_advances_and_clamps() {
        let mut rows = vec![
            vec![String::new(), "Day 1".to_string()],
            vec!["DATE".to_string(), "10/14".to_string()],
        ];
        for i in 0..20 {
            rows.push(vec![format!("section {i}"), "somewhere".to_string()]);
        }

        let items = parse_matrix_rows(&rows);
        assert_eq!(items.len(), 20);
        // Row index 2 is the first activity row: 6 + 2 = 08:00
        assert_eq!(items[0].time, "08:00");
        // Row index 21 would be 27:00, clamped
        assert_eq!(items.last().expect("items").time, "23:00");
    }

    #[test]
    fn test_normalize_date_cell_shapes() {
        assert_eq!(normalize_date_cell("2025/7/4"), Some("2025-07-04".to_string()));
        assert_eq!(normalize_date_cell("2025-12-31"), Some("2025-12-31".to_string()));
        assert_eq!(normalize_date_cell("10/14"), Some("10/14".to_string()));
        assert_eq!(normalize_date_cell("7-4"), Some("07/04".to_string()));
        assert_eq!(normalize_date_cell("Oct 14"), Some("Oct 14".to_string()));
        assert_eq!(normalize_date_cell("   "), None);
    }

    #[test]
    fn test_items_row_major_then_column_major() {
        let csv = ",Day 1,Day 2\nDATE,10/14,10/15\n上午,a,b\n下午,c,d\n";
        let items = parse_matrix_rows(&parse_csv(csv));
        let order: Vec<(&str, &str)> = items
            .iter()
            .map(|item| (item.title.as_str(), item.location.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("上午", "a"), ("上午", "b"), ("下午", "c"), ("下午", "d")]
        );
    }
}
