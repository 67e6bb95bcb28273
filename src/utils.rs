use chrono::NaiveDate;
use std::fmt::Write;

use crate::models::ItineraryItem;

/// One day's worth of itinerary entries, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: String,
    pub entries: Vec<ItineraryItem>,
}

/// Chronological key for an item date. ISO dates parse directly; year-less
/// `MM/DD` dates are ordered under `assumed_year`; the year is sort-time
/// context only and is never written back into the item. Unparseable dates
/// sort after parseable ones, by raw text.
#[must_use]
pub fn date_sort_key(date: &str, assumed_year: i32) -> (bool, Option<NaiveDate>, String) {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().or_else(|| {
        let (month, day) = date.split_once('/')?;
        NaiveDate::from_ymd_opt(
            assumed_year,
            month.trim().parse().ok()?,
            day.trim().parse().ok()?,
        )
    });

    (parsed.is_none(), parsed, date.to_string())
}

/// Sort items by (date, time) for display.
pub fn sort_items(items: &mut [ItineraryItem], assumed_year: i32) {
    items.sort_by_cached_key(|item| (date_sort_key(&item.date, assumed_year), item.time.clone()));
}

/// Group already-sorted items into day sections, splitting on date change.
#[must_use]
pub fn group_by_day(items: &[ItineraryItem]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for item in items {
        match groups.last_mut() {
            Some(group) if group.date == item.date => group.entries.push(item.clone()),
            _ => groups.push(DayGroup {
                date: item.date.clone(),
                entries: vec![item.clone()],
            }),
        }
    }
    groups
}

/// Case-insensitive substring filter over title, location and note.
#[must_use]
pub fn filter_items(items: &[ItineraryItem], query: &str) -> Vec<ItineraryItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.location.to_lowercase().contains(&needle)
                || item
                    .note
                    .as_deref()
                    .is_some_and(|note| note.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Percent-encode a string for use as a URL query value.
#[must_use]
pub fn encode_query_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

/// Maps search link for an item location.
#[must_use]
pub fn maps_search_url(location: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        encode_query_component(location)
    )
}
