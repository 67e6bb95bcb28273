use serde::{Deserialize, Serialize};

/// One scheduled event.
///
/// `date` is either ISO `YYYY-MM-DD` or a year-less `MM/DD`; `time` is
/// 24-hour `HH:MM`. All four required fields are non-empty for any item an
/// interpreter emits; rows that cannot satisfy that are dropped at parse
/// time, never padded with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub date: String,
    pub time: String,
    pub title: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
