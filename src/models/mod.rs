mod item;
mod market;
mod user_settings;

pub use item::ItineraryItem;
pub use market::{MetricsResponse, TickerMetrics};
pub use user_settings::UserSettings;

/// Where the currently displayed itinerary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItinerarySource {
    /// Bundled sample data (no sheet input given)
    Sample,
    /// Loaded from the sheet the user named (id or URL as entered)
    Sheet(String),
}
