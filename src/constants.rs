/// Canonical CSV export base for the spreadsheet provider
pub const SHEET_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Same-origin metrics endpoint (relayed to the backend by the server member)
pub const METRICS_API: &str = "/api/metrics";

/// Default symbols for the market panel
pub const DEFAULT_TICKERS: &str = "SPY,QQQ,AAPL,NVDA,TSM";

/// Default market auto-refresh interval in seconds (0 = off)
pub const DEFAULT_REFRESH_SECS: u32 = 60;

/// Default cache lifetime forwarded with each metrics request
pub const DEFAULT_CACHE_TTL_SECS: u32 = 120;

/// Bundled fallback itinerary, shown until a sheet is loaded
pub const SAMPLE_ITINERARY_CSV: &str = include_str!("../sample_itinerary.csv");
