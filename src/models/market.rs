use serde::{Deserialize, Serialize};

/// Per-symbol snapshot from the metrics endpoint. Every metric is optional:
/// the backend omits what it could not compute and reports the reason in
/// `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMetrics {
    pub symbol: String,
    pub price: Option<f64>,
    pub change_pct: Option<f64>,
    pub volume: Option<u64>,
    pub avg_vol_30d: Option<f64>,
    pub vol_ratio: Option<f64>,
    pub rsi14: Option<f64>,
    pub atr14: Option<f64>,
    pub high_52w: Option<f64>,
    pub low_52w: Option<f64>,
    pub rel_to_bench_pct: Option<f64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub benchmark: String,
    /// Unix timestamp (seconds) of the snapshot
    pub asof: i64,
    pub tickers: Vec<TickerMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_payload_deserializes() {
        let json = r#"{
            "benchmark": "SPY",
            "asof": 1754400000,
            "tickers": [
                { "symbol": "AAPL", "price": 212.5, "change_pct": -0.8 },
                { "symbol": "XXXX", "error": "unknown symbol" }
            ]
        }"#;

        let response: MetricsResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.tickers.len(), 2);
        assert_eq!(response.tickers[0].price, Some(212.5));
        assert_eq!(response.tickers[0].rsi14, None);
        assert_eq!(response.tickers[1].error.as_deref(), Some("unknown symbol"));
    }
}
