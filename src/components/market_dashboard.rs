use chrono::DateTime;
use gloo_timers::callback::Interval;
use leptos::{
    component, create_effect, create_signal, event_target_value, spawn_local, view, IntoView,
    SignalGet, SignalSet,
};

use crate::api::fetch_metrics;
use crate::models::{MetricsResponse, TickerMetrics, UserSettings};

/// Market snapshot table polling the metrics endpoint.
///
/// The poll timer is owned by an effect: changing the interval, symbols or
/// TTL drops the previous `Interval` (cancelling it) and arms a fresh one.
/// An interval of 0 disables polling; the Update button always works.
#[component]
#[must_use]
pub fn MarketDashboard() -> impl IntoView {
    let saved = UserSettings::load();
    let (tickers, set_tickers) = create_signal(saved.tickers);
    let (refresh_secs, set_refresh_secs) = create_signal(saved.refresh_secs);
    let (cache_ttl_secs, set_cache_ttl_secs) = create_signal(saved.cache_ttl_secs);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (data, set_data) = create_signal(None::<MetricsResponse>);

    let refresh = move || {
        let symbols = tickers.get();
        let ttl = cache_ttl_secs.get();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match fetch_metrics(&symbols, ttl).await {
                Ok(response) => set_data.set(Some(response)),
                Err(message) => set_error.set(Some(message)),
            }
            set_loading.set(false);
        });
    };

    refresh();

    // Persist panel settings and re-arm the poll timer on any change;
    // dropping the previous Interval cancels it.
    create_effect(move |previous: Option<Option<Interval>>| {
        drop(previous.flatten());

        let mut saved = UserSettings::load();
        saved.tickers = tickers.get();
        saved.refresh_secs = refresh_secs.get();
        saved.cache_ttl_secs = cache_ttl_secs.get();
        saved.save();

        let secs = refresh_secs.get();
        if secs == 0 {
            return None;
        }
        Some(Interval::new(secs.saturating_mul(1000), refresh))
    });

    let symbols = move || {
        tickers
            .get()
            .split(',')
            .map(|symbol| symbol.trim().to_uppercase())
            .filter(|symbol| !symbol.is_empty())
            .collect::<Vec<_>>()
    };

    let benchmark = move || {
        data.get()
            .map_or_else(|| "SPY".to_string(), |response| response.benchmark)
    };

    view! {
        <div class="market-dashboard">
            <div class="market-controls">
                <input
                    type="text"
                    class="ticker-input"
                    placeholder="Symbols, comma separated"
                    prop:value=tickers
                    on:input=move |ev| set_tickers.set(event_target_value(&ev))
                />
                <button class="primary" on:click=move |_| refresh() disabled=loading>
                    {move || if loading.get() { "Updating..." } else { "Update" }}
                </button>
                <label>
                    "TTL "
                    <input
                        type="number"
                        min="10"
                        max="3600"
                        prop:value=move || cache_ttl_secs.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                set_cache_ttl_secs.set(value);
                            }
                        }
                    />
                </label>
                <label>
                    "Auto "
                    <input
                        type="number"
                        min="0"
                        prop:value=move || refresh_secs.get().to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if let Ok(secs) = value.parse::<u32>() {
                                set_refresh_secs.set(secs);
                            } else if value.is_empty() {
                                set_refresh_secs.set(0);
                            }
                        }
                    />
                    " s"
                </label>
            </div>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <table class="market-table">
                <thead>
                    <tr>
                        <th class="left">"Symbol"</th>
                        <th>"Price"</th>
                        <th>"% Chg"</th>
                        <th>"Volume"</th>
                        <th>"Vol/30d"</th>
                        <th>"RSI(14)"</th>
                        <th>{move || format!("Rel vs {}", benchmark())}</th>
                        <th>"52w Low"</th>
                        <th>"52w High"</th>
                        <th class="left">"Note"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let response = data.get();
                        symbols().into_iter().map(|symbol| {
                            let row = response.as_ref().and_then(|r| {
                                r.tickers
                                    .iter()
                                    .find(|t| t.symbol.eq_ignore_ascii_case(&symbol))
                                    .cloned()
                            });
                            view! { <MetricsRow symbol=symbol row=row /> }
                        }).collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            {move || data.get().map(|response| view! {
                <div class="asof-line">
                    {format!(
                        "As of {} (benchmark {})",
                        format_asof(response.asof),
                        response.benchmark
                    )}
                </div>
            })}
        </div>
    }
}

#[component]
fn MetricsRow(symbol: String, row: Option<TickerMetrics>) -> impl IntoView {
    let price = format_metric(row.as_ref().and_then(|r| r.price), 2);
    let change = row.as_ref().and_then(|r| r.change_pct);
    let volume = format_volume(row.as_ref().and_then(|r| r.volume));
    let vol_ratio = row
        .as_ref()
        .and_then(|r| r.vol_ratio)
        .map_or_else(|| "-".to_string(), |ratio| format!("{ratio:.2}x"));
    let rsi = format_metric(row.as_ref().and_then(|r| r.rsi14), 1);
    let relative = row.as_ref().and_then(|r| r.rel_to_bench_pct);
    let low = format_metric(row.as_ref().and_then(|r| r.low_52w), 2);
    let high = format_metric(row.as_ref().and_then(|r| r.high_52w), 2);
    let note = row.and_then(|r| r.error).unwrap_or_default();

    view! {
        <tr>
            <td class="left mono">{symbol}</td>
            <td>{price}</td>
            <td class=pct_class(change)>{format_signed_pct(change)}</td>
            <td>{volume}</td>
            <td>{vol_ratio}</td>
            <td>{rsi}</td>
            <td class=pct_class(relative)>{format_signed_pct(relative)}</td>
            <td>{low}</td>
            <td>{high}</td>
            <td class="left note">{note}</td>
        </tr>
    }
}

fn format_metric(value: Option<f64>, digits: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.digits$}"))
}

fn format_signed_pct(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}%"))
}

fn pct_class(value: Option<f64>) -> &'static str {
    match value {
        Some(v) if v > 0.0 => "pct-up",
        Some(v) if v < 0.0 => "pct-down",
        _ => "",
    }
}

fn format_volume(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), group_thousands)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_asof(asof: i64) -> String {
    DateTime::from_timestamp(asof, 0).map_or_else(
        || "-".to_string(),
        |datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}
