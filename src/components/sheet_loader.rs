use leptos::{
    component, create_signal, event_target_value, spawn_local, view, IntoView, ReadSignal,
    SignalGet, SignalSet, WriteSignal,
};
use web_sys::KeyboardEvent;

use crate::api::fetch_sheet_csv;
use crate::constants::SAMPLE_ITINERARY_CSV;
use crate::import::{build_csv_url, parse_sheet_input, to_itinerary_items};
use crate::log;
use crate::models::{ItineraryItem, ItinerarySource, UserSettings};

/// Sheet input row: paste a sharing link or bare id and load it as the
/// itinerary. Empty input reloads the bundled sample. On any failure the
/// error message is shown and the displayed list is cleared.
#[component]
#[must_use]
pub fn SheetLoader(
    set_items: WriteSignal<Vec<ItineraryItem>>,
    source: ReadSignal<ItinerarySource>,
    set_source: WriteSignal<ItinerarySource>,
) -> impl IntoView {
    let saved = UserSettings::load();
    let (sheet_input, set_sheet_input) = create_signal(saved.last_sheet_input);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let load = move || {
        let input = sheet_input.get();
        set_error.set(None);

        let mut saved = UserSettings::load();
        saved.last_sheet_input = input.trim().to_string();
        saved.save();

        match parse_sheet_input(&input) {
            Ok(None) => match to_itinerary_items(SAMPLE_ITINERARY_CSV) {
                Ok(items) => {
                    set_items.set(items);
                    set_source.set(ItinerarySource::Sample);
                }
                Err(parse_error) => {
                    set_items.set(Vec::new());
                    set_error.set(Some(parse_error.to_string()));
                }
            },
            Ok(Some(reference)) => {
                let url = build_csv_url(&reference);
                let entered = input.trim().to_string();
                set_loading.set(true);

                spawn_local(async move {
                    let result = fetch_sheet_csv(&url).await.and_then(|text| {
                        to_itinerary_items(&text).map_err(|parse_error| parse_error.to_string())
                    });

                    match result {
                        Ok(items) => {
                            log!("Loaded {} itinerary items from sheet", items.len());
                            set_items.set(items);
                            set_source.set(ItinerarySource::Sheet(entered));
                        }
                        Err(message) => {
                            set_items.set(Vec::new());
                            set_error.set(Some(message));
                        }
                    }
                    set_loading.set(false);
                });
            }
            Err(reference_error) => {
                set_items.set(Vec::new());
                set_error.set(Some(reference_error.to_string()));
            }
        }
    };

    view! {
        <div class="sheet-loader">
            <div class="load-row">
                <input
                    type="text"
                    placeholder="Paste a sheet link or id (leave empty for sample data)"
                    prop:value=sheet_input
                    on:input=move |ev| set_sheet_input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            load();
                        }
                    }
                />
                <button
                    class="primary"
                    on:click=move |_| load()
                    disabled=loading
                >
                    {move || if loading.get() { "Loading..." } else { "Load" }}
                </button>
            </div>

            {move || error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <div class="provenance">
                {move || match source.get() {
                    ItinerarySource::Sample => "Showing the sample itinerary".to_string(),
                    ItinerarySource::Sheet(name) => format!("Loaded from {name}"),
                }}
            </div>
        </div>
    }
}
