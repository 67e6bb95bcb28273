use leptos::{component, create_signal, view, IntoView, SignalGet, SignalSet};
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::components::market_dashboard::MarketDashboard;
use crate::components::sheet_loader::SheetLoader;
use crate::components::timeline::Timeline;
use crate::constants::SAMPLE_ITINERARY_CSV;
use crate::import::to_itinerary_items;
use crate::models::ItinerarySource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewTab {
    Itinerary,
    Market,
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (active_tab, set_active_tab) = create_signal(ViewTab::Itinerary);

    // Itinerary state lives here so tab switches don't drop loaded data
    let (items, set_items) =
        create_signal(to_itinerary_items(SAMPLE_ITINERARY_CSV).unwrap_or_default());
    let (source, set_source) = create_signal(ItinerarySource::Sample);

    let tab_class = move |tab: ViewTab| {
        if active_tab.get() == tab {
            "tab active"
        } else {
            "tab"
        }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/trip_sheet.css"/>
        <Title text="Sheet Schedule Browser"/>

        <div class="app">
            <header class="app-header">
                <h1>"Sheet Schedule Browser"</h1>
                <nav class="tab-bar">
                    <button
                        class=move || tab_class(ViewTab::Itinerary)
                        on:click=move |_| set_active_tab.set(ViewTab::Itinerary)
                    >
                        "Itinerary"
                    </button>
                    <button
                        class=move || tab_class(ViewTab::Market)
                        on:click=move |_| set_active_tab.set(ViewTab::Market)
                    >
                        "Market"
                    </button>
                </nav>
            </header>

            <main class="app-main">
                {move || match active_tab.get() {
                    ViewTab::Itinerary => view! {
                        <SheetLoader set_items=set_items source=source set_source=set_source />
                        <Timeline items=items />
                    }.into_view(),
                    ViewTab::Market => view! { <MarketDashboard /> }.into_view(),
                }}
            </main>
        </div>
    }
}
