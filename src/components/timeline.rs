use chrono::{Datelike, Local};
use leptos::{
    component, create_signal, event_target_value, view, IntoView, ReadSignal, SignalGet, SignalSet,
};

use crate::models::ItineraryItem;
use crate::utils::{filter_items, group_by_day, maps_search_url, sort_items};

/// Day-grouped itinerary list with a search filter.
///
/// Items are filtered, then sorted by (date, time), with year-less
/// `MM/DD` dates ordered under the current year, then grouped into day
/// sections. Each entry links its location to a maps search.
#[component]
#[must_use]
pub fn Timeline(items: ReadSignal<Vec<ItineraryItem>>) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let groups = move || {
        let mut filtered = filter_items(&items.get(), &query.get());
        sort_items(&mut filtered, Local::now().year());
        group_by_day(&filtered)
    };

    view! {
        <div class="timeline">
            <input
                type="search"
                class="timeline-search"
                placeholder="Filter by title, place or note"
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            {move || {
                let day_groups = groups();
                if day_groups.is_empty() {
                    view! { <p class="empty-hint">"No itinerary entries"</p> }.into_view()
                } else {
                    day_groups.into_iter().map(|group| view! {
                        <section class="day-group">
                            <h2 class="day-heading">{group.date.clone()}</h2>
                            <div class="day-entries">
                                {group.entries.into_iter().map(|entry| {
                                    let maps_href = maps_search_url(&entry.location);
                                    view! {
                                        <article class="entry-card">
                                            <div class="entry-head">
                                                <span class="entry-time">{entry.time.clone()}</span>
                                                <h3 class="entry-title">{entry.title.clone()}</h3>
                                            </div>
                                            <a
                                                class="entry-location"
                                                href=maps_href
                                                target="_blank"
                                                rel="noreferrer"
                                            >
                                                {entry.location.clone()}
                                            </a>
                                            {entry.note.map(|note| view! {
                                                <div class="entry-note">{note}</div>
                                            })}
                                        </article>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        </section>
                    }).collect::<Vec<_>>().into_view()
                }
            }}
        </div>
    }
}
