//! Property search with URL-backed filters and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL query string is the source of truth: the form edits a draft,
//! submitting navigates to the draft's URL, and every URL change triggers one
//! `/search` request. Responses from superseded requests are dropped.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::property_card::PropertyCard;
use crate::net::types::{Page, Property, PropertyType};
use crate::util::search::SearchFilters;

/// Bedroom minimums offered in the form.
pub const BEDROOM_CHOICES: [u32; 4] = [1, 2, 3, 4];

/// Text form state; parsed into [`SearchFilters`] on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDraft {
    pub location: String,
    pub min_price: String,
    pub max_price: String,
    pub property_type: String,
    pub bedrooms: String,
}

impl SearchDraft {
    pub fn from_filters(filters: &SearchFilters) -> Self {
        let text = |value: Option<String>| value.unwrap_or_default();
        Self {
            location: text(filters.location.clone()),
            min_price: text(filters.min_price.map(|v| v.to_string())),
            max_price: text(filters.max_price.map(|v| v.to_string())),
            property_type: text(filters.property_type.map(|t| t.as_str().to_owned())),
            bedrooms: text(filters.bedrooms.map(|b| b.to_string())),
        }
    }

    /// Filters for a fresh search; always starts at the first page.
    pub fn to_filters(&self) -> SearchFilters {
        SearchFilters::from_lookup(|key| {
            let value = match key {
                "location" => &self.location,
                "minPrice" => &self.min_price,
                "maxPrice" => &self.max_price,
                "propertyType" => &self.property_type,
                "bedrooms" => &self.bedrooms,
                _ => return None,
            };
            Some(value.clone())
        })
    }
}

/// `Page N of M`, one-based.
pub fn pagination_label<T>(page: &Page<T>) -> String {
    format!("Page {} of {}", page.current_page + 1, page.total_pages)
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let filters = Memo::new(move |_| {
        let query = query.get();
        SearchFilters::from_lookup(|key| query.get(key))
    });
    let draft = RwSignal::new(SearchDraft::default());
    let results = RwSignal::new(Page::<Property>::empty());
    let loading = RwSignal::new(true);
    let generation = StoredValue::new(0_u64);
    let pending_path = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    Effect::new(move || {
        let current = filters.get();
        draft.set(SearchDraft::from_filters(&current));
        loading.set(true);
        generation.update_value(|g| *g += 1);

        #[cfg(feature = "csr")]
        {
            let ticket = generation.get_value();
            let api = crate::app::use_session().api();
            let params = current.to_api_params(crate::util::search::SEARCH_PAGE_SIZE);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::resources::search_properties(&api, &params).await;
                if generation.get_value() != ticket {
                    return;
                }
                match outcome {
                    Ok(page) => results.set(page),
                    Err(error) => {
                        log::warn!("search failed: {error}");
                        results.set(Page::empty());
                    }
                }
                loading.set(false);
            });
        }
    });

    Effect::new(move || {
        if let Some(path) = pending_path.get() {
            pending_path.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        pending_path.set(Some(draft.get().to_filters().to_path()));
    };
    let go_to_page = move |page: u64| {
        let page = u32::try_from(page).unwrap_or(u32::MAX);
        pending_path.set(Some(filters.get_untracked().with_page(page).to_path()));
    };

    view! {
        <div class="search-page">
            <h1>"Search Properties"</h1>
            <form class="search-page__filters" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || draft.get().location
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.location = value);
                    }
                />
                <input
                    type="number"
                    placeholder="Min Price"
                    prop:value=move || draft.get().min_price
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.min_price = value);
                    }
                />
                <input
                    type="number"
                    placeholder="Max Price"
                    prop:value=move || draft.get().max_price
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.max_price = value);
                    }
                />
                <select
                    prop:value=move || draft.get().property_type
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.property_type = value);
                    }
                >
                    <option value="">"Property Type"</option>
                    {PropertyType::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    prop:value=move || draft.get().bedrooms
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.bedrooms = value);
                    }
                >
                    <option value="">"Bedrooms"</option>
                    {BEDROOM_CHOICES
                        .into_iter()
                        .map(|n| view! { <option value=n.to_string()>{format!("{n}+")}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" type="submit">"Search"</button>
            </form>

            <p class="search-page__count">
                {move || format!("Found {} properties", results.get().total_count)}
            </p>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="spinner">"Loading..."</p> }
            >
                <Show
                    when=move || !results.get().items.is_empty()
                    fallback=|| view! { <p class="search-page__empty">"No properties found matching your criteria"</p> }
                >
                    <div class="property-grid">
                        {move || {
                            results
                                .get()
                                .items
                                .into_iter()
                                .map(|property| view! { <PropertyCard property=property/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || { results.get().total_pages > 1 }>
                        <div class="search-page__pagination">
                            <button
                                class="btn"
                                disabled=move || !results.get().has_previous()
                                on:click=move |_| go_to_page(results.get_untracked().current_page.saturating_sub(1))
                            >
                                "Previous"
                            </button>
                            <span>{move || pagination_label(&results.get())}</span>
                            <button
                                class="btn"
                                disabled=move || !results.get().has_next()
                                on:click=move |_| go_to_page(results.get_untracked().current_page + 1)
                            >
                                "Next"
                            </button>
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
