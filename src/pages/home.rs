//! Landing page: location search, quick filters, and featured listings.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::property_card::PropertyCard;
use crate::net::types::{Property, PropertyType};
use crate::util::search::SearchFilters;

/// Listings shown in the featured grid.
pub const FEATURED_COUNT: u32 = 6;
/// Upper rent bound used by the "Budget Friendly" shortcut.
pub const BUDGET_MAX_PRICE: f64 = 10_000.0;

/// Search route for the hero search box.
pub fn location_search_path(location: &str) -> String {
    SearchFilters::from_lookup(|key| (key == "location").then(|| location.to_owned())).to_path()
}

/// Quick-filter shortcuts as `(label, path)`.
pub fn quick_filters() -> Vec<(&'static str, String)> {
    let by_type = |kind: PropertyType| SearchFilters { property_type: Some(kind), ..SearchFilters::default() }.to_path();
    vec![
        ("Apartments", by_type(PropertyType::Apartment)),
        ("Houses", by_type(PropertyType::House)),
        ("Villas", by_type(PropertyType::Villa)),
        ("Budget Friendly", SearchFilters { max_price: Some(BUDGET_MAX_PRICE), ..SearchFilters::default() }.to_path()),
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = RwSignal::new(Vec::<Property>::new());
    let loading = RwSignal::new(true);
    let location = RwSignal::new(String::new());
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    {
        let api = crate::app::use_session().api();
        leptos::task::spawn_local(async move {
            let params = crate::net::types::ListParams::page(0, FEATURED_COUNT);
            match crate::net::resources::list_properties(&api, &params).await {
                Ok(page) => featured.set(page.items),
                Err(error) => log::warn!("featured listings unavailable: {error}"),
            }
            loading.set(false);
        });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&location_search_path(&location.get()), NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Find Your Perfect Home"</h1>
                <p>"Browse thousands of rental properties across the country"</p>
                <form class="home-page__search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Enter city or location..."
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
            </section>

            <section class="home-page__quick-filters">
                {quick_filters()
                    .into_iter()
                    .map(|(label, href)| view! { <a class="home-page__chip" href=href>{label}</a> })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home-page__featured">
                <h2>"Featured Properties"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="spinner">"Loading..."</p> }
                >
                    <div class="property-grid">
                        {move || {
                            featured
                                .get()
                                .into_iter()
                                .map(|property| view! { <PropertyCard property=property/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <a class="btn" href="/search">"View All Properties"</a>
                </Show>
            </section>

            <section class="home-page__cta">
                <h2>"Have a property to rent?"</h2>
                <p>"List your property on RentIt and reach thousands of potential tenants"</p>
                <a class="btn" href="/register">"Get Started"</a>
            </section>
        </div>
    }
}
