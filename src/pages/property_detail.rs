//! Single listing view: image carousel, details, owner contact, and reviews.

#[cfg(test)]
#[path = "property_detail_test.rs"]
mod property_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::use_session;
use crate::components::property_card::{PLACEHOLDER_IMAGE, format_location, format_rent};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{Property, Review};

/// Reviews fetched with the listing.
pub const REVIEW_PAGE_SIZE: u32 = 10;
const MAX_RATING: u8 = 5;

/// Positive listing id from the route segment.
pub fn parse_property_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Carousel URLs, never empty.
pub fn gallery_urls(config: &ClientConfig, property: &Property) -> Vec<String> {
    let urls: Vec<String> = property.images.iter().map(|image| config.image_url(&image.url)).collect();
    if urls.is_empty() { vec![PLACEHOLDER_IMAGE.to_owned()] } else { urls }
}

/// Next carousel slot, wrapping.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Previous carousel slot, wrapping.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// `★★★☆☆` for a 1..=5 rating; out-of-range values clamp.
pub fn star_rating(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    format!("{}{}", "★".repeat(filled), "☆".repeat(usize::from(MAX_RATING) - filled))
}

/// Booking entry point for a tenant.
pub fn booking_href(property_id: i64) -> String {
    format!("/bookings/new?propertyId={property_id}")
}

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let property = RwSignal::new(None::<Property>);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let loading = RwSignal::new(true);
    let image_index = RwSignal::new(0_usize);

    let property_id = Memo::new(move |_| params.read().get("id").and_then(|raw| parse_property_id(&raw)));

    Effect::new(move || {
        let Some(id) = property_id.get() else {
            loading.set(false);
            return;
        };
        loading.set(true);
        image_index.set(0);

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let fetch = |api: ApiClient| async move { crate::net::resources::get_property(&api, id).await };
                match session.authorized(fetch).await {
                    Ok(found) => property.set(Some(found)),
                    Err(error) => {
                        log::warn!("property {id} unavailable: {error}");
                        property.set(None);
                    }
                }
                loading.set(false);

                let page = crate::net::types::ListParams::page(0, REVIEW_PAGE_SIZE);
                match crate::net::resources::property_reviews(&session.api(), id, &page).await {
                    Ok(found) => reviews.set(found.items),
                    Err(error) => log::warn!("reviews for property {id} unavailable: {error}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        log::debug!("property {id} fetch skipped off-browser");
    });

    let gallery = Memo::new(move |_| property.get().map(|p| gallery_urls(&config, &p)).unwrap_or_default());
    let current_image = move || {
        let urls = gallery.get();
        urls.get(image_index.get()).cloned().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
    };
    let step = move |forward: bool| {
        let len = gallery.get_untracked().len();
        image_index.update(|i| *i = if forward { next_index(*i, len) } else { prev_index(*i, len) });
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="property-detail"><p class="spinner">"Loading..."</p></div> }
        >
            <Show
                when=move || property.get().is_some()
                fallback=|| view! { <div class="property-detail"><p>"Property not found"</p></div> }
            >
                {move || property.get().map(|p| {
                    let id = p.id;
                    let owner = p.owner.clone();
                    view! {
                        <div class="property-detail">
                            <div class="property-detail__gallery">
                                <img class="property-detail__image" src=current_image alt=p.title.clone()/>
                                <Show when=move || { gallery.get().len() > 1 }>
                                    <button class="property-detail__nav" on:click=move |_| step(false)>"‹"</button>
                                    <button class="property-detail__nav" on:click=move |_| step(true)>"›"</button>
                                </Show>
                            </div>

                            <section class="property-detail__info">
                                <h1>{p.title.clone()}</h1>
                                <p class="property-detail__location">{format_location(&p.city, &p.state)}</p>
                                <p class="property-detail__rent">
                                    {format_rent(p.rent_amount)} "/month"
                                    {p.deposit.map(|d| format!(" • Deposit: {}", format_rent(d)))}
                                </p>
                                <p class="property-detail__specs">
                                    {format!("{} Bedrooms • {} Bathrooms", p.bedrooms, p.bathrooms)}
                                    {p.area_sqft.map(|a| format!(" • {a} sqft"))}
                                </p>
                                <h2>"Description"</h2>
                                <p class="property-detail__description">{p.description.clone()}</p>
                                <h2>"Amenities"</h2>
                                <div class="property-detail__amenities">
                                    {p.amenities.iter().map(|a| view! { <span class="chip">{a.clone()}</span> }).collect::<Vec<_>>()}
                                </div>
                                <h2>"Address"</h2>
                                <p>{p.address.clone()}</p>
                                <p>{format!("{} - {}", format_location(&p.city, &p.state), p.pincode)}</p>
                            </section>

                            <aside class="property-detail__owner">
                                <h3>"Owner Details"</h3>
                                {owner.map(|o| view! {
                                    <p><strong>"Name: "</strong>{o.username}</p>
                                    <p><strong>"Email: "</strong>{o.email}</p>
                                    {o.phone.map(|phone| view! { <p><strong>"Phone: "</strong>{phone}</p> })}
                                })}
                                <Show when=move || session.get().is_tenant()>
                                    <a class="btn" href=booking_href(id)>"Book Now"</a>
                                </Show>
                                <Show when=move || !session.get().is_authenticated()>
                                    <a class="btn" href="/login">"Login to Book"</a>
                                </Show>
                            </aside>

                            <section class="property-detail__reviews">
                                <h2>"Reviews"</h2>
                                <Show
                                    when=move || !reviews.get().is_empty()
                                    fallback=|| view! { <p>"No reviews yet"</p> }
                                >
                                    {move || reviews.get().into_iter().map(|review| view! {
                                        <article class="review">
                                            <span class="review__author">
                                                {review.user.map(|u| u.username).unwrap_or_default()}
                                            </span>
                                            <span class="review__stars">{star_rating(review.rating)}</span>
                                            <p>{review.comment.unwrap_or_default()}</p>
                                        </article>
                                    }).collect::<Vec<_>>()}
                                </Show>
                            </section>
                        </div>
                    }
                })}
            </Show>
        </Show>
    }
}
