//! Listing card used on the home and search pages.
//!
//! DESIGN
//! ======
//! Formatting lives in plain functions so card text is unit tested without a
//! DOM. Image URLs resolve through [`ClientConfig::image_url`].

#[cfg(test)]
#[path = "property_card_test.rs"]
mod property_card_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{AvailabilityStatus, Property};

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";
const AMENITY_PREVIEW: usize = 3;

/// Rent with thousands separators, e.g. `₹12,500`.
pub fn format_rent(amount: f64) -> String {
    let rounded = amount.max(0.0).round();
    let digits = format!("{rounded:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

/// `City, State`, skipping blank parts.
pub fn format_location(city: &str, state: &str) -> String {
    [city.trim(), state.trim()].into_iter().filter(|s| !s.is_empty()).collect::<Vec<_>>().join(", ")
}

/// First few amenities plus how many were left out.
pub fn amenity_preview(amenities: &[String]) -> (&[String], usize) {
    let shown = amenities.len().min(AMENITY_PREVIEW);
    (&amenities[..shown], amenities.len() - shown)
}

/// Display URL for the card image.
pub fn card_image_url(config: &ClientConfig, property: &Property) -> String {
    property.primary_image().map_or_else(|| PLACEHOLDER_IMAGE.to_owned(), |path| config.image_url(path))
}

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let image_url = card_image_url(&config, &property);
    let href = format!("/property/{}", property.id);
    let rented = property.availability_status == AvailabilityStatus::Rented;
    let location = format_location(&property.city, &property.state);
    let (amenities, hidden) = amenity_preview(&property.amenities);
    let amenities = amenities.to_vec();
    let area = property.area_sqft.map(|sqft| format!("{sqft} sqft"));

    view! {
        <a class="property-card" href=href>
            <div class="property-card__media">
                <img src=image_url alt=property.title.clone() class="property-card__image"/>
                <span class="property-card__type">{property.property_type.label()}</span>
                <Show when=move || rented>
                    <span class="property-card__badge">"Rented"</span>
                </Show>
            </div>
            <div class="property-card__body">
                <h3 class="property-card__title">{property.title}</h3>
                <p class="property-card__location">{location}</p>
                <p class="property-card__rent">
                    <span class="property-card__amount">{format_rent(property.rent_amount)}</span>
                    <span class="property-card__period">"/month"</span>
                </p>
                <p class="property-card__specs">
                    {format!("{} Beds • {} Baths", property.bedrooms, property.bathrooms)}
                    {area.map(|a| format!(" • {a}"))}
                </p>
                <div class="property-card__amenities">
                    {amenities
                        .into_iter()
                        .map(|amenity| view! { <span class="property-card__amenity">{amenity}</span> })
                        .collect::<Vec<_>>()}
                    {(hidden > 0).then(|| view! { <span class="property-card__amenity">{format!("+{hidden} more")}</span> })}
                </div>
            </div>
        </a>
    }
}
