use super::*;

#[test]
fn location_search_encodes_location() {
    assert_eq!(location_search_path("New York"), "/search?location=New%20York");
}

#[test]
fn blank_location_searches_everything() {
    assert_eq!(location_search_path("   "), "/search");
}

#[test]
fn quick_filters_use_backend_type_names() {
    let filters = quick_filters();
    assert_eq!(filters[0], ("Apartments", "/search?propertyType=APARTMENT".to_owned()));
    assert_eq!(filters[3].1, "/search?maxPrice=10000");
}
