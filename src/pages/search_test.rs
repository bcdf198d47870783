use super::*;

#[test]
fn draft_round_trips_through_filters() {
    let filters = SearchFilters {
        location: Some("Goa".to_owned()),
        min_price: Some(1000.0),
        max_price: None,
        property_type: Some(PropertyType::House),
        bedrooms: Some(2),
        page: 0,
    };
    let draft = SearchDraft::from_filters(&filters);
    assert_eq!(draft.min_price, "1000");
    assert_eq!(draft.property_type, "HOUSE");
    assert_eq!(draft.to_filters(), filters);
}

#[test]
fn submitting_draft_resets_page() {
    let filters = SearchFilters { bedrooms: Some(3), page: 4, ..SearchFilters::default() };
    let draft = SearchDraft::from_filters(&filters);
    assert_eq!(draft.to_filters().page, 0);
}

#[test]
fn draft_drops_unparseable_values() {
    let draft = SearchDraft { min_price: "abc".to_owned(), bedrooms: "2".to_owned(), ..SearchDraft::default() };
    let filters = draft.to_filters();
    assert_eq!(filters.min_price, None);
    assert_eq!(filters.bedrooms, Some(2));
}

#[test]
fn pagination_label_is_one_based() {
    let page = Page::<Property> { items: Vec::new(), current_page: 0, total_pages: 3, total_count: 30 };
    assert_eq!(pagination_label(&page), "Page 1 of 3");
}
