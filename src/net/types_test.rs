use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("tenant".parse::<Role>(), Ok(Role::Tenant));
    assert_eq!("OWNER".parse::<Role>(), Ok(Role::Owner));
    assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
}

#[test]
fn role_rejects_unknown_names() {
    assert_eq!("landlord".parse::<Role>(), Err(UnknownRole("landlord".to_owned())));
}

#[test]
fn role_serializes_as_backend_enum_name() {
    assert_eq!(serde_json::to_value(Role::Owner).unwrap(), serde_json::json!("OWNER"));
    assert_eq!(Role::Owner.to_string(), "owner");
}

#[test]
fn role_dashboard_paths_are_distinct() {
    let paths: std::collections::HashSet<_> = Role::ALL.iter().map(|r| r.dashboard_path()).collect();
    assert_eq!(paths.len(), Role::ALL.len());
}

// =============================================================
// User / AuthResponse decoding
// =============================================================

#[test]
fn user_decodes_with_only_id_and_role() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 1, "role": "tenant" })).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Tenant);
    assert!(user.username.is_empty());
    assert!(user.phone.is_none());
}

#[test]
fn user_decodes_java_enum_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "username": "olly",
        "email": "olly@example.com",
        "role": "OWNER",
        "phone": "555-0100"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Owner);
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
}

#[test]
fn auth_response_reads_camel_case_refresh_token() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "t1",
        "refreshToken": "r1",
        "user": { "id": 1, "role": "tenant" }
    }))
    .unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.refresh_token.as_deref(), Some("r1"));
}

#[test]
fn auth_response_tolerates_missing_refresh_token() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "t1",
        "user": { "id": 1, "role": "admin" }
    }))
    .unwrap();
    assert!(resp.refresh_token.is_none());
}

#[test]
fn register_request_omits_absent_optionals() {
    let req = RegisterRequest {
        username: "u".to_owned(),
        email: "u@example.com".to_owned(),
        password: "pw".to_owned(),
        role: None,
        phone: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert!(value.get("role").is_none());
    assert!(value.get("phone").is_none());
}

#[test]
fn refresh_request_uses_camel_case_key() {
    let value = serde_json::to_value(RefreshRequest { refresh_token: "r1".to_owned() }).unwrap();
    assert_eq!(value, serde_json::json!({ "refreshToken": "r1" }));
}

// =============================================================
// Property helpers
// =============================================================

fn image(url: &str, primary: bool) -> PropertyImage {
    PropertyImage { id: None, url: url.to_owned(), is_primary: primary }
}

fn property_with_images(images: Vec<PropertyImage>) -> Property {
    serde_json::from_value::<Property>(serde_json::json!({
        "id": 3,
        "title": "Loft",
        "propertyType": "STUDIO",
        "rentAmount": 1200.0
    }))
    .map(|mut p| {
        p.images = images;
        p
    })
    .unwrap()
}

#[test]
fn primary_image_prefers_flagged_image() {
    let p = property_with_images(vec![image("/a.jpg", false), image("/b.jpg", true)]);
    assert_eq!(p.primary_image(), Some("/b.jpg"));
}

#[test]
fn primary_image_falls_back_to_first() {
    let p = property_with_images(vec![image("/a.jpg", false), image("/b.jpg", false)]);
    assert_eq!(p.primary_image(), Some("/a.jpg"));
}

#[test]
fn primary_image_none_without_images() {
    assert_eq!(property_with_images(Vec::new()).primary_image(), None);
}

#[test]
fn property_defaults_to_draft_status() {
    let p = property_with_images(Vec::new());
    assert_eq!(p.availability_status, AvailabilityStatus::Draft);
    assert!(!p.is_verified);
}

#[test]
fn property_type_parses_any_case() {
    assert_eq!("villa".parse::<PropertyType>(), Ok(PropertyType::Villa));
    assert_eq!("ROOM".parse::<PropertyType>(), Ok(PropertyType::Room));
    assert!("castle".parse::<PropertyType>().is_err());
}

// =============================================================
// Page envelopes
// =============================================================

#[test]
fn page_from_envelope_maps_resource_keys() {
    let body = serde_json::json!({
        "bookings": [],
        "currentPage": 2,
        "totalPages": 5,
        "totalBookings": 41
    });
    let page = Page::<Booking>::from_envelope(body, "bookings", "totalBookings").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.total_count, 41);
    assert!(page.has_previous());
    assert!(page.has_next());
}

#[test]
fn page_from_envelope_missing_fields_read_as_empty() {
    let page = Page::<Review>::from_envelope(serde_json::json!({}), "reviews", "totalReviews").unwrap();
    assert_eq!(page, Page::empty());
    assert!(!page.has_next());
    assert!(!page.has_previous());
}

#[test]
fn page_from_envelope_rejects_malformed_items() {
    let body = serde_json::json!({ "reviews": [{ "id": "not-a-number" }] });
    assert!(Page::<Review>::from_envelope(body, "reviews", "totalReviews").is_err());
}

#[test]
fn last_page_has_no_next() {
    let page = Page::<Review> { items: Vec::new(), current_page: 4, total_pages: 5, total_count: 50 };
    assert!(!page.has_next());
}

#[test]
fn list_params_skip_unset_sorting() {
    let value = serde_json::to_value(ListParams::page(1, 20)).unwrap();
    assert_eq!(value, serde_json::json!({ "page": 1, "limit": 20 }));
}
