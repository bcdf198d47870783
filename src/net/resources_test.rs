use super::*;

#[test]
fn unwrap_field_extracts_envelope_member() {
    let body = serde_json::json!({
        "message": "Booking approved successfully",
        "booking": { "id": 9, "bookingStatus": "APPROVED", "checkInDate": "2026-11-01" }
    });
    let booking: Booking = unwrap_field(body, "booking").unwrap();
    assert_eq!(booking.id, 9);
    assert_eq!(booking.booking_status, crate::net::types::BookingStatus::Approved);
}

#[test]
fn unwrap_field_missing_key_is_decode_error() {
    let err = unwrap_field::<Booking>(serde_json::json!({ "message": "ok" }), "booking").unwrap_err();
    assert_eq!(err, ApiError::Decode("response is missing `booking`".to_owned()));
}

#[test]
fn property_page_reads_property_envelope() {
    let body = serde_json::json!({
        "properties": [{ "id": 1, "title": "Flat", "propertyType": "APARTMENT", "rentAmount": 900.0 }],
        "currentPage": 0,
        "totalPages": 1,
        "totalProperties": 1
    });
    let page = property_page(body).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Flat");
    assert_eq!(page.total_count, 1);
}

#[test]
fn image_path_percent_encodes_filename() {
    assert_eq!(image_path("my photo.jpg"), "/images/my%20photo.jpg");
}

#[test]
fn booking_actions_map_to_path_segments() {
    assert_eq!(BookingAction::Approve.segment(), "approve");
    assert_eq!(BookingAction::Reject.segment(), "reject");
    assert_eq!(BookingAction::Cancel.segment(), "cancel");
}

#[test]
fn resource_paths_embed_ids() {
    assert_eq!(property_path(42), "/properties/42");
    assert_eq!(booking_path(7), "/bookings/7");
}
