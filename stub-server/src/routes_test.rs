use super::*;

fn record_with_first_image() -> ProductRecord {
    ProductRecord {
        id: "abc123".to_owned(),
        name: "Falcon".to_owned(),
        price: "4500".to_owned(),
        vehicle_type: "scooter".to_owned(),
        description: "Electric scooter".to_owned(),
        images: [Some(b"hi".to_vec()), None, None, None],
    }
}

#[test]
fn image_slot_index_maps_one_based_names() {
    assert_eq!(image_slot_index("imageFile1"), Some(0));
    assert_eq!(image_slot_index("imageFile4"), Some(3));
}

#[test]
fn image_slot_index_rejects_out_of_range_ordinals() {
    assert_eq!(image_slot_index("imageFile0"), None);
    assert_eq!(image_slot_index("imageFile5"), None);
}

#[test]
fn image_slot_index_rejects_other_names() {
    assert_eq!(image_slot_index("name"), None);
    assert_eq!(image_slot_index("imageFile"), None);
    assert_eq!(image_slot_index("imageFileX"), None);
}

#[test]
fn assign_text_field_routes_known_names() {
    let mut new = NewProduct::default();
    assign_text_field(&mut new, "name", "Falcon".to_owned());
    assign_text_field(&mut new, "price", "4500".to_owned());
    assign_text_field(&mut new, "type", "scooter".to_owned());
    assign_text_field(&mut new, "description", "Electric scooter".to_owned());

    assert_eq!(new.name, "Falcon");
    assert_eq!(new.price, "4500");
    assert_eq!(new.vehicle_type, "scooter");
    assert_eq!(new.description, "Electric scooter");
}

#[test]
fn assign_text_field_drops_unknown_names() {
    let mut new = NewProduct::default();
    assign_text_field(&mut new, "color", "red".to_owned());
    assert_eq!(new.name, "");
    assert_eq!(new.price, "");
}

#[test]
fn store_error_to_status_maps_not_found() {
    let err = StoreError::NotFound("abc123".to_owned());
    assert_eq!(store_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn encode_image_emits_standard_base64() {
    assert_eq!(encode_image(b"hi"), "aGk=");
}

#[test]
fn to_response_uses_wire_field_names() {
    let value = serde_json::to_value(to_response(record_with_first_image())).unwrap();

    assert_eq!(value.get("_id").and_then(|v| v.as_str()), Some("abc123"));
    assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("scooter"));
    assert!(value.get("id").is_none());
    assert!(value.get("vehicle_type").is_none());
}

#[test]
fn to_response_inlines_images_and_omits_empty_slots() {
    let value = serde_json::to_value(to_response(record_with_first_image())).unwrap();

    assert_eq!(value.get("image1").and_then(|v| v.as_str()), Some("aGk="));
    assert!(value.get("image2").is_none());
    assert!(value.get("image3").is_none());
    assert!(value.get("image4").is_none());
}
