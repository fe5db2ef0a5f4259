use super::*;

#[test]
fn image_slot_label_is_one_based() {
    assert_eq!(image_slot_label(0), "Image 1");
    assert_eq!(image_slot_label(3), "Image 4");
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Add Product");
    assert_eq!(submit_label(true), "Adding...");
}
