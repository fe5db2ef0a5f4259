//! Draft state for the create-product form.
//!
//! DESIGN
//! ======
//! The draft mirrors the creatable fields of a product. Image slots record
//! the picked file's name; the live `File` handles stay in the form's input
//! elements and are read once at submit time, so this struct stays plain
//! data and testable off-wasm.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Number of image slots a product can carry.
pub const IMAGE_SLOTS: usize = 4;

/// Creatable text fields of a product, addressed by the form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    VehicleType,
    Description,
}

/// In-progress values of the create-product form.
///
/// Cleared back to `Default` after a successful create; left untouched when
/// the create fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftProduct {
    pub name: String,
    pub price: String,
    pub vehicle_type: String,
    pub description: String,
    /// File name of the picked image per slot; `None` for empty slots.
    pub images: [Option<String>; IMAGE_SLOTS],
}

impl DraftProduct {
    /// Store a text input's current value. No validation: empty values and
    /// non-numeric prices are accepted verbatim.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::VehicleType => self.vehicle_type = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Record the picked file name for one slot; `None` clears the slot.
    /// Slot indexes beyond the last slot are ignored.
    pub fn set_image(&mut self, slot: usize, file_name: Option<String>) {
        if let Some(entry) = self.images.get_mut(slot) {
            *entry = file_name;
        }
    }

    /// Populated image slots in slot order.
    pub fn picked_images(&self) -> impl Iterator<Item = (usize, &String)> {
        self.images
            .iter()
            .enumerate()
            .filter_map(|(slot, name)| name.as_ref().map(|n| (slot, n)))
    }
}
