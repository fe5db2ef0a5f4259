//! In-memory product storage.
//!
//! DESIGN
//! ======
//! `ProductStore` is injected into Axum handlers via the `State` extractor.
//! Products live in a `Vec` behind an async `RwLock`; nothing is persisted,
//! a restart starts empty. Insertion order is list order.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Number of image attachments a product can carry.
pub const IMAGE_SLOTS: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("product not found: {0}")]
    NotFound(String),
}

// =============================================================================
// RECORDS
// =============================================================================

/// A stored product. Image slots hold the raw uploaded bytes.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: String,
    pub vehicle_type: String,
    pub description: String,
    pub images: [Option<Vec<u8>>; IMAGE_SLOTS],
}

/// Fields collected from a create request, before an id is assigned.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub vehicle_type: String,
    pub description: String,
    pub images: [Option<Vec<u8>>; IMAGE_SLOTS],
}

// =============================================================================
// STORE
// =============================================================================

/// Shared product store, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the inner list is Arc-wrapped.
#[derive(Clone)]
pub struct ProductStore {
    items: Arc<RwLock<Vec<ProductRecord>>>,
}

impl ProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Arc::new(RwLock::new(Vec::new())) }
    }

    /// Assign a fresh id and store the product. Returns the stored record.
    pub async fn insert(&self, new: NewProduct) -> ProductRecord {
        let record = ProductRecord {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            price: new.price,
            vehicle_type: new.vehicle_type,
            description: new.description,
            images: new.images,
        };

        let mut items = self.items.write().await;
        items.push(record.clone());
        record
    }

    pub async fn list(&self) -> Vec<ProductRecord> {
        self.items.read().await.clone()
    }

    /// Remove a product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has the given id.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|record| record.id != id);
        if items.len() == before {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
