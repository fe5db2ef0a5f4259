//! Product-list state for the catalog manager view.
//!
//! DESIGN
//! ======
//! One loading flag is shared by list, create, and delete. The flag only
//! drives UI affordances; operations never check it before starting, so
//! overlap semantics stay exactly as the API contract describes them.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::Product;

/// Product list state backed by the remote catalog API.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
}

impl ProductsState {
    /// Mark a request in flight. Every operation flips this on before
    /// touching the network.
    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    /// Replace the collection after a successful list fetch and settle.
    pub fn apply_list(&mut self, items: Vec<Product>) {
        self.items = items;
        self.loading = false;
    }

    /// Settle a request without touching the collection. Failed requests
    /// land here so the last rendered list stays intact.
    pub fn settle(&mut self) {
        self.loading = false;
    }
}
