//! Client-local application state.
//!
//! DESIGN
//! ======
//! State is owned by the page that renders it and handed down as plain
//! signals; there is no global store. `products` holds what the server
//! reported, `draft` holds what the user is about to send.

pub mod draft;
pub mod products;
