//! # client
//!
//! Leptos + WASM admin frontend for a vehicle product catalog. Lists,
//! creates, and deletes products against a remote HTTP API; images upload as
//! multipart form data and render back as base64 data URIs.
//!
//! Built for the browser with Trunk (`csr` feature); compiles off-wasm with
//! inert network stubs so the test suite runs natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
