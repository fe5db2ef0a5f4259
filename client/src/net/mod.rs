//! Networking layer for the remote products API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema the server
//! responds with. All calls target one fixed origin; there is no local
//! configuration.

pub mod api;
pub mod types;
