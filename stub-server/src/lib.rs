//! # stub-server
//!
//! In-memory stand-in for the hosted product catalog API. Serves the same
//! three endpoints the frontend talks to (list, multipart create, delete by
//! id) so the full create/list/delete cycle can be exercised locally and in
//! integration tests without the remote deployment.

pub mod routes;
pub mod store;
