//! HTTP operations against the remote products API.
//!
//! Browser (csr): real calls via `gloo-net`; the create payload is a
//! `FormData` the browser serializes itself so the multipart boundary is
//! always correct.
//! Off-browser: stubs returning errors, since these endpoints are only
//! reachable from the mounted app.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, String>`. Callers log the message and
//! move on; no failure is surfaced in the UI beyond the busy flag clearing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Product;
#[cfg(any(test, feature = "csr"))]
use crate::state::draft::DraftProduct;
#[cfg(feature = "csr")]
use crate::state::draft::IMAGE_SLOTS;

/// Origin of the remote catalog backend. Fixed at compile time; the client
/// has no runtime configuration surface.
pub const API_ORIGIN: &str = "https://hcbackend.onrender.com";

#[cfg(any(test, feature = "csr"))]
fn products_endpoint() -> String {
    format!("{API_ORIGIN}/api/products")
}

#[cfg(any(test, feature = "csr"))]
fn product_endpoint(product_id: &str) -> String {
    format!("{API_ORIGIN}/api/products/{product_id}")
}

#[cfg(any(test, feature = "csr"))]
fn list_failed_message(status: u16) -> String {
    format!("list products failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn create_failed_message(status: u16) -> String {
    format!("create product failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn delete_failed_message(status: u16) -> String {
    format!("delete product failed: {status}")
}

/// One entry of the multipart create payload, in wire order.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Debug, PartialEq)]
enum CreateField {
    /// Plain text value under its wire name.
    Text { name: &'static str, value: String },
    /// Picked image for a slot, uploaded under the slot's wire name with the
    /// file's own name.
    Image { name: String, slot: usize, file_name: String },
}

/// Multipart field name for a zero-based image slot.
#[cfg(any(test, feature = "csr"))]
fn image_field_name(slot: usize) -> String {
    format!("imageFile{}", slot + 1)
}

/// Plan the multipart payload for a draft. Text fields are always present
/// (empty values included); image slots appear only when populated.
#[cfg(any(test, feature = "csr"))]
fn create_form_fields(draft: &DraftProduct) -> Vec<CreateField> {
    let mut fields = vec![
        CreateField::Text { name: "name", value: draft.name.clone() },
        CreateField::Text { name: "price", value: draft.price.clone() },
        CreateField::Text { name: "type", value: draft.vehicle_type.clone() },
        CreateField::Text { name: "description", value: draft.description.clone() },
    ];
    for (slot, file_name) in draft.picked_images() {
        fields.push(CreateField::Image {
            name: image_field_name(slot),
            slot,
            file_name: file_name.clone(),
        });
    }
    fields
}

/// Fetch the full product list from `GET /api/products`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the body does not parse as a product list.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&products_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Create a product via `POST /api/products` with a multipart payload built
/// from the draft and the files currently picked in the form, one per slot.
/// The response body is ignored; the caller re-fetches the list instead.
///
/// # Errors
///
/// Returns an error string if the payload cannot be assembled, the HTTP
/// request fails, or the server responds with a non-OK status.
#[cfg(feature = "csr")]
pub async fn create_product(
    draft: &DraftProduct,
    files: &[Option<web_sys::File>; IMAGE_SLOTS],
) -> Result<(), String> {
    let form = build_create_form(draft, files)?;
    let resp = gloo_net::http::Request::post(&products_endpoint())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(create_failed_message(resp.status()));
    }
    Ok(())
}

// Content-Type is left to the browser so the multipart boundary matches the
// serialized body.
#[cfg(feature = "csr")]
fn build_create_form(
    draft: &DraftProduct,
    files: &[Option<web_sys::File>; IMAGE_SLOTS],
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("form init failed: {e:?}"))?;
    for field in create_form_fields(draft) {
        match field {
            CreateField::Text { name, value } => {
                form.append_with_str(name, &value)
                    .map_err(|e| format!("form field {name} failed: {e:?}"))?;
            }
            CreateField::Image { name, slot, file_name } => {
                if let Some(file) = files[slot].as_ref() {
                    form.append_with_blob_and_filename(&name, file, &file_name)
                        .map_err(|e| format!("form field {name} failed: {e:?}"))?;
                }
            }
        }
    }
    Ok(form)
}

/// Delete a product via `DELETE /api/products/{id}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_product(product_id: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&product_endpoint(product_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(delete_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = product_id;
        Err("not available outside the browser".to_owned())
    }
}
