//! Product catalog routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the wire shape of the hosted catalog API: products are created
//! from multipart form data, listed as JSON with image payloads inlined as
//! base64 strings, and deleted by id. CORS is wide open so a browser client
//! served from any origin can talk to it.

use axum::Router;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get};
use base64::Engine;
use base64::engine::general_purpose;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::store::{IMAGE_SLOTS, NewProduct, ProductRecord, ProductStore, StoreError};

/// Request bodies larger than this are rejected before parsing.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Assemble the router with CORS open, matching the hosted deployment.
#[must_use]
pub fn app(store: ProductStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(store)
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

#[derive(Serialize)]
struct ProductResponse {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    price: String,
    #[serde(rename = "type")]
    vehicle_type: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image4: Option<String>,
}

fn to_response(record: ProductRecord) -> ProductResponse {
    let [image1, image2, image3, image4] = record
        .images
        .map(|slot| slot.map(|bytes| encode_image(&bytes)));

    ProductResponse {
        id: record.id,
        name: record.name,
        price: record.price,
        vehicle_type: record.vehicle_type,
        description: record.description,
        image1,
        image2,
        image3,
        image4,
    }
}

fn encode_image(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/products` — list all products.
async fn list_products(State(store): State<ProductStore>) -> Json<Vec<ProductResponse>> {
    let records = store.list().await;
    Json(records.into_iter().map(to_response).collect())
}

/// `POST /api/products` — create a product from multipart form fields.
async fn create_product(
    State(store): State<ProductStore>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ProductResponse>), StatusCode> {
    let new = collect_product_form(multipart).await?;
    let record = store.insert(new).await;
    tracing::info!(id = %record.id, name = %record.name, "product created");
    Ok((StatusCode::CREATED, Json(to_response(record))))
}

/// `DELETE /api/products/{id}` — delete a product by id.
async fn delete_product(
    State(store): State<ProductStore>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    store.remove(&id).await.map_err(store_error_to_status)?;
    tracing::info!(%id, "product deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}

fn store_error_to_status(err: StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

// =============================================================================
// FORM PARSING
// =============================================================================

/// Read multipart fields into a `NewProduct`.
///
/// The form is taken as-is: missing text fields stay empty, unknown field
/// names are dropped, and an empty file part leaves its slot unset.
async fn collect_product_form(mut multipart: Multipart) -> Result<NewProduct, StatusCode> {
    let mut new = NewProduct::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if let Some(slot) = image_slot_index(&name) {
            let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            if !bytes.is_empty() {
                new.images[slot] = Some(bytes.to_vec());
            }
        } else {
            let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            assign_text_field(&mut new, &name, value);
        }
    }

    Ok(new)
}

/// Map `imageFile1`..`imageFile4` to a zero-based slot index.
fn image_slot_index(field_name: &str) -> Option<usize> {
    let ordinal: usize = field_name.strip_prefix("imageFile")?.parse().ok()?;
    if (1..=IMAGE_SLOTS).contains(&ordinal) {
        Some(ordinal - 1)
    } else {
        None
    }
}

fn assign_text_field(new: &mut NewProduct, name: &str, value: String) {
    match name {
        "name" => new.name = value,
        "price" => new.price = value,
        "type" => new.vehicle_type = value,
        "description" => new.description = value,
        _ => {}
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
