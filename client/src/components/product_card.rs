//! Catalog row component for the product list.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// A single product row: images, name, price, category, description, and a
/// delete affordance. `busy` disables the delete button while any request is
/// in flight.
#[component]
pub fn ProductCard(product: Product, busy: bool, on_delete: Callback<String>) -> impl IntoView {
    let images: Vec<(String, String)> = product
        .images()
        .map(|payload| (jpeg_data_uri(payload), product.name.clone()))
        .collect();
    let Product { id, name, price, vehicle_type, description, .. } = product;

    view! {
        <li class="product-card">
            <div class="product-card__images">
                {images
                    .into_iter()
                    .map(|(src, alt)| view! { <img class="product-card__image" src=src alt=alt/> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="product-card__body">
                <span class="product-card__name">{name}</span>
                " - $"
                <span class="product-card__price">{price}</span>
                <p class="product-card__type">"Type: " {vehicle_type}</p>
                <p class="product-card__description">{description}</p>
            </div>
            <button
                class="btn product-card__delete"
                disabled=busy
                on:click=move |_| on_delete.run(id.clone())
            >
                {delete_label(busy)}
            </button>
        </li>
    }
}

/// Render a base64 JPEG payload as an inline image source.
fn jpeg_data_uri(payload: &str) -> String {
    format!("data:image/jpeg;base64,{payload}")
}

fn delete_label(busy: bool) -> &'static str {
    if busy { "Deleting..." } else { "Delete" }
}
