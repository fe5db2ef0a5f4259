//! Product manager page: create form plus catalog list with delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns both state signals and all three operations against the
//! remote API. Data flows one way: signals down into child components,
//! callbacks back up. Each mutation awaits its own list re-fetch, so one
//! create is exactly one POST followed by one GET and the shared loading
//! flag holds from request start to final settlement.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::draft::{DraftField, DraftProduct, IMAGE_SLOTS};
use crate::state::products::ProductsState;

/// Image input element handles, one per slot, read at submit time.
type ImageInputRefs = [NodeRef<leptos::html::Input>; IMAGE_SLOTS];

/// Product manager page.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(ProductsState::default());
    let draft = RwSignal::new(DraftProduct::default());

    // Initial list fetch once the page mounts.
    Effect::new(move || load_products(products));

    let on_delete = Callback::new(move |product_id: String| remove_product(products, product_id));

    view! {
        <div class="products-page">
            <h2>"Product Management"</h2>
            <ProductForm products=products draft=draft/>
            <section class="product-list">
                <h3>"Product List"</h3>
                // Indicator above the list; the list itself stays rendered
                // while a request is in flight.
                <Show when=move || products.get().loading>
                    <p class="product-list__loading">"Loading..."</p>
                </Show>
                <ul class="product-list__items">
                    {move || {
                        let state = products.get();
                        let busy = state.loading;
                        state
                            .items
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        busy=busy
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}

/// Create-product form: four text fields and one file input per image slot.
#[component]
fn ProductForm(products: RwSignal<ProductsState>, draft: RwSignal<DraftProduct>) -> impl IntoView {
    let image_inputs: ImageInputRefs = std::array::from_fn(|_| NodeRef::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_draft(products, draft, image_inputs);
    };

    view! {
        <form class="product-form" on:submit=on_submit>
            <h3>"Add Product"</h3>
            <input
                class="product-form__input"
                type="text"
                placeholder="Name"
                prop:value=move || draft.get().name
                on:input=move |ev| {
                    draft.update(|d| d.set_field(DraftField::Name, event_target_value(&ev)));
                }
            />
            <input
                class="product-form__input"
                type="text"
                placeholder="Price"
                prop:value=move || draft.get().price
                on:input=move |ev| {
                    draft.update(|d| d.set_field(DraftField::Price, event_target_value(&ev)));
                }
            />
            <input
                class="product-form__input"
                type="text"
                placeholder="Vehicle Type"
                prop:value=move || draft.get().vehicle_type
                on:input=move |ev| {
                    draft.update(|d| d.set_field(DraftField::VehicleType, event_target_value(&ev)));
                }
            />
            <textarea
                class="product-form__textarea"
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input=move |ev| {
                    draft.update(|d| d.set_field(DraftField::Description, event_target_value(&ev)));
                }
            ></textarea>
            <div class="product-form__images">
                {(0..IMAGE_SLOTS)
                    .map(|slot| {
                        view! {
                            <ImageSlotInput slot=slot draft=draft input_ref=image_inputs[slot]/>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button
                class="btn btn--primary product-form__submit"
                type="submit"
                disabled=move || products.get().loading
            >
                {move || submit_label(products.get().loading)}
            </button>
        </form>
    }
}

/// One labeled file input. Picking a file records its name in the draft; the
/// element itself keeps the `File` handle until submit.
#[component]
fn ImageSlotInput(
    slot: usize,
    draft: RwSignal<DraftProduct>,
    input_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
    let on_change = move |_| {
        let file_name = picked_file_name(input_ref);
        draft.update(|d| d.set_image(slot, file_name));
    };

    view! {
        <label class="product-form__image-slot">
            {image_slot_label(slot)}
            <input type="file" node_ref=input_ref on:change=on_change/>
        </label>
    }
}

/// Form label for an image slot; slots are 1-based in the UI.
fn image_slot_label(slot: usize) -> String {
    format!("Image {}", slot + 1)
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Adding..." } else { "Add Product" }
}

/// Name of the file currently picked in a slot's input, if any.
fn picked_file_name(input_ref: NodeRef<leptos::html::Input>) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        picked_file(input_ref).map(|file| file.name())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
        None
    }
}

#[cfg(feature = "csr")]
fn picked_file(input_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input_ref.get_untracked()?.files()?.get(0)
}

#[cfg(feature = "csr")]
fn clear_file_inputs(image_inputs: &ImageInputRefs) {
    for input_ref in image_inputs {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    }
}

/// Fetch the catalog and replace the rendered list.
fn load_products(products: RwSignal<ProductsState>) {
    #[cfg(feature = "csr")]
    {
        products.update(|state| state.begin_request());
        leptos::task::spawn_local(async move {
            apply_list_fetch(products).await;
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = products;
    }
}

/// Shared list-refresh tail used by every operation. A failed fetch logs and
/// settles, leaving the previously rendered collection untouched.
#[cfg(feature = "csr")]
async fn apply_list_fetch(products: RwSignal<ProductsState>) {
    match crate::net::api::fetch_products().await {
        Ok(items) => products.update(|state| state.apply_list(items)),
        Err(err) => {
            log::error!("product list fetch failed: {err}");
            products.update(|state| state.settle());
        }
    }
}

/// Post the draft as a new product; on success reset the form and refresh.
fn submit_draft(
    products: RwSignal<ProductsState>,
    draft: RwSignal<DraftProduct>,
    image_inputs: ImageInputRefs,
) {
    #[cfg(feature = "csr")]
    {
        let snapshot = draft.get_untracked();
        let files = image_inputs.map(|input_ref| picked_file(input_ref));
        products.update(|state| state.begin_request());
        leptos::task::spawn_local(async move {
            match crate::net::api::create_product(&snapshot, &files).await {
                Ok(()) => {
                    draft.set(DraftProduct::default());
                    clear_file_inputs(&image_inputs);
                    apply_list_fetch(products).await;
                }
                Err(err) => {
                    log::error!("product create failed: {err}");
                    products.update(|state| state.settle());
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (products, draft, image_inputs);
    }
}

/// Delete one product by identifier, then refresh the list.
fn remove_product(products: RwSignal<ProductsState>, product_id: String) {
    #[cfg(feature = "csr")]
    {
        products.update(|state| state.begin_request());
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_product(&product_id).await {
                Ok(()) => apply_list_fetch(products).await,
                Err(err) => {
                    log::error!("product delete failed: {err}");
                    products.update(|state| state.settle());
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (products, product_id);
    }
}
