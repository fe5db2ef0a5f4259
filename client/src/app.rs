//! Root application component.

use leptos::prelude::*;

use crate::pages::products::ProductsPage;

/// Root component: a static shell around the product manager. Holds no
/// state and performs no side effects.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <h1 class="app__title">"Product Management System"</h1>
            <ProductsPage/>
        </div>
    }
}
