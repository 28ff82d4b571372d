use crate::domain::a002_tax::ui::details::TaxDetails;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-not-found">
            <p>"Page not found"</p>
            <a href="/">"Back to the tax form"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=TaxDetails />
            </Routes>
        </Router>
    }
}
