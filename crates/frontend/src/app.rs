use crate::layout::global_context::PageGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the page-wide store to the whole app via context.
    provide_context(PageGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
