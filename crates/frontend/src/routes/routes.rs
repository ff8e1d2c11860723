use crate::layout::global_context::PageGlobalContext;
use crate::layout::Shell;
use crate::pages::pricing::PricingPage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<PageGlobalContext>().expect("PageGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_url_integration();

    view! { <Shell content=|| view! { <PricingPage /> }.into_any() /> }
}
