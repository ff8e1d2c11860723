pub mod footer;
pub mod global_context;
pub mod header;

use crate::shared::styles::GlobalStyles;
use footer::SiteFooter;
use header::SiteHeader;
use leptos::prelude::*;

/// Page shell: sticky header, content area, footer.
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <GlobalStyles />
        <SiteHeader />
        <main class="page-content">{content()}</main>
        <SiteFooter />
    }
}
