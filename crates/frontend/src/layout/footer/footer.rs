use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"KestrelPay, payments infrastructure for builders."</p>
            <p>"© 2026 Kestrel Technologies Ltd."</p>
        </footer>
    }
}
