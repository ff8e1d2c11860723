use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero reveal">
            <h1>"Simple pricing for every API call"</h1>
            <p>
                "Pay per transaction, no monthly minimums. Move money, sell airtime \
                 and verify customers with one integration."
            </p>
            <a class="hero__cta" href="/developers/sandbox">
                "Start building"
            </a>
        </section>
    }
}
