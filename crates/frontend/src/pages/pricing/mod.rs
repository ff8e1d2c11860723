pub mod fees;
pub mod hero;
pub mod plans;

use crate::shared::reveal::{self, RevealOptions};
use leptos::prelude::*;

/// The pricing page: hero, per-product pricing tabs, fee schedule tabs.
#[component]
pub fn PricingPage() -> impl IntoView {
    // Arm reveal animations once the page structure is in the DOM.
    Effect::new(move |_| {
        reveal::init(RevealOptions::default());
    });

    view! {
        <hero::Hero />
        <plans::PlanTabs />
        <fees::FeeTabs />
    }
}
