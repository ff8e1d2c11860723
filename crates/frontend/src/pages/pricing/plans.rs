//! Primary tab set: per-product pricing.

use crate::layout::global_context::PageGlobalContext;
use crate::shared::components::{TabBar, TabSetLabel};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// (url key, trigger label) — index order is the panel order.
pub const PLAN_TABS: &[(&str, &str)] = &[
    ("send-money", "Send Money"),
    ("receive-money", "Receive Money"),
    ("airtime", "Airtime"),
    ("kyc-credit", "KYC & Credit"),
];

#[component]
pub fn PlanTabs() -> impl IntoView {
    let ctx = use_context::<PageGlobalContext>().expect("PageGlobalContext not found");

    let labels: Vec<&'static str> = PLAN_TABS.iter().map(|(_, label)| *label).collect();

    view! {
        <section class="pricing-section reveal">
            <h2>"Transaction pricing"</h2>
            <TabSetLabel labels=labels.clone() state=ctx.plan_tabs />
            <TabBar
                labels=labels
                state=ctx.plan_tabs
                on_activate=Callback::new(move |index| ctx.activate_plan_tab(index))
            />
            {(0..PLAN_TABS.len())
                .map(|index| {
                    view! {
                        <div
                            class="tab-panel"
                            class:hidden=move || !ctx.plan_tabs.get().is_active(index)
                            class:tab-panel--in=move || ctx.plan_tabs.get().is_active(index)
                        >
                            {plan_panel(index)}
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn plan_panel(index: usize) -> AnyView {
    match index {
        0 => view! {
            <h3>{icon("send")} " Send Money"</h3>
            <table class="fee-table">
                <thead>
                    <tr>
                        <th>"Destination"</th>
                        <th>"Fee per transaction"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>"Within the Kestrel network"</td>
                        <td>"Free"</td>
                    </tr>
                    <tr>
                        <td>"Mobile wallets"</td>
                        <td>"KES 45"</td>
                    </tr>
                    <tr>
                        <td>"Other banks (instant transfer)"</td>
                        <td>"KES 30"</td>
                    </tr>
                    <tr>
                        <td>"RTGS"</td>
                        <td>"KES 500"</td>
                    </tr>
                </tbody>
            </table>
            <ul class="plan-features">
                <li>{icon("check")} "Instant settlement inside the network"</li>
                <li>{icon("check")} "Automatic retries on wallet timeouts"</li>
            </ul>
        }
        .into_any(),
        1 => view! {
            <h3>{icon("wallet")} " Receive Money"</h3>
            <table class="fee-table">
                <thead>
                    <tr>
                        <th>"Collection channel"</th>
                        <th>"Fee"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>"Mobile money collections"</td>
                        <td>"1.5%, capped at KES 150"</td>
                    </tr>
                    <tr>
                        <td>"Card collections"</td>
                        <td>"2.9% + KES 25"</td>
                    </tr>
                    <tr>
                        <td>"Incoming bank transfer"</td>
                        <td>"Free"</td>
                    </tr>
                </tbody>
            </table>
            <ul class="plan-features">
                <li>{icon("check")} "Next-day payouts to any settlement account"</li>
                <li>{icon("check")} "Webhook notification on every credit"</li>
            </ul>
        }
        .into_any(),
        2 => view! {
            <h3>{icon("phone")} " Airtime"</h3>
            <table class="fee-table">
                <thead>
                    <tr>
                        <th>"Network"</th>
                        <th>"Commission earned"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>"All local networks"</td>
                        <td>"2.0% per top-up"</td>
                    </tr>
                    <tr>
                        <td>"Regional partners"</td>
                        <td>"1.2% per top-up"</td>
                    </tr>
                </tbody>
            </table>
            <ul class="plan-features">
                <li>{icon("check")} "No float pre-funding below KES 100,000 per day"</li>
            </ul>
        }
        .into_any(),
        3 => view! {
            <h3>{icon("shield")} " KYC & Credit"</h3>
            <table class="fee-table">
                <thead>
                    <tr>
                        <th>"Check"</th>
                        <th>"Fee per call"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>"National ID verification"</td>
                        <td>"KES 15"</td>
                    </tr>
                    <tr>
                        <td>"Credit score lookup"</td>
                        <td>"KES 25"</td>
                    </tr>
                    <tr>
                        <td>"AML screening"</td>
                        <td>"KES 40"</td>
                    </tr>
                </tbody>
            </table>
            <ul class="plan-features">
                <li>{icon("check")} "Volume discounts above 50,000 calls per month"</li>
            </ul>
        }
        .into_any(),
        _ => view! { <div></div> }.into_any(),
    }
}
