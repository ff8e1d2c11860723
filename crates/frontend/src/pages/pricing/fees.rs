//! Secondary tab set: transfer fee schedule by channel. Fully independent
//! of the product tabs.

use crate::layout::global_context::PageGlobalContext;
use crate::shared::components::TabBar;
use leptos::prelude::*;

/// (key, trigger label) — index order is the panel order.
pub const FEE_TABS: &[(&str, &str)] = &[
    ("bank-accounts", "Bank Accounts"),
    ("mobile-wallets", "Mobile Wallets"),
    ("cards", "Cards"),
];

/// Fee bands per channel, row-per-band.
const FEE_SCHEDULE: &[&[(&str, &str)]] = &[
    &[
        ("KES 0 – 1,000", "KES 10"),
        ("KES 1,001 – 10,000", "KES 20"),
        ("KES 10,001 – 100,000", "KES 50"),
        ("Above KES 100,000", "KES 120"),
    ],
    &[
        ("KES 0 – 500", "KES 15"),
        ("KES 501 – 5,000", "KES 35"),
        ("KES 5,001 – 70,000", "KES 60"),
    ],
    &[
        ("Local cards", "2.9% + KES 25"),
        ("International cards", "3.5% + KES 25"),
    ],
];

#[component]
pub fn FeeTabs() -> impl IntoView {
    let ctx = use_context::<PageGlobalContext>().expect("PageGlobalContext not found");

    let labels: Vec<&'static str> = FEE_TABS.iter().map(|(_, label)| *label).collect();

    view! {
        <section class="pricing-section reveal">
            <h2>"Transfer fee schedule"</h2>
            <TabBar
                labels=labels
                state=ctx.fee_tabs
                on_activate=Callback::new(move |index| ctx.activate_fee_tab(index))
                list_class="tab-list tab-list--pills"
            />
            {FEE_SCHEDULE
                .iter()
                .enumerate()
                .map(|(index, bands)| {
                    view! {
                        <div
                            class="tab-panel"
                            class:hidden=move || !ctx.fee_tabs.get().is_active(index)
                            class:tab-panel--in=move || ctx.fee_tabs.get().is_active(index)
                        >
                            <table class="fee-table">
                                <thead>
                                    <tr>
                                        <th>"Amount band"</th>
                                        <th>"Fee"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {bands
                                        .iter()
                                        .map(|(band, fee)| {
                                            view! {
                                                <tr>
                                                    <td>{*band}</td>
                                                    <td>{*fee}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fee_tab_has_a_panel() {
        assert_eq!(FEE_TABS.len(), FEE_SCHEDULE.len());
    }
}
