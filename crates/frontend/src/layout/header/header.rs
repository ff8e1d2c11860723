use super::nav_dropdown::{NavDropdown, NavMenuItem};
use leptos::prelude::*;

const PRODUCT_MENU: &[NavMenuItem] = &[
    NavMenuItem::new("Account Services", "/products/account-services"),
    NavMenuItem::new("Send Money", "/products/send-money"),
    NavMenuItem::new("Forex Rates", "/products/forex"),
    NavMenuItem::new("Airtime", "/products/airtime"),
    NavMenuItem::new("KYC Checks", "/products/kyc"),
    NavMenuItem::new("Loans & Scoring", "/products/loans"),
];

const DEVELOPER_MENU: &[NavMenuItem] = &[
    NavMenuItem::new("API Reference", "/developers/reference"),
    NavMenuItem::new("Sandbox", "/developers/sandbox"),
    NavMenuItem::new("SDKs", "/developers/sdks"),
    NavMenuItem::new("Support", "/developers/support"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__logo" href="/">
                "Kestrel" <span style="color: #b01116;">"Pay"</span>
            </a>
            <nav>
                <ul class="site-nav">
                    <NavDropdown label="Products" items=PRODUCT_MENU.to_vec() />
                    <NavDropdown label="Developers" items=DEVELOPER_MENU.to_vec() />
                    <li>
                        <a href="/pricing">"Pricing"</a>
                    </li>
                    <li>
                        <a href="/about">"About"</a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}
