//! Hover-driven dropdown menu for the site navigation.

use crate::shared::fade::{FadeController, FADE_FAST_MS};
use leptos::prelude::*;

#[derive(Debug, Clone)]
pub struct NavMenuItem {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavMenuItem {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// A nav entry that reveals its menu while hovered.
///
/// The container toggles `open`, the caret flips between its down and up
/// state, and the menu fades in and out over the fast duration. Re-entering
/// mid-fade restarts the animation instead of queueing another one.
#[component]
pub fn NavDropdown(label: &'static str, items: Vec<NavMenuItem>) -> impl IntoView {
    let fade = FadeController::new(FADE_FAST_MS);

    view! {
        <li
            class="nav-dropdown"
            class:open=move || fade.is_open()
            on:mouseenter=move |_| fade.show()
            on:mouseleave=move |_| fade.hide()
        >
            <a class="nav-dropdown__toggle" href="#">
                <span>{label}</span>
                <b class="caret" class:caret-up=move || fade.is_open()></b>
            </a>
            <Show when=move || fade.is_mounted()>
                <ul
                    class="nav-dropdown__menu"
                    class:nav-dropdown__menu--in=move || fade.is_open()
                >
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <a href=item.href>{item.label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}
