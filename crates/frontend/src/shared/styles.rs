//! Page-wide styles embedded as a `<style>` block.
//!
//! Keyframes and state classes referenced from components live here:
//! `reveal`/`reveal--visible`, the caret rotation, the dropdown fade and
//! `panel-fade-in` for tab switches.

use leptos::prelude::*;

#[component]
pub fn GlobalStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            * { box-sizing: border-box; }

            body {
                margin: 0;
                font-family: "Segoe UI", system-ui, sans-serif;
                color: #1f2733;
                background: #f7f9fb;
            }

            a { color: inherit; text-decoration: none; }
            ul { list-style: none; margin: 0; padding: 0; }

            .page-content { min-height: 70vh; }

            /* --- header / nav --- */

            .site-header {
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 0 32px;
                height: 64px;
                background: #ffffff;
                border-bottom: 1px solid #e3e8ee;
                position: sticky;
                top: 0;
                z-index: 20;
            }

            .site-header__logo {
                font-size: 20px;
                font-weight: 700;
                letter-spacing: 0.5px;
            }

            .site-nav { display: flex; align-items: center; gap: 8px; }
            .site-nav > li { position: relative; }
            .site-nav a { display: block; padding: 10px 14px; }

            .nav-dropdown.open > .nav-dropdown__toggle {
                background: #eef3f8;
                border-radius: 6px;
            }

            /* bootstrap-style caret, rotated when the menu is open */
            .caret {
                display: inline-block;
                margin-left: 6px;
                vertical-align: middle;
                border-left: 4px solid transparent;
                border-right: 4px solid transparent;
                border-top: 4px solid currentColor;
                transition: transform 150ms ease;
            }
            .caret-up { transform: rotate(180deg); }

            .nav-dropdown__menu {
                position: absolute;
                top: 100%;
                left: 0;
                min-width: 220px;
                padding: 8px 0;
                background: #ffffff;
                border: 1px solid #e3e8ee;
                border-radius: 8px;
                box-shadow: 0 8px 24px rgba(31, 39, 51, 0.12);
                opacity: 0;
                transition: opacity 150ms ease;
            }
            .nav-dropdown__menu--in { opacity: 1; }
            .nav-dropdown__menu a:hover { background: #eef3f8; }

            /* --- scroll reveal --- */

            .reveal {
                opacity: 0;
                transform: translateY(24px);
            }
            .reveal--visible {
                opacity: 1;
                transform: none;
            }

            /* --- hero --- */

            .hero {
                padding: 96px 32px 72px;
                text-align: center;
                background: linear-gradient(180deg, #ffffff 0%, #f7f9fb 100%);
            }
            .hero h1 { font-size: 42px; margin: 0 0 16px; }
            .hero p { font-size: 18px; color: #5a6673; margin: 0 auto 32px; max-width: 560px; }
            .hero__cta {
                display: inline-block;
                padding: 12px 28px;
                background: #b01116;
                color: #ffffff;
                border-radius: 8px;
                font-weight: 600;
            }

            /* --- tab sets --- */

            .pricing-section { padding: 64px 32px; max-width: 960px; margin: 0 auto; }
            .pricing-section h2 { font-size: 28px; margin: 0 0 24px; }

            .tab-list {
                display: flex;
                gap: 4px;
                border-bottom: 2px solid #e3e8ee;
            }
            .tab-list li {
                cursor: pointer;
                border-bottom: 2px solid transparent;
                margin-bottom: -2px;
            }
            .tab-list li a { padding: 10px 18px; color: #5a6673; }
            .tab-list li.active { border-bottom-color: #b01116; }
            .tab-list li.active a { color: #1f2733; font-weight: 600; }

            .tab-list--pills { border-bottom: none; gap: 8px; }
            .tab-list--pills li { border: 1px solid #e3e8ee; border-radius: 999px; margin-bottom: 0; }
            .tab-list--pills li.active { border-color: #b01116; background: #fdf1f1; }

            .tab-list-label {
                display: block;
                font-size: 14px;
                color: #5a6673;
                margin-bottom: 8px;
            }

            .hidden { display: none; }

            @keyframes panel-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .tab-panel--in { animation: panel-fade-in 0.3s ease both; }

            .tab-panel { padding: 24px 0; }

            /* --- pricing tables --- */

            .fee-table { width: 100%; border-collapse: collapse; }
            .fee-table th, .fee-table td {
                text-align: left;
                padding: 10px 14px;
                border-bottom: 1px solid #e3e8ee;
            }
            .fee-table th { color: #5a6673; font-weight: 600; font-size: 14px; }

            .plan-features { display: grid; gap: 8px; margin-top: 16px; }
            .plan-features li { display: flex; align-items: center; gap: 8px; color: #3c4754; }

            /* --- footer --- */

            .site-footer {
                padding: 40px 32px;
                background: #1f2733;
                color: #c6cdd5;
                text-align: center;
                font-size: 14px;
            }
            "#
        </style>
    }
}
