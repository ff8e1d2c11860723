use crate::pages::pricing::fees::FEE_TABS;
use crate::pages::pricing::plans::PLAN_TABS;
use crate::shared::components::TabSetState;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query-string shape for deep links into the page (`?plans=<key>`).
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    plans: Option<String>,
}

/// Shared page state: the two independent tab sets.
#[derive(Clone, Copy)]
pub struct PageGlobalContext {
    pub plan_tabs: RwSignal<TabSetState>,
    pub fee_tabs: RwSignal<TabSetState>,
}

impl PageGlobalContext {
    pub fn new() -> Self {
        Self {
            plan_tabs: RwSignal::new(TabSetState::new(PLAN_TABS.len(), PLAN_TABS.len())),
            fee_tabs: RwSignal::new(TabSetState::new(FEE_TABS.len(), FEE_TABS.len())),
        }
    }

    pub fn activate_plan_tab(&self, index: usize) {
        self.plan_tabs.update(|tabs| {
            tabs.activate(index);
        });
    }

    pub fn activate_fee_tab(&self, index: usize) {
        self.fee_tabs.update(|tabs| {
            tabs.activate(index);
        });
    }

    /// Wire the primary tab set to the URL query string.
    ///
    /// On load, `?plans=<key>` pre-selects the matching product tab
    /// (unknown keys are ignored). Afterwards the active tab is mirrored
    /// back into the query string without adding history entries. Runs once
    /// when the layout component is created.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(index) = query.plans.as_deref().and_then(plan_index_for_key) {
            self.activate_plan_tab(index);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.plan_tabs.get().active();
            let Some((key, _)) = PLAN_TABS.get(active) else {
                return;
            };
            let query = PageQuery {
                plans: Some((*key).to_string()),
            };
            let new_url = format!("?{}", serde_qs::to_string(&query).unwrap_or_default());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

/// Position of a product tab key within the primary tab set.
pub fn plan_index_for_key(key: &str) -> Option<usize> {
    PLAN_TABS.iter().position(|(tab_key, _)| *tab_key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_index_for_key() {
        assert_eq!(plan_index_for_key(PLAN_TABS[0].0), Some(0));
        assert_eq!(plan_index_for_key("no-such-product"), None);
    }

    #[test]
    fn test_query_round_trip() {
        let query = PageQuery {
            plans: Some("airtime".to_string()),
        };
        let encoded = serde_qs::to_string(&query).unwrap();
        assert_eq!(encoded, "plans=airtime");

        let decoded: PageQuery = serde_qs::from_str(&encoded).unwrap();
        assert_eq!(decoded.plans.as_deref(), Some("airtime"));
    }

    #[test]
    fn test_empty_query_parses_to_default() {
        let decoded: PageQuery = serde_qs::from_str("").unwrap();
        assert!(decoded.plans.is_none());
    }
}
