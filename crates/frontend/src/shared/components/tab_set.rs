//! Index-addressed tab sets: an ordered trigger list paired with an ordered
//! panel list, where trigger *i* selects panel *i*.

use leptos::prelude::*;

/// Selection state for one tab set.
///
/// Exactly one trigger is active at any time; activation requests outside
/// the trigger/panel range are ignored, so a trigger without a matching
/// panel can never blank the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSetState {
    active: usize,
    triggers: usize,
    panels: usize,
}

impl TabSetState {
    /// Starts with the first trigger selected, matching a page that
    /// "clicks" its first tab before the user does anything.
    pub fn new(triggers: usize, panels: usize) -> Self {
        Self {
            active: 0,
            triggers,
            panels,
        }
    }

    /// Returns whether the activation was applied.
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.triggers && index < self.panels {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }
}

/// Label of the currently selected trigger, used for the collapsed tab
/// navigation. `None` when the label list does not cover the active index.
pub fn active_label<'a>(labels: &[&'a str], state: &TabSetState) -> Option<&'a str> {
    labels.get(state.active()).copied()
}

/// Ordered trigger list for a tab set.
#[component]
pub fn TabBar(
    /// Trigger labels; index order is the panel order.
    labels: Vec<&'static str>,
    #[prop(into)] state: Signal<TabSetState>,
    /// Invoked with the index of the clicked trigger.
    on_activate: Callback<usize>,
    #[prop(default = "tab-list")] list_class: &'static str,
) -> impl IntoView {
    view! {
        <ul class=list_class>
            {labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    view! {
                        <li
                            class:active=move || state.get().is_active(index)
                            on:click=move |_| on_activate.run(index)
                        >
                            <a href="#">{label}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Collapsed-navigation label showing the selected tab's text.
///
/// Derived once when the component is created, not on later switches.
#[component]
pub fn TabSetLabel(
    labels: Vec<&'static str>,
    #[prop(into)] state: Signal<TabSetState>,
) -> impl IntoView {
    let label = active_label(&labels, &state.get_untracked()).unwrap_or_default();
    view! { <span class="tab-list-label">{label}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_trigger_active_on_init() {
        let state = TabSetState::new(4, 4);
        assert_eq!(state.active(), 0);
        assert!(state.is_active(0));
    }

    #[test]
    fn test_activation_by_index() {
        let mut state = TabSetState::new(4, 4);
        for index in 0..4 {
            assert!(state.activate(index));
            assert_eq!(state.active(), index);
            // exactly one active trigger
            let active_count = (0..4).filter(|i| state.is_active(*i)).count();
            assert_eq!(active_count, 1);
        }
    }

    #[test]
    fn test_out_of_range_activation_ignored() {
        let mut state = TabSetState::new(3, 3);
        state.activate(1);
        assert!(!state.activate(3));
        assert_eq!(state.active(), 1);
    }

    #[test]
    fn test_trigger_without_panel_ignored() {
        // 4 triggers but only 3 panels: the 4th trigger must be a no-op
        let mut state = TabSetState::new(4, 3);
        assert!(!state.activate(3));
        assert_eq!(state.active(), 0);
        assert!(state.activate(2));
        assert_eq!(state.active(), 2);
    }

    #[test]
    fn test_independent_sets_do_not_interact() {
        let mut primary = TabSetState::new(4, 4);
        let mut secondary = TabSetState::new(3, 3);
        primary.activate(2);
        assert_eq!(secondary.active(), 0);
        secondary.activate(1);
        assert_eq!(primary.active(), 2);
    }

    #[test]
    fn test_active_label() {
        let labels = ["Premium Plan", "Starter Plan"];
        let state = TabSetState::new(2, 2);
        assert_eq!(active_label(&labels, &state), Some("Premium Plan"));

        let empty: [&str; 0] = [];
        assert_eq!(active_label(&empty, &state), None);
    }
}
