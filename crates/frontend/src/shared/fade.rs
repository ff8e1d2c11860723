//! Interruptible fade-in/fade-out for hover menus.
//!
//! Mirrors the classic "halt the running animation, then start the new one"
//! behavior: every `show`/`hide` call invalidates the pending settle timer,
//! so rapid enter/leave sequences can never stack or leave the element in a
//! half-toggled state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// jQuery's `"fast"` — the duration hover menus fade with.
pub const FADE_FAST_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Hidden,
    FadingIn,
    Shown,
    FadingOut,
}

impl FadePhase {
    /// Phase after a show request. An element already shown stays shown;
    /// anything mid-flight restarts toward visible.
    pub fn begin_show(self) -> Self {
        match self {
            FadePhase::Shown => FadePhase::Shown,
            _ => FadePhase::FadingIn,
        }
    }

    /// Phase after a hide request, mirror of [`begin_show`](Self::begin_show).
    pub fn begin_hide(self) -> Self {
        match self {
            FadePhase::Hidden => FadePhase::Hidden,
            _ => FadePhase::FadingOut,
        }
    }

    /// Phase once the current animation runs to completion undisturbed.
    pub fn settle(self) -> Self {
        match self {
            FadePhase::FadingIn => FadePhase::Shown,
            FadePhase::FadingOut => FadePhase::Hidden,
            other => other,
        }
    }

    /// The element must stay in the DOM for every phase except `Hidden`,
    /// otherwise the fade-out has nothing to animate.
    pub fn is_mounted(self) -> bool {
        self != FadePhase::Hidden
    }

    /// Whether the element currently counts as "open" for class toggles.
    pub fn is_open(self) -> bool {
        matches!(self, FadePhase::FadingIn | FadePhase::Shown)
    }
}

/// Reactive wrapper around [`FadePhase`] with timer-based settling.
#[derive(Clone, Copy)]
pub struct FadeController {
    phase: RwSignal<FadePhase>,
    generation: StoredValue<u64>,
    duration_ms: u32,
}

impl FadeController {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            phase: RwSignal::new(FadePhase::Hidden),
            generation: StoredValue::new(0),
            duration_ms,
        }
    }

    /// Reactive read: element is open (use for `open`/caret class bindings).
    pub fn is_open(&self) -> bool {
        self.phase.get().is_open()
    }

    /// Reactive read: element should be rendered at all.
    pub fn is_mounted(&self) -> bool {
        self.phase.get().is_mounted()
    }

    pub fn show(&self) {
        self.transition(FadePhase::begin_show);
    }

    pub fn hide(&self) {
        self.transition(FadePhase::begin_hide);
    }

    fn transition(&self, step: fn(FadePhase) -> FadePhase) {
        // Invalidate the pending settle before starting the next animation.
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.phase.update(|phase| *phase = step(*phase));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            if this.generation.get_value() == generation {
                this.phase.update(|phase| *phase = phase.settle());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_leave_round_trip() {
        let phase = FadePhase::Hidden;
        let entered = phase.begin_show();
        assert!(entered.is_open());
        let left = entered.settle().begin_hide();
        assert!(!left.is_open());
        assert_eq!(left.settle(), FadePhase::Hidden);
    }

    #[test]
    fn test_rapid_toggle_never_inconsistent() {
        // enter -> leave -> enter without any timer firing
        let phase = FadePhase::Hidden.begin_show().begin_hide().begin_show();
        assert_eq!(phase, FadePhase::FadingIn);
        assert!(phase.is_open());
        assert!(phase.is_mounted());
        // the eventual settle lands on a stable state
        assert_eq!(phase.settle(), FadePhase::Shown);
    }

    #[test]
    fn test_settle_is_idempotent_on_stable_states() {
        assert_eq!(FadePhase::Hidden.settle(), FadePhase::Hidden);
        assert_eq!(FadePhase::Shown.settle(), FadePhase::Shown);
    }

    #[test]
    fn test_hide_from_hidden_stays_hidden() {
        let phase = FadePhase::Hidden.begin_hide();
        assert_eq!(phase, FadePhase::Hidden);
        assert!(!phase.is_mounted());
    }
}
