use super::Variant;

/// Keeps an element mounted while its exit animation plays.
///
/// Every `show`/`hide` bumps the generation, so a delayed `finish_exit`
/// from an earlier `hide` is a no-op once the element was shown again.
///
/// A freshly mounted element only switches to open after
/// [`ENTER_FRAMES`] animation frames: the browser must compute the closed
/// style once, otherwise there is nothing to transition from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenceState {
    mounted: bool,
    variant: Variant,
    generation: u64,
    frames_left: u8,
}

pub const ENTER_FRAMES: u8 = 2;

impl Default for PresenceState {
    fn default() -> Self {
        Self::hidden()
    }
}

impl PresenceState {
    pub const fn hidden() -> Self {
        Self { mounted: false, variant: Variant::Closed, generation: 0, frames_left: 0 }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Mounts in the closed variant and starts the frame countdown. An
    /// element still exiting is already styled, so one frame is enough.
    pub fn show(&mut self) -> u64 {
        self.generation += 1;
        if self.mounted {
            self.frames_left = 1;
        } else {
            self.mounted = true;
            self.variant = Variant::Closed;
            self.frames_left = ENTER_FRAMES;
        }
        self.generation
    }

    /// Called once per animation frame after `show`. Returns `true` when
    /// no further frames are needed, either because the element switched
    /// to open or because `token` went stale.
    pub fn frame(&mut self, token: u64) -> bool {
        if !self.mounted || token != self.generation {
            return true;
        }
        self.frames_left = self.frames_left.saturating_sub(1);
        if self.frames_left == 0 {
            self.variant = Variant::Open;
            return true;
        }
        false
    }

    pub fn hide(&mut self) -> u64 {
        self.generation += 1;
        self.variant = Variant::Closed;
        self.generation
    }

    /// Unmounts if nothing happened since the `hide` that issued `token`.
    pub fn finish_exit(&mut self, token: u64) -> bool {
        if token != self.generation || !self.mounted {
            return false;
        }
        self.mounted = false;
        true
    }
}

#[cfg(feature = "web")]
pub use web::use_presence;

#[cfg(feature = "web")]
mod web {
    use gloo_timers::callback::Timeout;
    use leptos::leptos_dom::helpers::request_animation_frame;
    use leptos::prelude::{Effect, RwSignal, Update};

    use super::PresenceState;

    fn schedule_enter(state: RwSignal<PresenceState>, token: u64) {
        request_animation_frame(move || {
            if state.try_update(|s| s.frame(token)) == Some(false) {
                schedule_enter(state, token);
            }
        });
    }

    /// Drives a [`PresenceState`] from a reactive predicate; unmounting is
    /// deferred by `exit_ms` after the predicate turns false.
    pub fn use_presence(
        present: impl Fn() -> bool + 'static,
        exit_ms: u32,
    ) -> RwSignal<PresenceState> {
        let state = RwSignal::new(PresenceState::hidden());

        Effect::new(move |_| {
            if present() {
                if let Some(token) = state.try_update(|s| s.show()) {
                    schedule_enter(state, token);
                }
            } else if let Some(token) = state.try_update(|s| s.hide()) {
                // the list may be gone by the time this fires
                Timeout::new(exit_ms, move || {
                    state.try_update(|s| s.finish_exit(token));
                })
                .forget();
            }
        });

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frames(p: &mut PresenceState, token: u64) -> usize {
        let mut frames = 1;
        while !p.frame(token) {
            frames += 1;
        }
        frames
    }

    #[test]
    fn show_mounts_closed_then_enters() {
        let mut p = PresenceState::hidden();
        let token = p.show();
        assert!(p.is_mounted());
        assert_eq!(p.variant(), Variant::Closed);

        run_frames(&mut p, token);
        assert_eq!(p.variant(), Variant::Open);
    }

    #[test]
    fn closed_style_survives_the_first_frame() {
        let mut p = PresenceState::hidden();
        let token = p.show();

        assert!(!p.frame(token));
        assert_eq!(p.variant(), Variant::Closed);

        assert!(p.frame(token));
        assert_eq!(p.variant(), Variant::Open);
    }

    #[test]
    fn reshowing_while_exiting_needs_one_frame() {
        let mut p = PresenceState::hidden();
        let t = p.show();
        run_frames(&mut p, t);
        p.hide();

        let again = p.show();
        assert_eq!(run_frames(&mut p, again), 1);
        assert_eq!(p.variant(), Variant::Open);
    }

    #[test]
    fn hide_keeps_mounted_until_exit_finishes() {
        let mut p = PresenceState::hidden();
        let t = p.show();
        run_frames(&mut p, t);

        let exit = p.hide();
        assert!(p.is_mounted());
        assert_eq!(p.variant(), Variant::Closed);

        assert!(p.finish_exit(exit));
        assert!(!p.is_mounted());
    }

    #[test]
    fn stale_exit_does_not_unmount_a_reshown_element() {
        let mut p = PresenceState::hidden();
        let t = p.show();
        run_frames(&mut p, t);
        let exit = p.hide();

        let again = p.show();
        run_frames(&mut p, again);

        assert!(!p.finish_exit(exit));
        assert!(p.is_mounted());
        assert_eq!(p.variant(), Variant::Open);
    }

    #[test]
    fn stale_frames_after_hide_are_ignored() {
        let mut p = PresenceState::hidden();
        let t = p.show();
        p.hide();
        assert!(p.frame(t));
        assert!(p.frame(t));
        assert_eq!(p.variant(), Variant::Closed);
    }

    #[test]
    fn finishing_while_hidden_is_a_no_op() {
        let mut p = PresenceState::default();
        let exit = p.hide();
        assert!(!p.finish_exit(exit));
        assert_eq!(p.variant(), Variant::Closed);
    }
}
