// SPDX-License-Identifier: MPL-2.0
//! Overlay visibility state machine.
//!
//! Owns which overlay is visible (main transport controls, more-options
//! panel, speed panel, playlist panel, lock slider), enforces their mutual
//! exclusivity, and drives the auto-hide timer. All gesture gating flags
//! are derived from this machine and written nowhere else; every other
//! component only reads them.
//!
//! Replacing one overlay with another is sequenced: the old overlay runs
//! its hide animation to completion before the new one becomes current, so
//! overlapping overlays cannot occur.

use crate::config::{HideMode, PANEL_ANIM_MS};
use crate::controls::transition::Transition;
use log::debug;
use std::time::{Duration, Instant};

/// The overlay that currently owns the surface, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No chrome; only the fallback line indicator.
    #[default]
    Hidden,
    /// Main transport controls.
    MainControls,
    /// More-options panel.
    MorePanel,
    /// Playback speed panel.
    SpeedPanel,
    /// Playlist panel.
    PlaylistPanel,
    /// Locked: gestures gated, only the slide-to-confirm control active.
    Locked,
}

impl Overlay {
    /// Returns true for the panel states reachable from the more menu.
    #[must_use]
    pub fn is_panel(self) -> bool {
        matches!(self, Self::MorePanel | Self::SpeedPanel | Self::PlaylistPanel)
    }
}

/// Input to the visibility machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMessage {
    /// The surface was single-tapped.
    SingleTap,
    /// The "more" action on the main controls was pressed.
    ShowMore,
    /// The speed item was selected in the more panel.
    OpenSpeedPanel,
    /// The playlist item was selected in the more panel.
    OpenPlaylistPanel,
    /// The lock item was selected in the more panel.
    Lock,
    /// The slide-to-confirm control reached its end edge.
    Unlock,
    /// The visible panel was dismissed.
    ClosePanel,
    /// Any interaction that should reset idle detection.
    Interaction,
    /// A source finished loading (also clears a previous error).
    Loaded,
    /// The source was unloaded.
    Unloaded,
    /// The player reported an unrecoverable error.
    PlayerErrored,
}

/// Observable outcome of a message or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEffect {
    /// No overlay change.
    None,
    /// The current overlay changed.
    Changed(Overlay),
}

#[derive(Debug)]
struct PendingSwitch {
    transition: Transition,
    next: Overlay,
}

/// State machine coordinating overlay visibility and gesture gating.
#[derive(Debug)]
pub struct VisibilityState {
    current: Overlay,
    pending: Option<PendingSwitch>,
    hide_deadline: Option<Instant>,
    hide_mode: HideMode,
    timeout: Duration,
    loaded: bool,
    error: bool,
}

impl VisibilityState {
    /// Creates the machine with everything hidden.
    #[must_use]
    pub fn new(hide_mode: HideMode, timeout: Duration) -> Self {
        Self {
            current: Overlay::Hidden,
            pending: None,
            hide_deadline: None,
            hide_mode,
            timeout,
            loaded: false,
            error: false,
        }
    }

    /// The overlay currently owning the surface.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.current
    }

    /// Whether the surface is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.current == Overlay::Locked
    }

    /// Whether an error affordance replaces the interactive controls.
    #[must_use]
    pub fn error_visible(&self) -> bool {
        self.error
    }

    /// Whether drag gestures over the surface are currently allowed.
    ///
    /// Gestures are gated while locked, while any panel is open, while an
    /// overlay switch is animating, and until content loads successfully.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.loaded
            && !self.error
            && self.pending.is_none()
            && matches!(self.current, Overlay::Hidden | Overlay::MainControls)
    }

    /// Whether tap classification is currently allowed.
    ///
    /// Unlike drags, taps do not require loaded content: showing the chrome
    /// works while a source is still loading.
    #[must_use]
    pub fn taps_enabled(&self) -> bool {
        !self.error
            && self.pending.is_none()
            && matches!(self.current, Overlay::Hidden | Overlay::MainControls)
    }

    /// Whether the fallback line progress indicator is visible.
    #[must_use]
    pub fn line_indicator_visible(&self) -> bool {
        self.loaded && !self.error && self.pending.is_none() && self.current == Overlay::Hidden
    }

    /// Routes a message through the machine.
    pub fn handle(&mut self, message: VisibilityMessage, now: Instant) -> VisibilityEffect {
        // Error display accepts nothing but a successful reload.
        if self.error && message != VisibilityMessage::Loaded {
            return VisibilityEffect::None;
        }

        match message {
            VisibilityMessage::SingleTap => match self.current {
                Overlay::Hidden if self.pending.is_none() => {
                    self.switch_to(Overlay::MainControls, now)
                }
                Overlay::MainControls if self.pending.is_none() => {
                    self.switch_to(Overlay::Hidden, now)
                }
                _ => VisibilityEffect::None,
            },
            VisibilityMessage::ShowMore => {
                if self.current == Overlay::MainControls && self.pending.is_none() {
                    self.switch_to(Overlay::MorePanel, now)
                } else {
                    VisibilityEffect::None
                }
            }
            VisibilityMessage::OpenSpeedPanel => self.from_more_panel(Overlay::SpeedPanel, now),
            VisibilityMessage::OpenPlaylistPanel => {
                self.from_more_panel(Overlay::PlaylistPanel, now)
            }
            VisibilityMessage::Lock => self.from_more_panel(Overlay::Locked, now),
            VisibilityMessage::Unlock => {
                if self.current == Overlay::Locked {
                    self.switch_to(Overlay::Hidden, now)
                } else {
                    VisibilityEffect::None
                }
            }
            VisibilityMessage::ClosePanel => {
                if self.current.is_panel() && self.pending.is_none() {
                    // Closing a panel returns to a bare surface, not to the
                    // main controls it was opened from.
                    self.switch_to(Overlay::Hidden, now)
                } else {
                    VisibilityEffect::None
                }
            }
            VisibilityMessage::Interaction => {
                self.rearm_hide_timer(now);
                VisibilityEffect::None
            }
            VisibilityMessage::Loaded => {
                self.loaded = true;
                self.error = false;
                VisibilityEffect::None
            }
            VisibilityMessage::Unloaded => {
                self.loaded = false;
                self.force_hidden()
            }
            VisibilityMessage::PlayerErrored => {
                debug!("player errored; forcing controls hidden");
                self.error = true;
                self.force_hidden()
            }
        }
    }

    /// Advances the pending overlay switch and the auto-hide timer.
    pub fn tick(&mut self, now: Instant) -> VisibilityEffect {
        if let Some(pending) = &self.pending {
            if pending.transition.is_settled(now) {
                let next = pending.next;
                self.pending = None;
                return self.enter(next, now);
            }
            return VisibilityEffect::None;
        }

        if let Some(deadline) = self.hide_deadline {
            if now >= deadline && self.current == Overlay::MainControls {
                self.hide_deadline = None;
                return self.switch_to(Overlay::Hidden, now);
            }
        }
        VisibilityEffect::None
    }

    fn from_more_panel(&mut self, next: Overlay, now: Instant) -> VisibilityEffect {
        if self.current == Overlay::MorePanel && self.pending.is_none() {
            self.switch_to(next, now)
        } else {
            VisibilityEffect::None
        }
    }

    /// Requests an overlay switch, sequencing the hide animation of the
    /// current overlay first when one is visible.
    fn switch_to(&mut self, next: Overlay, now: Instant) -> VisibilityEffect {
        if self.current == Overlay::Hidden {
            return self.enter(next, now);
        }
        self.hide_deadline = None;
        self.pending = Some(PendingSwitch {
            transition: Transition::new(1.0, 0.0, now, Duration::from_millis(PANEL_ANIM_MS)),
            next,
        });
        VisibilityEffect::None
    }

    fn enter(&mut self, next: Overlay, now: Instant) -> VisibilityEffect {
        self.current = next;
        self.hide_deadline = None;
        if next == Overlay::MainControls {
            self.rearm_hide_timer(now);
        }
        VisibilityEffect::Changed(next)
    }

    /// Drops any chrome immediately, without the hide animation.
    fn force_hidden(&mut self) -> VisibilityEffect {
        self.pending = None;
        self.hide_deadline = None;
        if self.current == Overlay::Hidden {
            return VisibilityEffect::None;
        }
        self.current = Overlay::Hidden;
        VisibilityEffect::Changed(Overlay::Hidden)
    }

    fn rearm_hide_timer(&mut self, now: Instant) {
        if self.current == Overlay::MainControls && self.hide_mode == HideMode::Auto {
            // Re-arming always replaces the previous deadline; a stale
            // timeout can never hide freshly shown controls.
            self.hide_deadline = Some(now + self.timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(3);
    const ANIM: Duration = Duration::from_millis(PANEL_ANIM_MS);

    fn machine() -> VisibilityState {
        let mut state = VisibilityState::new(HideMode::Auto, TIMEOUT);
        state.handle(VisibilityMessage::Loaded, Instant::now());
        state
    }

    /// Drives a sequenced switch to completion.
    fn settle(state: &mut VisibilityState, now: Instant) -> VisibilityEffect {
        state.tick(now + ANIM)
    }

    #[test]
    fn single_tap_toggles_main_controls() {
        let mut state = machine();
        let now = Instant::now();

        assert_eq!(
            state.handle(VisibilityMessage::SingleTap, now),
            VisibilityEffect::Changed(Overlay::MainControls)
        );
        assert_eq!(state.overlay(), Overlay::MainControls);

        // Hiding is sequenced through the hide animation.
        assert_eq!(state.handle(VisibilityMessage::SingleTap, now), VisibilityEffect::None);
        assert_eq!(settle(&mut state, now), VisibilityEffect::Changed(Overlay::Hidden));
    }

    #[test]
    fn auto_hide_fires_after_idle_timeout() {
        let mut state = machine();
        let now = Instant::now();
        state.handle(VisibilityMessage::SingleTap, now);

        assert_eq!(state.tick(now + TIMEOUT - Duration::from_millis(1)), VisibilityEffect::None);
        // Deadline reached: the hide animation starts...
        assert_eq!(state.tick(now + TIMEOUT), VisibilityEffect::None);
        // ...and completes.
        assert_eq!(
            state.tick(now + TIMEOUT + ANIM),
            VisibilityEffect::Changed(Overlay::Hidden)
        );
    }

    #[test]
    fn interaction_restarts_idle_timer() {
        let mut state = machine();
        let now = Instant::now();
        state.handle(VisibilityMessage::SingleTap, now);

        let later = now + TIMEOUT - Duration::from_millis(500);
        state.handle(VisibilityMessage::Interaction, later);

        // The original deadline passes without hiding.
        assert_eq!(state.tick(now + TIMEOUT), VisibilityEffect::None);
        assert_eq!(state.overlay(), Overlay::MainControls);

        // The refreshed deadline fires.
        state.tick(later + TIMEOUT);
        assert_eq!(
            state.tick(later + TIMEOUT + ANIM),
            VisibilityEffect::Changed(Overlay::Hidden)
        );
    }

    #[test]
    fn touch_mode_never_auto_hides() {
        let mut state = VisibilityState::new(HideMode::Touch, TIMEOUT);
        let now = Instant::now();
        state.handle(VisibilityMessage::Loaded, now);
        state.handle(VisibilityMessage::SingleTap, now);

        assert_eq!(state.tick(now + TIMEOUT * 10), VisibilityEffect::None);
        assert_eq!(state.overlay(), Overlay::MainControls);
    }

    #[test]
    fn panels_are_reachable_only_through_more_panel() {
        let mut state = machine();
        let now = Instant::now();

        // Speed panel cannot open from hidden or main controls.
        assert_eq!(state.handle(VisibilityMessage::OpenSpeedPanel, now), VisibilityEffect::None);
        state.handle(VisibilityMessage::SingleTap, now);
        assert_eq!(state.handle(VisibilityMessage::OpenSpeedPanel, now), VisibilityEffect::None);

        // Main controls -> more panel (sequenced).
        state.handle(VisibilityMessage::ShowMore, now);
        assert_eq!(settle(&mut state, now), VisibilityEffect::Changed(Overlay::MorePanel));

        // More panel -> speed panel.
        state.handle(VisibilityMessage::OpenSpeedPanel, now + ANIM);
        assert_eq!(
            state.tick(now + ANIM + ANIM),
            VisibilityEffect::Changed(Overlay::SpeedPanel)
        );

        // Panels never switch into each other directly.
        assert_eq!(
            state.handle(VisibilityMessage::OpenPlaylistPanel, now + ANIM + ANIM),
            VisibilityEffect::None
        );
    }

    #[test]
    fn closing_a_panel_returns_to_hidden() {
        let mut state = machine();
        let now = Instant::now();
        state.handle(VisibilityMessage::SingleTap, now);
        state.handle(VisibilityMessage::ShowMore, now);
        settle(&mut state, now);

        state.handle(VisibilityMessage::ClosePanel, now + ANIM);
        assert_eq!(
            state.tick(now + ANIM + ANIM),
            VisibilityEffect::Changed(Overlay::Hidden)
        );
    }

    #[test]
    fn lock_gates_gestures_until_unlocked() {
        let mut state = machine();
        let now = Instant::now();
        state.handle(VisibilityMessage::SingleTap, now);
        state.handle(VisibilityMessage::ShowMore, now);
        settle(&mut state, now);
        state.handle(VisibilityMessage::Lock, now + ANIM);
        assert_eq!(
            state.tick(now + ANIM + ANIM),
            VisibilityEffect::Changed(Overlay::Locked)
        );

        assert!(state.is_locked());
        assert!(!state.gestures_enabled());
        assert!(!state.taps_enabled());
        assert_eq!(state.handle(VisibilityMessage::SingleTap, now + ANIM + ANIM), VisibilityEffect::None);

        // Only the slide control's end edge unlocks, back to hidden.
        state.handle(VisibilityMessage::Unlock, now + ANIM + ANIM);
        assert_eq!(
            state.tick(now + ANIM * 3),
            VisibilityEffect::Changed(Overlay::Hidden)
        );
        assert!(state.gestures_enabled());
    }

    #[test]
    fn at_most_one_overlay_is_ever_visible() {
        let mut state = machine();
        let mut now = Instant::now();
        let script = [
            VisibilityMessage::SingleTap,
            VisibilityMessage::ShowMore,
            VisibilityMessage::OpenSpeedPanel,
            VisibilityMessage::ClosePanel,
            VisibilityMessage::SingleTap,
            VisibilityMessage::ShowMore,
            VisibilityMessage::Lock,
            VisibilityMessage::Unlock,
        ];

        for message in script {
            state.handle(message, now);
            // A single overlay owns the surface at every point in time,
            // including mid-transition.
            assert_ne!(
                (state.overlay() == Overlay::Locked, state.overlay() == Overlay::MainControls),
                (true, true)
            );
            now += ANIM;
            state.tick(now);
        }
    }

    #[test]
    fn error_forces_hidden_and_blocks_input() {
        let mut state = machine();
        let now = Instant::now();
        state.handle(VisibilityMessage::SingleTap, now);

        assert_eq!(
            state.handle(VisibilityMessage::PlayerErrored, now),
            VisibilityEffect::Changed(Overlay::Hidden)
        );
        assert!(state.error_visible());
        assert!(!state.gestures_enabled());
        assert!(!state.line_indicator_visible());

        // No transitions accepted until a successful reload.
        assert_eq!(state.handle(VisibilityMessage::SingleTap, now), VisibilityEffect::None);
        state.handle(VisibilityMessage::Loaded, now);
        assert!(!state.error_visible());
        assert_eq!(
            state.handle(VisibilityMessage::SingleTap, now),
            VisibilityEffect::Changed(Overlay::MainControls)
        );
    }

    #[test]
    fn more_panel_opens_while_content_still_loading() {
        let mut state = VisibilityState::new(HideMode::Auto, TIMEOUT);
        let now = Instant::now();

        // Not loaded: taps work, drags do not.
        assert!(state.taps_enabled());
        assert!(!state.gestures_enabled());

        state.handle(VisibilityMessage::SingleTap, now);
        state.handle(VisibilityMessage::ShowMore, now);
        assert_eq!(settle(&mut state, now), VisibilityEffect::Changed(Overlay::MorePanel));
    }

    #[test]
    fn line_indicator_shows_only_on_bare_loaded_surface() {
        let mut state = machine();
        let now = Instant::now();
        assert!(state.line_indicator_visible());

        state.handle(VisibilityMessage::SingleTap, now);
        assert!(!state.line_indicator_visible());
    }

    #[test]
    fn unloaded_drops_chrome() {
        let mut state = machine();
        let now = Instant::now();
        state.handle(VisibilityMessage::SingleTap, now);

        assert_eq!(
            state.handle(VisibilityMessage::Unloaded, now),
            VisibilityEffect::Changed(Overlay::Hidden)
        );
        assert!(!state.gestures_enabled());
    }
}
