// SPDX-License-Identifier: MPL-2.0
//! Single vs double tap classification.
//!
//! A small two-state machine: the first tap-down arms a window timer; a
//! second tap-down inside the window yields a double tap with a zone, while
//! an expired window yields a single tap. The host observes expiry through
//! [`TapClassifier::tick`], driven by its regular timer subscription.

use crate::domain::LayoutDirection;
use std::time::{Duration, Instant};

/// Horizontal zone of a double tap.
///
/// The outer zones trigger rewind/forward; the middle zone toggles
/// playback. Zones are mirrored under RTL layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    /// Outer start-side fraction of the view.
    Left,
    /// Inner region between the outer zones.
    Middle,
    /// Outer end-side fraction of the view.
    Right,
}

/// Classified tap, emitted once per resolved tap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapEffect {
    /// Nothing resolved yet.
    None,
    /// A lone tap: the window expired without a second tap-down.
    SingleTap,
    /// Two tap-downs inside the window, with the zone of the second.
    DoubleTap(TapZone),
}

#[derive(Debug, Clone, Copy)]
enum TapState {
    Idle,
    AwaitingSecond { deadline: Instant },
}

/// Two-state tap classifier with a configurable double-tap window.
#[derive(Debug)]
pub struct TapClassifier {
    window: Duration,
    edge_fraction: f32,
    direction: LayoutDirection,
    state: TapState,
}

impl TapClassifier {
    /// Creates a classifier.
    ///
    /// `edge_fraction` is the width fraction of each outer zone; the
    /// default configuration splits the view into quarter / half / quarter.
    #[must_use]
    pub fn new(window: Duration, edge_fraction: f32, direction: LayoutDirection) -> Self {
        Self {
            window,
            edge_fraction,
            direction,
            state: TapState::Idle,
        }
    }

    /// Handles a tap-down at horizontal position `x` within a view of
    /// `view_width`.
    ///
    /// Arming a new window always replaces the previous deadline, so a
    /// stale timer can never fire against the new sequence.
    pub fn tap_down(&mut self, x: f32, view_width: f32, now: Instant) -> TapEffect {
        match self.state {
            TapState::Idle => {
                self.arm(now);
                TapEffect::None
            }
            TapState::AwaitingSecond { deadline } => {
                if now < deadline {
                    self.state = TapState::Idle;
                    TapEffect::DoubleTap(self.zone(x, view_width))
                } else {
                    // The pending tap expired but no tick observed it yet:
                    // flush it as a single tap and start a new sequence.
                    self.arm(now);
                    TapEffect::SingleTap
                }
            }
        }
    }

    /// Observes the passage of time, resolving an expired window.
    pub fn tick(&mut self, now: Instant) -> TapEffect {
        if let TapState::AwaitingSecond { deadline } = self.state {
            if now >= deadline {
                self.state = TapState::Idle;
                return TapEffect::SingleTap;
            }
        }
        TapEffect::None
    }

    /// Cancels any pending tap without emitting, e.g. when a drag gesture
    /// claims the pointer or the surface is torn down.
    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }

    /// Returns true while a first tap is waiting for its window to resolve.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, TapState::AwaitingSecond { .. })
    }

    fn arm(&mut self, now: Instant) {
        self.state = TapState::AwaitingSecond {
            deadline: now + self.window,
        };
    }

    fn zone(&self, x: f32, view_width: f32) -> TapZone {
        if view_width <= 0.0 {
            return TapZone::Middle;
        }
        let edge = view_width * self.edge_fraction;
        let zone = if x < edge {
            TapZone::Left
        } else if x > view_width - edge {
            TapZone::Right
        } else {
            TapZone::Middle
        };
        match (zone, self.direction) {
            (TapZone::Left, LayoutDirection::Rtl) => TapZone::Right,
            (TapZone::Right, LayoutDirection::Rtl) => TapZone::Left,
            (zone, _) => zone,
        }
    }
}
