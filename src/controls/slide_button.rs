// SPDX-License-Identifier: MPL-2.0
//! Threshold slide-to-confirm control.
//!
//! The cursor must be dragged past a completion threshold before release to
//! confirm; otherwise it springs back to the start edge. Used for the lock
//! control: confirming unlocks, and an optional auto-reset re-arms the
//! slider for the next unlock gesture.
//!
//! Positions are kept in signed travel space: a mirrored (RTL) control has
//! a negative extent, so threshold comparisons read identically in both
//! directions.

use crate::controls::transition::Transition;
use crate::domain::LayoutDirection;
use crate::gesture::mapper;
use std::time::{Duration, Instant};

/// Duration of the spring-back / spring-forward animation.
const SPRING: Duration = Duration::from_millis(crate::config::SLIDE_SPRING_MS);

/// Effect of a pointer event or tick on the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideEffect {
    /// Nothing to surface.
    None,
    /// The cursor moved to a new signed offset.
    Moved(f32),
    /// Release crossed the completion threshold; the cursor is springing
    /// to the end edge.
    Confirmed,
    /// Release fell short; the cursor is springing back to the start edge.
    NotReached,
    /// The control returned to the start edge and accepts drags again
    /// (reverse drag completed, or the auto-reset elapsed).
    Rearmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

#[derive(Debug)]
enum SlideState {
    Resting,
    Dragging { origin: f32, position: f32 },
    Springing { transition: Transition, edge: Edge },
    AwaitingReset { deadline: Instant },
}

/// Slide control that confirms only past a completion threshold.
#[derive(Debug)]
pub struct SlideButton {
    distance: f32,
    threshold_percent: f32,
    auto_reset: Option<Duration>,
    allow_reverse: bool,
    direction: LayoutDirection,
    disabled: bool,
    confirmed: bool,
    state: SlideState,
}

impl SlideButton {
    /// Creates a control with the given travel distance and completion
    /// threshold percentage.
    #[must_use]
    pub fn new(
        distance: f32,
        threshold_percent: f32,
        auto_reset: Option<Duration>,
        allow_reverse: bool,
        direction: LayoutDirection,
    ) -> Self {
        Self {
            distance: distance.max(0.0),
            threshold_percent,
            auto_reset,
            allow_reverse,
            direction,
            disabled: false,
            confirmed: false,
            state: SlideState::Resting,
        }
    }

    /// Signed travel extent; negative when mirrored.
    #[must_use]
    pub fn signed_extent(&self) -> f32 {
        self.direction.signed_extent(self.distance)
    }

    /// Whether the control currently refuses drags.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the cursor rests at the end edge.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Signed cursor offset from the start edge at `now`.
    #[must_use]
    pub fn cursor_offset(&self, now: Instant) -> f32 {
        match &self.state {
            SlideState::Resting => {
                if self.confirmed {
                    self.signed_extent()
                } else {
                    0.0
                }
            }
            SlideState::Dragging { position, .. } => *position,
            SlideState::Springing { transition, .. } => transition.position(now),
            SlideState::AwaitingReset { .. } => self.signed_extent(),
        }
    }

    /// Travelled fraction of the full distance, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let extent = self.signed_extent();
        if extent == 0.0 {
            return 0.0;
        }
        (self.cursor_offset(now) / extent).clamp(0.0, 1.0)
    }

    /// Re-layout: updates the travel distance and re-derives the cursor
    /// from the confirmed/unconfirmed resting edge.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(0.0);
        self.state = SlideState::Resting;
    }

    /// Grants a drag on the cursor; a no-op while disabled or animating.
    pub fn grant(&mut self) {
        if self.disabled || !matches!(self.state, SlideState::Resting) {
            return;
        }
        if self.confirmed && !self.allow_reverse {
            return;
        }
        let origin = if self.confirmed {
            self.signed_extent()
        } else {
            0.0
        };
        self.state = SlideState::Dragging {
            origin,
            position: origin,
        };
    }

    /// Moves the cursor by a cumulative displacement since the grant.
    pub fn pointer_move(&mut self, dx: f32) -> SlideEffect {
        if self.disabled {
            return SlideEffect::None;
        }
        let extent = self.signed_extent();
        let SlideState::Dragging { origin, position } = &mut self.state else {
            return SlideEffect::None;
        };
        let next = mapper::bound_position(*origin + dx, extent);
        if next == *position {
            return SlideEffect::None;
        }
        *position = next;
        SlideEffect::Moved(next)
    }

    /// Releases the drag, comparing the final position to the threshold.
    pub fn release(&mut self, now: Instant) -> SlideEffect {
        let SlideState::Dragging { origin, position } = self.state else {
            return SlideEffect::None;
        };
        let extent = self.signed_extent();
        let travelled_pct = if extent == 0.0 {
            0.0
        } else {
            position / extent * 100.0
        };

        if origin == 0.0 {
            // Forward drag towards the end edge.
            if travelled_pct >= self.threshold_percent {
                self.confirmed = true;
                self.disabled = !self.allow_reverse;
                self.state = SlideState::Springing {
                    transition: Transition::new(position, extent, now, SPRING),
                    edge: Edge::End,
                };
                SlideEffect::Confirmed
            } else {
                self.state = SlideState::Springing {
                    transition: Transition::new(position, 0.0, now, SPRING),
                    edge: Edge::Start,
                };
                SlideEffect::NotReached
            }
        } else {
            // Reverse drag from the end edge back towards the start.
            if travelled_pct <= 100.0 - self.threshold_percent {
                self.confirmed = false;
                self.state = SlideState::Springing {
                    transition: Transition::new(position, 0.0, now, SPRING),
                    edge: Edge::Start,
                };
                SlideEffect::Rearmed
            } else {
                self.state = SlideState::Springing {
                    transition: Transition::new(position, extent, now, SPRING),
                    edge: Edge::End,
                };
                SlideEffect::None
            }
        }
    }

    /// Returns the cursor to the start edge and re-enables dragging,
    /// dropping any drag or animation in flight.
    pub fn reset(&mut self) {
        self.confirmed = false;
        self.disabled = false;
        self.state = SlideState::Resting;
    }

    /// Drops the drag without evaluating the threshold.
    pub fn terminate(&mut self) {
        if matches!(self.state, SlideState::Dragging { .. }) {
            self.state = SlideState::Resting;
        }
    }

    /// Advances animations and the auto-reset timer.
    pub fn tick(&mut self, now: Instant) -> SlideEffect {
        match &self.state {
            SlideState::Springing { transition, edge } if transition.is_settled(now) => {
                let edge = *edge;
                match edge {
                    Edge::End => {
                        if let Some(delay) = self.auto_reset {
                            self.state = SlideState::AwaitingReset {
                                deadline: now + delay,
                            };
                        } else {
                            self.state = SlideState::Resting;
                        }
                        SlideEffect::None
                    }
                    Edge::Start => {
                        self.state = SlideState::Resting;
                        SlideEffect::None
                    }
                }
            }
            SlideState::AwaitingReset { deadline } if now >= *deadline => {
                // Spring back to the start and re-arm for the next gesture.
                self.confirmed = false;
                self.disabled = false;
                self.state = SlideState::Springing {
                    transition: Transition::new(self.signed_extent(), 0.0, now, SPRING),
                    edge: Edge::Start,
                };
                SlideEffect::Rearmed
            }
            _ => SlideEffect::None,
        }
    }
}
