// SPDX-License-Identifier: MPL-2.0
//! Discrete-snap selector.
//!
//! A one-dimensional slider confined to N fixed stops, used for playback
//! speed. A drag starts in a dead zone: the cursor does not move until the
//! pointer has travelled far enough, then jumps to the projected position
//! and tracks 1:1. On release the cursor snaps to the nearest stop and the
//! committed index is emitted only after the settle animation completes,
//! keeping visual and committed state in sync.

use crate::config::{JUMP_DURATION_MS, SNAP_SETTLE_MS};
use crate::controls::transition::Transition;
use crate::domain::LayoutDirection;
use crate::gesture::mapper;
use std::time::{Duration, Instant};

/// Effect of a pointer event or tick on the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSliderEffect {
    /// Nothing to surface.
    None,
    /// The cursor moved to a new pixel position.
    CursorMoved(f32),
    /// The settle animation finished on the given stop.
    Committed(usize),
}

#[derive(Debug)]
enum SliderState {
    /// Cursor at the committed stop.
    Resting,
    /// Drag granted, travel still below the jump threshold.
    DeadZone { origin: f32 },
    /// Cursor animating out of the dead zone.
    Jumping { origin: f32, transition: Transition },
    /// Cursor tracking the pointer 1:1.
    Moving { origin: f32, position: f32 },
    /// Cursor animating to the stop committed on release.
    Settling { transition: Transition, index: usize },
}

/// Slider confined to a finite ordered set of stops.
#[derive(Debug)]
pub struct StepSlider {
    labels: Vec<String>,
    committed: usize,
    usable_width: f32,
    jump_threshold: f32,
    direction: LayoutDirection,
    state: SliderState,
}

impl StepSlider {
    /// Creates a selector over `labels` with the given initial stop.
    ///
    /// Out-of-range initial indices are clamped to the last stop. At least
    /// two stops are required for the geometry to be meaningful; a single
    /// stop degenerates to a fixed cursor.
    #[must_use]
    pub fn new(
        labels: Vec<String>,
        initial: usize,
        usable_width: f32,
        jump_threshold: f32,
        direction: LayoutDirection,
    ) -> Self {
        let committed = initial.min(labels.len().saturating_sub(1));
        Self {
            labels,
            committed,
            usable_width: usable_width.max(0.0),
            jump_threshold,
            direction,
            state: SliderState::Resting,
        }
    }

    /// Stop labels, in order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the committed stop.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.committed
    }

    /// Width of one step in pixels.
    #[must_use]
    pub fn step_width(&self) -> f32 {
        let gaps = self.labels.len().saturating_sub(1);
        if gaps == 0 {
            return 0.0;
        }
        self.usable_width / gaps as f32
    }

    /// Distance from a stop beyond which a release rounds to the next one.
    #[must_use]
    pub fn step_threshold(&self) -> f32 {
        self.step_width() / 2.0
    }

    /// Cursor position in pixels at `now`, including animation in flight.
    #[must_use]
    pub fn cursor_position(&self, now: Instant) -> f32 {
        match &self.state {
            SliderState::Resting => self.resting_position(),
            SliderState::DeadZone { origin } => *origin,
            SliderState::Jumping { transition, .. } | SliderState::Settling { transition, .. } => {
                transition.position(now)
            }
            SliderState::Moving { position, .. } => *position,
        }
    }

    /// Re-layout: recomputes the geometry and re-derives the cursor from
    /// the committed stop. Mid-drag state never survives a re-layout.
    pub fn set_width(&mut self, usable_width: f32) {
        self.usable_width = usable_width.max(0.0);
        self.state = SliderState::Resting;
    }

    /// Moves the committed stop directly, e.g. from an imperative speed
    /// setter. Out-of-range indices are ignored; any drag in flight is
    /// dropped so the cursor rests on the new stop.
    pub fn set_selected_index(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        self.committed = index;
        self.state = SliderState::Resting;
        true
    }

    /// Grants a drag on the cursor.
    ///
    /// Ignored while a settle animation from the previous drag is still in
    /// flight, so a pending commit is never lost.
    pub fn grant(&mut self) {
        if matches!(self.state, SliderState::Resting) {
            self.state = SliderState::DeadZone {
                origin: self.resting_position(),
            };
        }
    }

    /// Moves the pointer by a cumulative displacement since the grant.
    pub fn pointer_move(&mut self, dx: f32, now: Instant) -> StepSliderEffect {
        let dx = self.direction.to_logical(dx);
        match &self.state {
            SliderState::DeadZone { origin } => {
                if dx.abs() <= self.jump_threshold {
                    return StepSliderEffect::None;
                }
                let origin = *origin;
                let target = mapper::bound_position(origin + dx, self.usable_width);
                self.state = SliderState::Jumping {
                    origin,
                    transition: Transition::new(
                        origin,
                        target,
                        now,
                        Duration::from_millis(JUMP_DURATION_MS),
                    ),
                };
                StepSliderEffect::CursorMoved(target)
            }
            SliderState::Jumping { .. } => {
                // The jump animation owns the cursor; the next move after it
                // settles resumes 1:1 tracking.
                StepSliderEffect::None
            }
            SliderState::Moving { origin, .. } => {
                let origin = *origin;
                let position = mapper::bound_position(origin + dx, self.usable_width);
                self.state = SliderState::Moving { origin, position };
                StepSliderEffect::CursorMoved(position)
            }
            SliderState::Resting | SliderState::Settling { .. } => StepSliderEffect::None,
        }
    }

    /// Releases the drag, snapping the cursor to the nearest stop.
    ///
    /// The committed index is emitted later, by the `tick` that observes
    /// the settle animation completing.
    pub fn release(&mut self, now: Instant) -> StepSliderEffect {
        let position = match &self.state {
            SliderState::DeadZone { origin } => *origin,
            SliderState::Jumping { transition, .. } => transition.position(now),
            SliderState::Moving { position, .. } => *position,
            SliderState::Resting | SliderState::Settling { .. } => return StepSliderEffect::None,
        };

        let index = self.snap_index(position);
        let target = index as f32 * self.step_width();
        self.state = SliderState::Settling {
            transition: Transition::new(
                position,
                target,
                now,
                Duration::from_millis(SNAP_SETTLE_MS),
            ),
            index,
        };
        StepSliderEffect::CursorMoved(target)
    }

    /// Drops the drag without committing; the cursor returns to the
    /// committed stop.
    pub fn terminate(&mut self) {
        self.state = SliderState::Resting;
    }

    /// Advances animations; emits the commit once the settle completes.
    pub fn tick(&mut self, now: Instant) -> StepSliderEffect {
        match &self.state {
            SliderState::Jumping { origin, transition } if transition.is_settled(now) => {
                let origin = *origin;
                let position = transition.target();
                self.state = SliderState::Moving { origin, position };
                StepSliderEffect::CursorMoved(position)
            }
            SliderState::Settling { transition, index } if transition.is_settled(now) => {
                let index = *index;
                self.committed = index;
                self.state = SliderState::Resting;
                StepSliderEffect::Committed(index)
            }
            _ => StepSliderEffect::None,
        }
    }

    fn resting_position(&self) -> f32 {
        self.committed as f32 * self.step_width()
    }

    fn snap_index(&self, position: f32) -> usize {
        let step_width = self.step_width();
        if step_width <= 0.0 {
            return self.committed;
        }
        let index = (position / step_width).floor() as usize;
        let remainder = position - index as f32 * step_width;
        let index = if remainder.abs() >= self.step_threshold() {
            index + 1
        } else {
            index
        };
        index.min(self.labels.len().saturating_sub(1))
    }
}
