// SPDX-License-Identifier: MPL-2.0
//! Dominant-axis drag classification.
//!
//! A pointer drag over the video surface becomes exactly one of three
//! gestures: horizontal scrubbing (`Track`), or a vertical level drag that
//! is `Brightness` on the start half of the view and `Volume` on the end
//! half. Classification happens once per gesture, after a short sample
//! buffer fills, and is sticky until release.
//!
//! All gesture-scoped state lives in [`ActiveGesture`], constructed fresh
//! on grant and dropped on release or termination, so a new gesture can
//! never observe leftovers from the previous one.

use crate::config::GESTURE_SAMPLE_CAPACITY;
use crate::domain::timeline::format_time;
use crate::domain::{Percent, SeekableRange};
use crate::gesture::mapper;
use iced_core::{Point, Rectangle};
use log::debug;
use smallvec::SmallVec;
use std::time::Duration;

/// Semantic class of an active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureClass {
    /// Not yet classified.
    #[default]
    None,
    /// Horizontal scrub over the timeline.
    Track,
    /// Vertical volume drag (end half of the view).
    Volume,
    /// Vertical brightness drag (start half of the view).
    Brightness,
}

/// Raw pointer lifecycle event, relative to the gesture origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer down; `position` is absolute within the view.
    Grant { position: Point },
    /// Pointer moved; displacement is cumulative since the grant.
    Move { dx: f32, dy: f32 },
    /// Pointer lifted normally.
    Release,
    /// The platform took the gesture away mid-flight.
    Terminate,
}

/// Playback context captured at gesture grant.
///
/// The drag works against this snapshot; the delegated player may move on
/// underneath without affecting an in-flight gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragContext {
    /// Timeline at grant time.
    pub range: SeekableRange,
    /// Volume level at grant time.
    pub volume: Percent,
    /// Brightness level at grant time.
    pub brightness: Percent,
}

/// Effect of a single pointer event on the classified gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEffect {
    /// Nothing to surface.
    None,
    /// Live scrub preview with tooltip text, e.g. `+00:10 (00:40)`.
    ScrubPreview {
        /// Proposed seek target.
        target: Duration,
        /// Formatted signed offset and target for the scrub tooltip.
        tooltip: String,
    },
    /// Live volume level while a volume drag is in flight.
    VolumePreview(Percent),
    /// Live brightness level while a brightness drag is in flight.
    BrightnessPreview(Percent),
    /// Scrub released: seek to the resolved target.
    SeekCommitted(Duration),
    /// Volume drag released at the resolved level.
    VolumeCommitted(Percent),
    /// Brightness drag released at the resolved level.
    BrightnessCommitted(Percent),
}

#[derive(Debug, Clone, Copy)]
struct PointerSample {
    dx: f32,
    dy: f32,
}

/// Value the gesture would commit if released now.
#[derive(Debug, Clone, Copy)]
enum ResolvedDrag {
    Seek(Duration),
    Volume(Percent),
    Brightness(Percent),
}

/// State of one pointer interaction, grant to release.
#[derive(Debug)]
struct ActiveGesture {
    start: Point,
    context: DragContext,
    samples: SmallVec<[PointerSample; GESTURE_SAMPLE_CAPACITY]>,
    class: GestureClass,
    resolved: Option<ResolvedDrag>,
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Active(ActiveGesture),
}

/// Classifies pointer drags over the video surface.
#[derive(Debug)]
pub struct DragClassifier {
    seek_secs_per_pixel: f32,
    level_extent: f32,
    view_bounds: Rectangle,
    state: DragState,
}

impl DragClassifier {
    /// Creates a classifier.
    ///
    /// `seek_secs_per_pixel` scales horizontal travel into seek time;
    /// `level_extent` is the pixel travel mapping onto the full 0–100
    /// volume/brightness range.
    #[must_use]
    pub fn new(seek_secs_per_pixel: f32, level_extent: f32, view_bounds: Rectangle) -> Self {
        Self {
            seek_secs_per_pixel,
            level_extent,
            view_bounds,
            state: DragState::Idle,
        }
    }

    /// Updates the surface bounds on re-layout.
    pub fn set_view_bounds(&mut self, bounds: Rectangle) {
        self.view_bounds = bounds;
    }

    /// Returns the class of the gesture in flight, if any.
    #[must_use]
    pub fn class(&self) -> GestureClass {
        match &self.state {
            DragState::Idle => GestureClass::None,
            DragState::Active(gesture) => gesture.class,
        }
    }

    /// Routes a pointer event through the classifier.
    ///
    /// The caller is responsible for gating: events should only be fed
    /// while gestures are enabled, the content is seekable, and the layout
    /// affords gestures.
    pub fn handle(&mut self, event: PointerEvent) -> DragEffect {
        match event {
            PointerEvent::Grant { position } => {
                self.state = DragState::Active(ActiveGesture {
                    start: position,
                    context: DragContext::default(),
                    samples: SmallVec::new(),
                    class: GestureClass::None,
                    resolved: None,
                });
                DragEffect::None
            }
            PointerEvent::Move { dx, dy } => self.pointer_move(dx, dy),
            PointerEvent::Release => self.release(),
            PointerEvent::Terminate => {
                // Cleanup only: a terminated gesture never commits.
                if matches!(self.state, DragState::Active(_)) {
                    debug!("drag gesture terminated by platform; discarding");
                }
                self.state = DragState::Idle;
                DragEffect::None
            }
        }
    }

    /// Begins a gesture with its playback context snapshot.
    ///
    /// Equivalent to [`PointerEvent::Grant`] but carrying the context the
    /// drag resolves against.
    pub fn grant(&mut self, position: Point, context: DragContext) {
        self.state = DragState::Active(ActiveGesture {
            start: position,
            context,
            samples: SmallVec::new(),
            class: GestureClass::None,
            resolved: None,
        });
    }

    fn pointer_move(&mut self, dx: f32, dy: f32) -> DragEffect {
        let DragState::Active(gesture) = &mut self.state else {
            // Move without grant: re-establish the idle baseline.
            return DragEffect::None;
        };

        if gesture.samples.len() == GESTURE_SAMPLE_CAPACITY {
            gesture.samples.remove(0);
        }
        gesture.samples.push(PointerSample { dx, dy });

        if gesture.class == GestureClass::None {
            if gesture.samples.len() < GESTURE_SAMPLE_CAPACITY {
                return DragEffect::None;
            }
            let first = gesture.samples[0];
            let last = gesture.samples[gesture.samples.len() - 1];
            let horizontal = (last.dx - first.dx).abs();
            let vertical = (last.dy - first.dy).abs();

            if horizontal > vertical {
                // Scrub only while the pointer stays inside the view.
                let abs_x = gesture.start.x + dx;
                if abs_x < self.view_bounds.x
                    || abs_x > self.view_bounds.x + self.view_bounds.width
                {
                    return DragEffect::None;
                }
                gesture.class = GestureClass::Track;
            } else if gesture.start.x < self.view_bounds.x + self.view_bounds.width / 2.0 {
                gesture.class = GestureClass::Brightness;
            } else {
                gesture.class = GestureClass::Volume;
            }
            debug!("drag classified as {:?}", gesture.class);
        }

        match gesture.class {
            GestureClass::None => DragEffect::None,
            GestureClass::Track => {
                let delta_secs = dx * self.seek_secs_per_pixel;
                let position = gesture.context.range.position();
                let duration = gesture.context.range.duration();

                // Millisecond precision keeps second-aligned drags exact.
                let offset = Duration::from_millis((f64::from(delta_secs.abs()) * 1000.0).round() as u64);
                let (target, tooltip) = if delta_secs >= 0.0 {
                    let target = (position + offset).min(duration);
                    let applied = target.saturating_sub(position);
                    (target, format!("+{} ({})", format_time(applied), format_time(target)))
                } else {
                    let target = position.saturating_sub(offset);
                    let applied = position.saturating_sub(target);
                    (target, format!("-{} ({})", format_time(applied), format_time(target)))
                };

                gesture.resolved = Some(ResolvedDrag::Seek(target));
                DragEffect::ScrubPreview { target, tooltip }
            }
            GestureClass::Volume => {
                let level = Self::level_from_delta(gesture.context.volume, dy, self.level_extent);
                gesture.resolved = Some(ResolvedDrag::Volume(level));
                DragEffect::VolumePreview(level)
            }
            GestureClass::Brightness => {
                let level =
                    Self::level_from_delta(gesture.context.brightness, dy, self.level_extent);
                gesture.resolved = Some(ResolvedDrag::Brightness(level));
                DragEffect::BrightnessPreview(level)
            }
        }
    }

    fn release(&mut self) -> DragEffect {
        let state = std::mem::take(&mut self.state);
        let DragState::Active(gesture) = state else {
            return DragEffect::None;
        };
        match gesture.resolved {
            Some(ResolvedDrag::Seek(target)) => DragEffect::SeekCommitted(target),
            Some(ResolvedDrag::Volume(level)) => DragEffect::VolumeCommitted(level),
            Some(ResolvedDrag::Brightness(level)) => DragEffect::BrightnessCommitted(level),
            // A tap-like gesture that never crossed any threshold: nothing
            // to commit, but the release still clears gesture state.
            None => DragEffect::None,
        }
    }

    /// Maps a vertical displacement onto a level, upward motion increasing
    /// the value regardless of layout direction.
    fn level_from_delta(origin: Percent, dy: f32, extent: f32) -> Percent {
        let origin_px = mapper::percent_to_extent(origin.value(), extent);
        let position = mapper::bound_position(origin_px - dy, extent);
        Percent::new(mapper::extent_to_percent(position, extent))
    }
}
