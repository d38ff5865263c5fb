// SPDX-License-Identifier: MPL-2.0
//! Continuous seek/progress bar.
//!
//! The bar renders two independent extents (played and buffered) and
//! supports thumb dragging when the content is seekable. Drag effects carry
//! the resolved track value, the total, and the raw pixel position so hosts
//! can place a tooltip near the thumb.

use crate::domain::{LayoutDirection, SeekableRange};
use crate::gesture::mapper;
use std::time::Duration;

/// Effect of one pointer event on the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekBarEffect {
    /// Nothing changed.
    None,
    /// A drag was granted on the thumb.
    DragStarted {
        /// Track value under the thumb.
        value: Duration,
        /// Total duration of the source.
        total: Duration,
        /// Raw pixel position along the bar.
        position_px: f32,
    },
    /// The thumb moved to a new position.
    DragUpdated {
        /// Track value under the thumb.
        value: Duration,
        /// Total duration of the source.
        total: Duration,
        /// Raw pixel position along the bar.
        position_px: f32,
    },
    /// The drag ended; `value` is the position to seek to.
    DragEnded {
        /// Committed track value.
        value: Duration,
        /// Total duration of the source.
        total: Duration,
        /// Raw pixel position along the bar.
        position_px: f32,
    },
}

#[derive(Debug, Clone, Copy)]
struct BarDrag {
    origin_px: f32,
    position_px: f32,
}

/// Draggable progress bar with separate played and buffered extents.
#[derive(Debug)]
pub struct SeekBar {
    width: f32,
    direction: LayoutDirection,
    range: SeekableRange,
    drag: Option<BarDrag>,
    thumb_halo: bool,
}

impl SeekBar {
    /// Creates a bar of the given on-screen width.
    #[must_use]
    pub fn new(width: f32, direction: LayoutDirection) -> Self {
        Self {
            width,
            direction,
            range: SeekableRange::default(),
            drag: None,
            thumb_halo: false,
        }
    }

    /// Updates the bar width on re-layout.
    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }

    /// Feeds the latest playback range into the bar.
    pub fn set_range(&mut self, range: SeekableRange) {
        self.range = range;
    }

    /// Width of the played extent in pixels.
    ///
    /// While a drag is in flight the played extent follows the thumb, not
    /// the delegated player.
    #[must_use]
    pub fn played_width(&self) -> f32 {
        match self.drag {
            Some(drag) => drag.position_px,
            None => self.range.played_fraction() * self.width,
        }
    }

    /// Width of the buffered extent in pixels, independent of the thumb.
    #[must_use]
    pub fn buffered_width(&self) -> f32 {
        self.range.buffered_fraction() * self.width
    }

    /// Whether the thumb halo affordance is visible.
    #[must_use]
    pub fn thumb_halo_visible(&self) -> bool {
        self.thumb_halo
    }

    /// Returns true while the thumb is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Grants a drag at absolute position `x` along the bar.
    ///
    /// A no-op unless `seekable` holds; the flag is owned by the
    /// visibility state machine.
    pub fn grant(&mut self, x: f32, seekable: bool) -> SeekBarEffect {
        if !seekable || self.width <= 0.0 {
            return SeekBarEffect::None;
        }
        let logical = match self.direction {
            LayoutDirection::Ltr => x,
            LayoutDirection::Rtl => self.width - x,
        };
        let position_px = mapper::bound_position(logical, self.width);
        self.drag = Some(BarDrag {
            origin_px: position_px,
            position_px,
        });
        self.thumb_halo = true;
        SeekBarEffect::DragStarted {
            value: self.value_at(position_px),
            total: self.range.duration(),
            position_px,
        }
    }

    /// Moves the thumb by a cumulative displacement since the grant.
    ///
    /// Emits an update on every position change, not merely periodically.
    pub fn pointer_move(&mut self, dx: f32) -> SeekBarEffect {
        let width = self.width;
        let logical_dx = self.direction.to_logical(dx);
        let Some(drag) = &mut self.drag else {
            return SeekBarEffect::None;
        };
        let position_px = mapper::bound_position(drag.origin_px + logical_dx, width);
        if position_px == drag.position_px {
            return SeekBarEffect::None;
        }
        drag.position_px = position_px;
        SeekBarEffect::DragUpdated {
            value: self.value_at(position_px),
            total: self.range.duration(),
            position_px,
        }
    }

    /// Ends the drag, committing the thumb position.
    pub fn release(&mut self) -> SeekBarEffect {
        self.thumb_halo = false;
        let Some(drag) = self.drag.take() else {
            return SeekBarEffect::None;
        };
        SeekBarEffect::DragEnded {
            value: self.value_at(drag.position_px),
            total: self.range.duration(),
            position_px: drag.position_px,
        }
    }

    /// Drops the drag without committing, e.g. on platform interruption.
    pub fn terminate(&mut self) {
        self.drag = None;
        self.thumb_halo = false;
    }

    fn value_at(&self, position_px: f32) -> Duration {
        let total_secs = self.range.duration().as_secs_f32();
        let secs = mapper::seek_to_track(position_px, total_secs, self.width);
        Duration::from_millis((f64::from(secs) * 1000.0).round().max(0.0) as u64)
    }
}
