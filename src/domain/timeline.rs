// SPDX-License-Identifier: MPL-2.0
//! Seekable playback range and time formatting.
//!
//! [`SeekableRange`] is the engine's view of the delegated player's
//! timeline. Positions are re-clamped on every construction so downstream
//! consumers never observe `position > duration` or `buffered > duration`,
//! regardless of what the player reported.

use std::time::Duration;

/// Played/buffered extents of the current source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeekableRange {
    position: Duration,
    duration: Duration,
    buffered: Duration,
}

impl SeekableRange {
    /// Creates a range, clamping `position` and `buffered` into
    /// `[0, duration]`.
    #[must_use]
    pub fn new(position: Duration, duration: Duration, buffered: Duration) -> Self {
        Self {
            position: position.min(duration),
            duration,
            buffered: buffered.min(duration),
        }
    }

    /// Current playback position.
    #[must_use]
    pub fn position(self) -> Duration {
        self.position
    }

    /// Total duration of the source.
    #[must_use]
    pub fn duration(self) -> Duration {
        self.duration
    }

    /// Extent of playable (buffered) content.
    #[must_use]
    pub fn buffered(self) -> Duration {
        self.buffered
    }

    /// Returns a copy with a new position, clamped into the range.
    #[must_use]
    pub fn with_position(self, position: Duration) -> Self {
        Self::new(position, self.duration, self.buffered)
    }

    /// Fraction of the source already played, in `[0, 1]`.
    ///
    /// Zero-duration sources yield `0.0` rather than a division error.
    #[must_use]
    pub fn played_fraction(self) -> f32 {
        fraction(self.position, self.duration)
    }

    /// Fraction of the source already buffered, in `[0, 1]`.
    #[must_use]
    pub fn buffered_fraction(self) -> f32 {
        fraction(self.buffered, self.duration)
    }

    /// Returns true if the source can be meaningfully seeked.
    #[must_use]
    pub fn is_seekable(self) -> bool {
        !self.duration.is_zero()
    }
}

fn fraction(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 0.0;
    }
    let value = part.as_secs_f32() / whole.as_secs_f32();
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Formats a duration as `MM:SS`, or `HH:MM:SS` for sources over an hour.
#[must_use]
pub fn format_time(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
