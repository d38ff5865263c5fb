// SPDX-License-Identifier: MPL-2.0
//! Percentage level domain type for volume and brightness.
//!
//! This module provides a type-safe wrapper for 0–100 percentage values,
//! ensuring they are always within the valid range.

use crate::config::{MAX_LEVEL_PERCENT, MIN_LEVEL_PERCENT};

/// Volume or brightness level, guaranteed to be within 0–100.
///
/// This newtype enforces validity at the type level, making it impossible
/// to create an out-of-range level.
///
/// # Example
///
/// ```
/// use iced_helm::domain::Percent;
///
/// let level = Percent::new(75.0);
/// assert_eq!(level.value(), 75.0);
///
/// // Values outside range are clamped
/// let too_loud = Percent::new(180.0);
/// assert_eq!(too_loud.value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Percent(f32);

impl Percent {
    /// Creates a new level, clamping to the valid range.
    ///
    /// Non-finite input falls back to `0.0` rather than poisoning later
    /// arithmetic.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_LEVEL_PERCENT, MAX_LEVEL_PERCENT))
        } else {
            Self(MIN_LEVEL_PERCENT)
        }
    }

    /// Creates a level from a 0.0–1.0 ratio.
    #[must_use]
    pub fn from_ratio(ratio: f32) -> Self {
        Self::new(ratio * MAX_LEVEL_PERCENT)
    }

    /// Returns the level as a percentage (0–100).
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the level as a 0.0–1.0 ratio, e.g. for player volume.
    #[must_use]
    pub fn as_ratio(self) -> f32 {
        self.0 / MAX_LEVEL_PERCENT
    }

    /// Returns true if the level is effectively zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 < 0.001
    }
}
