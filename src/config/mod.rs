// SPDX-License-Identifier: MPL-2.0
//! Runtime configuration for the interaction engine.
//!
//! All tunables have field-tested defaults in [`defaults`]; hosts override
//! individual fields before constructing the engine. The engine itself never
//! persists configuration.
//!
//! # Examples
//!
//! ```
//! use iced_helm::config::EngineConfig;
//!
//! let config = EngineConfig {
//!     double_tap_window_ms: 250,
//!     ..EngineConfig::default()
//! };
//! assert_eq!(config.double_tap_window_ms, 250);
//! ```

pub mod defaults;

pub use defaults::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controls when visible transport controls are hidden again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HideMode {
    /// Hide automatically after an idle timeout.
    #[default]
    Auto,
    /// Hide only on an explicit tap.
    Touch,
}

/// Tunable parameters of the interaction engine.
///
/// The double-tap window and the snap selector's dead-zone threshold are
/// interaction heuristics without a principled derivation; they are exposed
/// here so hosts can tune them rather than relying on the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window within which a second tap-down counts as a double tap (ms).
    pub double_tap_window_ms: u64,

    /// Seconds skipped by a double tap in the left or right zone.
    pub double_tap_seek_secs: u64,

    /// Fraction of the view width forming each outer tap zone.
    pub edge_zone_fraction: f32,

    /// Seconds of seek travel per pixel of horizontal scrub drag.
    pub seek_secs_per_pixel: f32,

    /// Pixel extent of the vertical volume/brightness gesture track.
    pub level_bar_extent_px: f32,

    /// Horizontal travel required to leave the snap selector's dead zone.
    pub jump_threshold_px: f32,

    /// Completion threshold of the lock slider (%).
    pub slide_threshold_percent: f32,

    /// Delay before a confirmed lock slider springs back and re-arms (ms).
    /// `None` disables the automatic reset.
    pub lock_auto_reset_ms: Option<u64>,

    /// Hide behaviour of the main transport controls.
    pub hide_mode: HideMode,

    /// Idle timeout before auto-hiding controls (seconds).
    pub hide_timeout_secs: u32,
}

impl EngineConfig {
    /// Returns the double-tap window as a [`Duration`].
    #[must_use]
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(
            self.double_tap_window_ms
                .clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS),
        )
    }

    /// Returns the lock slider auto-reset delay, if configured.
    #[must_use]
    pub fn lock_auto_reset(&self) -> Option<Duration> {
        self.lock_auto_reset_ms.map(Duration::from_millis)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
            double_tap_seek_secs: DEFAULT_DOUBLE_TAP_SEEK_SECS,
            edge_zone_fraction: DEFAULT_EDGE_ZONE_FRACTION,
            seek_secs_per_pixel: DEFAULT_SEEK_SECS_PER_PIXEL,
            level_bar_extent_px: DEFAULT_LEVEL_BAR_EXTENT_PX,
            jump_threshold_px: DEFAULT_JUMP_THRESHOLD_PX,
            slide_threshold_percent: DEFAULT_SLIDE_THRESHOLD_PERCENT,
            lock_auto_reset_ms: None,
            hide_mode: HideMode::default(),
            hide_timeout_secs: DEFAULT_HIDE_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.double_tap_window_ms, DEFAULT_DOUBLE_TAP_WINDOW_MS);
        assert_eq!(config.hide_timeout_secs, DEFAULT_HIDE_TIMEOUT_SECS);
        assert_eq!(config.hide_mode, HideMode::Auto);
        assert!(config.lock_auto_reset_ms.is_none());
    }

    #[test]
    fn double_tap_window_clamps_out_of_range_values() {
        let config = EngineConfig {
            double_tap_window_ms: 5,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.double_tap_window(),
            Duration::from_millis(MIN_DOUBLE_TAP_WINDOW_MS)
        );

        let config = EngineConfig {
            double_tap_window_ms: 10_000,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.double_tap_window(),
            Duration::from_millis(MAX_DOUBLE_TAP_WINDOW_MS)
        );
    }

}
