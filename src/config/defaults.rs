// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Tap**: Double-tap window and zone boundaries
//! - **Drag**: Sample buffer and gesture-to-value scaling
//! - **Snap Selector**: Dead-zone and settle animation tuning
//! - **Slide-to-Confirm**: Completion threshold and spring timing
//! - **Overlay**: Auto-hide timeout and panel animation
//! - **Levels**: Volume/brightness percentage bounds
//! - **Playback Speed**: Preset stops and bounds

// ==========================================================================
// Tap Defaults
// ==========================================================================

/// Window within which a second tap-down counts as a double tap (ms).
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum allowed double-tap window (ms).
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum allowed double-tap window (ms).
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

/// Fraction of the view width forming each outer tap zone.
/// The default splits the view into quarter / half / quarter.
pub const DEFAULT_EDGE_ZONE_FRACTION: f32 = 0.25;

/// Seconds skipped by a double tap in the left or right zone.
pub const DEFAULT_DOUBLE_TAP_SEEK_SECS: u64 = 10;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Number of pointer samples collected before the dominant axis is decided.
pub const GESTURE_SAMPLE_CAPACITY: usize = 5;

/// Seconds of seek travel per pixel of horizontal scrub drag.
pub const DEFAULT_SEEK_SECS_PER_PIXEL: f32 = 0.2;

/// Pixel extent of the vertical volume/brightness gesture track.
pub const DEFAULT_LEVEL_BAR_EXTENT_PX: f32 = 150.0;

// ==========================================================================
// Snap Selector Defaults
// ==========================================================================

/// Horizontal travel required to leave the snap selector's dead zone.
pub const DEFAULT_JUMP_THRESHOLD_PX: f32 = 20.0;

/// Duration of the dead-zone exit jump animation (ms).
pub const JUMP_DURATION_MS: u64 = 100;

/// Duration of the release-time snap-to-stop animation (ms).
pub const SNAP_SETTLE_MS: u64 = 200;

// ==========================================================================
// Slide-to-Confirm Defaults
// ==========================================================================

/// Fraction of the travel distance that must be crossed to confirm (%).
pub const DEFAULT_SLIDE_THRESHOLD_PERCENT: f32 = 60.0;

/// Minimum allowed completion threshold (%).
pub const MIN_SLIDE_THRESHOLD_PERCENT: f32 = 10.0;

/// Maximum allowed completion threshold (%).
pub const MAX_SLIDE_THRESHOLD_PERCENT: f32 = 100.0;

/// Duration of the spring-back / spring-forward animation (ms).
pub const SLIDE_SPRING_MS: u64 = 200;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default auto-hide timeout for visible controls (in seconds).
pub const DEFAULT_HIDE_TIMEOUT_SECS: u32 = 3;

/// Minimum auto-hide timeout (in seconds).
pub const MIN_HIDE_TIMEOUT_SECS: u32 = 1;

/// Maximum auto-hide timeout (in seconds).
pub const MAX_HIDE_TIMEOUT_SECS: u32 = 30;

/// Duration of a panel's hide animation (ms). A replacement overlay is
/// shown only after the previous overlay finished hiding.
pub const PANEL_ANIM_MS: u64 = 150;

// ==========================================================================
// Level Defaults
// ==========================================================================

/// Minimum volume/brightness level (%).
pub const MIN_LEVEL_PERCENT: f32 = 0.0;

/// Maximum volume/brightness level (%).
pub const MAX_LEVEL_PERCENT: f32 = 100.0;

/// Default volume level (%).
pub const DEFAULT_VOLUME_PERCENT: f32 = 80.0;

/// Default brightness level (%).
pub const DEFAULT_BRIGHTNESS_PERCENT: f32 = 100.0;

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Available playback speed stops, in ascending order.
pub const PLAYBACK_SPEED_PRESETS: [f64; 7] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Index of the normal (1.0x) speed within [`PLAYBACK_SPEED_PRESETS`].
pub const DEFAULT_SPEED_INDEX: usize = 3;

/// Minimum playback speed.
pub const MIN_PLAYBACK_SPEED: f64 = PLAYBACK_SPEED_PRESETS[0];

/// Maximum playback speed.
pub const MAX_PLAYBACK_SPEED: f64 = PLAYBACK_SPEED_PRESETS[PLAYBACK_SPEED_PRESETS.len() - 1];

// ==========================================================================
// Control Layout Defaults
// ==========================================================================

/// Usable width of the speed selector before the first re-layout (px).
pub const DEFAULT_SPEED_SLIDER_WIDTH_PX: f32 = 300.0;

/// Travel distance of the lock slider before the first re-layout (px).
pub const DEFAULT_LOCK_TRAVEL_PX: f32 = 150.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Tap validation
    assert!(MIN_DOUBLE_TAP_WINDOW_MS <= DEFAULT_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_EDGE_ZONE_FRACTION > 0.0);
    assert!(DEFAULT_EDGE_ZONE_FRACTION < 0.5);

    // Drag validation
    assert!(GESTURE_SAMPLE_CAPACITY >= 2);
    assert!(DEFAULT_SEEK_SECS_PER_PIXEL > 0.0);
    assert!(DEFAULT_LEVEL_BAR_EXTENT_PX > 0.0);

    // Snap selector validation
    assert!(DEFAULT_JUMP_THRESHOLD_PX > 0.0);
    assert!(JUMP_DURATION_MS > 0);
    assert!(SNAP_SETTLE_MS > 0);

    // Slide-to-confirm validation
    assert!(MIN_SLIDE_THRESHOLD_PERCENT > 0.0);
    assert!(MIN_SLIDE_THRESHOLD_PERCENT < DEFAULT_SLIDE_THRESHOLD_PERCENT);
    assert!(DEFAULT_SLIDE_THRESHOLD_PERCENT <= MAX_SLIDE_THRESHOLD_PERCENT);

    // Overlay validation
    assert!(MIN_HIDE_TIMEOUT_SECS > 0);
    assert!(MIN_HIDE_TIMEOUT_SECS < MAX_HIDE_TIMEOUT_SECS);
    assert!(DEFAULT_HIDE_TIMEOUT_SECS >= MIN_HIDE_TIMEOUT_SECS);
    assert!(DEFAULT_HIDE_TIMEOUT_SECS <= MAX_HIDE_TIMEOUT_SECS);

    // Level validation
    assert!(MIN_LEVEL_PERCENT < MAX_LEVEL_PERCENT);
    assert!(DEFAULT_VOLUME_PERCENT >= MIN_LEVEL_PERCENT);
    assert!(DEFAULT_VOLUME_PERCENT <= MAX_LEVEL_PERCENT);

    // Speed validation
    assert!(DEFAULT_SPEED_INDEX < PLAYBACK_SPEED_PRESETS.len());
    assert!(PLAYBACK_SPEED_PRESETS[DEFAULT_SPEED_INDEX] == 1.0);
    assert!(MIN_PLAYBACK_SPEED > 0.0);
};
