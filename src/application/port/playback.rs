// SPDX-License-Identifier: MPL-2.0
//! Playback surface port definition.
//!
//! This module defines the [`PlaybackSurface`] trait for the delegated
//! video player. The engine owns no decode or render state; it drives the
//! surface through this port and treats playback position, volume, and rate
//! as a remote, asynchronously-settable resource.
//!
//! # Design Notes
//!
//! - Commands are **fire-and-forget**: the engine updates its own displayed
//!   state optimistically and reconciles on the next [`PlaybackStatus`]
//! - Status snapshots arrive at least on every meaningful position update;
//!   the engine tolerates irregular delivery and does not assume a fixed
//!   interval
//! - Only `load` can fail synchronously; everything else is infallible from
//!   the engine's point of view

use crate::error::Error;
use std::time::Duration;

/// Port for the delegated video playback surface.
///
/// # Lifecycle
///
/// 1. `load()` a source
/// 2. Drive transport with `play()` / `pause()` / `seek_to()`
/// 3. Adjust `set_volume()` / `set_rate()` / `set_looping()` / `set_muted()`
/// 4. `unload()` before switching sources
///
/// # Example
///
/// ```ignore
/// use iced_helm::application::port::PlaybackSurface;
/// use std::time::Duration;
///
/// fn skip_intro(surface: &mut impl PlaybackSurface) {
///     surface.seek_to(Duration::from_secs(90));
///     surface.play();
/// }
/// ```
pub trait PlaybackSurface {
    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback at the current position.
    fn pause(&mut self);

    /// Seeks to an absolute position.
    ///
    /// Positions past the end of the source are clamped by the player; the
    /// engine already clamps before issuing the command.
    fn seek_to(&mut self, position: Duration);

    /// Sets the audio volume, `0.0` (silent) to `1.0` (full).
    fn set_volume(&mut self, volume: f32);

    /// Sets the playback rate, `1.0` being normal speed.
    fn set_rate(&mut self, rate: f64);

    /// Enables or disables looping of the current source.
    fn set_looping(&mut self, looping: bool);

    /// Mutes or unmutes audio without changing the stored volume.
    fn set_muted(&mut self, muted: bool);

    /// Loads a new source, replacing any current one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoadFailed`] if the source cannot be opened.
    fn load(&mut self, source: &str) -> Result<(), Error>;

    /// Unloads the current source, stopping playback.
    fn unload(&mut self);
}

/// Status snapshot pushed by the host on playback progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    /// Whether a source is loaded and ready.
    pub is_loaded: bool,
    /// Current playback position.
    pub position: Duration,
    /// Total duration of the source; zero while unknown.
    pub duration: Duration,
    /// Extent of playable (buffered) content.
    pub playable_duration: Duration,
    /// True exactly once when the source finished playing.
    pub did_just_finish: bool,
    /// Whether the player is currently looping.
    pub is_looping: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait must remain object-safe: the engine may hold a boxed surface.
    fn _assert_object_safe(_: &dyn PlaybackSurface) {}

    #[derive(Default)]
    struct MockSurface {
        playing: bool,
        position: Duration,
        loaded: bool,
    }

    impl PlaybackSurface for MockSurface {
        fn play(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn seek_to(&mut self, position: Duration) {
            self.position = position;
        }

        fn set_volume(&mut self, _volume: f32) {}

        fn set_rate(&mut self, _rate: f64) {}

        fn set_looping(&mut self, _looping: bool) {}

        fn set_muted(&mut self, _muted: bool) {}

        fn load(&mut self, source: &str) -> Result<(), Error> {
            if source.is_empty() {
                return Err(Error::LoadFailed("empty source".to_string()));
            }
            self.loaded = true;
            Ok(())
        }

        fn unload(&mut self) {
            self.loaded = false;
            self.playing = false;
        }
    }

    #[test]
    fn mock_surface_lifecycle() {
        let mut surface = MockSurface::default();
        surface.load("file.mp4").unwrap();
        assert!(surface.loaded);

        surface.play();
        assert!(surface.playing);

        surface.seek_to(Duration::from_secs(5));
        assert_eq!(surface.position, Duration::from_secs(5));

        surface.unload();
        assert!(!surface.loaded);
        assert!(!surface.playing);
    }

    #[test]
    fn load_rejects_empty_source() {
        let mut surface = MockSurface::default();
        assert!(surface.load("").is_err());
    }
}
