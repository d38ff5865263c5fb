// SPDX-License-Identifier: MPL-2.0
//! Top-level interaction engine.
//!
//! [`ControlEngine`] binds the gesture classifiers, the overlay controls,
//! and the visibility state machine to one delegated playback surface. It
//! routes pointer events, translates component effects into commands on the
//! surface, and publishes committed user actions as [`PlayerEvent`]s.
//!
//! All mutable state is owned by the engine instance; gating flags are
//! written only by the visibility machine and read everywhere else. Hosts
//! drive the engine from their event loop: pointer events as they arrive,
//! status snapshots as the player pushes them, and a periodic [`tick`]
//! (100 ms granularity is plenty) that advances timers and animations.
//!
//! [`tick`]: ControlEngine::tick

pub mod events;
pub mod playlist;

pub use events::PlayerEvent;
pub use playlist::{Playlist, PlaylistItem};

use crate::application::port::{PlaybackStatus, PlaybackSurface};
use crate::config::{
    EngineConfig, DEFAULT_BRIGHTNESS_PERCENT, DEFAULT_LOCK_TRAVEL_PX,
    DEFAULT_SPEED_SLIDER_WIDTH_PX, DEFAULT_SPEED_INDEX, DEFAULT_VOLUME_PERCENT,
    PLAYBACK_SPEED_PRESETS,
};
use crate::controls::seek_bar::{SeekBar, SeekBarEffect};
use crate::controls::slide_button::{SlideButton, SlideEffect};
use crate::controls::step_slider::{StepSlider, StepSliderEffect};
use crate::controls::visibility::{Overlay, VisibilityMessage, VisibilityState};
use crate::domain::{LayoutDirection, LayoutMode, Percent, PlaybackSpeed, ResizeMode, SeekableRange};
use crate::error::Error;
use crate::gesture::drag::{DragClassifier, DragContext, DragEffect, GestureClass, PointerEvent};
use crate::gesture::tap::{TapClassifier, TapEffect, TapZone};
use iced_core::Rectangle;
use log::warn;
use std::time::{Duration, Instant};

/// Live scrub preview while a horizontal drag is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubPreview {
    /// Position the scrub would commit if released now.
    pub target: Duration,
    /// Tooltip text, e.g. `+00:10 (00:40)`.
    pub tooltip: String,
}

/// A control affordance activated by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Play/pause button on the main controls or remote.
    TogglePlayback,
    /// Stop button: pause and rewind to the start.
    Stop,
    /// Skip to the next playlist item.
    SkipNext,
    /// Skip to the previous playlist item.
    SkipBack,
    /// The "more" button on the main controls.
    ShowMore,
    /// Dismiss the visible panel.
    ClosePanel,
    /// The speed item in the more panel.
    OpenSpeedPanel,
    /// The playlist item in the more panel.
    OpenPlaylistPanel,
    /// The lock item in the more panel.
    Lock,
    /// Mute toggle.
    ToggleMute,
    /// Loop toggle.
    ToggleLoop,
    /// Fullscreen toggle.
    ToggleFullscreen,
    /// Back affordance.
    Back,
    /// An entry of the playlist panel was chosen.
    SelectPlaylistItem(usize),
}

/// Gesture and control engine bound to one playback surface.
pub struct ControlEngine<P: PlaybackSurface> {
    surface: P,
    config: EngineConfig,
    direction: LayoutDirection,
    layout_mode: LayoutMode,
    resize_mode: ResizeMode,
    view_bounds: Rectangle,

    loaded: bool,
    playing: bool,
    muted: bool,
    looping: bool,
    fullscreen: bool,
    volume: Percent,
    brightness: Percent,
    speed: PlaybackSpeed,
    range: SeekableRange,
    scrub: Option<ScrubPreview>,
    last_error: Option<Error>,
    playlist: Playlist,

    tap: TapClassifier,
    drag: DragClassifier,
    seek_bar: SeekBar,
    speed_slider: StepSlider,
    lock_slider: SlideButton,
    visibility: VisibilityState,
}

impl<P: PlaybackSurface> ControlEngine<P> {
    /// Creates an engine over `surface` covering `view_bounds`.
    #[must_use]
    pub fn new(
        surface: P,
        config: EngineConfig,
        direction: LayoutDirection,
        view_bounds: Rectangle,
    ) -> Self {
        let speed_labels = PLAYBACK_SPEED_PRESETS
            .iter()
            .map(|&s| PlaybackSpeed::new(s).label())
            .collect();
        let tap = TapClassifier::new(
            config.double_tap_window(),
            config.edge_zone_fraction,
            direction,
        );
        let drag = DragClassifier::new(
            config.seek_secs_per_pixel,
            config.level_bar_extent_px,
            view_bounds,
        );
        let seek_bar = SeekBar::new(view_bounds.width, direction);
        let speed_slider = StepSlider::new(
            speed_labels,
            DEFAULT_SPEED_INDEX,
            DEFAULT_SPEED_SLIDER_WIDTH_PX,
            config.jump_threshold_px,
            direction,
        );
        let lock_slider = SlideButton::new(
            DEFAULT_LOCK_TRAVEL_PX,
            config.slide_threshold_percent,
            config.lock_auto_reset(),
            false,
            direction,
        );
        let visibility = VisibilityState::new(
            config.hide_mode,
            Duration::from_secs(u64::from(config.hide_timeout_secs)),
        );

        Self {
            surface,
            config,
            direction,
            layout_mode: LayoutMode::default(),
            resize_mode: ResizeMode::default(),
            view_bounds,
            loaded: false,
            playing: false,
            muted: false,
            looping: false,
            fullscreen: false,
            volume: Percent::new(DEFAULT_VOLUME_PERCENT),
            brightness: Percent::new(DEFAULT_BRIGHTNESS_PERCENT),
            speed: PlaybackSpeed::default(),
            range: SeekableRange::default(),
            scrub: None,
            last_error: None,
            playlist: Playlist::default(),
            tap,
            drag,
            seek_bar,
            speed_slider,
            lock_slider,
            visibility,
        }
    }

    // =======================================================================
    // Event intake
    // =======================================================================

    /// Routes a pointer event on the video surface.
    pub fn handle_surface_event(&mut self, event: PointerEvent, now: Instant) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        self.visibility.handle(VisibilityMessage::Interaction, now);

        match event {
            PointerEvent::Grant { position } => {
                if self.visibility.taps_enabled() {
                    if self.layout_mode.supports_gestures() {
                        let x = position.x - self.view_bounds.x;
                        let effect = self.tap.tap_down(x, self.view_bounds.width, now);
                        self.apply_tap_effect(effect, now, &mut events);
                    } else {
                        // Basic layout has no double-tap affordance: a tap
                        // toggles the chrome immediately.
                        self.visibility.handle(VisibilityMessage::SingleTap, now);
                    }
                }
                if self.gesture_gate_open() {
                    self.drag.grant(
                        position,
                        DragContext {
                            range: self.range,
                            volume: self.volume,
                            brightness: self.brightness,
                        },
                    );
                }
            }
            PointerEvent::Move { .. } => {
                let effect = self.drag.handle(event);
                if self.drag.class() != GestureClass::None {
                    // A classified drag owns the pointer; drop any pending tap.
                    self.tap.reset();
                }
                self.apply_drag_effect(effect, &mut events);
            }
            PointerEvent::Release | PointerEvent::Terminate => {
                let effect = self.drag.handle(event);
                self.apply_drag_effect(effect, &mut events);
                self.scrub = None;
            }
        }
        events
    }

    /// Routes a pointer event on the seek bar.
    pub fn handle_seek_bar_event(&mut self, event: PointerEvent, now: Instant) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        self.visibility.handle(VisibilityMessage::Interaction, now);

        match event {
            PointerEvent::Grant { position } => {
                let seekable = self.visibility.gestures_enabled() && self.range.is_seekable();
                let _ = self.seek_bar.grant(position.x, seekable);
            }
            PointerEvent::Move { dx, .. } => {
                let _ = self.seek_bar.pointer_move(dx);
            }
            PointerEvent::Release => {
                if let SeekBarEffect::DragEnded { value, .. } = self.seek_bar.release() {
                    self.surface.seek_to(value);
                    self.range = self.range.with_position(value);
                    self.seek_bar.set_range(self.range);
                    events.push(PlayerEvent::SeekCommitted(value));
                }
            }
            PointerEvent::Terminate => self.seek_bar.terminate(),
        }
        events
    }

    /// Routes a pointer event on the speed selector.
    ///
    /// The committed speed surfaces from [`tick`](Self::tick) once the
    /// snap animation settles.
    pub fn handle_speed_slider_event(&mut self, event: PointerEvent, now: Instant) {
        self.visibility.handle(VisibilityMessage::Interaction, now);
        match event {
            PointerEvent::Grant { .. } => {
                if self.visibility.overlay() == Overlay::SpeedPanel {
                    self.speed_slider.grant();
                }
            }
            PointerEvent::Move { dx, .. } => {
                let _ = self.speed_slider.pointer_move(dx, now);
            }
            PointerEvent::Release => {
                let _ = self.speed_slider.release(now);
            }
            PointerEvent::Terminate => self.speed_slider.terminate(),
        }
    }

    /// Routes a pointer event on the lock slider.
    pub fn handle_lock_slider_event(&mut self, event: PointerEvent, now: Instant) {
        // Settle any spring animation first, so a grant immediately after a
        // failed slide is not refused against stale animation state.
        let _ = self.lock_slider.tick(now);
        match event {
            PointerEvent::Grant { .. } => {
                if self.visibility.is_locked() {
                    self.lock_slider.grant();
                }
            }
            PointerEvent::Move { dx, .. } => {
                let _ = self.lock_slider.pointer_move(dx);
            }
            PointerEvent::Release => {
                if self.lock_slider.release(now) == SlideEffect::Confirmed {
                    self.visibility.handle(VisibilityMessage::Unlock, now);
                }
            }
            PointerEvent::Terminate => self.lock_slider.terminate(),
        }
    }

    /// Handles a pressed control affordance.
    pub fn handle_control(&mut self, action: ControlAction, now: Instant) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        self.visibility.handle(VisibilityMessage::Interaction, now);

        match action {
            ControlAction::TogglePlayback => {
                if self.loaded {
                    self.toggle_playback(&mut events);
                }
            }
            ControlAction::Stop => {
                self.stop();
                events.push(PlayerEvent::Stop);
            }
            ControlAction::SkipNext => {
                if let Some(index) = self.playlist.advance() {
                    self.load_active(now);
                    events.push(PlayerEvent::SkipNext(index));
                }
            }
            ControlAction::SkipBack => {
                if let Some(index) = self.playlist.retreat() {
                    self.load_active(now);
                    events.push(PlayerEvent::SkipBack(index));
                }
            }
            ControlAction::ShowMore => {
                self.visibility.handle(VisibilityMessage::ShowMore, now);
            }
            ControlAction::ClosePanel => {
                self.visibility.handle(VisibilityMessage::ClosePanel, now);
            }
            ControlAction::OpenSpeedPanel => {
                self.visibility.handle(VisibilityMessage::OpenSpeedPanel, now);
            }
            ControlAction::OpenPlaylistPanel => {
                self.visibility
                    .handle(VisibilityMessage::OpenPlaylistPanel, now);
            }
            ControlAction::Lock => {
                // Re-arm the slide control so the next unlock starts clean.
                self.lock_slider.reset();
                self.visibility.handle(VisibilityMessage::Lock, now);
            }
            ControlAction::ToggleMute => {
                self.muted = !self.muted;
                self.surface.set_muted(self.muted);
                events.push(PlayerEvent::MuteChanged(self.muted));
            }
            ControlAction::ToggleLoop => {
                self.looping = !self.looping;
                self.surface.set_looping(self.looping);
                events.push(PlayerEvent::LoopChanged(self.looping));
            }
            ControlAction::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                events.push(PlayerEvent::FullscreenToggled(self.fullscreen));
            }
            ControlAction::Back => {
                events.push(PlayerEvent::BackPressed);
            }
            ControlAction::SelectPlaylistItem(index) => {
                if self.playlist.select(index) {
                    self.load_active(now);
                    events.push(PlayerEvent::PlaylistItemSelected(index));
                    self.visibility.handle(VisibilityMessage::ClosePanel, now);
                }
            }
        }
        events
    }

    /// Consumes a status snapshot pushed by the host.
    ///
    /// Delivery may be irregular; the engine re-clamps the reported range
    /// and never assumes a fixed interval.
    pub fn handle_status(&mut self, status: PlaybackStatus, now: Instant) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        let was_loaded = self.loaded;

        self.loaded = status.is_loaded;
        self.looping = status.is_looping;
        self.range = SeekableRange::new(status.position, status.duration, status.playable_duration);
        self.seek_bar.set_range(self.range);

        if status.is_loaded {
            self.visibility.handle(VisibilityMessage::Loaded, now);
        } else if was_loaded {
            self.visibility.handle(VisibilityMessage::Unloaded, now);
        }

        if status.did_just_finish && !status.is_looping {
            // Quietly advance through the playlist; stop at its end.
            if self.playlist.advance().is_some() {
                self.load_active(now);
            } else {
                self.playing = false;
                events.push(PlayerEvent::Stop);
            }
        }
        events
    }

    /// Records a playback failure reported by the host.
    ///
    /// The error affordance replaces interactive controls until a reload
    /// succeeds; nothing is retried automatically.
    pub fn handle_error(&mut self, error: Error, now: Instant) {
        warn!("playback error: {error}");
        self.last_error = Some(error);
        self.loaded = false;
        self.playing = false;
        self.visibility.handle(VisibilityMessage::PlayerErrored, now);
    }

    /// Advances timers and animations.
    ///
    /// Drives the tap window, the auto-hide timer, sequenced overlay
    /// switches, and the commit-after-settle of the speed selector and
    /// lock slider.
    pub fn tick(&mut self, now: Instant) -> Vec<PlayerEvent> {
        let mut events = Vec::new();

        let tap_effect = self.tap.tick(now);
        self.apply_tap_effect(tap_effect, now, &mut events);

        let _ = self.visibility.tick(now);

        if let StepSliderEffect::Committed(index) = self.speed_slider.tick(now) {
            if let Some(speed) = PlaybackSpeed::from_stop(index) {
                self.speed = speed;
                self.surface.set_rate(speed.value());
                events.push(PlayerEvent::SpeedChanged(speed));
            }
        }

        let _ = self.lock_slider.tick(now);
        events
    }

    // =======================================================================
    // Imperative control surface
    // =======================================================================

    /// Starts or resumes playback.
    pub fn play(&mut self) {
        self.playing = true;
        self.surface.play();
    }

    /// Pauses playback.
    pub fn pause(&mut self) {
        self.playing = false;
        self.surface.pause();
    }

    /// Pauses and rewinds to the start.
    pub fn stop(&mut self) {
        self.playing = false;
        self.surface.pause();
        self.surface.seek_to(Duration::ZERO);
        self.range = self.range.with_position(Duration::ZERO);
        self.seek_bar.set_range(self.range);
    }

    /// Advances to the next playlist item, if any.
    pub fn skip_next(&mut self, now: Instant) -> bool {
        if self.playlist.advance().is_some() {
            self.load_active(now);
            true
        } else {
            false
        }
    }

    /// Returns to the previous playlist item, if any.
    pub fn skip_back(&mut self, now: Instant) -> bool {
        if self.playlist.retreat().is_some() {
            self.load_active(now);
            true
        } else {
            false
        }
    }

    /// Reloads the active playlist item, e.g. after an error.
    pub fn reload(&mut self, now: Instant) {
        self.load_active(now);
    }

    /// Sets looping on the player.
    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
        self.surface.set_looping(looping);
    }

    /// Mutes or unmutes the player.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.surface.set_muted(muted);
    }

    /// Sets the volume level.
    pub fn set_volume(&mut self, level: Percent) {
        self.volume = level;
        self.surface.set_volume(level.as_ratio());
    }

    /// Sets the brightness level. Brightness is a host concern; the engine
    /// only tracks the value for the gesture origin and display.
    pub fn set_brightness(&mut self, level: Percent) {
        self.brightness = level;
    }

    /// Sets the playback speed, snapping the selector to the nearest stop.
    pub fn set_playback_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
        let _ = self.speed_slider.set_selected_index(speed.nearest_stop());
        self.surface.set_rate(speed.value());
    }

    /// Replaces the playlist and loads the starting item.
    ///
    /// A no-op when `start` is out of range.
    pub fn set_playlist(&mut self, items: Vec<PlaylistItem>, start: usize, now: Instant) -> bool {
        if self.playlist.set_items(items, start) {
            self.load_active(now);
            true
        } else {
            false
        }
    }

    /// Activates a playlist index; out-of-range input is a no-op.
    pub fn set_active_index(&mut self, index: usize, now: Instant) -> bool {
        if self.playlist.select(index) {
            self.load_active(now);
            true
        } else {
            false
        }
    }

    /// Stores the resize mode forwarded to the host's video view.
    pub fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    // =======================================================================
    // Layout intake
    // =======================================================================

    /// Re-layout of the video surface.
    pub fn set_view_bounds(&mut self, bounds: Rectangle) {
        self.view_bounds = bounds;
        self.drag.set_view_bounds(bounds);
    }

    /// Re-layout of the seek bar.
    pub fn set_seek_bar_width(&mut self, width: f32) {
        self.seek_bar.set_width(width);
    }

    /// Re-layout of the speed selector.
    pub fn set_speed_slider_width(&mut self, width: f32) {
        self.speed_slider.set_width(width);
    }

    /// Re-layout of the lock slider travel.
    pub fn set_lock_travel(&mut self, distance: f32) {
        self.lock_slider.set_distance(distance);
    }

    /// Switches between the basic and gesture-rich layouts.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.layout_mode = mode;
    }

    // =======================================================================
    // State read by the presentation layer
    // =======================================================================

    /// The overlay currently owning the surface.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.visibility.overlay()
    }

    /// Whether the surface is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.visibility.is_locked()
    }

    /// Whether the error affordance replaces the controls.
    #[must_use]
    pub fn error_visible(&self) -> bool {
        self.visibility.error_visible()
    }

    /// The last playback error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Whether the fallback line indicator is visible.
    #[must_use]
    pub fn line_indicator_visible(&self) -> bool {
        self.visibility.line_indicator_visible()
    }

    /// Live scrub preview, if a horizontal drag is in flight.
    #[must_use]
    pub fn scrub_preview(&self) -> Option<&ScrubPreview> {
        self.scrub.as_ref()
    }

    /// Current volume level.
    #[must_use]
    pub fn volume(&self) -> Percent {
        self.volume
    }

    /// Current brightness level.
    #[must_use]
    pub fn brightness(&self) -> Percent {
        self.brightness
    }

    /// Current playback speed.
    #[must_use]
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Whether playback is running (optimistic local view).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether audio is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the player loops the current source.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether the host is in fullscreen.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Latest clamped playback range.
    #[must_use]
    pub fn range(&self) -> SeekableRange {
        self.range
    }

    /// The playlist.
    #[must_use]
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// The seek bar, for extents and halo rendering.
    #[must_use]
    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek_bar
    }

    /// The speed selector, for cursor rendering.
    #[must_use]
    pub fn speed_slider(&self) -> &StepSlider {
        &self.speed_slider
    }

    /// The lock slider, for cursor rendering.
    #[must_use]
    pub fn lock_slider(&self) -> &SlideButton {
        &self.lock_slider
    }

    /// Stored resize mode.
    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    /// Current layout mode.
    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    /// Layout direction the engine was constructed with.
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    // =======================================================================
    // Internals
    // =======================================================================

    fn gesture_gate_open(&self) -> bool {
        self.visibility.gestures_enabled()
            && self.layout_mode.supports_gestures()
            && self.range.is_seekable()
    }

    fn toggle_playback(&mut self, events: &mut Vec<PlayerEvent>) {
        if self.playing {
            self.playing = false;
            self.surface.pause();
            events.push(PlayerEvent::Pause);
        } else {
            self.playing = true;
            self.surface.play();
            events.push(PlayerEvent::Play);
        }
    }

    fn apply_tap_effect(&mut self, effect: TapEffect, now: Instant, events: &mut Vec<PlayerEvent>) {
        match effect {
            TapEffect::None => {}
            TapEffect::SingleTap => {
                self.visibility.handle(VisibilityMessage::SingleTap, now);
            }
            TapEffect::DoubleTap(TapZone::Middle) => {
                if self.loaded {
                    self.toggle_playback(events);
                }
            }
            TapEffect::DoubleTap(zone) => {
                if !self.range.is_seekable() {
                    return;
                }
                let step = Duration::from_secs(self.config.double_tap_seek_secs);
                let target = match zone {
                    TapZone::Left => self.range.position().saturating_sub(step),
                    _ => (self.range.position() + step).min(self.range.duration()),
                };
                self.surface.seek_to(target);
                self.range = self.range.with_position(target);
                self.seek_bar.set_range(self.range);
                events.push(PlayerEvent::SeekFeedback { zone, target });
            }
        }
    }

    fn apply_drag_effect(&mut self, effect: DragEffect, events: &mut Vec<PlayerEvent>) {
        match effect {
            DragEffect::None => {}
            DragEffect::ScrubPreview { target, tooltip } => {
                self.scrub = Some(ScrubPreview { target, tooltip });
            }
            DragEffect::VolumePreview(level) => {
                // Volume is audible live, on every move.
                self.volume = level;
                self.surface.set_volume(level.as_ratio());
            }
            DragEffect::BrightnessPreview(level) => {
                self.brightness = level;
            }
            DragEffect::SeekCommitted(target) => {
                self.surface.seek_to(target);
                self.range = self.range.with_position(target);
                self.seek_bar.set_range(self.range);
                events.push(PlayerEvent::SeekCommitted(target));
            }
            DragEffect::VolumeCommitted(level) => {
                self.volume = level;
                self.surface.set_volume(level.as_ratio());
                events.push(PlayerEvent::VolumeChanged(level));
            }
            DragEffect::BrightnessCommitted(level) => {
                self.brightness = level;
                events.push(PlayerEvent::BrightnessChanged(level));
            }
        }
    }

    fn load_active(&mut self, now: Instant) {
        let Some(source) = self.playlist.current().map(|item| item.source.clone()) else {
            return;
        };
        self.surface.unload();
        self.loaded = false;
        self.scrub = None;
        self.range = SeekableRange::default();
        self.seek_bar.set_range(self.range);

        match self.surface.load(&source) {
            Ok(()) => {
                self.last_error = None;
                // Re-apply sticky settings; the fresh player starts blank.
                self.surface.set_volume(self.volume.as_ratio());
                self.surface.set_rate(self.speed.value());
                self.surface.set_looping(self.looping);
                self.surface.set_muted(self.muted);
                if self.playing {
                    self.surface.play();
                }
            }
            Err(error) => self.handle_error(error, now),
        }
    }
}
