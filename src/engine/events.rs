// SPDX-License-Identifier: MPL-2.0
//! Events published to the host application.
//!
//! The engine exposes a small closed set of events instead of dozens of
//! optional callback parameters: every update call returns the events
//! produced by that input, each fired at most once per committed user
//! action. Intermediate drag frames never appear here; they surface through
//! component state the host reads when rendering.

use crate::domain::{Percent, PlaybackSpeed};
use crate::gesture::TapZone;
use std::time::Duration;

/// A committed user action the host may want to observe.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback was started or resumed.
    Play,
    /// Playback was paused.
    Pause,
    /// Playback was stopped and rewound.
    Stop,
    /// The playlist advanced to the given index.
    SkipNext(usize),
    /// The playlist moved back to the given index.
    SkipBack(usize),
    /// A volume drag committed at the given level.
    VolumeChanged(Percent),
    /// A brightness drag committed at the given level.
    BrightnessChanged(Percent),
    /// Mute was toggled.
    MuteChanged(bool),
    /// Looping was toggled.
    LoopChanged(bool),
    /// The speed selector committed a new playback speed.
    SpeedChanged(PlaybackSpeed),
    /// A playlist item was selected from the playlist panel.
    PlaylistItemSelected(usize),
    /// Fullscreen was toggled.
    FullscreenToggled(bool),
    /// The back affordance was pressed.
    BackPressed,
    /// A scrub or seek-bar drag committed the given position.
    SeekCommitted(Duration),
    /// A double tap skipped playback; carries the ripple cue data.
    SeekFeedback {
        /// Zone of the double tap.
        zone: TapZone,
        /// Position the skip resolved to.
        target: Duration,
    },
}
