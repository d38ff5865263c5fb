// SPDX-License-Identifier: MPL-2.0
//! Overlay controls driven by the gesture engine.
//!
//! - [`transition`]: scheduled settle animations shared by the controls
//! - [`seek_bar`]: continuous progress/volume bar with buffered extent
//! - [`step_slider`]: discrete-snap selector for stepped values
//! - [`slide_button`]: threshold slide-to-confirm control
//! - [`visibility`]: overlay exclusivity and auto-hide state machine

pub mod seek_bar;
pub mod slide_button;
pub mod step_slider;
pub mod transition;
pub mod visibility;

pub use seek_bar::{SeekBar, SeekBarEffect};
pub use slide_button::{SlideButton, SlideEffect};
pub use step_slider::{StepSlider, StepSliderEffect};
pub use transition::Transition;
pub use visibility::{Overlay, VisibilityEffect, VisibilityMessage, VisibilityState};
