// SPDX-License-Identifier: MPL-2.0
//! `iced_helm` is a gesture-driven control surface for video players built
//! with the Iced GUI framework.
//!
//! The crate contains no decoding or rendering: it turns raw pointer event
//! streams into semantic gestures (scrub, volume, brightness, taps), owns
//! the discrete playback-speed selector, the slide-to-unlock control, the
//! seek bar, and the overlay visibility state machine, and drives a
//! delegated playback surface through a small command port.
//!
//! Hosts embed [`engine::ControlEngine`] next to their video view, feed it
//! pointer events, layout geometry, and playback status, and render from
//! its state; committed user actions come back as
//! [`engine::PlayerEvent`]s.

#![doc(html_root_url = "https://docs.rs/iced_helm/0.1.0")]

pub mod application;
pub mod config;
pub mod controls;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gesture;

#[cfg(test)]
mod test_utils;
