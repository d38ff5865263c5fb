// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core value types with ZERO external dependencies.
//!
//! This module contains pure value objects and business rules. It depends
//! only on `std` to keep the types trivially testable.
//!
//! # Modules
//!
//! - [`direction`]: Layout direction ([`LayoutDirection`](direction::LayoutDirection))
//! - [`layout`]: Layout and resize modes ([`LayoutMode`](layout::LayoutMode),
//!   [`ResizeMode`](layout::ResizeMode))
//! - [`level`]: Percentage levels ([`Percent`](level::Percent))
//! - [`speed`]: Playback speed stops ([`PlaybackSpeed`](speed::PlaybackSpeed))
//! - [`timeline`]: Seekable playback range ([`SeekableRange`](timeline::SeekableRange))

pub mod direction;
pub mod layout;
pub mod level;
pub mod speed;
pub mod timeline;

pub use direction::LayoutDirection;
pub use layout::{LayoutMode, ResizeMode};
pub use level::Percent;
pub use speed::PlaybackSpeed;
pub use timeline::{format_time, SeekableRange};
