// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interface between the interaction
//! engine and the delegated video surface. The engine issues commands
//! through the port and consumes status snapshots pushed back by the host;
//! it never blocks waiting for an acknowledgement.
//!
//! # Design Notes
//!
//! - The port uses domain types only (no renderer or decoder types)
//! - Commands are fire-and-forget; displayed state updates optimistically
//! - No `async fn` - hosts bridge to their own task machinery

pub mod playback;

pub use playback::{PlaybackStatus, PlaybackSurface};
