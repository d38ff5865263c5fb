// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator contracts.
//!
//! - [`port`]: Trait definitions (interfaces) the host's playback
//!   infrastructure implements.
//!
//! # Dependency Rule
//!
//! The application layer depends on the domain layer only; the engine and
//! the host's infrastructure depend on the ports defined here.

pub mod port;
