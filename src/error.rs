// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the delegated playback surface.
///
/// The engine itself recovers locally from invalid numeric input and ignores
/// out-of-range indices; only playback failures reach this taxonomy. A
/// surfaced error replaces the interactive controls with a persistent error
/// affordance until an explicit reload succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be loaded at all.
    LoadFailed(String),

    /// Playback failed after a successful load.
    Decoding(String),

    /// An operation that requires loaded content was attempted without any.
    NotLoaded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoadFailed(msg) => write!(f, "failed to load source: {msg}"),
            Error::Decoding(msg) => write!(f, "playback failed: {msg}"),
            Error::NotLoaded => write!(f, "no content loaded"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::LoadFailed("unreachable host".to_string());
        assert!(err.to_string().contains("unreachable host"));
    }

    #[test]
    fn not_loaded_display_is_stable() {
        assert_eq!(Error::NotLoaded.to_string(), "no content loaded");
    }
}
