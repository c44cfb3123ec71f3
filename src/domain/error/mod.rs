// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! These errors are independent of external crates. None of them is fatal:
//! each describes a condition the owning state machine recovers from locally.

use super::ids::SectionId;
use std::fmt;

/// A playback command was rejected by the media resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Playback policy blocked the command (typically autoplay without a gesture).
    Blocked(String),

    /// The resource cannot play this media.
    Unsupported(String),

    /// The play request was interrupted by a later pause or unload.
    Aborted,

    /// Generic rejection with raw message.
    Other(String),
}

impl PlaybackError {
    /// Categorizes a raw rejection message reported by the media host.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("notallowederror")
            || msg_lower.contains("blocked")
            || msg_lower.contains("policy")
            || msg_lower.contains("user gesture")
        {
            return PlaybackError::Blocked(msg.to_string());
        }

        if msg_lower.contains("notsupportederror")
            || msg_lower.contains("no supported source")
            || msg_lower.contains("unsupported")
        {
            return PlaybackError::Unsupported(msg.to_string());
        }

        if msg_lower.contains("aborterror")
            || msg_lower.contains("interrupted")
            || msg_lower.contains("aborted")
        {
            return PlaybackError::Aborted;
        }

        PlaybackError::Other(msg.to_string())
    }

    /// Returns true when the rejection came from the autoplay policy.
    #[must_use]
    pub fn is_policy_block(&self) -> bool {
        matches!(self, PlaybackError::Blocked(_))
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Blocked(msg) => write!(f, "Playback blocked: {}", msg),
            PlaybackError::Unsupported(msg) => write!(f, "Unsupported media: {}", msg),
            PlaybackError::Aborted => write!(f, "Play request interrupted"),
            PlaybackError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Section observation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// The page has no element for this section id.
    UnknownTarget(SectionId),
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::UnknownTarget(id) => write!(f, "Unknown section target: {}", id),
        }
    }
}
