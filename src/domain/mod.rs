// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types and rules shared by the state machines.
//!
//! # Modules
//!
//! - [`error`]: Non-fatal domain errors ([`PlaybackError`](error::PlaybackError),
//!   [`SectionError`](error::SectionError))
//! - [`ids`]: Identifier newtypes ([`SectionId`](ids::SectionId), [`GroupId`](ids::GroupId),
//!   [`ItemId`](ids::ItemId))
//! - [`motion`]: Exponential smoothing ([`Smoothed`](motion::Smoothed))
//! - [`newtypes`]: Range-checked tuning values ([`SmoothingFactor`](newtypes::SmoothingFactor),
//!   [`VisibilityThreshold`](newtypes::VisibilityThreshold), [`HideDelay`](newtypes::HideDelay))
//! - [`playback`]: Playback progress model ([`PlaybackState`](playback::PlaybackState))

pub mod error;
pub mod ids;
pub mod motion;
pub mod newtypes;
pub mod playback;
