// SPDX-License-Identifier: MPL-2.0
//! `folio_sync` keeps an animated single-page portfolio in sync with the
//! pointer, the viewport and its media.
//!
//! It provides a smoothed decorative cursor, the active-section indicator,
//! exclusive selection groups (nav tooltips, accordion, timeline), card tilt,
//! auto-hiding modal controls and a play/pause bridge to the modal video.
//! Host capabilities (frames, timers, intersection, pointer, scroll, media)
//! are injected through the traits in [`application::port`].

#![doc(html_root_url = "https://docs.rs/folio_sync/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
#[cfg(any(test, feature = "test-utils"))]
#[doc(hidden)]
pub mod test_utils;
pub mod ui;
