// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the narrow capability interfaces that host adapters
//! implement. They use only domain types, so the UI state machines stay
//! independent of any concrete runtime.
//!
//! # Available Ports
//!
//! - [`frame`]: Per-frame callback scheduling
//! - [`timer`]: Cancellable delayed callbacks and the clock behind them
//! - [`intersection`]: Section visibility notifications
//! - [`pointer`]: Pointer listeners and the decorative cursor layer
//! - [`scroll`]: Page scroll lock and scroll-into-view
//! - [`media`]: Playable media resources
//!
//! # Design Notes
//!
//! - Everything runs on one UI thread, so no trait requires `Send`
//! - Handles (`FrameId`, `TimerId`, ...) are plain copyable tokens; releasing
//!   a handle twice or releasing an unknown handle is a no-op
//! - Callbacks are modelled as drained queues (`due_frames`, `expired`) or
//!   messages delivered to the page shell, never as re-entrant closures

pub mod frame;
pub mod intersection;
pub mod media;
pub mod pointer;
pub mod scroll;
pub mod timer;

pub use frame::{FrameId, FrameScheduler};
pub use intersection::{IntersectionSource, VisibilityEntry};
pub use media::MediaResource;
pub use pointer::{CursorId, CursorLayer, ElementInfo, ElementPath, ListenerId, PointerEvents};
pub use scroll::ScrollHost;
pub use timer::{Clock, TimerDriver, TimerId};
