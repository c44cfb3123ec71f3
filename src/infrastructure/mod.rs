// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that need no browser: a deadline-ordered timer queue, a
//! frame request queue, and a geometric intersection observer. A host runtime
//! drives them from its own frame and clock ticks.
//!
//! # Available Adapters
//!
//! - [`clock`]: [`SystemClock`] and the deterministic [`ManualClock`]
//! - [`deadline_timers`]: [`DeadlineTimers`] (implements [`TimerDriver`])
//! - [`frame_queue`]: [`FrameQueue`] (implements [`FrameScheduler`])
//! - [`geometric_observer`]: [`GeometricObserver`] (implements [`IntersectionSource`])
//!
//! [`TimerDriver`]: crate::application::port::TimerDriver
//! [`FrameScheduler`]: crate::application::port::FrameScheduler
//! [`IntersectionSource`]: crate::application::port::IntersectionSource

pub mod clock;
pub mod deadline_timers;
pub mod frame_queue;
pub mod geometric_observer;

pub use clock::{ManualClock, SystemClock};
pub use deadline_timers::DeadlineTimers;
pub use frame_queue::FrameQueue;
pub use geometric_observer::GeometricObserver;
