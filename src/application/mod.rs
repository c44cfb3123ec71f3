// SPDX-License-Identifier: MPL-2.0
//! Application layer: the capability interfaces the state machines depend on.
//!
//! Browser primitives (frames, timers, intersection notifications, pointer
//! listeners, media elements) are reached only through the traits in
//! [`port`], so every state machine can run against deterministic fakes.

pub mod port;
