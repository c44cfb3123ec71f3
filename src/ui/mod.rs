// SPDX-License-Identifier: MPL-2.0
//! Interaction state of the page.
//!
//! [`subcomponents`] holds one small state machine per visual behavior;
//! [`shell`] owns them all and routes messages between them and the host.

pub mod shell;
pub mod subcomponents;
