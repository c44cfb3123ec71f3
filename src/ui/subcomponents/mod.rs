// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components of the page.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The page shell orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! shell (orchestrator)
//!     ├── pointer      - Decorative cursor follower
//!     ├── sections     - Active section from viewport visibility
//!     ├── carousel     - Cyclic testimonials window
//!     ├── selection    - Nav tooltips, accordion, timeline
//!     ├── tilt         - Expertise card tilt
//!     ├── overlay      - Modal controls auto-hide
//!     ├── playback     - Modal media play/pause and progress
//!     ├── scroll_lock  - Scroll-to-section and modal scroll lock
//!     └── timer        - Cancellable timer shared by the above
//! ```

pub mod carousel;
pub mod overlay;
pub mod playback;
pub mod pointer;
pub mod scroll_lock;
pub mod sections;
pub mod selection;
pub mod tilt;
pub mod timer;
