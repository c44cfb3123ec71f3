// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Pointer**: Cursor follower and card tilt smoothing
//! - **Sections**: Viewport intersection threshold and initial section
//! - **Selection**: Exclusive selection groups and their seeds
//! - **Overlay**: Modal controls auto-hide delay
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Pointer Defaults
// ==========================================================================

/// Default per-frame smoothing factor for the decorative cursor.
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.15;

/// Smallest smoothing factor accepted (exclusive bound is 0).
pub const MIN_SMOOTHING_FACTOR: f32 = 0.01;

/// Largest smoothing factor accepted (exclusive bound is 1).
pub const MAX_SMOOTHING_FACTOR: f32 = 0.99;

/// Maximum card tilt, in degrees, on either axis.
pub const MAX_TILT_DEGREES: f32 = 15.0;

/// Tag names the hover predicate treats as interactive.
pub const INTERACTIVE_TAGS: [&str; 2] = ["a", "button"];

/// ARIA roles the hover predicate treats as interactive.
pub const INTERACTIVE_ROLES: [&str; 1] = ["button"];

// ==========================================================================
// Section Defaults
// ==========================================================================

/// Fraction of a section that must be visible for it to count as in view.
pub const DEFAULT_SECTION_THRESHOLD: f32 = 0.2;

/// Minimum intersection threshold.
pub const MIN_SECTION_THRESHOLD: f32 = 0.0;

/// Maximum intersection threshold.
pub const MAX_SECTION_THRESHOLD: f32 = 1.0;

/// Section that is active before any visibility event arrives.
pub const DEFAULT_INITIAL_SECTION: &str = "home";

/// Sections of the page, in document order.
pub const PAGE_SECTIONS: [&str; 9] = [
    "home",
    "about",
    "experience",
    "skills",
    "expertise",
    "services",
    "projects",
    "testimonials",
    "contact",
];

// ==========================================================================
// Selection Defaults
// ==========================================================================

/// Group for nav item tooltips (cleared on pointer leave).
pub const NAV_GROUP: &str = "nav";

/// Group for the services accordion (click to expand, click again to close).
pub const ACCORDION_GROUP: &str = "services";

/// Group for the experience timeline (exactly one node highlighted).
pub const TIMELINE_GROUP: &str = "experience";

/// Accordion item expanded when the page loads.
pub const DEFAULT_ACCORDION_ITEM: &str = "01";

/// Timeline node highlighted when the page loads.
pub const DEFAULT_TIMELINE_ITEM: &str = "01";

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Number of testimonials in the carousel.
pub const TESTIMONIAL_COUNT: usize = 5;

/// Testimonials shown side by side.
pub const TESTIMONIAL_WINDOW: usize = 3;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default inactivity window before modal controls hide (in milliseconds).
pub const DEFAULT_OVERLAY_HIDE_DELAY_MS: u64 = 3000;

/// Minimum auto-hide delay (in milliseconds).
pub const MIN_OVERLAY_HIDE_DELAY_MS: u64 = 1000;

/// Maximum auto-hide delay (in milliseconds).
pub const MAX_OVERLAY_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SMOOTHING_FACTOR > 0.0);
    assert!(MAX_SMOOTHING_FACTOR < 1.0);
    assert!(DEFAULT_SMOOTHING_FACTOR >= MIN_SMOOTHING_FACTOR);
    assert!(DEFAULT_SMOOTHING_FACTOR <= MAX_SMOOTHING_FACTOR);
    assert!(MAX_TILT_DEGREES > 0.0);

    assert!(DEFAULT_SECTION_THRESHOLD >= MIN_SECTION_THRESHOLD);
    assert!(DEFAULT_SECTION_THRESHOLD <= MAX_SECTION_THRESHOLD);

    assert!(MIN_OVERLAY_HIDE_DELAY_MS > 0);
    assert!(MAX_OVERLAY_HIDE_DELAY_MS >= MIN_OVERLAY_HIDE_DELAY_MS);
    assert!(DEFAULT_OVERLAY_HIDE_DELAY_MS >= MIN_OVERLAY_HIDE_DELAY_MS);
    assert!(DEFAULT_OVERLAY_HIDE_DELAY_MS <= MAX_OVERLAY_HIDE_DELAY_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
