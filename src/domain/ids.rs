// SPDX-License-Identifier: MPL-2.0
//! Identifier newtypes.
//!
//! Sections, selection groups and their items are all named by strings in
//! the page markup. Wrapping them keeps a section id from being passed where
//! a group id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a page section (the element id the nav links to).
    SectionId
);

string_id!(
    /// Identifier of an exclusive selection group.
    GroupId
);

string_id!(
    /// Identifier of an item inside a selection group.
    ItemId
);

/// Opaque identity of a DOM-like element, as reported by the pointer host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(SectionId::from("about"), SectionId::new(String::from("about")));
        assert_ne!(ItemId::from("01"), ItemId::from("02"));
    }

    #[test]
    fn display_is_raw_value() {
        assert_eq!(GroupId::from("timeline").to_string(), "timeline");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&SectionId::from("skills")).expect("serialize");
        assert_eq!(json, "\"skills\"");
    }
}
