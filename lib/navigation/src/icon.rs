//! Semantic icon identifiers for navigation entries.
//!
//! The route table carries these identifiers instead of rendered glyphs
//! so that it stays free of UI-framework types. A rendering layer owns
//! the mapping from identifier to widget; this crate only names what the
//! glyph means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the glyph a navigation entry is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    /// Home/dashboard glyph.
    Home,
    /// Message/compose glyph, used for "add" style entries.
    Message,
    /// Person glyph, used for roster and profile entries.
    Person,
    /// Activity/transaction glyph, used for circulation entries.
    Activity,
    /// Checklist glyph, used for analytics and activity reports.
    Checklist,
    /// Gear glyph for the settings group.
    Gear,
    /// Lock glyph for the logout entry.
    Lock,
}

impl NavIcon {
    /// Returns the snake_case identifier, as serialized.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Message => "message",
            Self::Person => "person",
            Self::Activity => "activity",
            Self::Checklist => "checklist",
            Self::Gear => "gear",
            Self::Lock => "lock",
        }
    }
}

impl fmt::Display for NavIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_serializes_as_snake_case_name() {
        let json = serde_json::to_string(&NavIcon::Checklist).expect("serialize");
        assert_eq!(json, "\"checklist\"");
    }

    #[test]
    fn icon_as_str_matches_serde_form() {
        for icon in [
            NavIcon::Home,
            NavIcon::Message,
            NavIcon::Person,
            NavIcon::Activity,
            NavIcon::Checklist,
            NavIcon::Gear,
            NavIcon::Lock,
        ] {
            let json = serde_json::to_string(&icon).expect("serialize");
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }

    #[test]
    fn icon_display_matches_identifier() {
        assert_eq!(NavIcon::Gear.to_string(), "gear");
    }
}
