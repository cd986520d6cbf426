//! Static persona profiles.
//!
//! Provides the display information for each coach persona.

use super::model::PersonaKind;

/// Display information for one persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaProfile {
    pub kind: PersonaKind,
    /// Display name shown next to the response
    pub name: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Coaching role
    pub title: &'static str,
    /// One-line description of the coaching approach
    pub description: &'static str,
}

const PROFILES: [PersonaProfile; 4] = [
    PersonaProfile {
        kind: PersonaKind::CognitiveBehavioral,
        name: "Dr. Chen",
        icon: "🧠",
        title: "Cognitive-Behavioral Coach",
        description: "Helps identify thought patterns and develop practical strategies",
    },
    PersonaProfile {
        kind: PersonaKind::EmpatheticFriend,
        name: "Maya",
        icon: "💙",
        title: "Empathetic Friend",
        description: "Provides emotional support and validation",
    },
    PersonaProfile {
        kind: PersonaKind::RationalAnalyst,
        name: "Alex",
        icon: "📊",
        title: "Rational Analyst",
        description: "Offers structured, data-driven approaches",
    },
    PersonaProfile {
        kind: PersonaKind::MindfulnessMentor,
        name: "Sage",
        icon: "🧘",
        title: "Mindfulness Mentor",
        description: "Guides toward present-moment awareness",
    },
];

/// Returns every persona profile in declaration order.
pub fn profiles() -> &'static [PersonaProfile] {
    &PROFILES
}

/// Returns the profile of a single persona.
pub fn profile(kind: PersonaKind) -> &'static PersonaProfile {
    &PROFILES[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_indexed_by_kind() {
        for kind in PersonaKind::ALL {
            assert_eq!(profile(kind).kind, kind);
        }
        assert_eq!(profiles().len(), PersonaKind::ALL.len());
    }
}
