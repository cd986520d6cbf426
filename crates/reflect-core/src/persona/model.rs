//! Persona domain model.
//!
//! Represents the four coach personas that reflect on a user's dilemma.
//! Each persona contributes exactly one response per reflection.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::preset::profile;
use crate::error::{ReflectError, Result};

/// Number of personas participating in every reflection.
pub const PERSONA_COUNT: usize = 4;

/// The fixed set of coach personas.
///
/// Declaration order is significant: responses are always produced and
/// displayed in this order.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PersonaKind {
    /// Dr. Chen: identifies thought patterns and practical strategies
    CognitiveBehavioral,
    /// Maya: emotional support and validation
    EmpatheticFriend,
    /// Alex: structured, data-driven approaches
    RationalAnalyst,
    /// Sage: present-moment awareness
    MindfulnessMentor,
}

impl PersonaKind {
    /// All personas in declaration order.
    pub const ALL: [PersonaKind; PERSONA_COUNT] = [
        PersonaKind::CognitiveBehavioral,
        PersonaKind::EmpatheticFriend,
        PersonaKind::RationalAnalyst,
        PersonaKind::MindfulnessMentor,
    ];

    /// Position of this persona in declaration order.
    pub fn index(self) -> usize {
        match self {
            PersonaKind::CognitiveBehavioral => 0,
            PersonaKind::EmpatheticFriend => 1,
            PersonaKind::RationalAnalyst => 2,
            PersonaKind::MindfulnessMentor => 3,
        }
    }
}

/// A single persona's reflection on a dilemma. Immutable once produced.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaResponse {
    /// Which persona produced this response
    pub persona: PersonaKind,
    /// Display name of the persona (e.g. "Dr. Chen")
    pub name: String,
    /// Display icon glyph
    pub icon: String,
    /// Response text
    pub response: String,
}

impl PersonaResponse {
    /// Creates a response for `persona`, filling name and icon from its profile.
    pub fn new(persona: PersonaKind, response: impl Into<String>) -> Self {
        let profile = profile(persona);
        Self {
            persona,
            name: profile.name.to_string(),
            icon: profile.icon.to_string(),
            response: response.into(),
        }
    }
}

/// One response per persona, in declaration order.
pub type ResponseSet = [PersonaResponse; PERSONA_COUNT];

/// The complete output of reflecting on one dilemma.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    /// Persona responses in `PersonaKind::ALL` order
    pub responses: ResponseSet,
    /// Concrete next steps synthesized from the responses (may be empty)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<String>,
}

impl Reflection {
    /// Builds a reflection by asking `text_for` for each persona in order.
    pub fn from_fn(mut text_for: impl FnMut(PersonaKind) -> String) -> Self {
        Self {
            responses: PersonaKind::ALL.map(|kind| PersonaResponse::new(kind, text_for(kind))),
            suggested_actions: Vec::new(),
        }
    }

    /// Attaches synthesized suggested actions.
    pub fn with_suggested_actions(mut self, actions: Vec<String>) -> Self {
        self.suggested_actions = actions;
        self
    }

    /// Returns the response produced by `persona`.
    pub fn response(&self, persona: PersonaKind) -> &PersonaResponse {
        &self.responses[persona.index()]
    }

    /// Checks the generator contract: persona order is the declaration order
    /// and every response carries text.
    pub fn validate(&self) -> Result<()> {
        for (slot, (response, expected)) in
            self.responses.iter().zip(PersonaKind::ALL).enumerate()
        {
            if response.persona != expected {
                return Err(ReflectError::generation_failed(
                    format!(
                        "response {slot} belongs to '{}', expected '{expected}'",
                        response.persona
                    ),
                    false,
                ));
            }
            if response.response.trim().is_empty() {
                return Err(ReflectError::generation_failed(
                    format!("persona '{expected}' returned an empty response"),
                    true,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_declaration_order() {
        let iterated: Vec<PersonaKind> = PersonaKind::iter().collect();
        assert_eq!(iterated, PersonaKind::ALL.to_vec());
        for (i, kind) in PersonaKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_tags_are_kebab_case() {
        assert_eq!(PersonaKind::CognitiveBehavioral.to_string(), "cognitive-behavioral");
        assert_eq!(
            PersonaKind::from_str("mindfulness-mentor").unwrap(),
            PersonaKind::MindfulnessMentor
        );
        let json = serde_json::to_string(&PersonaKind::EmpatheticFriend).unwrap();
        assert_eq!(json, "\"empathetic-friend\"");
    }

    #[test]
    fn test_from_fn_fills_profiles_in_order() {
        let reflection = Reflection::from_fn(|kind| format!("text for {kind}"));
        assert_eq!(reflection.responses.len(), PERSONA_COUNT);
        assert_eq!(reflection.responses[0].name, "Dr. Chen");
        assert_eq!(reflection.responses[3].icon, "🧘");
        assert_eq!(
            reflection.response(PersonaKind::RationalAnalyst).response,
            "text for rational-analyst"
        );
        assert!(reflection.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_order_and_blank() {
        let mut reflection = Reflection::from_fn(|_| "ok".to_string());
        reflection.responses.swap(0, 1);
        assert!(reflection.validate().unwrap_err().is_generation_failed());

        let blank = Reflection::from_fn(|kind| match kind {
            PersonaKind::RationalAnalyst => "   ".to_string(),
            _ => "ok".to_string(),
        });
        let err = blank.validate().unwrap_err();
        assert!(err.is_retryable());
    }
}
