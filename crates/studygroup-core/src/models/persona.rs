use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the four fixed tutoring roles.
///
/// The declaration order is the selection order: when scores tie, the
/// earliest persona wins, which makes `Quizmaster` the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKind {
    Quizmaster,
    Explainer,
    Advocate,
    Motivator,
}

impl PersonaKind {
    pub const ALL: [PersonaKind; 4] = [
        PersonaKind::Quizmaster,
        PersonaKind::Explainer,
        PersonaKind::Advocate,
        PersonaKind::Motivator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaKind::Quizmaster => "quizmaster",
            PersonaKind::Explainer => "explainer",
            PersonaKind::Advocate => "advocate",
            PersonaKind::Motivator => "motivator",
        }
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPersona(s.to_string()))
    }
}
