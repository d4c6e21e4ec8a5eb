use crate::config::LLMConfig;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const CEO_PROMPT: &str = "You are the CEO of a company. You are responsible for high-level decisions, setting priorities, \
and delegating tasks. Communicate clearly and professionally.";

const MARKETING_PROMPT: &str = "You are the head of marketing at the company. You are creative and strategic, always coming up with innovative \
campaign ideas. Provide actionable insights in your responses.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonaId {
    Ceo,
    Marketing,
}

impl PersonaId {
    /// Every persona, in the order they are offered to the user.
    pub const ALL: [PersonaId; 2] = [PersonaId::Ceo, PersonaId::Marketing];

    pub fn name(self) -> &'static str {
        match self {
            PersonaId::Ceo => "CEO",
            PersonaId::Marketing => "Marketing",
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            PersonaId::Ceo => CEO_PROMPT,
            PersonaId::Marketing => MARKETING_PROMPT,
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown persona '{0}'")]
pub struct UnknownPersona(pub String);

/// Names match exactly; `ceo` is not `CEO`.
impl FromStr for PersonaId {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| UnknownPersona(s.to_string()))
    }
}

/// A persona's fixed prompt plus the model parameters used for its calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub id: PersonaId,
    pub system_prompt: String,
    pub model: String,
    pub temperature: f32,
}

impl Persona {
    pub fn new(id: PersonaId, config: &LLMConfig) -> Self {
        Self {
            id,
            system_prompt: id.system_prompt().to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}
