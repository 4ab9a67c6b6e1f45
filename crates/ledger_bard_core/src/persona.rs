//! Wallet personas.

use serde::{Deserialize, Serialize};

/// The closed set of wallet personalities.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PersonaKind {
    /// No transfer history at all
    #[display("The Ghost")]
    Ghost,
    /// Enormous total volume
    #[display("The Whale")]
    Whale,
    /// Many transfers in the sampled window
    #[display("The Bot")]
    Bot,
    /// At least one small transfer
    #[display("The Scavenger")]
    Scavenger,
    /// Everything else
    #[display("The Trader")]
    Trader,
}

impl PersonaKind {
    /// Display name, e.g. "The Whale".
    pub fn name(&self) -> &'static str {
        match self {
            PersonaKind::Ghost => "The Ghost",
            PersonaKind::Whale => "The Whale",
            PersonaKind::Bot => "The Bot",
            PersonaKind::Scavenger => "The Scavenger",
            PersonaKind::Trader => "The Trader",
        }
    }

    /// Flavor text used to steer generation.
    pub fn description(&self) -> &'static str {
        match self {
            PersonaKind::Ghost => {
                "A mysterious, empty void where echoes of the past linger. Silent. Dormant."
            }
            PersonaKind::Whale => {
                "Majestic, high-stakes, slow-moving but impactful. Themes of empire, luxury, and power."
            }
            PersonaKind::Bot => {
                "Frantic, mechanical, lightning-fast. Themes of circuitry, data overload, and neon."
            }
            PersonaKind::Scavenger => {
                "Gritty, survivalist, scraping by in the Rain District. Themes of rust and desperation."
            }
            PersonaKind::Trader => {
                "Calculated, risk-taking, sharp. Themes of markets, charts, and shadows."
            }
        }
    }
}

/// A classification result: a persona name bound to its description.
///
/// # Examples
///
/// ```
/// use ledger_bard_core::{Persona, PersonaKind};
///
/// let persona = Persona::from(PersonaKind::Ghost);
/// assert_eq!(persona.name(), "The Ghost");
/// assert!(persona.description().starts_with("A mysterious, empty void"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "PersonaRepr")]
pub struct Persona {
    kind: PersonaKind,
}

impl Persona {
    /// Which persona this is.
    pub fn kind(&self) -> PersonaKind {
        self.kind
    }

    /// Display name, e.g. "The Bot".
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Fixed description bound to the name.
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

impl From<PersonaKind> for Persona {
    fn from(kind: PersonaKind) -> Self {
        Self { kind }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Serialize)]
struct PersonaRepr {
    kind: PersonaKind,
    name: &'static str,
    description: &'static str,
}

impl From<Persona> for PersonaRepr {
    fn from(persona: Persona) -> Self {
        Self {
            kind: persona.kind,
            name: persona.name(),
            description: persona.description(),
        }
    }
}
