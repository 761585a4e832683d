//! Audience mode and price pairs.
//!
//! The audience mode is owned by the identity collaborator. This crate only
//! reads it, always as an explicit parameter.

use serde::{Deserialize, Serialize};

/// Reserved researcher price literal
pub const RESEARCH_ACCESS_PRICE: &str = "Free (Research Access)";

/// Who is browsing the calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceMode {
    /// Regular visitor
    #[default]
    Tourist,

    /// Academic visitor with research access
    Researcher,
}

impl std::fmt::Display for AudienceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudienceMode::Tourist => write!(f, "tourist"),
            AudienceMode::Researcher => write!(f, "researcher"),
        }
    }
}

impl std::str::FromStr for AudienceMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "tourist" => Ok(AudienceMode::Tourist),
            "researcher" => Ok(AudienceMode::Researcher),
            _ => anyhow::bail!("Unknown audience mode: {}", s),
        }
    }
}

/// Tourist and researcher price strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePair {
    pub tourist: String,
    pub researcher: String,
}

impl PricePair {
    pub fn new(tourist: impl Into<String>, researcher: impl Into<String>) -> Self {
        Self {
            tourist: tourist.into(),
            researcher: researcher.into(),
        }
    }

    /// Price shown for a mode
    pub fn for_mode(&self, mode: AudienceMode) -> &str {
        match mode {
            AudienceMode::Tourist => &self.tourist,
            AudienceMode::Researcher => &self.researcher,
        }
    }

    /// Price stored on a submitted event.
    ///
    /// A researcher price equal to [`RESEARCH_ACCESS_PRICE`] wins in every
    /// mode; otherwise the mode's own field is used.
    pub fn resolve_for_submission(&self, mode: AudienceMode) -> String {
        if self.researcher == RESEARCH_ACCESS_PRICE {
            return RESEARCH_ACCESS_PRICE.to_string();
        }
        self.for_mode(mode).to_string()
    }
}
