//! Air quality index value object
//!
//! The provider reports air quality as an index from 1 (best) to 5 (worst).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality level mapped from the provider's 1-5 index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    /// Index 1
    Good,
    /// Index 2
    Fair,
    /// Index 3
    Moderate,
    /// Index 4
    Poor,
    /// Index 5
    VeryPoor,
    /// Any index outside 1-5
    Unknown,
}

impl AqiLevel {
    /// Map the provider's index to a level
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::VeryPoor,
            _ => Self::Unknown,
        }
    }

    /// The provider index, if the level is known
    #[must_use]
    pub const fn index(&self) -> Option<u8> {
        match self {
            Self::Good => Some(1),
            Self::Fair => Some(2),
            Self::Moderate => Some(3),
            Self::Poor => Some(4),
            Self::VeryPoor => Some(5),
            Self::Unknown => None,
        }
    }

    /// Get a human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Unknown => "Unknown",
        }
    }

    /// Get an emoji representation
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Fair => "🟡",
            Self::Moderate => "🟠",
            Self::Poor => "🔴",
            Self::VeryPoor => "🟣",
            Self::Unknown => "⚪",
        }
    }

    /// Health guidance for the level, used by the deterministic advice text
    #[must_use]
    pub const fn advisory(&self) -> &'static str {
        match self {
            Self::Good => "Air quality is good for outdoor activity.",
            Self::Fair => "Air quality is acceptable for most people.",
            Self::Moderate => "Sensitive groups should limit prolonged outdoor exertion.",
            Self::Poor => "Consider a mask outdoors and reduce outdoor activity.",
            Self::VeryPoor => "Avoid outdoor activity; keep windows closed.",
            Self::Unknown => "Air quality data is unavailable.",
        }
    }

    /// Whether outdoor activity warrants caution (index 3 and above)
    #[must_use]
    pub const fn needs_caution(&self) -> bool {
        matches!(self, Self::Moderate | Self::Poor | Self::VeryPoor)
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
