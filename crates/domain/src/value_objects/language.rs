//! Language value object
//!
//! The languages the voice assistant speaks. Only Bengali and Odia go
//! through the translation engine; English and Hindi narrations are passed
//! to the speech collaborator as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A supported narration language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    English,
    /// Hindi
    Hindi,
    /// Bengali
    Bengali,
    /// Odia
    Odia,
}

impl Language {
    /// ISO 639-1 code ("en", "hi", "bn", "or")
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
            Self::Odia => "or",
        }
    }

    /// BCP-47 tag handed to the speech collaborator
    #[must_use]
    pub const fn voice_tag(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Hindi => "hi-IN",
            Self::Bengali => "bn-IN",
            Self::Odia => "or-IN",
        }
    }

    /// English name of the language
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Odia => "Odia",
        }
    }

    /// Whether narrations in this language go through the translation engine
    #[must_use]
    pub const fn is_translatable(&self) -> bool {
        matches!(self, Self::Bengali | Self::Odia)
    }

    /// Parse an ISO 639-1 code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownLanguage` for codes outside the
    /// supported set.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "en" => Ok(Self::English),
            "hi" => Ok(Self::Hindi),
            "bn" => Ok(Self::Bengali),
            "or" => Ok(Self::Odia),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Bengali.code(), "bn");
        assert_eq!(Language::Odia.code(), "or");
    }

    #[test]
    fn test_voice_tags() {
        assert_eq!(Language::English.voice_tag(), "en-US");
        assert_eq!(Language::Hindi.voice_tag(), "hi-IN");
        assert_eq!(Language::Bengali.voice_tag(), "bn-IN");
        assert_eq!(Language::Odia.voice_tag(), "or-IN");
    }

    #[test]
    fn test_translatable_set() {
        assert!(!Language::English.is_translatable());
        assert!(!Language::Hindi.is_translatable());
        assert!(Language::Bengali.is_translatable());
        assert!(Language::Odia.is_translatable());
    }

    #[test]
    fn test_from_code_roundtrip() {
        for lang in [
            Language::English,
            Language::Hindi,
            Language::Bengali,
            Language::Odia,
        ] {
            assert_eq!(Language::from_code(lang.code()).expect("known code"), lang);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert!(Language::from_code("fr").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(format!("{}", Language::Odia), "Odia");
        let lang: Language = "bn".parse().expect("known code");
        assert_eq!(lang, Language::Bengali);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Language::Bengali).expect("serialize");
        assert_eq!(json, "\"bengali\"");
        let parsed: Language = serde_json::from_str("\"hindi\"").expect("deserialize");
        assert_eq!(parsed, Language::Hindi);
    }
}
