pub mod instructions;
pub mod strings;

use serde::{Deserialize, Serialize};

// Re-export the main types for convenience
pub use instructions::instructions;
pub use strings::{text, MessageKey};

/// Languages the game ships decks and strings for
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// The other language; the waiting screen switch only ever flips between two.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Short label shown on the language switch
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_languages() {
        assert_eq!(Language::En.toggled(), Language::Es);
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_display_uses_language_code() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Es.to_string(), "es");
    }

    #[test]
    fn test_serde_uses_language_code() {
        let json = serde_json::to_string(&Language::Es).unwrap();
        assert_eq!(json, "\"es\"");

        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_every_language_has_strings_and_instructions() {
        for lang in Language::ALL {
            assert!(!text(lang, MessageKey::StartGame).is_empty());
            assert!(!instructions(lang, &crate::engine::GameRules::default()).is_empty());
        }
    }
}
