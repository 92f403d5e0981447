use std::collections::HashSet;

use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use thiserror::Error;

use crate::language::Language;

static DECK_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/decks");

/// Fewer entries than this and a session would end on its first draw
pub const MIN_DECK_SIZE: usize = 2;

/// One concept with an easy and a hard way to act it out
#[derive(Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordEntry {
    pub easy: String,
    pub hard: String,
}

impl WordEntry {
    pub fn new(easy: impl Into<String>, hard: impl Into<String>) -> Self {
        Self {
            easy: easy.into(),
            hard: hard.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck file not found: {0}")]
    NotFound(String),

    #[error("deck file {0} is not valid UTF-8")]
    NotUtf8(String),

    #[error("unable to deserialize deck json: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("deck declares language {found} but was loaded for {expected}")]
    LanguageMismatch { expected: Language, found: Language },

    #[error("deck for {language} has {size} entries, at least {min} are required", min = MIN_DECK_SIZE)]
    TooSmall { language: Language, size: usize },

    #[error("deck for {language} has a blank label at entry {index}")]
    BlankEntry { language: Language, index: usize },

    #[error("deck for {language} repeats an earlier entry at {index}")]
    DuplicateEntry { language: Language, index: usize },
}

#[derive(Deserialize)]
struct DeckFile {
    language: Language,
    words: Vec<WordEntry>,
}

/// The full, immutable word list for one language, in canonical order
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    language: Language,
    words: Vec<WordEntry>,
}

impl Deck {
    /// Load the embedded deck for `language`
    pub fn load(language: Language) -> Result<Self, DeckError> {
        let file_name = format!("{language}.json");
        let file = DECK_DIR
            .get_file(&file_name)
            .ok_or_else(|| DeckError::NotFound(file_name.clone()))?;

        let file_as_str = file
            .contents_utf8()
            .ok_or_else(|| DeckError::NotUtf8(file_name.clone()))?;

        let deck = Self::from_json(file_as_str)?;
        if deck.language != language {
            return Err(DeckError::LanguageMismatch {
                expected: language,
                found: deck.language,
            });
        }

        tracing::debug!(%language, size = deck.len(), "loaded deck");
        Ok(deck)
    }

    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let file: DeckFile = from_str(json)?;
        Self::from_entries(file.language, file.words)
    }

    pub fn from_entries(language: Language, words: Vec<WordEntry>) -> Result<Self, DeckError> {
        if words.len() < MIN_DECK_SIZE {
            return Err(DeckError::TooSmall {
                language,
                size: words.len(),
            });
        }

        if let Some(index) = words
            .iter()
            .position(|w| w.easy.trim().is_empty() || w.hard.trim().is_empty())
        {
            return Err(DeckError::BlankEntry { language, index });
        }

        let mut seen = HashSet::with_capacity(words.len());
        if let Some(index) = words.iter().position(|w| !seen.insert(w)) {
            return Err(DeckError::DuplicateEntry { language, index });
        }

        Ok(Self { language, words })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fresh copy for a session to consume; the deck itself never changes
    pub fn working_copy(&self) -> Vec<WordEntry> {
        self.words.clone()
    }
}

/// One validated deck per supported language
#[derive(Clone, Debug)]
pub struct Decks {
    en: Deck,
    es: Deck,
}

impl Decks {
    /// Load and validate every embedded deck; any failure aborts startup
    pub fn load_all() -> Result<Self, DeckError> {
        Ok(Self {
            en: Deck::load(Language::En)?,
            es: Deck::load(Language::Es)?,
        })
    }

    /// Build from already validated decks, e.g. small decks in tests
    pub fn new(en: Deck, es: Deck) -> Result<Self, DeckError> {
        for (expected, deck) in [(Language::En, &en), (Language::Es, &es)] {
            if deck.language != expected {
                return Err(DeckError::LanguageMismatch {
                    expected,
                    found: deck.language,
                });
            }
        }
        Ok(Self { en, es })
    }

    pub fn get(&self, language: Language) -> &Deck {
        match language {
            Language::En => &self.en,
            Language::Es => &self.es,
        }
    }
}
