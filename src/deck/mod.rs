pub mod core;
pub mod draw;

// Re-export the main types for convenience
pub use core::{Deck, DeckError, Decks, WordEntry, MIN_DECK_SIZE};
pub use draw::{DrawSource, ScriptedSource};
