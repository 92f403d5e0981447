use crate::deck::WordEntry;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum GameState {
    #[default]
    Waiting,
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

/// Everything one play-through owns.
///
/// Replaced wholesale on every start; only `language` and `timer_enabled`
/// carry over from one session to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub state: GameState,
    pub language: Language,
    pub timer_enabled: bool,
    pub time_remaining: u32,
    pub score: u32,
    pub current_pair: Option<WordEntry>,
    pub remaining_words: Vec<WordEntry>,
    pub words_shown: usize,
}

impl GameSession {
    /// A session waiting on the start screen
    pub fn waiting(language: Language, timer_enabled: bool, round_duration_secs: u32) -> Self {
        Self {
            state: GameState::Waiting,
            language,
            timer_enabled,
            time_remaining: round_duration_secs,
            score: 0,
            current_pair: None,
            remaining_words: Vec::new(),
            words_shown: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

/// What the shell needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub language: Language,
    pub timer_enabled: bool,
    pub time_remaining: u32,
    pub score: u32,
    pub current_pair: Option<WordEntry>,
    pub words_left: usize,
    pub words_shown: usize,
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            state: session.state,
            language: session.language,
            timer_enabled: session.timer_enabled,
            time_remaining: session.time_remaining,
            score: session.score,
            current_pair: session.current_pair.clone(),
            words_left: session.remaining_words.len(),
            words_shown: session.words_shown,
        }
    }
}
