use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::countdown::{Countdown, TICK_PERIOD};
use crate::deck::{Decks, DrawSource};
use crate::language::Language;
use crate::session::{Difficulty, GameSession, GameState, Snapshot};

/// Round length of the current game
pub const DEFAULT_ROUND_DURATION_SECS: u32 = 90;
/// Round length the first release shipped with
pub const LEGACY_ROUND_DURATION_SECS: u32 = 60;
pub const DEFAULT_SKIP_PENALTY_SECS: u32 = 5;
pub const EASY_POINTS: u32 = 1;
pub const HARD_POINTS: u32 = 2;

/// Tunable numbers of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub round_duration_secs: u32,
    pub skip_penalty_secs: u32,
    pub easy_points: u32,
    pub hard_points: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            skip_penalty_secs: DEFAULT_SKIP_PENALTY_SECS,
            easy_points: EASY_POINTS,
            hard_points: HARD_POINTS,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("round duration must be at least one second")]
    ZeroRoundDuration,

    #[error("easy and hard words must be worth at least one point")]
    ZeroPoints,
}

impl GameRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.round_duration_secs == 0 {
            return Err(RulesError::ZeroRoundDuration);
        }
        if self.easy_points == 0 || self.hard_points == 0 {
            return Err(RulesError::ZeroPoints);
        }
        Ok(())
    }

    pub fn points_for(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_points,
            Difficulty::Hard => self.hard_points,
        }
    }
}

/// Everything the shell can ask the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Pick(Difficulty),
    Skip,
    Tick,
    EndGame,
    SetLanguage(Language),
    SetTimerEnabled(bool),
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    TimeUp,
    DeckExhausted,
    EndedByPlayer,
}

/// Owns the game session, the countdown handle and the random source.
///
/// All mutation goes through the operations below. Intents that make no
/// sense in the current state are ignored.
#[derive(Debug)]
pub struct Engine<S: DrawSource = ThreadRng> {
    decks: Decks,
    rules: GameRules,
    session: GameSession,
    countdown: Option<Countdown>,
    source: S,
}

impl Engine<ThreadRng> {
    pub fn new(decks: Decks, rules: GameRules, language: Language, timer_enabled: bool) -> Self {
        Self::with_source(decks, rules, language, timer_enabled, rand::thread_rng())
    }
}

impl<S: DrawSource> Engine<S> {
    pub fn with_source(
        decks: Decks,
        rules: GameRules,
        language: Language,
        timer_enabled: bool,
        source: S,
    ) -> Self {
        Self {
            session: GameSession::waiting(language, timer_enabled, rules.round_duration_secs),
            decks,
            rules,
            countdown: None,
            source,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn state(&self) -> GameState {
        self.session.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.session)
    }

    pub fn timer_armed(&self) -> bool {
        self.countdown.is_some()
    }

    /// How long until the countdown wants the next tick, if it is armed
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.countdown.as_ref().map(|c| c.until_next(now))
    }

    /// Apply one intent. Returns whether the session changed.
    pub fn apply(&mut self, intent: Intent, now: Instant) -> bool {
        let before = self.session.clone();
        match intent {
            Intent::Start => self.start_game(now),
            Intent::Pick(difficulty) => self.pick_word(difficulty),
            Intent::Skip => self.skip(),
            Intent::Tick => self.tick(),
            Intent::EndGame => self.end_game(),
            Intent::SetLanguage(language) => self.set_language(language),
            Intent::SetTimerEnabled(enabled) => self.set_timer_enabled(enabled),
            Intent::Reset => self.reset(),
        }
        self.session != before
    }

    /// Begin a brand new session from any state
    pub fn start_game(&mut self, now: Instant) {
        let language = self.session.language;
        let timer_enabled = self.session.timer_enabled;

        self.countdown = None;
        self.session =
            GameSession::waiting(language, timer_enabled, self.rules.round_duration_secs);
        self.session.remaining_words = self.decks.get(language).working_copy();
        self.session.state = GameState::Playing;
        if timer_enabled {
            self.countdown = Some(Countdown::arm(now, TICK_PERIOD));
        }

        info!(%language, timer_enabled, "round started");
        self.draw();
    }

    pub fn pick_word(&mut self, difficulty: Difficulty) {
        if !self.session.is_playing() {
            return;
        }
        self.session.score += self.rules.points_for(difficulty);
        debug!(?difficulty, score = self.session.score, "word guessed");
        self.draw();
    }

    pub fn skip(&mut self) {
        if !self.session.is_playing() {
            return;
        }
        if self.session.timer_enabled {
            self.session.time_remaining = self
                .session
                .time_remaining
                .saturating_sub(self.rules.skip_penalty_secs);
        }
        debug!(time_remaining = self.session.time_remaining, "word skipped");
        self.draw();
    }

    /// One second of the round has passed
    pub fn tick(&mut self) {
        if !self.session.is_playing() || !self.session.timer_enabled {
            return;
        }
        if self.session.time_remaining <= 1 {
            self.session.time_remaining = 0;
            self.finish(FinishReason::TimeUp);
        } else {
            self.session.time_remaining -= 1;
        }
    }

    /// Manual end of an untimed round
    pub fn end_game(&mut self) {
        if self.session.is_playing() && !self.session.timer_enabled {
            self.finish(FinishReason::EndedByPlayer);
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.session.state == GameState::Waiting {
            self.session.language = language;
        }
    }

    pub fn set_timer_enabled(&mut self, enabled: bool) {
        if self.session.state == GameState::Waiting {
            self.session.timer_enabled = enabled;
        }
    }

    /// Abandon the current session and go back to the start screen
    pub fn reset(&mut self) {
        if self.session.state == GameState::Waiting {
            return;
        }
        self.countdown = None;
        self.session = GameSession::waiting(
            self.session.language,
            self.session.timer_enabled,
            self.rules.round_duration_secs,
        );
        info!("session reset");
    }

    /// Deliver every countdown tick due by `now`. Returns how many ticks ran.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let due = match self.countdown.as_mut() {
            Some(countdown) => countdown.due(now),
            None => return 0,
        };

        let mut delivered = 0;
        for _ in 0..due {
            // finishing drops the handle, so stop as soon as that happens
            if self.countdown.is_none() {
                break;
            }
            self.tick();
            delivered += 1;
        }
        delivered
    }

    fn draw(&mut self) {
        // the last word left is never shown; fewer than two means the deck is spent
        if self.session.remaining_words.len() < 2 {
            self.finish(FinishReason::DeckExhausted);
            return;
        }

        let idx = self.source.pick(self.session.remaining_words.len());
        let pair = self.session.remaining_words.remove(idx);
        self.session.current_pair = Some(pair);
        self.session.words_shown += 1;
    }

    fn finish(&mut self, reason: FinishReason) {
        self.countdown = None;
        self.session.state = GameState::Finished;
        info!(
            ?reason,
            score = self.session.score,
            words_shown = self.session.words_shown,
            "round finished"
        );
    }
}
