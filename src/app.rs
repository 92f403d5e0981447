use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::ThreadRng;

use crate::deck::DrawSource;
use crate::engine::{Engine, Intent};
use crate::session::{Difficulty, GameState, Snapshot};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Engine(Intent),
    OpenHelp,
    CloseHelp,
    Quit,
}

/// Presentation shell: the engine plus what only the screen cares about
#[derive(Debug)]
pub struct App<S: DrawSource = ThreadRng> {
    pub engine: Engine<S>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl<S: DrawSource> App<S> {
    pub fn new(engine: Engine<S>) -> Self {
        Self {
            engine,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Map a key to an action for the current screen, if it means anything there
    pub fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.help_open {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') | KeyCode::Char('?') => {
                    Some(Action::CloseHelp)
                }
                _ => None,
            };
        }

        let session = self.engine.session();
        match session.state {
            GameState::Waiting => match key.code {
                KeyCode::Enter | KeyCode::Char('s') => Some(Action::Engine(Intent::Start)),
                KeyCode::Char('l') => Some(Action::Engine(Intent::SetLanguage(
                    session.language.toggled(),
                ))),
                KeyCode::Char('t') => Some(Action::Engine(Intent::SetTimerEnabled(
                    !session.timer_enabled,
                ))),
                KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::OpenHelp),
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            GameState::Playing => match key.code {
                KeyCode::Char('1') | KeyCode::Char('e') => {
                    Some(Action::Engine(Intent::Pick(Difficulty::Easy)))
                }
                KeyCode::Char('2') | KeyCode::Char('d') => {
                    Some(Action::Engine(Intent::Pick(Difficulty::Hard)))
                }
                KeyCode::Char(' ') | KeyCode::Char('k') => Some(Action::Engine(Intent::Skip)),
                KeyCode::Char('x') if !session.timer_enabled => {
                    Some(Action::Engine(Intent::EndGame))
                }
                KeyCode::Char('m') => Some(Action::Engine(Intent::Reset)),
                KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::OpenHelp),
                KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            GameState::Finished => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => Some(Action::Engine(Intent::Start)),
                KeyCode::Char('m') => Some(Action::Engine(Intent::Reset)),
                KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::OpenHelp),
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
        }
    }

    /// Carry out an action. Returns whether the screen needs a redraw.
    pub fn perform(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Engine(intent) => self.engine.apply(intent, now),
            Action::OpenHelp => !std::mem::replace(&mut self.help_open, true),
            Action::CloseHelp => std::mem::replace(&mut self.help_open, false),
            Action::Quit => {
                self.should_quit = true;
                true
            }
        }
    }

    /// The clock catches up before the key is read, so a key handled after
    /// time ran out lands on the finished round
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ticked = self.on_tick(now);
        match self.action_for_key(key) {
            Some(action) => self.perform(action, now) || ticked,
            None => ticked,
        }
    }

    /// Let the countdown catch up with the wall clock
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.engine.advance(now) > 0
    }
}
