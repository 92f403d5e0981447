// Library surface for headless/integration tests and reuse.
// The binary only adds CLI parsing, logging setup and the terminal loop.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod countdown;
pub mod deck;
pub mod engine;
pub mod language;
pub mod runtime;
pub mod session;
pub mod ui;

pub use app::App;
pub use engine::{Engine, GameRules, Intent};
pub use session::{Difficulty, GameSession, GameState, Snapshot};
