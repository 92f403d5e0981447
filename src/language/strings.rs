use super::Language;

/// Keys into the localization table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    StartGame,
    ChooseWord,
    Easy,
    Hard,
    Point,
    Points,
    Skip,
    Score,
    Time,
    NoTimer,
    EndGame,
    GameOver,
    FinalScore,
    WordsShown,
    PlayAgain,
    Timer,
    On,
    Off,
    Language,
    Help,
    Close,
    Menu,
    Quit,
}

impl MessageKey {
    pub const ALL: [MessageKey; 24] = [
        MessageKey::Title,
        MessageKey::StartGame,
        MessageKey::ChooseWord,
        MessageKey::Easy,
        MessageKey::Hard,
        MessageKey::Point,
        MessageKey::Points,
        MessageKey::Skip,
        MessageKey::Score,
        MessageKey::Time,
        MessageKey::NoTimer,
        MessageKey::EndGame,
        MessageKey::GameOver,
        MessageKey::FinalScore,
        MessageKey::WordsShown,
        MessageKey::PlayAgain,
        MessageKey::Timer,
        MessageKey::On,
        MessageKey::Off,
        MessageKey::Language,
        MessageKey::Help,
        MessageKey::Close,
        MessageKey::Menu,
        MessageKey::Quit,
    ];
}

/// Look up the display string for `key` in `lang`
pub fn text(lang: Language, key: MessageKey) -> &'static str {
    match lang {
        Language::En => english(key),
        Language::Es => spanish(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Soundditto",
        MessageKey::StartGame => "Start Game",
        MessageKey::ChooseWord => "Choose a word:",
        MessageKey::Easy => "Easy",
        MessageKey::Hard => "Hard",
        MessageKey::Point => "point",
        MessageKey::Points => "points",
        MessageKey::Skip => "Skip",
        MessageKey::Score => "Score:",
        MessageKey::Time => "Time:",
        MessageKey::NoTimer => "No timer",
        MessageKey::EndGame => "End Game",
        MessageKey::GameOver => "Game Over!",
        MessageKey::FinalScore => "Final Score:",
        MessageKey::WordsShown => "Words played:",
        MessageKey::PlayAgain => "Play Again",
        MessageKey::Timer => "Timer",
        MessageKey::On => "on",
        MessageKey::Off => "off",
        MessageKey::Language => "Language",
        MessageKey::Help => "How to Play",
        MessageKey::Close => "Close",
        MessageKey::Menu => "Menu",
        MessageKey::Quit => "Quit",
    }
}

fn spanish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Title => "Soundditto",
        MessageKey::StartGame => "Iniciar Juego",
        MessageKey::ChooseWord => "Elige una palabra:",
        MessageKey::Easy => "Fácil",
        MessageKey::Hard => "Difícil",
        MessageKey::Point => "punto",
        MessageKey::Points => "puntos",
        MessageKey::Skip => "Saltar",
        MessageKey::Score => "Puntos:",
        MessageKey::Time => "Tiempo:",
        MessageKey::NoTimer => "Sin tiempo",
        MessageKey::EndGame => "Finalizar Juego",
        MessageKey::GameOver => "¡Juego Terminado!",
        MessageKey::FinalScore => "Puntuación Final:",
        MessageKey::WordsShown => "Palabras jugadas:",
        MessageKey::PlayAgain => "Jugar de Nuevo",
        MessageKey::Timer => "Temporizador",
        MessageKey::On => "sí",
        MessageKey::Off => "no",
        MessageKey::Language => "Idioma",
        MessageKey::Help => "Cómo Jugar",
        MessageKey::Close => "Cerrar",
        MessageKey::Menu => "Menú",
        MessageKey::Quit => "Salir",
    }
}

/// "1 point" / "2 points", localized
pub fn points_label(lang: Language, points: u32) -> String {
    let unit = if points == 1 {
        text(lang, MessageKey::Point)
    } else {
        text(lang, MessageKey::Points)
    };
    format!("{points} {unit}")
}
