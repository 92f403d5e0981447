//! How-to-play text for the help overlay.
//!
//! Kept apart from the localization table: these are full sentences that
//! only the help overlay shows. Point values and durations are filled in
//! from the active rules so the text never disagrees with play.

use super::{strings::points_label, Language};
use crate::engine::GameRules;

pub fn instructions(lang: Language, rules: &GameRules) -> Vec<String> {
    let easy = points_label(lang, rules.easy_points);
    let hard = points_label(lang, rules.hard_points);
    let penalty = rules.skip_penalty_secs;
    let round = rules.round_duration_secs;

    match lang {
        Language::En => vec![
            format!("Choose between an easy ({easy}) or hard ({hard}) word."),
            "Make the sound of the chosen word without using words or gestures.".to_string(),
            "Sitting on your hands is recommended to avoid gestures.".to_string(),
            "Your teammates guess the word.".to_string(),
            "Pick the word if they guess correctly, or 'Skip' to move to the next word."
                .to_string(),
            format!("Skipping penalizes you {penalty} seconds."),
            format!("Score as many points as possible in {round} seconds!"),
        ],
        Language::Es => vec![
            format!("Elige entre una palabra fácil ({easy}) o difícil ({hard})."),
            "Haz el sonido de la palabra elegida, sin usar palabras o señas.".to_string(),
            "Se recomienda sentarse sobre las manos para evitar señas.".to_string(),
            "Tus compañeros de equipo adivinan la palabra.".to_string(),
            "Elige la palabra si adivinan correctamente, o 'Saltar' para pasar a la siguiente palabra."
                .to_string(),
            format!("Saltar te penaliza con {penalty} segundos."),
            format!("¡Consigue tantos puntos como sea posible en {round} segundos!"),
        ],
    }
}
