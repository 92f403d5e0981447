use std::collections::HashSet;
use std::time::Instant;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use soundditto::deck::{Deck, Decks, WordEntry};
use soundditto::engine::{Engine, GameRules, Intent};
use soundditto::language::Language;
use soundditto::{Difficulty, GameState};

fn decks_of(size: usize) -> Decks {
    let words = |prefix: &str| -> Vec<WordEntry> {
        (0..size)
            .map(|i| WordEntry::new(format!("{prefix}-easy-{i}"), format!("{prefix}-hard-{i}")))
            .collect()
    };
    Decks::new(
        Deck::from_entries(Language::En, words("en")).unwrap(),
        Deck::from_entries(Language::Es, words("es")).unwrap(),
    )
    .unwrap()
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        3 => Just(Intent::Pick(Difficulty::Easy)),
        3 => Just(Intent::Pick(Difficulty::Hard)),
        2 => Just(Intent::Skip),
        4 => Just(Intent::Tick),
        1 => Just(Intent::EndGame),
        1 => any::<bool>().prop_map(Intent::SetTimerEnabled),
    ]
}

proptest! {
    #[test]
    fn score_only_grows_by_word_points(
        seed in any::<u64>(),
        deck_size in 2usize..30,
        timer_enabled in any::<bool>(),
        intents in prop::collection::vec(intent(), 0..120),
    ) {
        let mut engine = Engine::with_source(
            decks_of(deck_size),
            GameRules::default(),
            Language::En,
            timer_enabled,
            StdRng::seed_from_u64(seed),
        );
        let now = Instant::now();
        engine.start_game(now);

        for intent in intents {
            let before = engine.session().clone();
            engine.apply(intent, now);
            let after = engine.session();

            let gained = after.score - before.score;
            match intent {
                Intent::Pick(Difficulty::Easy) if before.state == GameState::Playing => {
                    prop_assert_eq!(gained, 1)
                }
                Intent::Pick(Difficulty::Hard) if before.state == GameState::Playing => {
                    prop_assert_eq!(gained, 2)
                }
                _ => prop_assert_eq!(gained, 0),
            }
            prop_assert!(after.time_remaining <= GameRules::default().round_duration_secs);
        }
    }

    #[test]
    fn words_never_repeat_and_deck_runs_out(
        seed in any::<u64>(),
        deck_size in 2usize..40,
        picks in prop::collection::vec(0u8..3, 0..60),
    ) {
        let mut engine = Engine::with_source(
            decks_of(deck_size),
            GameRules::default(),
            Language::En,
            false,
            StdRng::seed_from_u64(seed),
        );
        engine.start_game(Instant::now());

        let mut seen = HashSet::new();
        let mut draws = 0usize;
        let mut picks = picks.into_iter().chain(std::iter::repeat(2));

        while engine.state() == GameState::Playing {
            let current = engine.session().current_pair.clone().unwrap();
            prop_assert!(seen.insert(current.clone()), "{:?} shown twice", current);
            prop_assert!(!engine.session().remaining_words.contains(&current));
            draws += 1;
            prop_assert!(draws <= deck_size);

            match picks.next().unwrap_or(2) {
                0 => engine.pick_word(Difficulty::Easy),
                1 => engine.pick_word(Difficulty::Hard),
                _ => engine.skip(),
            }
        }

        prop_assert_eq!(engine.state(), GameState::Finished);
        prop_assert_eq!(engine.session().words_shown, deck_size - 1);
    }

    #[test]
    fn untimed_ticks_never_end_the_round(ticks in 0usize..1000) {
        let mut engine = Engine::with_source(
            decks_of(5),
            GameRules::default(),
            Language::Es,
            false,
            StdRng::seed_from_u64(1),
        );
        engine.start_game(Instant::now());
        for _ in 0..ticks {
            engine.tick();
        }
        prop_assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn restart_always_starts_clean(
        seed in any::<u64>(),
        intents in prop::collection::vec(intent(), 0..80),
    ) {
        let mut engine = Engine::with_source(
            decks_of(12),
            GameRules::default(),
            Language::En,
            true,
            StdRng::seed_from_u64(seed),
        );
        let now = Instant::now();
        engine.start_game(now);
        for intent in intents {
            engine.apply(intent, now);
        }

        engine.start_game(now);

        let session = engine.session();
        prop_assert_eq!(session.state, GameState::Playing);
        prop_assert_eq!(session.score, 0);
        prop_assert_eq!(session.time_remaining, 90);
        prop_assert_eq!(session.words_shown, 1);
        prop_assert_eq!(session.remaining_words.len(), 11);
    }
}
