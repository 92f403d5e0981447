use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    engine::GameRules,
    language::{strings::points_label, text, Language, MessageKey},
    session::{GameState, Snapshot},
    ui::{choice_style, line_centered},
};

/// Seconds left at which the clock turns red
const LOW_TIME_SECS: u32 = 10;

/// A UI Screen boundary: renders the body for one game state
pub trait Screen {
    fn render(&self, snapshot: &Snapshot, rules: &GameRules, area: Rect, buf: &mut Buffer);
}

/// Start screen with the language and timer switches
pub struct WaitingScreen;

impl Screen for WaitingScreen {
    fn render(&self, snapshot: &Snapshot, rules: &GameRules, area: Rect, buf: &mut Buffer) {
        let lang = snapshot.language;
        let timer = if snapshot.timer_enabled {
            format!(
                "{}: {} ({}s)",
                text(lang, MessageKey::Timer),
                text(lang, MessageKey::On),
                rules.round_duration_secs
            )
        } else {
            format!(
                "{}: {}",
                text(lang, MessageKey::Timer),
                text(lang, MessageKey::Off)
            )
        };

        let lines = vec![
            line_centered(vec![
                Span::styled(
                    Language::En.label(),
                    choice_style(lang == Language::En, Color::Magenta),
                ),
                Span::raw("  ⇄  "),
                Span::styled(
                    Language::Es.label(),
                    choice_style(lang == Language::Es, Color::Yellow),
                ),
            ]),
            Line::default(),
            line_centered(vec![Span::styled(
                timer,
                choice_style(snapshot.timer_enabled, Color::Cyan),
            )]),
            Line::default(),
            line_centered(vec![Span::styled(
                format!("[ {} ]", text(lang, MessageKey::StartGame)),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
        ];

        render_centered(lines, area, buf);
    }
}

/// The round in progress: both words, score and clock
pub struct PlayingScreen;

impl Screen for PlayingScreen {
    fn render(&self, snapshot: &Snapshot, rules: &GameRules, area: Rect, buf: &mut Buffer) {
        let lang = snapshot.language;
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let easy_label = format!(
            "(1) {} · {}",
            text(lang, MessageKey::Easy),
            points_label(lang, rules.easy_points)
        );
        let hard_label = format!(
            "(2) {} · {}",
            text(lang, MessageKey::Hard),
            points_label(lang, rules.hard_points)
        );
        let label_width = easy_label.width().max(hard_label.width());

        let (easy_word, hard_word) = snapshot
            .current_pair
            .as_ref()
            .map(|pair| (pair.easy.as_str(), pair.hard.as_str()))
            .unwrap_or(("", ""));

        let word_row = |label: &str, word: &str, color: Color| {
            let padding = " ".repeat(label_width.saturating_sub(label.width()) + 3);
            line_centered(vec![
                Span::styled(format!("{label}{padding}"), Style::default().fg(Color::Gray)),
                Span::styled(word.to_string(), bold.fg(color)),
            ])
        };

        let clock = if snapshot.timer_enabled {
            let color = if snapshot.time_remaining <= LOW_TIME_SECS {
                Color::Red
            } else {
                Color::LightMagenta
            };
            Span::styled(
                format!(
                    "{} {}s",
                    text(lang, MessageKey::Time),
                    snapshot.time_remaining
                ),
                bold.fg(color),
            )
        } else {
            Span::styled(
                text(lang, MessageKey::NoTimer).to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        let lines = vec![
            line_centered(vec![Span::styled(
                text(lang, MessageKey::ChooseWord),
                Style::default().fg(Color::Gray),
            )]),
            Line::default(),
            word_row(&easy_label, easy_word, Color::Green),
            Line::default(),
            word_row(&hard_label, hard_word, Color::LightRed),
            Line::default(),
            line_centered(vec![
                Span::styled(
                    format!("{} {}", text(lang, MessageKey::Score), snapshot.score),
                    bold.fg(Color::Blue),
                ),
                Span::raw("     "),
                clock,
            ]),
        ];

        render_centered(lines, area, buf);
    }
}

/// End of round summary
pub struct FinishedScreen;

impl Screen for FinishedScreen {
    fn render(&self, snapshot: &Snapshot, _rules: &GameRules, area: Rect, buf: &mut Buffer) {
        let lang = snapshot.language;
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let lines = vec![
            line_centered(vec![Span::styled(
                text(lang, MessageKey::GameOver),
                bold.fg(Color::Blue),
            )]),
            Line::default(),
            line_centered(vec![Span::styled(
                format!("{} {}", text(lang, MessageKey::FinalScore), snapshot.score),
                bold.fg(Color::Magenta),
            )]),
            line_centered(vec![Span::styled(
                format!(
                    "{} {}",
                    text(lang, MessageKey::WordsShown),
                    snapshot.words_shown
                ),
                Style::default().add_modifier(Modifier::DIM),
            )]),
        ];

        render_centered(lines, area, buf);
    }
}

/// Draw `lines` vertically centred in `area`
fn render_centered(lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
    let height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - height) / 2;
    let block = Rect::new(area.x, top, area.width, height);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(block, buf);
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: GameState) -> Box<dyn Screen> {
    match state {
        GameState::Waiting => Box::new(WaitingScreen),
        GameState::Playing => Box::new(PlayingScreen),
        GameState::Finished => Box::new(FinishedScreen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::WordEntry;
    use crate::ui::buffer_text;

    fn snapshot(state: GameState) -> Snapshot {
        Snapshot {
            state,
            language: Language::En,
            timer_enabled: true,
            time_remaining: 42,
            score: 5,
            current_pair: Some(WordEntry::new("Bee", "Swarm of bees")),
            words_left: 10,
            words_shown: 4,
        }
    }

    fn render(screen: &dyn Screen, snapshot: &Snapshot) -> String {
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        screen.render(snapshot, &GameRules::default(), area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_playing_words_line_up() {
        let rendered = render(&PlayingScreen, &snapshot(GameState::Playing));
        let rows: Vec<&str> = rendered.lines().collect();

        let easy_row = rows.iter().find(|r| r.contains("Bee")).unwrap();
        let hard_row = rows.iter().find(|r| r.contains("Swarm of bees")).unwrap();
        assert!(easy_row.contains("(1) Easy · 1 point"));
        assert!(hard_row.contains("(2) Hard · 2 points"));
    }

    #[test]
    fn test_playing_clock_and_score() {
        let rendered = render(&PlayingScreen, &snapshot(GameState::Playing));

        assert!(rendered.contains("Score: 5"));
        assert!(rendered.contains("Time: 42s"));
    }

    #[test]
    fn test_low_time_is_red() {
        let mut snap = snapshot(GameState::Playing);
        snap.time_remaining = 7;
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        PlayingScreen.render(&snap, &GameRules::default(), area, &mut buf);

        let has_red_seven = buf
            .content()
            .iter()
            .any(|cell| cell.symbol() == "7" && cell.fg == Color::Red);
        assert!(has_red_seven);
    }

    #[test]
    fn test_finished_summary() {
        let rendered = render(&FinishedScreen, &snapshot(GameState::Finished));

        assert!(rendered.contains("Game Over!"));
        assert!(rendered.contains("Final Score: 5"));
        assert!(rendered.contains("Words played: 4"));
    }

    #[test]
    fn test_zero_height_area_does_not_panic() {
        let area = Rect::new(0, 0, 80, 0);
        let mut buf = Buffer::empty(area);
        for state in [GameState::Waiting, GameState::Playing, GameState::Finished] {
            current_screen(state).render(&snapshot(state), &GameRules::default(), area, &mut buf);
        }
    }
}
