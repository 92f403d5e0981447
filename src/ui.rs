pub mod footer;
pub mod help;
pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    app::App,
    deck::DrawSource,
    language::{text, Language, MessageKey},
    session::GameState,
    ui::{footer::Footer, help::HelpOverlay, screen::current_screen},
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl<S: DrawSource> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot();
        let rules = self.engine.rules();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(2), // title
                    Constraint::Min(1),    // screen body
                    Constraint::Length(1), // key legend
                    Constraint::Length(1), // footer
                ]
                .as_ref(),
            )
            .split(area);

        let title = Paragraph::new(Span::styled(
            text(snapshot.language, MessageKey::Title),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        title.render(chunks[0], buf);

        current_screen(snapshot.state).render(&snapshot, rules, chunks[1], buf);

        let legend = Paragraph::new(Span::styled(
            legend(snapshot.state, snapshot.language, snapshot.timer_enabled),
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        legend.render(chunks[2], buf);

        Footer.render(chunks[3], buf);

        if self.help_open {
            HelpOverlay::new(snapshot.language, rules).render(area, buf);
        }
    }
}

/// Key hints for the bottom of the screen
pub fn legend(state: GameState, lang: Language, timer_enabled: bool) -> String {
    let t = |key| text(lang, key);
    let hints: Vec<String> = match state {
        GameState::Waiting => vec![
            format!("(enter) {}", t(MessageKey::StartGame)),
            format!("(l) {}", t(MessageKey::Language)),
            format!("(t) {}", t(MessageKey::Timer)),
            format!("(?) {}", t(MessageKey::Help)),
            format!("(esc) {}", t(MessageKey::Quit)),
        ],
        GameState::Playing => {
            let mut hints = vec![
                format!("(1) {}", t(MessageKey::Easy)),
                format!("(2) {}", t(MessageKey::Hard)),
                format!("(space) {}", t(MessageKey::Skip)),
            ];
            if !timer_enabled {
                hints.push(format!("(x) {}", t(MessageKey::EndGame)));
            }
            hints.push(format!("(m) {}", t(MessageKey::Menu)));
            hints.push(format!("(?) {}", t(MessageKey::Help)));
            hints
        }
        GameState::Finished => vec![
            format!("(enter) {}", t(MessageKey::PlayAgain)),
            format!("(m) {}", t(MessageKey::Menu)),
            format!("(?) {}", t(MessageKey::Help)),
            format!("(esc) {}", t(MessageKey::Quit)),
        ],
    };
    hints.join(" / ")
}

/// Style for an on/off choice in a row of choices
pub(crate) fn choice_style(active: bool, color: Color) -> Style {
    if active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render a buffer as plain text, row by row
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area();
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

pub(crate) fn line_centered<'a>(spans: Vec<Span<'a>>) -> Line<'a> {
    Line::from(spans).alignment(Alignment::Center)
}
