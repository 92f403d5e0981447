use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::{
    engine::GameRules,
    language::{instructions, text, Language, MessageKey},
};

/// How-to-play popup drawn over whatever screen is active
pub struct HelpOverlay {
    language: Language,
    lines: Vec<String>,
}

impl HelpOverlay {
    pub fn new(language: Language, rules: &GameRules) -> Self {
        Self {
            language,
            lines: instructions(language, rules),
        }
    }

    /// Popup rectangle: most of the width, tall enough for the text
    fn popup_area(&self, area: Rect) -> Rect {
        let width = (area.width / 5 * 4).max(area.width.min(40));
        // leave room for borders and words pushed to the next row
        let inner_width = width.saturating_sub(14).max(1) as usize;
        let text_rows: usize = self
            .lines
            .iter()
            .map(|l| (l.chars().count() + 2).div_ceil(inner_width).max(1))
            .sum();
        // borders, blank line and close hint
        let height = ((text_rows + 4) as u16).min(area.height);

        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let mut lines: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::from(format!("• {l}")))
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                format!("(esc) {}", text(self.language, MessageKey::Close)),
                Style::default().add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(Span::styled(
                format!(" {} ", text(self.language, MessageKey::Help)),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;

    #[test]
    fn test_popup_fits_inside_area() {
        let overlay = HelpOverlay::new(Language::En, &GameRules::default());
        for (w, h) in [(100, 30), (40, 10), (5, 3), (0, 0)] {
            let area = Rect::new(0, 0, w, h);
            let popup = overlay.popup_area(area);
            assert!(popup.right() <= area.right());
            assert!(popup.bottom() <= area.bottom());
        }
    }

    #[test]
    fn test_overlay_lists_spanish_instructions() {
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(Language::Es, &GameRules::default()).render(area, &mut buf);
        let rendered = buffer_text(&buf);

        assert!(rendered.contains("Cómo Jugar"));
        assert!(rendered.contains("Tus compañeros de equipo adivinan la palabra."));
        assert!(rendered.contains("(esc) Cerrar"));
    }

    #[test]
    fn test_overlay_clears_what_is_underneath() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        for y in 0..20 {
            buf.set_string(0, y, "#".repeat(60), Style::default());
        }
        let overlay = HelpOverlay::new(Language::En, &GameRules::default());
        let popup = overlay.popup_area(area);
        overlay.render(area, &mut buf);

        let inside = buf
            .cell((popup.x + popup.width / 2, popup.y + popup.height - 2))
            .unwrap();
        assert_ne!(inside.symbol(), "#");
    }
}
