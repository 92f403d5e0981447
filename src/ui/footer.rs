use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Attribution line at the bottom of every screen
pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        Paragraph::new(Line::from(vec![
            Span::styled("Made with ", dim),
            Span::styled("♥", Style::default().fg(Color::Red)),
            Span::styled(" by instantfred", dim),
        ]))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}
