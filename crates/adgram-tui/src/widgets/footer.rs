use crate::state::TuiState;
use adgram_core::NoticeKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bottom bar: notice flash when active, key hints otherwise.
pub struct Footer<'a> {
    state: &'a mut TuiState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a mut TuiState) -> Self {
        Self { state }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner_area = block.inner(area);
        block.render(area, buf);

        // Notice flash takes priority over hints
        if let Some(notice) = self.state.active_notice() {
            let (glyph, color) = match notice.kind {
                NoticeKind::Success => ("\u{2713} ", Color::Green),
                NoticeKind::Error => ("\u{2717} ", Color::Red),
            };
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(glyph, Style::default().fg(color)),
                Span::styled(notice.text.clone(), Style::default().fg(color)),
            ]);
            Paragraph::new(line).render(inner_area, buf);
            return;
        }

        let line = Line::from(Span::styled(
            " r refresh · f filter · t theme · ↑/↓ select · 1-9 action · q quit",
            Style::default().fg(Color::DarkGray),
        ));
        Paragraph::new(line).render(inner_area, buf);
    }
}
