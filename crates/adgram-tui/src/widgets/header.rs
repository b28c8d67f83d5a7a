use crate::state::TuiState;
use crate::widgets::{dim_color, text_color};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Top bar: product name, active filter, deal count.
pub struct Header<'a> {
    state: &'a TuiState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner_area = block.inner(area);
        block.render(area, buf);

        let count = self.state.view.cards().len();
        let line = Line::from(vec![
            Span::styled(
                " adgram ",
                Style::default()
                    .fg(text_color(self.state.theme))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("deals", Style::default().fg(dim_color(self.state.theme))),
            Span::raw("  "),
            Span::styled(
                format!("filter: {}", self.state.filter_name()),
                Style::default().fg(dim_color(self.state.theme)),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{count} shown"),
                Style::default().fg(dim_color(self.state.theme)),
            ),
        ]);

        Paragraph::new(line).render(inner_area, buf);
    }
}
