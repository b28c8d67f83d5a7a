use crate::state::TuiState;
use crate::widgets::{badge_color, dim_color, text_color};
use adgram_proto::{ActionKind, DealCard, DealsView, StageMark};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Scrollable list of deal cards.
pub struct DealList<'a> {
    state: &'a TuiState,
}

impl<'a> DealList<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn card_lines(&self, card: &DealCard, selected: bool) -> Vec<Line<'static>> {
        let theme = self.state.theme;
        let marker = if selected { "▌ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(text_color(theme))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(text_color(theme))
        };

        let mut head = vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(format!("#{} ", card.id), Style::default().fg(dim_color(theme))),
            Span::styled(card.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.badge.text),
                Style::default().fg(badge_color(card.badge.style)),
            ),
        ];
        if let Some(channel) = &card.channel {
            head.push(Span::styled(
                format!("  {channel}"),
                Style::default().fg(dim_color(theme)),
            ));
        }
        if card.amount > 0.0 {
            head.push(Span::styled(
                format!("  {} TON", card.amount),
                Style::default().fg(dim_color(theme)),
            ));
        }

        let timeline: Vec<Span> = std::iter::once(Span::raw("    ".to_string()))
            .chain(card.timeline.iter().map(|mark| {
                let (glyph, color) = match mark {
                    StageMark::Done => ("●─", Color::Green),
                    StageMark::Current => ("◉─", Color::Cyan),
                    StageMark::Neutral => ("○─", dim_color(theme)),
                    StageMark::Terminal => ("✕─", Color::Red),
                };
                Span::styled(glyph.to_string(), Style::default().fg(color))
            }))
            .collect();

        let mut lines = vec![Line::from(head), Line::from(timeline)];

        if !card.actions.is_empty() {
            let mut spans = vec![Span::raw("    ".to_string())];
            for (i, action) in card.actions.iter().enumerate() {
                let color = match action.kind {
                    ActionKind::Primary => Color::Cyan,
                    ActionKind::Danger => Color::Red,
                };
                spans.push(Span::styled(
                    format!("[{}] {}  ", i + 1, action.label),
                    Style::default().fg(color),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines
    }
}

impl Widget for DealList<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        match &self.state.view {
            DealsView::Empty => {
                let placeholder = Line::from(Span::styled(
                    "  No deals to show. Press r to refresh.",
                    Style::default().fg(dim_color(self.state.theme)),
                ));
                Paragraph::new(placeholder).render(area, buf);
            }
            DealsView::List(cards) => {
                let mut lines = Vec::new();
                let mut selected_line = 0usize;
                for (i, card) in cards.iter().enumerate() {
                    if i == self.state.selected {
                        selected_line = lines.len();
                    }
                    lines.extend(self.card_lines(card, i == self.state.selected));
                }

                // Keep the selected card in view
                let height = area.height as usize;
                let scroll = if selected_line + 4 > height {
                    (selected_line + 4 - height) as u16
                } else {
                    0
                };

                Paragraph::new(lines).scroll((scroll, 0)).render(area, buf);
            }
        }
    }
}
