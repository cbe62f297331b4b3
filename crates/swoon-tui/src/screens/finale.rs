//! Finale screen: the winning character delivers their last line.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::view::ViewModel;

/// Draw the finale screen.
pub fn draw(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let lines = match &view.finale {
        Some(card) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Final Dialogue with {}", card.name),
                Style::default().fg(Color::Magenta).bold(),
            )),
            Line::from(""),
            Line::from(Span::raw(card.line.clone())),
        ],
        None => vec![Line::from(""), Line::from("The story is over.")],
    };

    let panel = Paragraph::new(lines).centered().wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" The End ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(panel, area);
}
