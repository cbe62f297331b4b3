//! Play screen: the character card beside the dialogue and its options.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::view::ViewModel;

/// Draw the play screen.
pub fn draw(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);

    draw_character(frame, view, chunks[0]);
    draw_dialogue(frame, view, chunks[1]);
}

fn draw_character(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let mut lines = Vec::new();
    if let Some(card) = &view.character {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            card.name.clone(),
            Style::default().fg(Color::White).bold(),
        )));
        lines.push(Line::from(Span::styled(
            card.portrait.clone(),
            Style::default().fg(Color::DarkGray).italic(),
        )));
        lines.push(Line::from(""));
    }
    if let Some(affinity) = view.affinity {
        let color = match affinity {
            n if n > 0 => Color::Green,
            n if n < 0 => Color::Red,
            _ => Color::DarkGray,
        };
        lines.push(Line::from(vec![
            Span::raw("Affinity: "),
            Span::styled(affinity.to_string(), Style::default().fg(color).bold()),
        ]));
    }

    let card = Paragraph::new(lines).centered().wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Date ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(card, area);
}

fn draw_dialogue(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let mut lines = Vec::new();
    if let Some(card) = &view.dialogue {
        lines.push(Line::from(Span::styled(
            card.prompt.clone(),
            Style::default().fg(Color::Cyan).italic(),
        )));
        lines.push(Line::from(""));
        for (i, label) in card.options.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}) ", i + 1), Style::default().fg(Color::Yellow).bold()),
                Span::raw(label.clone()),
            ]));
        }
    }

    let block = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Dialogue ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(block, area);
}
