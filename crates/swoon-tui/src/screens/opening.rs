//! Opening screen: the title over a browsable portrait gallery.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use swoon_engine::Deck;

use crate::app::App;

/// Tracks which gallery position is lit after a render pass.
#[derive(Default)]
struct GalleryView {
    selected: Option<usize>,
}

impl Deck for GalleryView {
    fn deactivate_all(&mut self) {
        self.selected = None;
    }

    fn activate(&mut self, position: usize) {
        self.selected = Some(position);
    }
}

/// Draw the opening screen.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(5),    // Portrait panel
            Constraint::Length(1), // Indicator dots
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        app.session.title().to_string(),
        Style::default().fg(Color::Magenta).bold(),
    ))
    .centered()
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let mut gallery = GalleryView::default();
    app.gallery.present(&mut gallery);

    // The portrait card for whichever position is lit.
    let card = gallery
        .selected
        .and_then(|position| app.session.cast().get(position - 1));
    let panel_text: Vec<Line> = match card {
        Some(character) => vec![
            Line::from(""),
            Line::from(Span::styled(
                character.name.clone(),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                character.portrait.clone(),
                Style::default().fg(Color::DarkGray).italic(),
            )),
            Line::from(""),
            Line::from("Press Enter to start"),
        ],
        None => vec![Line::from(""), Line::from("The cast is empty.")],
    };
    let panel = Paragraph::new(panel_text).centered().block(
        Block::default()
            .title(" Cast ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(panel, chunks[1]);

    // One indicator dot per cast member.
    let mut spans = Vec::new();
    for position in 1..=app.gallery.len() {
        if position > 1 {
            spans.push(Span::raw(" "));
        }
        spans.push(if gallery.selected == Some(position) {
            Span::styled("\u{25cf}", Style::default().fg(Color::Magenta))
        } else {
            Span::styled("\u{25cb}", Style::default().fg(Color::DarkGray))
        });
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), chunks[2]);
}
