//! One screen per engine phase, plus shared popup helpers.

pub mod finale;
pub mod opening;
pub mod play;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use swoon_engine::Phase;

use crate::app::App;
use crate::view::ViewModel;

/// Draw the screen matching the session's current phase.
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let view = ViewModel::snapshot(&app.session);
    match view.phase {
        Phase::Opening => opening::draw(frame, app, area),
        Phase::Playing => play::draw(frame, &view, area),
        Phase::Ended => finale::draw(frame, &view, area),
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Opening:"),
        Line::from("  \u{2190}/\u{2192} or h/l   Browse the cast"),
        Line::from("  1-9           Jump to a portrait"),
        Line::from("  Enter         Start"),
        Line::from(""),
        Line::from("Play:"),
        Line::from("  1-9           Pick a response"),
        Line::from(""),
        Line::from("Finale:"),
        Line::from("  Enter / Esc   Exit"),
        Line::from(""),
        Line::from("  ?             Toggle this help"),
        Line::from("  q / Ctrl+C    Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
