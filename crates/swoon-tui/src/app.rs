//! Top-level application state: the session, the gallery, and key routing.

use crossterm::event::{KeyCode, KeyEvent};

use swoon_engine::{Carousel, Phase, Session};

/// Main application state for the TUI.
pub struct App {
    /// The play session.
    pub session: Session,
    /// Portrait gallery shown on the opening screen.
    pub gallery: Carousel,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether to show the help popup.
    pub show_help: bool,
}

impl App {
    /// Create the app over a session, with the gallery sized to the cast.
    pub fn new(session: Session, start_panel: usize, skip_opening: bool) -> Self {
        let gallery = Carousel::starting_at(session.cast().len(), start_panel);
        let mut app = Self {
            session,
            gallery,
            should_quit: false,
            show_help: false,
        };
        if skip_opening {
            // Fresh sessions are always in Opening, so this cannot fail.
            let _ = app.session.start();
        }
        app
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key dismisses the popup.
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        match self.session.phase() {
            Phase::Opening => self.handle_opening_key(key),
            Phase::Playing => self.handle_playing_key(key),
            Phase::Ended => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
        }
    }

    fn handle_opening_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.gallery.step(-1),
            KeyCode::Right | KeyCode::Char('l') => self.gallery.step(1),
            KeyCode::Enter => {
                // Only reachable from Opening, so start cannot fail.
                let _ = self.session.start();
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    self.gallery.select(digit as usize);
                }
            }
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char(c) = key.code
            && let Some(digit) = c.to_digit(10)
            && digit >= 1
        {
            // Out-of-range picks are silently ignored, like clicks on
            // option buttons that do not exist.
            let _ = self.session.choose(digit as usize - 1);
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        match self.session.phase() {
            Phase::Opening => "\u{2190}/\u{2192}:browse  1-9:jump  Enter:start  ?:help  q:quit",
            Phase::Playing => "1-9:answer  ?:help  q:quit",
            Phase::Ended => "Enter/q:exit",
        }
    }
}
