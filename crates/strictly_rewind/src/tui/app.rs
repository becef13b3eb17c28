//! Application state and key handling.

use crossterm::event::KeyCode;
use strictly_rewind::{GameSession, Position, SessionEvent};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use super::input::{digit_to_cell, move_cursor, move_selection};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move over the board.
    Board,
    /// Arrow keys move over the history list.
    History,
}

/// Main application state.
pub struct App {
    session: GameSession,
    events: UnboundedReceiver<SessionEvent>,
    cursor: Position,
    selected: usize,
    focus: Focus,
    last_event: String,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(mut session: GameSession) -> Self {
        let events = session.subscribe();
        Self {
            session,
            events,
            cursor: Position::Center,
            selected: 0,
            focus: Focus::Board,
            last_event: "Arrows move, Enter places, Tab switches to history".to_string(),
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Text describing the most recent event or rejection.
    pub fn last_event(&self) -> &str {
        &self.last_event
    }

    /// Handles a key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('r') => self.session.restart(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            _ => {
                if let Some(cell) = digit_to_cell(key) {
                    self.click_cell(cell);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(key),
                        Focus::History => self.handle_history_key(key),
                    }
                }
            }
        }
        self.drain_events();
        false
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.click_cell(self.cursor.to_index()),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.session.on_history_entry_clicked(self.selected) {
                    self.last_event = e.to_string();
                }
            }
            _ => {
                let len = self.session.list_history().len();
                self.selected = move_selection(self.selected, len, key);
            }
        }
    }

    fn click_cell(&mut self, cell: usize) {
        if let Err(e) = self.session.on_cell_clicked(cell) {
            // Rejected clicks change nothing; just say why.
            self.last_event = e.to_string();
        }
    }

    /// Applies pending session events to the view state.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handles a session event.
    pub fn handle_event(&mut self, event: SessionEvent) {
        debug!(?event, "Handling session event");

        match event {
            SessionEvent::MovePlayed {
                action,
                move_number,
            } => {
                self.selected = move_number;
                self.last_event = format!(
                    "Move {}: {} played {}",
                    move_number,
                    self.session.label(action.player),
                    action.position.label()
                );
            }
            SessionEvent::Jumped { cursor } => {
                self.selected = cursor;
                self.last_event = if cursor == 0 {
                    "Jumped to game start".to_string()
                } else {
                    format!("Jumped to move {}", cursor)
                };
            }
            SessionEvent::Restarted => {
                self.selected = 0;
                self.cursor = Position::Center;
                self.last_event = "Game restarted".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().move_count(), 1);
        assert!(!app.session().current_board().is_empty(Position::Center));
        assert_eq!(app.last_event(), "Move 1: X played Center");
    }

    #[test]
    fn test_occupied_click_reports_reason() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.session().move_count(), 1);
        assert_eq!(app.last_event(), "Square Center is already occupied");
    }

    #[test]
    fn test_history_jump_follows_selection() {
        let mut app = App::new(GameSession::new());
        for key in ['1', '5', '2'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.selected(), 3);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.session().cursor(), 1);
        assert_eq!(app.session().list_history().len(), 4);
        assert_eq!(app.last_event(), "Jumped to move 1");
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(GameSession::new());
        app.handle_key(KeyCode::Char('1'));
        assert!(!app.handle_key(KeyCode::Char('r')));
        assert_eq!(app.session().list_history().len(), 1);
        assert_eq!(app.selected(), 0);
        assert!(app.handle_key(KeyCode::Char('q')));
    }
}
