//! Application state: the game session plus UI-only cursor state.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, GameView, Position};
use tracing::debug;

use crate::input;

/// Main application state.
///
/// Wraps the one stateful game session; the cell cursor is presentation
/// state only and never touches the session.
pub struct App {
    session: GameSession,
    cell_cursor: Position,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cell_cursor: Position::Center,
        }
    }

    /// Derives the current view data for rendering.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// The cell currently selected on the board.
    pub fn cell_cursor(&self) -> Position {
        self.cell_cursor
    }

    /// Translates a key press into a session intent.
    pub fn handle_key(&mut self, code: KeyCode) {
        debug!(?code, "Handling key");

        match code {
            // Place directly at an addressed cell
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.session.play_at(pos);
                }
            }
            // Place at the selected cell
            KeyCode::Enter | KeyCode::Char(' ') => self.session.play_at(self.cell_cursor),

            // Board cursor navigation
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cell_cursor = input::move_cursor(self.cell_cursor, code);
            }

            // History navigation; out-of-range jumps are no-ops in the session
            KeyCode::PageUp => {
                let step = self.session.cursor().saturating_sub(1);
                self.session.jump_to(step);
            }
            KeyCode::PageDown => self.session.jump_to(self.session.cursor() + 1),
            KeyCode::Home => self.session.jump_to(0),
            KeyCode::End => self.session.jump_to(self.session.history().len() - 1),

            // Move-list display order
            KeyCode::Char('t') => self.session.toggle_order(),

            // Fresh session
            KeyCode::Char('r') => self.restart(),

            _ => {}
        }
    }

    fn restart(&mut self) {
        debug!("Restarting session");
        self.session = GameSession::new();
    }
}
