use crate::config::AppConfig;
use crate::game::{GameSession, InvalidMoveReason, MoveOutcome, NewGameOutcome, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            session: GameSession::new(),
            selected_column: config.ui.start_column.min(COLS - 1),
            config,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column as i64);
            }
            KeyCode::Char(c @ '0'..='9') => {
                let column = i64::from(c as u8 - b'0');
                if (column as usize) < COLS {
                    self.selected_column = column as usize;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Drop the active player's token in `column`
    fn drop_piece(&mut self, column: i64) {
        self.message = match self.session.submit_move(column) {
            MoveOutcome::MoveAccepted if self.session.is_stalled() => {
                Some("Board is full! Press 'r' for a new game.".to_string())
            }
            MoveOutcome::MoveAccepted => None,
            MoveOutcome::GameWon(_) => Some("Press 'r' to play again.".to_string()),
            MoveOutcome::InvalidMove(InvalidMoveReason::ColumnFull) => {
                Some("Column is full!".to_string())
            }
            MoveOutcome::InvalidMove(InvalidMoveReason::OutOfRange) => {
                Some(format!("Pick a column between 0 and {}.", COLS - 1))
            }
            MoveOutcome::GameAlreadyOver => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Start another round once the current one has a winner, or abandon a
    /// board that filled up without one.
    fn new_game(&mut self) {
        if self.session.is_stalled() {
            self.session = GameSession::new();
        } else if self.session.start_new_game() == NewGameOutcome::GameInProgress {
            self.message = Some("Finish this game first!".to_string());
            return;
        }
        self.selected_column = self.config.ui.start_column.min(COLS - 1);
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.config,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Phase, Player};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_on_configured_column() {
        let mut config = AppConfig::default();
        config.ui.start_column = 1;
        let app = App::new(config);
        assert_eq!(app.selected_column, 1);
        assert_eq!(App::default().selected_column, 3);
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.board().get(5, 3), Cell::Occupied(Player::One));
        assert_eq!(app.session.active_player(), Player::Two);
    }

    #[test]
    fn test_digit_drops_and_selects() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.selected_column, 6);
        assert_eq!(app.session.board().get(5, 6), Cell::Occupied(Player::One));

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected_column, 6);
        assert_eq!(app.session.moves_played(), 1);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('0'));
        }
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_restart_only_after_win() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message.as_deref(), Some("Finish this game first!"));
        assert_eq!(app.session.moves_played(), 1);

        // One completes 2..=5 on the bottom row while Two stacks column 0
        for c in ['0', '3', '0', '4', '0', '5'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.session.phase(), Phase::Won(Player::One));
        assert_eq!(app.message.as_deref(), Some("Press 'r' to play again."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session, GameSession::new());
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_stalled_board_can_be_abandoned() {
        let mut app = App::default();
        for (a, b) in [('0', '1'), ('2', '3'), ('4', '5')] {
            for c in [a, b, a, b, a, b, b, a, b, a, b, a] {
                press(&mut app, KeyCode::Char(c));
            }
        }
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('6'));
        }
        assert!(app.session.is_stalled());
        assert_eq!(
            app.message.as_deref(),
            Some("Board is full! Press 'r' for a new game.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session, GameSession::new());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
