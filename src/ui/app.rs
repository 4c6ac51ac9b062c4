use crate::config::GameConfig;
use crate::error::{ConfigError, PlacementError, SessionError};
use crate::game::{GameSession, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    config: GameConfig,
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let session = new_session(&config)?;
        let selected_column = session.board().cols() / 2;
        Ok(App {
            config,
            session,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

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
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let cols = self.session.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Home => self.selected_column = 0,
            KeyCode::End => self.selected_column = cols - 1,
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        match new_session(&self.config) {
            Ok(session) => {
                self.selected_column = session.board().cols() / 2;
                self.session = session;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let result = self.session.apply_move(self.selected_column as isize);
        debug!(column = self.selected_column, ?result, "drop requested");

        self.message = match result {
            Ok(MoveOutcome::Continue) => {
                self.skip_full_column();
                None
            }
            Ok(MoveOutcome::Win(player)) => Some(format!("{} wins!", player.name())),
            Ok(MoveOutcome::Draw) => Some("It's a draw!".to_string()),
            Err(SessionError::Placement(PlacementError::ColumnFull { .. })) => {
                Some("Column is full!".to_string())
            }
            Err(SessionError::Placement(PlacementError::OutOfRange { .. })) => {
                Some("Invalid column!".to_string())
            }
            Err(SessionError::GameAlreadyOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    /// Move the selection off a column that has just filled up
    fn skip_full_column(&mut self) {
        let board = self.session.board();
        if !board.is_column_full(self.selected_column) {
            return;
        }
        let selected = self.selected_column;
        if let Some(col) = board
            .open_columns()
            .into_iter()
            .min_by_key(|&col| col.abs_diff(selected))
        {
            self.selected_column = col;
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

fn new_session(config: &GameConfig) -> Result<GameSession, ConfigError> {
    GameSession::new(
        config.player_one.as_str(),
        config.player_two.as_str(),
        config.win_length,
    )
}
