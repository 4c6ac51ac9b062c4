use tracing::debug;

use crate::error::{ConfigError, SessionError};

use super::{Board, Piece, Player};

/// Overall state of a session. `Win` and `Draw` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// What a single accepted move led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Win(Player),
    Draw,
}

/// Where the most recent piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub piece: Piece,
}

/// One game between two named players, played on a board it owns.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    turn_index: usize,
    outcome: Outcome,
    move_count: usize,
    last_move: Option<Placement>,
}

impl GameSession {
    /// Start a game. Player one plays `X` and moves first.
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        win_length: usize,
    ) -> Result<Self, ConfigError> {
        let board = Board::new(win_length)?;
        Ok(GameSession {
            board,
            players: [
                Player::new(player_one, Piece::X),
                Player::new(player_two, Piece::O),
            ],
            turn_index: 0,
            outcome: Outcome::InProgress,
            move_count: 0,
            last_move: None,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn_index]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player holding `piece`
    pub fn player(&self, piece: Piece) -> &Player {
        match piece {
            Piece::X => &self.players[0],
            Piece::O => &self.players[1],
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A rejected move leaves the session untouched, so the same player can
    /// simply try again.
    pub fn apply_move(&mut self, column: isize) -> Result<MoveOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameAlreadyOver);
        }

        let piece = self.current_player().piece();
        let col = self.board.column_index(column)?;
        let row = self.board.drop_piece(column, piece)?;

        self.move_count += 1;
        self.last_move = Some(Placement { row, col, piece });
        debug!(
            player = self.current_player().name(),
            row,
            col,
            moves = self.move_count,
            "piece placed"
        );

        if self.board.check_win(piece, self.board.win_length()) {
            let winner = self.current_player().clone();
            debug!(winner = winner.name(), "game won");
            self.outcome = Outcome::Win(winner.clone());
            return Ok(MoveOutcome::Win(winner));
        }

        if self.board.is_full() {
            debug!(moves = self.move_count, "board full, game drawn");
            self.outcome = Outcome::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.turn_index = 1 - self.turn_index;
        Ok(MoveOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlacementError;
    use crate::game::Cell;

    fn session(n: usize) -> GameSession {
        GameSession::new("Alice", "Bob", n).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = session(4);
        assert_eq!(game.current_player().name(), "Alice");
        assert_eq!(game.current_player().piece(), Piece::X);
        assert_eq!(game.player(Piece::O).name(), "Bob");
        let [one, two] = game.players();
        assert_eq!((one.piece(), two.piece()), (Piece::X, Piece::O));
        assert_eq!(game.outcome(), &Outcome::InProgress);
        assert!(!game.is_over());
        assert_eq!(game.board().cols(), 8);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_invalid_win_length() {
        assert!(matches!(
            GameSession::new("Alice", "Bob", 2),
            Err(ConfigError::InvalidWinLength { win_length: 2 })
        ));
        let huge = usize::MAX / 2 + 1;
        assert!(matches!(
            GameSession::new("Alice", "Bob", huge),
            Err(ConfigError::InvalidWinLength { win_length }) if win_length == huge
        ));
    }

    #[test]
    fn test_apply_move() {
        let mut game = session(3);
        assert_eq!(game.apply_move(3), Ok(MoveOutcome::Continue));

        assert_eq!(game.current_player().name(), "Bob");
        assert_eq!(game.board().get(5, 3), Cell::X);
        assert_eq!(
            game.last_move(),
            Some(Placement {
                row: 5,
                col: 3,
                piece: Piece::X
            })
        );

        assert_eq!(game.apply_move(3), Ok(MoveOutcome::Continue));
        assert_eq!(game.current_player().name(), "Alice");
        assert_eq!(game.board().get(4, 3), Cell::O);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_failed_move_keeps_turn() {
        let mut game = session(3);
        assert_eq!(
            game.apply_move(-2),
            Err(SessionError::Placement(PlacementError::OutOfRange {
                column: -2,
                cols: 6
            }))
        );
        assert_eq!(game.current_player().piece(), Piece::X);
        assert_eq!(game.move_count(), 0);

        // Fill column 0 with alternating pieces
        for _ in 0..6 {
            game.apply_move(0).unwrap();
        }
        let turn = game.current_player().clone();
        let board = game.board().clone();
        assert_eq!(
            game.apply_move(0),
            Err(SessionError::Placement(PlacementError::ColumnFull { column: 0 }))
        );
        assert_eq!(game.current_player(), &turn);
        assert_eq!(game.board(), &board);
        assert_eq!(game.outcome(), &Outcome::InProgress);
    }

    #[test]
    fn test_win_detection() {
        let mut game = session(4);

        // Alice wins with a horizontal line on the bottom row
        for col in 0..4 {
            let result = game.apply_move(col).unwrap(); // Alice
            if col < 3 {
                assert_eq!(result, MoveOutcome::Continue);
                game.apply_move(col).unwrap(); // Bob (row above)
            } else {
                let alice = game.player(Piece::X).clone();
                assert_eq!(result, MoveOutcome::Win(alice.clone()));
                assert_eq!(game.outcome(), &Outcome::Win(alice));
            }
        }

        assert!(game.is_over());
        assert_eq!(game.current_player().name(), "Alice");
        assert_eq!(game.apply_move(5), Err(SessionError::GameAlreadyOver));
        assert_eq!(game.move_count(), 7);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = session(3);
        // Alice scatters, Bob stacks column 5
        for (alice, bob) in [(0, 5), (1, 5), (0, 5)] {
            game.apply_move(alice).unwrap();
            let result = game.apply_move(bob).unwrap();
            if game.is_over() {
                assert_eq!(result, MoveOutcome::Win(game.player(Piece::O).clone()));
            }
        }
        assert_eq!(game.outcome(), &Outcome::Win(game.player(Piece::O).clone()));
    }

    /// Column order that fills a 6x6 board with no three-in-a-row for n=3.
    ///
    /// Columns are filled in pairs (0,1), (2,3), (4,5). Within a pair the
    /// players alternate columns so each column reads X O X O ... from the
    /// bottom, and neighbouring pairs are offset by one row.
    fn drawn_sequence() -> Vec<isize> {
        let mut moves = Vec::new();
        for pair in [(0, 1), (3, 2), (4, 5)] {
            for _ in 0..3 {
                moves.extend([pair.0, pair.1, pair.1, pair.0]);
            }
        }
        moves
    }

    #[test]
    fn test_draw() {
        let mut game = session(3);
        let moves = drawn_sequence();
        assert_eq!(moves.len(), 36);

        for (i, &col) in moves.iter().enumerate() {
            let result = game.apply_move(col).unwrap();
            if i + 1 < moves.len() {
                assert_eq!(result, MoveOutcome::Continue, "move {i} in column {col}");
            } else {
                assert_eq!(result, MoveOutcome::Draw);
            }
        }

        assert!(game.board().is_full());
        assert_eq!(game.outcome(), &Outcome::Draw);
        assert_eq!(game.apply_move(0), Err(SessionError::GameAlreadyOver));
    }
}
