//! Core Connect-N game logic: the board with gravity and win detection,
//! pieces and players, and the session state machine that drives a game.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, MAX_WIN_LENGTH, MIN_WIN_LENGTH};
pub use player::{Piece, Player};
pub use session::{GameSession, MoveOutcome, Outcome, Placement};
