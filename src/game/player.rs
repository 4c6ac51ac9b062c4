use super::board::Cell;

/// The marker a player drops into the grid. Player one always plays `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::X => Cell::X,
            Piece::O => Cell::O,
        }
    }

    /// Single-character marker used by text renderers
    pub fn marker(self) -> char {
        match self {
            Piece::X => 'X',
            Piece::O => 'O',
        }
    }
}

/// A seat at the table: a display name bound to a piece for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    piece: Piece,
}

impl Player {
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Player {
            name: name.into(),
            piece,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::X.other(), Piece::O);
        assert_eq!(Piece::O.other(), Piece::X);
    }

    #[test]
    fn test_piece_marker_and_cell() {
        assert_eq!(Piece::X.marker(), 'X');
        assert_eq!(Piece::O.marker(), 'O');
        assert_eq!(Piece::X.to_cell(), Cell::X);
        assert_eq!(Piece::O.to_cell(), Cell::O);
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Ada", Piece::O);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.piece(), Piece::O);
    }
}
