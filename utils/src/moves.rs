use std::error::Error;
use std::fmt;

use arrayvec::ArrayVec;
use cozy_chess::util::parse_uci_move;
use cozy_chess::{Board, Piece};

use crate::types::Square;

/// Upper bound on legal moves in any chess position.
pub const MAX_MOVES: usize = 218;

pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A move in from/to form. Castling is the king's two-square move (e1g1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl Move {
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Converts a cozy-chess move. Castling comes in as king-takes-rook and
    /// leaves as the king's two-square move.
    pub fn from_board(board: &Board, mv: cozy_chess::Move) -> Self {
        let from = Square::from(mv.from);
        let mut to = Square::from(mv.to);

        let castles = board.piece_on(mv.from) == Some(Piece::King)
            && board.colors(board.side_to_move()).has(mv.to);
        if castles {
            let file = if to.file() > from.file() { 6 } else { 2 };
            to = Square::from_rank_file(from.rank(), file);
        }

        Self {
            from,
            to,
            promotion: mv.promotion,
        }
    }

    /// Reads a UCI move in the context of `board`. Castling is accepted both
    /// as the king's two-square move and as king-takes-rook.
    pub fn from_uci(board: &Board, text: &str) -> Result<Self, ParseMoveError> {
        parse_uci_move(board, text)
            .map(|mv| Self::from_board(board, mv))
            .map_err(|_| ParseMoveError(text.to_string()))
    }
}

/// All legal moves in `board`.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    board.generate_moves(|piece_moves| {
        for mv in piece_moves {
            moves.push(Move::from_board(board, mv));
        }
        false
    });
    moves
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mv = cozy_chess::Move {
            from: self.from.into(),
            to: self.to.into(),
            promotion: self.promotion,
        };
        write!(f, "{}", mv)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError(pub String);

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move '{}'", self.0)
    }
}

impl Error for ParseMoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    const CASTLING_FEN: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn test_parse_quiet_move() {
        let board = Board::default();
        let mv = Move::from_uci(&board, "g1f3").unwrap();
        assert_eq!(mv.from.to_string(), "g1");
        assert_eq!(mv.to.to_string(), "f3");
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn test_parse_promotion() {
        let board: Board = "8/4P3/8/8/8/8/k7/4K3 w - - 0 1".parse().unwrap();
        let mv = Move::from_uci(&board, "e7e8q").unwrap();
        assert_eq!(mv.promotion, Some(Piece::Queen));
        assert_eq!(mv.to_string(), "e7e8q");
    }

    #[test]
    fn test_castling_is_king_two_squares() {
        let board: Board = CASTLING_FEN.parse().unwrap();
        let moves = legal_moves(&board);
        let e1 = "e1".parse().unwrap();

        assert!(moves.contains(&Move::new(e1, "g1".parse().unwrap())));
        assert!(moves.contains(&Move::new(e1, "c1".parse().unwrap())));
        assert!(!moves.contains(&Move::new(e1, "h1".parse().unwrap())));
        assert_eq!(moves.len(), 26);
    }

    #[test]
    fn test_both_castling_notations_parse_to_the_same_move() {
        let board: Board = CASTLING_FEN.parse().unwrap();
        let moves = legal_moves(&board);

        let standard = Move::from_uci(&board, "e1g1").unwrap();
        let king_takes_rook = Move::from_uci(&board, "e1h1").unwrap();
        assert_eq!(standard, king_takes_rook);
        assert_eq!(king_takes_rook.to_string(), "e1g1");
        assert!(moves.contains(&king_takes_rook));

        let queenside = Move::from_uci(&board, "e1a1").unwrap();
        assert_eq!(queenside.to_string(), "e1c1");
    }

    #[test]
    fn test_start_position_move_count() {
        let board = Board::default();
        assert_eq!(legal_moves(&board).len(), 20);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let board = Board::default();
        assert!(Move::from_uci(&board, "e2e9").is_err());
        assert!(Move::from_uci(&board, "e7").is_err());
        assert!(Move::from_uci(&board, "z1a2").is_err());
    }
}
