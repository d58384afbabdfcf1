pub mod attacks;
mod bitboard;
mod magics;
mod moves;
mod position;
mod score_pair;
mod types;

pub use attacks::AttackTables;
pub use bitboard::{Bitboard, BitboardIter};
pub use magics::{MagicEntry, BISHOP_MAGICS, ROOK_MAGICS};
pub use moves::{legal_moves, Move, MoveList, ParseMoveError, MAX_MOVES};
pub use position::Position;
pub use score_pair::ScorePair;
pub use types::{ParseSquareError, Square};
