use cozy_chess::{get_between_rays, get_bishop_rays, get_rook_rays, Board, Color, Piece, Rank};

use crate::bitboard::Bitboard;
use crate::score_pair::ScorePair;
use crate::types::Square;

const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

/// Zobrist keys for pawns only, `[color][square]`.
static PAWN_KEYS: [[u64; 64]; 2] = {
    let mut keys = [[0u64; 64]; 2];
    let mut state = 0x4B45_5953_544F_4E45;
    let mut color = 0;
    while color < 2 {
        let mut sq = 0;
        while sq < 64 {
            let (next, key) = splitmix64(state);
            state = next;
            keys[color][sq] = key;
            sq += 1;
        }
        color += 1;
    }
    keys
};

const PHASE_WEIGHTS: [u8; 6] = [0, 1, 1, 2, 4, 0];

/// Read-only snapshot of a position, in the shape the evaluator and
/// exchange evaluator consume.
#[derive(Clone, Debug)]
pub struct Position {
    pieces: [[Bitboard; 6]; 2],
    colors: [Bitboard; 2],
    occupied: Bitboard,
    side_to_move: Color,
    pawn_key: u64,
    phase: u8,
    pinned: Bitboard,
    en_passant: Option<Square>,
    piece_scores: [ScorePair; 2],
}

impl Position {
    /// Adapts a cozy-chess board. `piece_square_score` gives the material plus
    /// square bonus for a single piece and is summed per colour.
    pub fn from_board(
        board: &Board,
        piece_square_score: impl Fn(Color, Piece, Square) -> ScorePair,
    ) -> Self {
        let mut pieces = [[Bitboard::EMPTY; 6]; 2];
        let mut piece_scores = [ScorePair::ZERO; 2];
        let mut pawn_key = 0u64;
        let mut phase = 0u8;

        for color in Color::ALL {
            for piece in Piece::ALL {
                let bb = Bitboard::from(board.colored_pieces(color, piece));
                pieces[color as usize][piece as usize] = bb;

                for square in bb {
                    piece_scores[color as usize] += piece_square_score(color, piece, square);
                    phase += PHASE_WEIGHTS[piece as usize];
                    if piece == Piece::Pawn {
                        pawn_key ^= PAWN_KEYS[color as usize][square.index()];
                    }
                }
            }
        }

        let side_to_move = board.side_to_move();
        let en_passant = board.en_passant().map(|file| {
            let rank = match side_to_move {
                Color::White => Rank::Sixth,
                Color::Black => Rank::Third,
            };
            Square::from_rank_file(rank as u8, file as u8)
        });

        Self {
            pieces,
            colors: [
                Bitboard::from(board.colors(Color::White)),
                Bitboard::from(board.colors(Color::Black)),
            ],
            occupied: Bitboard::from(board.occupied()),
            side_to_move,
            pawn_key,
            phase,
            pinned: pinned_pieces(board, Color::White) | pinned_pieces(board, Color::Black),
            en_passant,
            piece_scores,
        }
    }

    #[inline(always)]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color as usize][piece as usize]
    }

    #[inline(always)]
    pub fn colors(&self, color: Color) -> Bitboard {
        self.colors[color as usize]
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn pawn_key(&self) -> u64 {
        self.pawn_key
    }

    /// Game phase counter. Can exceed 24 after promotions.
    #[inline(always)]
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Pieces of either colour pinned to their own king.
    #[inline(always)]
    pub fn pinned(&self) -> Bitboard {
        self.pinned
    }

    #[inline(always)]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline(always)]
    pub fn piece_scores(&self, color: Color) -> ScorePair {
        self.piece_scores[color as usize]
    }

    #[inline(always)]
    pub fn king(&self, color: Color) -> Square {
        self.pieces(color, Piece::King).lsb()
    }

    pub fn piece_on(&self, square: Square) -> Option<(Color, Piece)> {
        if !self.occupied.is_set(square) {
            return None;
        }
        let color = if self.colors[0].is_set(square) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(color, piece).is_set(square))
            .map(|piece| (color, piece))
    }

    /// Bishops and queens of `color`.
    #[inline(always)]
    pub fn diagonal_sliders(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::Bishop) | self.pieces(color, Piece::Queen)
    }

    /// Rooks and queens of `color`.
    #[inline(always)]
    pub fn orthogonal_sliders(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::Rook) | self.pieces(color, Piece::Queen)
    }
}

fn pinned_pieces(board: &Board, color: Color) -> Bitboard {
    let king = board.king(color);
    let them = !color;
    let occupied = board.occupied();

    let diagonal = board.colored_pieces(them, Piece::Bishop) | board.colored_pieces(them, Piece::Queen);
    let orthogonal = board.colored_pieces(them, Piece::Rook) | board.colored_pieces(them, Piece::Queen);
    let snipers = (get_bishop_rays(king) & diagonal) | (get_rook_rays(king) & orthogonal);

    let mut pinned = Bitboard::EMPTY;
    for sniper in snipers {
        let blockers = get_between_rays(king, sniper) & occupied;
        if blockers.len() == 1 && !(blockers & board.colors(color)).is_empty() {
            pinned |= Bitboard::from(blockers);
        }
    }
    pinned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Position {
        let board: Board = fen.parse().unwrap();
        Position::from_board(&board, |_, _, _| ScorePair::ZERO)
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_snapshot() {
        let pos = position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

        assert_eq!(pos.phase(), 24);
        assert_eq!(pos.occupied().popcount(), 32);
        assert_eq!(pos.pieces(Color::White, Piece::Pawn), Bitboard::RANKS[1]);
        assert_eq!(pos.king(Color::Black), sq("e8"));
        assert!(pos.pinned().is_empty());
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.piece_on(sq("d1")), Some((Color::White, Piece::Queen)));
        assert_eq!(pos.piece_on(sq("e4")), None);
    }

    #[test]
    fn test_pawn_key_ignores_pieces() {
        let a = position("4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 1");
        let b = position("4k3/pp6/8/8/8/8/PP6/R3K1n1 b - - 0 1");
        let c = position("4k3/pp6/8/8/8/8/P1P5/4K3 w - - 0 1");

        assert_eq!(a.pawn_key(), b.pawn_key());
        assert_ne!(a.pawn_key(), c.pawn_key());
    }

    #[test]
    fn test_pins_for_both_colors() {
        // Knight on e2 pinned by the e7 rook, bishop on f7 pinned by the d5 bishop.
        let pos = position("6k1/4rb2/8/3B4/8/8/4N3/4K3 w - - 0 1");

        assert!(pos.pinned().is_set(sq("e2")));
        assert!(pos.pinned().is_set(sq("f7")));
        assert_eq!(pos.pinned().popcount(), 2);
    }

    #[test]
    fn test_no_pin_through_two_blockers_or_enemy_piece() {
        let pos = position("6k1/4r3/8/8/4p3/8/4N3/4K3 w - - 0 1");
        assert!(pos.pinned().is_empty());

        let pos = position("4r1k1/8/8/8/4p3/8/8/4K3 w - - 0 1");
        assert!(pos.pinned().is_empty());
    }

    #[test]
    fn test_en_passant_square() {
        let pos = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        assert_eq!(pos.en_passant(), Some(sq("d6")));

        let pos = position("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 2");
        assert_eq!(pos.en_passant(), Some(sq("d3")));
    }

    #[test]
    fn test_piece_scores_accumulate() {
        let board: Board = "4k3/8/8/8/8/8/PPP5/4K3 w - - 0 1".parse().unwrap();
        let pos = Position::from_board(&board, |color, piece, _| match (color, piece) {
            (Color::White, Piece::Pawn) => ScorePair::new(100, 120),
            _ => ScorePair::ZERO,
        });

        assert_eq!(pos.piece_scores(Color::White), ScorePair::new(300, 360));
        assert_eq!(pos.piece_scores(Color::Black), ScorePair::ZERO);
    }
}
