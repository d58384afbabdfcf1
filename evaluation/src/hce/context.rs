use cozy_chess::{Color, Piece};
use utils::attacks::{king_attacks, pawn_attacks_set};
use utils::{AttackTables, Bitboard, Position, ScorePair, Square};

use super::masks::{FORWARD_FILE_ADJACENT, OUTPOSTS};
use super::pawn_cache::PawnStructure;

// Working state for one evaluation. Piece terms fill in the attack maps and
// attack power that the king and threat terms read afterwards.
pub struct EvalContext<'a> {
    pub position: &'a Position,
    pub tables: &'a AttackTables,

    pub king_zone: [Bitboard; 2],
    pub pawn_attacks: [Bitboard; 2],
    pub knight_attacks: [Bitboard; 2],
    pub bishop_attacks: [Bitboard; 2],
    pub rook_attacks: [Bitboard; 2],
    pub queen_attacks: [Bitboard; 2],
    pub mobility_zone: [Bitboard; 2],
    pub pawn_storm_zone: [Bitboard; 2],
    pub attack_power: [ScorePair; 2],

    pub pawn_structure: Option<PawnStructure>,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        position: &'a Position,
        tables: &'a AttackTables,
        pawn_structure: Option<PawnStructure>,
    ) -> Self {
        let mut king_zone = [Bitboard::EMPTY; 2];
        let mut pawn_attacks = [Bitboard::EMPTY; 2];
        let mut pawn_storm_zone = [Bitboard::EMPTY; 2];

        for color in Color::ALL {
            let king = position.king(color);

            // 3x3 ring plus the rank in front of it
            let ring = king_attacks(king);
            king_zone[color as usize] = ring | ring.forward(color);

            pawn_attacks[color as usize] =
                pawn_attacks_set(position.pieces(color, Piece::Pawn), color);

            // King file and its neighbours ahead of the king, plus the king's rank
            let storm = FORWARD_FILE_ADJACENT[color as usize][king.index()];
            pawn_storm_zone[color as usize] = storm | storm.backward(color);
        }

        let mobility_zone = [
            !(position.colors(Color::White) | pawn_attacks[Color::Black as usize]),
            !(position.colors(Color::Black) | pawn_attacks[Color::White as usize]),
        ];

        Self {
            position,
            tables,
            king_zone,
            pawn_attacks,
            knight_attacks: [Bitboard::EMPTY; 2],
            bishop_attacks: [Bitboard::EMPTY; 2],
            rook_attacks: [Bitboard::EMPTY; 2],
            queen_attacks: [Bitboard::EMPTY; 2],
            mobility_zone,
            pawn_storm_zone,
            attack_power: [ScorePair::ZERO; 2],
            pawn_structure,
        }
    }

    /// Pinned pieces may only move along the pin line; pinned knights not at all.
    #[inline(always)]
    pub fn legalize(&self, piece: Piece, square: Square, moves: Bitboard, color: Color) -> Bitboard {
        if !self.position.pinned().is_set(square) {
            return moves;
        }
        match piece {
            Piece::Knight => Bitboard::EMPTY,
            _ => moves & self.tables.line(square, self.position.king(color)),
        }
    }

    #[inline(always)]
    pub fn is_defended_by_pawn(&self, square: Square, color: Color) -> bool {
        self.pawn_attacks[color as usize].is_set(square)
    }

    #[inline(always)]
    pub fn is_outpost(&self, square: Square, color: Color) -> bool {
        OUTPOSTS[color as usize].is_set(square)
            && self.is_defended_by_pawn(square, color)
            && !self.is_defended_by_pawn(square, !color)
    }

    /// Adds a piece's mobility and king pressure to the running totals.
    /// Returns the mobility bitboard.
    #[inline(always)]
    pub fn record_attacks(
        &mut self,
        piece: Piece,
        color: Color,
        moves: Bitboard,
        attack_power: &[ScorePair; 8],
    ) -> Bitboard {
        let us = color as usize;
        let mobility = moves & self.mobility_zone[us];

        match piece {
            Piece::Knight => self.knight_attacks[us] |= moves,
            Piece::Bishop => self.bishop_attacks[us] |= moves,
            Piece::Rook => self.rook_attacks[us] |= moves,
            _ => self.queen_attacks[us] |= moves,
        }

        let king_hits = mobility & self.king_zone[!color as usize];
        if !king_hits.is_empty() {
            self.attack_power[us] += attack_power[king_hits.popcount().min(7) as usize];
        }

        mobility
    }

    /// Every square `color` attacks with pawns and pieces (king excluded).
    #[inline(always)]
    pub fn attacked_by(&self, color: Color) -> Bitboard {
        let c = color as usize;
        self.pawn_attacks[c]
            | self.knight_attacks[c]
            | self.bishop_attacks[c]
            | self.rook_attacks[c]
            | self.queen_attacks[c]
    }
}
