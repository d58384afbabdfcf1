//! Move geometry: static leaper tables and magic-indexed slider tables.
//!
//! Slider tables are built once by [`AttackTables::build`] and then shared
//! read-only. Knight, king and pawn tables are compile-time constants.

use cozy_chess::{Color, Piece};
use log::debug;

use crate::bitboard::Bitboard;
use crate::magics::{MagicEntry, BISHOP_MAGICS, ROOK_MAGICS};
use crate::types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const NOT_FILE_A: u64 = !0x0101_0101_0101_0101;
const NOT_FILE_H: u64 = !0x8080_8080_8080_8080;
const NOT_FILE_AB: u64 = !0x0303_0303_0303_0303;
const NOT_FILE_GH: u64 = !0xC0C0_C0C0_C0C0_C0C0;

pub static KNIGHT_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let bb = 1u64 << sq;
        let mut result = 0u64;
        result |= (bb << 17) & NOT_FILE_A;
        result |= (bb << 15) & NOT_FILE_H;
        result |= (bb << 10) & NOT_FILE_AB;
        result |= (bb << 6) & NOT_FILE_GH;
        result |= (bb >> 6) & NOT_FILE_AB;
        result |= (bb >> 10) & NOT_FILE_GH;
        result |= (bb >> 15) & NOT_FILE_A;
        result |= (bb >> 17) & NOT_FILE_H;
        attacks[sq] = Bitboard(result);
        sq += 1;
    }
    attacks
};

pub static KING_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let bb = 1u64 << sq;
        let mut result = 0u64;
        result |= bb << 8;
        result |= bb >> 8;
        result |= (bb << 1) & NOT_FILE_A;
        result |= (bb >> 1) & NOT_FILE_H;
        result |= (bb << 9) & NOT_FILE_A;
        result |= (bb << 7) & NOT_FILE_H;
        result |= (bb >> 7) & NOT_FILE_A;
        result |= (bb >> 9) & NOT_FILE_H;
        attacks[sq] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pawn captures, `[color][square]`.
pub static PAWN_ATTACKS: [[Bitboard; 64]; 2] = {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let bb = 1u64 << sq;
        attacks[0][sq] = Bitboard(((bb << 9) & NOT_FILE_A) | ((bb << 7) & NOT_FILE_H));
        attacks[1][sq] = Bitboard(((bb >> 7) & NOT_FILE_A) | ((bb >> 9) & NOT_FILE_H));
        sq += 1;
    }
    attacks
};

#[inline(always)]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square.index()]
}

#[inline(always)]
pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square.index()]
}

#[inline(always)]
pub fn pawn_attacks(square: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color as usize][square.index()]
}

/// Every square attacked by a set of `color` pawns.
#[inline(always)]
pub fn pawn_attacks_set(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => pawns.north_east() | pawns.north_west(),
        Color::Black => pawns.south_east() | pawns.south_west(),
    }
}

/// Single pushes of a set of `color` pawns, ignoring occupancy.
#[inline(always)]
pub fn pawn_pushes(pawns: Bitboard, color: Color) -> Bitboard {
    pawns.forward(color)
}

/// Ray-cast slider attacks: each ray stops at (and includes) the first
/// occupied square. Used to fill the magic tables and as ground truth.
pub fn sliding_attacks(square: Square, occupied: Bitboard, directions: &[(i8, i8); 4]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(rank_delta, file_delta) in directions {
        let mut current = square;
        while let Some(next) = current.offset(rank_delta, file_delta) {
            attacks.set(next);
            if occupied.is_set(next) {
                break;
            }
            current = next;
        }
    }
    attacks
}

/// Attack table for one slider family, all squares in one flat allocation.
struct SliderTable {
    magics: &'static [MagicEntry; 64],
    offsets: [usize; 64],
    attacks: Box<[Bitboard]>,
}

impl SliderTable {
    fn build(magics: &'static [MagicEntry; 64], directions: &[(i8, i8); 4]) -> Self {
        let mut offsets = [0usize; 64];
        let mut total = 0;
        for (offset, entry) in offsets.iter_mut().zip(magics.iter()) {
            *offset = total;
            total += entry.table_len();
        }

        let mut attacks = vec![Bitboard::EMPTY; total].into_boxed_slice();

        for (index, entry) in magics.iter().enumerate() {
            let square = Square::new(index as u8);
            let base = offsets[index];

            // Carry-rippler: visits every subset of the mask exactly once.
            let mut subset = 0u64;
            loop {
                attacks[base + entry.index(subset)] =
                    sliding_attacks(square, Bitboard(subset), directions);

                subset = subset.wrapping_sub(entry.mask) & entry.mask;
                if subset == 0 {
                    break;
                }
            }
        }

        Self {
            magics,
            offsets,
            attacks,
        }
    }

    #[inline(always)]
    fn get(&self, square: Square, occupied: Bitboard) -> Bitboard {
        let entry = &self.magics[square.index()];
        self.attacks[self.offsets[square.index()] + entry.index(occupied.0)]
    }
}

/// Read-only slider and ray tables. Build once at startup and share.
pub struct AttackTables {
    rook: SliderTable,
    bishop: SliderTable,
    // [from * 64 + to]
    lines: Box<[Bitboard]>,
    between: Box<[Bitboard]>,
}

impl AttackTables {
    pub fn build() -> Self {
        let rook = SliderTable::build(&ROOK_MAGICS, &ROOK_DIRECTIONS);
        let bishop = SliderTable::build(&BISHOP_MAGICS, &BISHOP_DIRECTIONS);
        let (lines, between) = build_rays();

        debug!(
            "Built attack tables: {} rook entries, {} bishop entries",
            rook.attacks.len(),
            bishop.attacks.len()
        );

        Self {
            rook,
            bishop,
            lines,
            between,
        }
    }

    #[inline(always)]
    pub fn rook_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.rook.get(square, occupied)
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.bishop.get(square, occupied)
    }

    #[inline(always)]
    pub fn queen_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.rook.get(square, occupied) | self.bishop.get(square, occupied)
    }

    /// Attacks of any piece type from `square`.
    #[inline(always)]
    pub fn attacks(&self, piece: Piece, color: Color, square: Square, occupied: Bitboard) -> Bitboard {
        match piece {
            Piece::Pawn => pawn_attacks(square, color),
            Piece::Knight => knight_attacks(square),
            Piece::Bishop => self.bishop_attacks(square, occupied),
            Piece::Rook => self.rook_attacks(square, occupied),
            Piece::Queen => self.queen_attacks(square, occupied),
            Piece::King => king_attacks(square),
        }
    }

    /// The full board-edge-to-edge line through two aligned squares,
    /// including both. Empty when the squares share no rank, file or diagonal.
    #[inline(always)]
    pub fn line(&self, a: Square, b: Square) -> Bitboard {
        self.lines[a.index() * 64 + b.index()]
    }

    /// Squares strictly between two aligned squares.
    #[inline(always)]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        self.between[a.index() * 64 + b.index()]
    }
}

fn build_rays() -> (Box<[Bitboard]>, Box<[Bitboard]>) {
    let mut lines = vec![Bitboard::EMPTY; 64 * 64].into_boxed_slice();
    let mut between = vec![Bitboard::EMPTY; 64 * 64].into_boxed_slice();

    let directions = ROOK_DIRECTIONS.iter().chain(BISHOP_DIRECTIONS.iter());

    for from in 0..64u8 {
        let from = Square::new(from);
        for &(rank_delta, file_delta) in directions.clone() {
            let mut full_line = from.bitboard();
            let mut current = from;
            while let Some(next) = current.offset(rank_delta, file_delta) {
                full_line.set(next);
                current = next;
            }
            let mut current = from;
            while let Some(next) = current.offset(-rank_delta, -file_delta) {
                full_line.set(next);
                current = next;
            }

            let mut walked = Bitboard::EMPTY;
            let mut current = from;
            while let Some(next) = current.offset(rank_delta, file_delta) {
                let index = from.index() * 64 + next.index();
                lines[index] = full_line;
                between[index] = walked;
                walked.set(next);
                current = next;
            }
        }
    }

    (lines, between)
}
