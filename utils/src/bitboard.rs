//! 64-bit set-of-squares primitive.
//!
//! Bit `i` is square `i`: a1 = 0, b1 = 1, ..., h8 = 63.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use cozy_chess::Color;

use crate::types::Square;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);
    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);

    pub const FILES: [Bitboard; 8] = {
        let mut files = [Bitboard::EMPTY; 8];
        let mut i = 0;
        while i < 8 {
            files[i] = Bitboard(Self::FILE_A.0 << i);
            i += 1;
        }
        files
    };

    pub const RANKS: [Bitboard; 8] = {
        let mut ranks = [Bitboard::EMPTY; 8];
        let mut i = 0;
        while i < 8 {
            ranks[i] = Bitboard(Self::RANK_1.0 << (8 * i));
            i += 1;
        }
        ranks
    };

    #[inline(always)]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(1u64 << square.index())
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn is_set(self, square: Square) -> bool {
        (self.0 >> square.index()) & 1 != 0
    }

    #[inline(always)]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1u64 << square.index());
    }

    /// Toggles both squares, moving a single occupant from `from` to `to`.
    #[inline(always)]
    pub fn move_bit(&mut self, from: Square, to: Square) {
        self.0 ^= (1u64 << from.index()) | (1u64 << to.index());
    }

    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub const fn more_than_one(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    /// Lowest set square. Must not be called on an empty board.
    #[inline(always)]
    pub const fn lsb(self) -> Square {
        debug_assert!(self.0 != 0, "lsb of empty bitboard");
        Square::new(self.0.trailing_zeros() as u8)
    }

    /// Highest set square. Must not be called on an empty board.
    #[inline(always)]
    pub const fn msb(self) -> Square {
        debug_assert!(self.0 != 0, "msb of empty bitboard");
        Square::new(63 - self.0.leading_zeros() as u8)
    }

    /// Returns the lowest set square and clears it.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Square {
        let square = self.lsb();
        self.0 &= self.0 - 1;
        square
    }

    #[inline(always)]
    pub const fn north(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    #[inline(always)]
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    #[inline(always)]
    pub const fn east(self) -> Bitboard {
        Bitboard((self.0 << 1) & !Self::FILE_A.0)
    }

    #[inline(always)]
    pub const fn west(self) -> Bitboard {
        Bitboard((self.0 >> 1) & !Self::FILE_H.0)
    }

    #[inline(always)]
    pub const fn north_east(self) -> Bitboard {
        Bitboard((self.0 << 9) & !Self::FILE_A.0)
    }

    #[inline(always)]
    pub const fn north_west(self) -> Bitboard {
        Bitboard((self.0 << 7) & !Self::FILE_H.0)
    }

    #[inline(always)]
    pub const fn south_east(self) -> Bitboard {
        Bitboard((self.0 >> 7) & !Self::FILE_A.0)
    }

    #[inline(always)]
    pub const fn south_west(self) -> Bitboard {
        Bitboard((self.0 >> 9) & !Self::FILE_H.0)
    }

    /// One rank towards the opponent of `color`.
    #[inline(always)]
    pub const fn forward(self, color: Color) -> Bitboard {
        match color {
            Color::White => self.north(),
            Color::Black => self.south(),
        }
    }

    /// One rank towards `color`'s own back rank.
    #[inline(always)]
    pub const fn backward(self, color: Color) -> Bitboard {
        match color {
            Color::White => self.south(),
            Color::Black => self.north(),
        }
    }
}

impl From<cozy_chess::BitBoard> for Bitboard {
    #[inline(always)]
    fn from(bitboard: cozy_chess::BitBoard) -> Self {
        Bitboard(bitboard.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline(always)]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = Square::new(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(square)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline(always)]
    fn into_iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

// Rank 8 on top, a-file on the left.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let mark = if self.is_set(Square::from_rank_file(rank, file)) {
                    '1'
                } else {
                    '.'
                };
                if file < 7 {
                    write!(f, "{} ", mark)?;
                } else {
                    writeln!(f, "{}", mark)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_set_then_test() {
        let mut bb = Bitboard::EMPTY;
        bb.set(sq("e4"));
        assert!(bb.is_set(sq("e4")));
        assert_eq!(bb.popcount(), 1);

        bb.clear(sq("e4"));
        assert!(!bb.is_set(sq("e4")));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_move_bit() {
        let mut bb = Bitboard::from_square(sq("a2"));
        bb.move_bit(sq("a2"), sq("a4"));
        assert_eq!(bb, Bitboard::from_square(sq("a4")));
    }

    #[test]
    fn test_lsb_msb_pop() {
        let mut bb = Bitboard::from_square(sq("c3")) | Bitboard::from_square(sq("f7"));
        assert_eq!(bb.lsb(), sq("c3"));
        assert_eq!(bb.msb(), sq("f7"));
        assert!(bb.more_than_one());

        assert_eq!(bb.pop_lsb(), sq("c3"));
        assert!(!bb.more_than_one());
        assert_eq!(bb.pop_lsb(), sq("f7"));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_shifts_do_not_wrap() {
        let h_file = Bitboard::FILES[7];
        assert!(h_file.east().is_empty());
        assert!(h_file.north_east().is_empty());
        assert!(h_file.south_east().is_empty());

        let a_file = Bitboard::FILES[0];
        assert!(a_file.west().is_empty());
        assert!(a_file.north_west().is_empty());
        assert!(a_file.south_west().is_empty());

        assert!(Bitboard::RANKS[7].north().is_empty());
        assert!(Bitboard::RANKS[0].south().is_empty());
    }

    #[test]
    fn test_shift_directions() {
        let e4 = Bitboard::from_square(sq("e4"));
        assert_eq!(e4.north(), Bitboard::from_square(sq("e5")));
        assert_eq!(e4.south_west(), Bitboard::from_square(sq("d3")));
        assert_eq!(e4.north_east(), Bitboard::from_square(sq("f5")));
        assert_eq!(e4.forward(Color::Black), Bitboard::from_square(sq("e3")));
        assert_eq!(e4.backward(Color::Black), Bitboard::from_square(sq("e5")));
    }

    #[test]
    fn test_iteration_order() {
        let bb = Bitboard::RANKS[1];
        let squares: Vec<Square> = bb.into_iter().collect();
        assert_eq!(squares.len(), 8);
        assert_eq!(squares[0], sq("a2"));
        assert_eq!(squares[7], sq("h2"));
    }
}
