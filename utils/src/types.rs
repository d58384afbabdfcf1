use std::error::Error;
use std::fmt;
use std::str::FromStr;

use cozy_chess::Color;

use crate::bitboard::Bitboard;

/// Board square, 0..63, rank-major (a1 = 0, h1 = 7, a8 = 56).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const NUM: usize = 64;

    #[inline(always)]
    pub const fn new(index: u8) -> Self {
        debug_assert!(index < 64, "square out of range");
        Self(index)
    }

    #[inline(always)]
    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        Self::new(rank * 8 + file)
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline(always)]
    pub const fn flip_rank(self) -> Self {
        Self(self.0 ^ 56)
    }

    /// The square as seen from `color`'s side of the board.
    #[inline(always)]
    pub const fn relative_to(self, color: Color) -> Self {
        match color {
            Color::White => self,
            Color::Black => self.flip_rank(),
        }
    }

    /// Rank counted from `color`'s back rank (0..7).
    #[inline(always)]
    pub const fn relative_rank(self, color: Color) -> u8 {
        self.relative_to(color).rank()
    }

    /// Chebyshev (king-move) distance.
    #[inline(always)]
    pub const fn distance(self, other: Square) -> u8 {
        let rank_diff = self.rank().abs_diff(other.rank());
        let file_diff = self.file().abs_diff(other.file());
        if rank_diff > file_diff {
            rank_diff
        } else {
            file_diff
        }
    }

    #[inline(always)]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Square offset by whole ranks and files, if it stays on the board.
    #[inline(always)]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank() as i8 + rank_delta;
        let file = self.file() as i8 + file_delta;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square::from_rank_file(rank as u8, file as u8))
        }
    }
}

impl From<cozy_chess::Square> for Square {
    #[inline(always)]
    fn from(square: cozy_chess::Square) -> Self {
        Square::new(square as u8)
    }
}

impl From<Square> for cozy_chess::Square {
    #[inline(always)]
    fn from(square: Square) -> Self {
        cozy_chess::Square::index(square.index())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", cozy_chess::Square::from(*self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError(pub String);

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square '{}'", self.0)
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<cozy_chess::Square>()
            .map(Square::from)
            .map_err(|_| ParseSquareError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.to_string(), "e4");

        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_relative_rank() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!(e2.relative_rank(Color::White), 1);
        assert_eq!(e2.relative_rank(Color::Black), 6);
        assert_eq!(e2.relative_to(Color::Black).to_string(), "e7");
    }

    #[test]
    fn test_distance() {
        let a1: Square = "a1".parse().unwrap();
        let h8: Square = "h8".parse().unwrap();
        let c2: Square = "c2".parse().unwrap();
        assert_eq!(a1.distance(h8), 7);
        assert_eq!(a1.distance(c2), 2);
        assert_eq!(c2.distance(c2), 0);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(1, 2).map(|s| s.to_string()), Some("c2".to_string()));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, 8), None);
    }
}
