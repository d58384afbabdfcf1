use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Middlegame and endgame values packed into one integer so that a single
/// add updates both halves.
///
/// <https://www.chessprogramming.org/Tapered_Eval>
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScorePair(i32);

impl ScorePair {
    pub const ZERO: ScorePair = ScorePair(0);

    #[inline(always)]
    pub const fn new(mg: i16, eg: i16) -> Self {
        ScorePair(((eg as i32) << 16) + mg as i32)
    }

    #[inline(always)]
    pub const fn mg(self) -> i16 {
        self.0 as i16
    }

    #[inline(always)]
    pub const fn eg(self) -> i16 {
        ((self.0 + 0x8000) >> 16) as i16
    }

    /// Raw packed representation, used by the pawn cache.
    #[inline(always)]
    pub const fn to_bits(self) -> u32 {
        self.0 as u32
    }

    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        ScorePair(bits as i32)
    }
}

impl Add for ScorePair {
    type Output = ScorePair;
    #[inline(always)]
    fn add(self, rhs: ScorePair) -> ScorePair {
        ScorePair(self.0 + rhs.0)
    }
}

impl Sub for ScorePair {
    type Output = ScorePair;
    #[inline(always)]
    fn sub(self, rhs: ScorePair) -> ScorePair {
        ScorePair(self.0 - rhs.0)
    }
}

impl Neg for ScorePair {
    type Output = ScorePair;
    #[inline(always)]
    fn neg(self) -> ScorePair {
        ScorePair(-self.0)
    }
}

impl Mul<i32> for ScorePair {
    type Output = ScorePair;
    #[inline(always)]
    fn mul(self, rhs: i32) -> ScorePair {
        ScorePair(self.0 * rhs)
    }
}

impl AddAssign for ScorePair {
    #[inline(always)]
    fn add_assign(&mut self, rhs: ScorePair) {
        self.0 += rhs.0;
    }
}

impl SubAssign for ScorePair {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: ScorePair) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<i32> for ScorePair {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: i32) {
        self.0 *= rhs;
    }
}

impl Sum for ScorePair {
    fn sum<I: Iterator<Item = ScorePair>>(iter: I) -> ScorePair {
        iter.fold(ScorePair::ZERO, |acc, s| acc + s)
    }
}

impl fmt::Debug for ScorePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg(), self.eg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_negative_halves() {
        let s = ScorePair::new(-35, 12);
        assert_eq!(s.mg(), -35);
        assert_eq!(s.eg(), 12);

        let s = ScorePair::new(40, -90);
        assert_eq!(s.mg(), 40);
        assert_eq!(s.eg(), -90);
    }

    #[test]
    fn test_arithmetic_keeps_halves_independent() {
        let a = ScorePair::new(10, -20);
        let b = ScorePair::new(-30, 5);

        assert_eq!(a + b, ScorePair::new(-20, -15));
        assert_eq!(a - b, ScorePair::new(40, -25));
        assert_eq!(-a, ScorePair::new(-10, 20));
        assert_eq!(b * 3, ScorePair::new(-90, 15));
        assert_eq!([a, b, a].into_iter().sum::<ScorePair>(), ScorePair::new(-10, -35));
    }

    #[test]
    fn test_bits_round_trip() {
        let s = ScorePair::new(-1, -1);
        assert_eq!(ScorePair::from_bits(s.to_bits()), s);
    }
}
