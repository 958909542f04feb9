//! Square set representation and operations.
//!
//! A square set is a 128-bit integer where each of the low 81 bits
//! represents a square on the shogi board. Set algebra on whole boards
//! (occupancy, attack unions, drop bands) becomes a handful of bit operations.

use shogi_core::{Color, Rank, Square};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub};

/// A set of board squares.
///
/// Bit 0 = a1, bit 1 = b1, ..., bit 80 = i9 (row-by-row mapping).
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SquareSet(u128);

impl SquareSet {
    /// Empty set (no squares).
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Full set (all 81 squares).
    pub const FULL: SquareSet = SquareSet((1u128 << Square::COUNT) - 1);

    /// Creates a set with a single square.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1u128 << sq.index())
    }

    /// Creates a set covering a whole rank.
    #[inline]
    pub const fn rank(rank: Rank) -> Self {
        SquareSet(0x1FF << (rank.index() as u32 * 9))
    }

    /// Returns the `depth` ranks farthest from `color`'s own side: rows
    /// 9, 8, ... for Black and rows 1, 2, ... for White.
    pub fn far_ranks(color: Color, depth: u8) -> Self {
        let depth = depth.min(9) as usize;
        let all = Rank::ALL;
        let ranks = match color {
            Color::Black => &all[9 - depth..],
            Color::White => &all[..depth],
        };
        ranks
            .iter()
            .fold(SquareSet::EMPTY, |set, &rank| set | SquareSet::rank(rank))
    }

    /// Returns true if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u128 << sq.index())) != 0
    }

    /// Adds the given square.
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// Removes the given square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1u128 << sq.index());
    }

    /// Pops and returns the lowest-indexed square.
    #[inline]
    pub fn pop_lowest(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let index = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Square::from_index(index)
        }
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SquareSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Sub for SquareSet {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & !rhs.0)
    }
}

impl Not for SquareSet {
    type Output = Self;
    /// Complement within the 81 board squares.
    #[inline]
    fn not(self) -> Self::Output {
        SquareSet(!self.0 & Self::FULL.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.set(sq);
        }
        set
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SquareSet({:#x})", self.0)?;
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", rank)?;
            for file in shogi_core::File::ALL {
                if self.contains(Square::new(file, *rank)) {
                    write!(f, "X ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h i")
    }
}

/// Iterator over the squares of a set, lowest index first.
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lowest()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shogi_core::File;

    #[test]
    fn from_square() {
        let set = SquareSet::from_square(Square::A1);
        assert!(set.contains(Square::A1));
        assert!(!set.contains(Square::I9));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn count_and_complement() {
        assert_eq!(SquareSet::EMPTY.count(), 0);
        assert_eq!(SquareSet::FULL.count(), 81);
        assert_eq!((!SquareSet::EMPTY).count(), 81);
        assert!((!SquareSet::FULL).is_empty());
    }

    #[test]
    fn rank_masks() {
        let first = SquareSet::rank(Rank::R1);
        assert_eq!(first.count(), 9);
        assert!(first.contains(Square::A1));
        assert!(first.contains(Square::I1));
        assert!(!first.contains(Square::new(File::A, Rank::R2)));
        assert!(SquareSet::rank(Rank::R9).contains(Square::I9));
    }

    #[test]
    fn far_ranks() {
        let black = SquareSet::far_ranks(Color::Black, 3);
        assert_eq!(black.count(), 27);
        assert!(black.contains(Square::new(File::E, Rank::R7)));
        assert!(!black.contains(Square::new(File::E, Rank::R6)));

        let white = SquareSet::far_ranks(Color::White, 2);
        assert_eq!(white.count(), 18);
        assert!(white.contains(Square::new(File::E, Rank::R2)));
        assert!(!white.contains(Square::new(File::E, Rank::R3)));

        assert!(SquareSet::far_ranks(Color::Black, 0).is_empty());
    }

    #[test]
    fn set_operations() {
        let a = SquareSet::from_square(Square::A1) | SquareSet::from_square(Square::E5);
        let b = SquareSet::from_square(Square::E5);
        assert_eq!((a & b).count(), 1);
        assert_eq!(a - b, SquareSet::from_square(Square::A1));
    }

    #[test]
    fn iterator() {
        let set: SquareSet = [Square::I9, Square::A1, Square::E5].into_iter().collect();
        let squares: Vec<Square> = set.into_iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::E5, Square::I9]);
    }
}
