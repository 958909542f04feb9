//! Player color representation.

/// The two sides of a shogi game.
///
/// Black (sente) moves first and starts on rows 1-3; White (gote) starts on
/// rows 7-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Both colors, Black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the index (0 for Black, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction of "forward" for this color (+1 for Black, -1 for White).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// Returns the SFEN side-to-move character.
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// Parses an SFEN side-to-move character.
    #[inline]
    pub const fn from_sfen_char(c: char) -> Option<Self> {
        match c {
            'b' | 'B' => Some(Color::Black),
            'w' | 'W' => Some(Color::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn color_index() {
        assert_eq!(Color::Black.index(), 0);
        assert_eq!(Color::White.index(), 1);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.forward(), -1);
    }

    #[test]
    fn sfen_char() {
        assert_eq!(Color::from_sfen_char('b'), Some(Color::Black));
        assert_eq!(Color::from_sfen_char('w'), Some(Color::White));
        assert_eq!(Color::from_sfen_char('x'), None);
        assert_eq!(Color::White.to_sfen_char(), 'w');
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Black), "Black");
        assert_eq!(format!("{}", Color::White), "White");
    }
}
