//! Shogi piece representation.

use crate::Color;

/// The fourteen kinds of shogi pieces: eight base kinds and the six promoted
/// forms. King and gold have no promoted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Lance = 1,
    Knight = 2,
    Silver = 3,
    Gold = 4,
    Bishop = 5,
    Rook = 6,
    King = 7,
    /// Promoted pawn.
    Tokin = 8,
    PromotedLance = 9,
    PromotedKnight = 10,
    PromotedSilver = 11,
    /// Promoted bishop.
    Horse = 12,
    /// Promoted rook.
    Dragon = 13,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 14] = [
        PieceKind::Pawn,
        PieceKind::Lance,
        PieceKind::Knight,
        PieceKind::Silver,
        PieceKind::Gold,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::King,
        PieceKind::Tokin,
        PieceKind::PromotedLance,
        PieceKind::PromotedKnight,
        PieceKind::PromotedSilver,
        PieceKind::Horse,
        PieceKind::Dragon,
    ];

    /// Kinds that can sit in a hand, in SFEN hand order.
    pub const HAND_KINDS: [PieceKind; 7] = [
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Gold,
        PieceKind::Silver,
        PieceKind::Knight,
        PieceKind::Lance,
        PieceKind::Pawn,
    ];

    /// Returns the index of this piece kind (0-13).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the six promoted forms.
    #[inline]
    pub const fn is_promoted(self) -> bool {
        matches!(
            self,
            PieceKind::Tokin
                | PieceKind::PromotedLance
                | PieceKind::PromotedKnight
                | PieceKind::PromotedSilver
                | PieceKind::Horse
                | PieceKind::Dragon
        )
    }

    /// Returns the promoted form, or `None` if this kind cannot promote.
    #[inline]
    pub const fn promote(self) -> Option<PieceKind> {
        match self {
            PieceKind::Pawn => Some(PieceKind::Tokin),
            PieceKind::Lance => Some(PieceKind::PromotedLance),
            PieceKind::Knight => Some(PieceKind::PromotedKnight),
            PieceKind::Silver => Some(PieceKind::PromotedSilver),
            PieceKind::Bishop => Some(PieceKind::Horse),
            PieceKind::Rook => Some(PieceKind::Dragon),
            _ => None,
        }
    }

    /// Returns true if this kind has a promoted form.
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.promote().is_some()
    }

    /// Returns the unpromoted form (identity for base kinds).
    #[inline]
    pub const fn unpromote(self) -> PieceKind {
        match self {
            PieceKind::Tokin => PieceKind::Pawn,
            PieceKind::PromotedLance => PieceKind::Lance,
            PieceKind::PromotedKnight => PieceKind::Knight,
            PieceKind::PromotedSilver => PieceKind::Silver,
            PieceKind::Horse => PieceKind::Bishop,
            PieceKind::Dragon => PieceKind::Rook,
            base => base,
        }
    }

    /// Returns true if a captured piece of this kind may be dropped.
    #[inline]
    pub const fn is_droppable(self) -> bool {
        !self.is_promoted() && !matches!(self, PieceKind::King)
    }

    /// Returns the lowercase SFEN letter of the base kind.
    pub const fn base_char(self) -> char {
        match self.unpromote() {
            PieceKind::Pawn => 'p',
            PieceKind::Lance => 'l',
            PieceKind::Knight => 'n',
            PieceKind::Silver => 's',
            PieceKind::Gold => 'g',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            _ => 'k',
        }
    }

    /// Parses a base-kind SFEN letter (either case) into a kind and color.
    ///
    /// Uppercase letters are Black, lowercase are White.
    pub const fn from_sfen_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'l' => PieceKind::Lance,
            'n' => PieceKind::Knight,
            's' => PieceKind::Silver,
            'g' => PieceKind::Gold,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Lance => "Lance",
            PieceKind::Knight => "Knight",
            PieceKind::Silver => "Silver",
            PieceKind::Gold => "Gold",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::King => "King",
            PieceKind::Tokin => "Tokin",
            PieceKind::PromotedLance => "Promoted Lance",
            PieceKind::PromotedKnight => "Promoted Knight",
            PieceKind::PromotedSilver => "Promoted Silver",
            PieceKind::Horse => "Horse",
            PieceKind::Dragon => "Dragon",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: a kind owned by a color.
///
/// The promoted flag is carried by the kind itself, so a piece can never be
/// "promoted" while holding a base kind or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Returns true if the piece is a promoted form.
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.kind.is_promoted()
    }

    /// Returns the SFEN token for this piece (e.g. `"P"`, `"+r"`).
    pub fn to_sfen(self) -> String {
        let letter = match self.color {
            Color::Black => self.kind.base_char().to_ascii_uppercase(),
            Color::White => self.kind.base_char(),
        };
        if self.is_promoted() {
            format!("+{}", letter)
        } else {
            letter.to_string()
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
