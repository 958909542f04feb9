//! Shogi position representation.

use shogi_core::{Color, File, Piece, PieceKind, Rank, SfenError, SfenParser, Square};

use crate::SquareSet;

/// Captured pieces waiting to be dropped by one color.
///
/// Kinds are stored unpromoted, in capture order. Two hands compare equal
/// when they hold the same number of each kind, whatever the order.
#[derive(Debug, Clone, Default)]
pub struct Hand(Vec<PieceKind>);

impl Hand {
    /// Creates an empty hand.
    pub const fn new() -> Self {
        Hand(Vec::new())
    }

    /// Adds a captured piece, demoting it first.
    pub fn push(&mut self, kind: PieceKind) {
        self.0.push(kind.unpromote());
    }

    /// Removes one piece of `kind`, returning false if none is held.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        match self.0.iter().position(|&k| k == kind) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Returns how many pieces of `kind` are held.
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.0.iter().filter(|&&k| k == kind).count() as u32
    }

    /// Returns true if at least one piece of `kind` is held.
    pub fn contains(&self, kind: PieceKind) -> bool {
        self.0.contains(&kind)
    }

    /// Returns the total number of pieces held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the hand is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over held pieces in capture order.
    pub fn iter(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.0.iter().copied()
    }

    /// Distinct kinds held, in SFEN hand order.
    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::HAND_KINDS
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        PieceKind::HAND_KINDS
            .iter()
            .all(|&kind| self.count(kind) == other.count(kind))
    }
}

impl Eq for Hand {}

/// Complete shogi position: board occupancy, side to move and both hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Occupant of each square, indexed by [`Square::index`].
    board: [Option<Piece>; Square::COUNT],

    /// Pieces in hand, indexed by [`Color::index`].
    hands: [Hand; 2],

    /// The side to move.
    pub side_to_move: Color,

    /// Move number (starts at 1, increments after every move).
    pub move_number: u32,
}

impl Position {
    /// Creates an empty board with Black to move.
    pub fn empty() -> Self {
        Position {
            board: [None; Square::COUNT],
            hands: [Hand::new(), Hand::new()],
            side_to_move: Color::Black,
            move_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_sfen(SfenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from an SFEN string.
    ///
    /// Besides the notation checks done by [`SfenParser`], rejects boards
    /// with more than one king of the same color.
    pub fn from_sfen(sfen: &str) -> Result<Self, SfenError> {
        let parsed = SfenParser::parse(sfen)?;
        let mut position = Position::empty();

        // Placement starts from row 9
        for (row_idx, row_str) in parsed.piece_placement.split('/').enumerate() {
            let rank = 8 - row_idx as i8;
            let mut file = 0i8;
            let mut promoted = false;

            for c in row_str.chars() {
                if c == '+' {
                    promoted = true;
                } else if let Some(digit) = c.to_digit(10) {
                    file += digit as i8;
                } else if let Some((kind, color)) = PieceKind::from_sfen_char(c) {
                    let kind = if promoted {
                        kind.promote().unwrap_or(kind)
                    } else {
                        kind
                    };
                    promoted = false;
                    if let Some(sq) = Square::from_coords(file, rank) {
                        position.board[sq.index() as usize] = Some(Piece::new(color, kind));
                    }
                    file += 1;
                }
            }
        }

        for color in Color::ALL {
            let kings = position
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings > 1 {
                return Err(SfenError::InvalidPiecePlacement(format!(
                    "{} has {} kings",
                    color, kings
                )));
            }
        }

        for (color, kind, count) in parsed.hand_counts()? {
            for _ in 0..count {
                position.hands[color.index()].push(kind);
            }
        }

        position.side_to_move = parsed.side_to_move;
        position.move_number = parsed.move_number;

        Ok(position)
    }

    /// Returns the piece placement field: row 9 first, files a to i.
    pub fn placement(&self) -> String {
        let mut placement = String::new();

        for rank in Rank::ALL.iter().rev() {
            let mut empty_count = 0;
            for file in File::ALL {
                if let Some(piece) = self.piece_at(Square::new(file, *rank)) {
                    if empty_count > 0 {
                        placement.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    placement.push_str(&piece.to_sfen());
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                placement.push_str(&empty_count.to_string());
            }
            if *rank != Rank::R1 {
                placement.push('/');
            }
        }

        placement
    }

    /// Returns the hands field: Black's pieces then White's, `-` if both are empty.
    pub fn hands_sfen(&self) -> String {
        let mut sfen = String::new();
        for color in Color::ALL {
            let hand = &self.hands[color.index()];
            for kind in PieceKind::HAND_KINDS {
                let count = hand.count(kind);
                if count == 0 {
                    continue;
                }
                if count > 1 {
                    sfen.push_str(&count.to_string());
                }
                sfen.push_str(&Piece::new(color, kind).to_sfen());
            }
        }
        if sfen.is_empty() {
            sfen.push('-');
        }
        sfen
    }

    /// Converts the position to an SFEN string.
    pub fn to_sfen(&self) -> String {
        format!("{} {}", self.repetition_key(), self.move_number)
    }

    /// Canonical encoding used to detect repeated positions: placement,
    /// side to move and hands. The move number is left out.
    pub fn repetition_key(&self) -> String {
        format!(
            "{} {} {}",
            self.placement(),
            self.side_to_move.to_sfen_char(),
            self.hands_sfen()
        )
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index() as usize]
    }

    /// Iterates over all occupied squares in row-major order (a1, b1, ..., i9).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the square of `color`'s king, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns the set of all occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    /// Returns the set of squares occupied by `color`.
    pub fn occupied_by(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|(sq, _)| sq).collect()
    }

    /// Returns the pieces in `color`'s hand.
    #[inline]
    pub fn hand(&self, color: Color) -> &Hand {
        &self.hands[color.index()]
    }

    /// Places `piece` on `sq`, returning the previous occupant.
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.board[sq.index() as usize].replace(piece)
    }

    /// Empties `sq`, returning the previous occupant.
    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.board[sq.index() as usize].take()
    }

    pub(crate) fn hand_mut(&mut self, color: Color) -> &mut Hand {
        &mut self.hands[color.index()]
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_sfen_roundtrip() {
        let pos = Position::startpos();
        assert_eq!(pos.to_sfen(), SfenParser::STARTPOS);
    }

    #[test]
    fn custom_sfen_roundtrip() {
        let sfen = "lnsgkgsnl/1r5b1/ppppppppp/9/9/2P6/PP1PPP1PP/1B5R1/+L6R1 w 2Pb 7";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.to_sfen(), sfen);
    }

    #[test]
    fn piece_at() {
        let pos = Position::startpos();
        assert_eq!(
            pos.piece_at(Square::E1),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            pos.piece_at(Square::E9),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            pos.piece_at(sq("b2")),
            Some(Piece::new(Color::Black, PieceKind::Bishop))
        );
        assert_eq!(
            pos.piece_at(sq("h8")),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(pos.piece_at(Square::E5), None);
    }

    #[test]
    fn promoted_piece_parsed() {
        let pos = Position::from_sfen("9/9/9/9/9/9/9/9/+L8").unwrap();
        assert_eq!(
            pos.piece_at(Square::A1),
            Some(Piece::new(Color::Black, PieceKind::PromotedLance))
        );
    }

    #[test]
    fn occupancy() {
        let pos = Position::startpos();
        assert_eq!(pos.occupied().count(), 40);
        assert_eq!(pos.occupied_by(Color::Black).count(), 20);
        assert_eq!(pos.occupied_by(Color::White).count(), 20);
        assert_eq!(pos.king_square(Color::Black), Some(Square::E1));
        assert_eq!(pos.king_square(Color::White), Some(Square::E9));
    }

    #[test]
    fn empty_position() {
        let pos = Position::empty();
        assert_eq!(pos.side_to_move, Color::Black);
        assert_eq!(pos.move_number, 1);
        assert!(pos.occupied().is_empty());
        assert_eq!(pos.placement(), "9/9/9/9/9/9/9/9/9");
        assert_eq!(pos.king_square(Color::Black), None);
    }

    #[test]
    fn two_kings_rejected() {
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/3KK4"),
            Err(SfenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn hands_sfen_order() {
        let mut pos = Position::empty();
        pos.hand_mut(Color::White).push(PieceKind::Pawn);
        pos.hand_mut(Color::Black).push(PieceKind::Pawn);
        pos.hand_mut(Color::Black).push(PieceKind::Dragon);
        pos.hand_mut(Color::Black).push(PieceKind::Tokin);
        assert_eq!(pos.hands_sfen(), "R2Pp");
    }

    #[test]
    fn hand_equality_ignores_order() {
        let mut a = Hand::new();
        a.push(PieceKind::Pawn);
        a.push(PieceKind::Gold);
        let mut b = Hand::new();
        b.push(PieceKind::Gold);
        b.push(PieceKind::Pawn);
        assert_eq!(a, b);

        assert!(b.take(PieceKind::Gold));
        assert!(!b.take(PieceKind::Gold));
        assert_ne!(a, b);
        assert_eq!(b.iter().collect::<Vec<_>>(), vec![PieceKind::Pawn]);
    }

    #[test]
    fn repetition_key_excludes_move_number() {
        let a = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - 1").unwrap();
        let b = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - 9").unwrap();
        let c = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w - 1").unwrap();
        assert_eq!(a.repetition_key(), b.repetition_key());
        assert_ne!(a.repetition_key(), c.repetition_key());
    }

    #[test]
    fn pieces_in_row_major_order() {
        let pos = Position::startpos();
        let first: Vec<Square> = pos.pieces().map(|(sq, _)| sq).take(2).collect();
        assert_eq!(first, vec![Square::A1, sq("b1")]);
    }
}
