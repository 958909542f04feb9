//! Piece catalog: the movement modes of every piece kind.

use shogi_core::{Color, PieceKind};

/// One geometric movement mode.
///
/// Directions are `(file_delta, rank_delta)` pairs written from Black's point
/// of view; [`Movement::directions_for`] flips the rank for White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// One square straight forward.
    Step,
    /// One square straight backward.
    BackStep,
    /// One square left or right.
    SideStep,
    /// One square diagonally forward (left and right).
    FrontEdge,
    /// One square diagonally backward (left and right).
    BackEdge,
    /// Two ranks forward and one file to either side, jumping.
    KnightJump,
    /// Any distance straight forward.
    SlideForward,
    /// Any distance forward or backward along the file.
    SlideVertical,
    /// Any distance left or right along the rank.
    SlideHorizontal,
    /// Any distance along the four diagonals.
    SlideDiagonal,
}

impl Movement {
    /// Returns true for modes that travel along a ray until blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(
            self,
            Movement::SlideForward
                | Movement::SlideVertical
                | Movement::SlideHorizontal
                | Movement::SlideDiagonal
        )
    }

    /// Direction vectors as seen by Black.
    pub const fn directions(self) -> &'static [(i8, i8)] {
        match self {
            Movement::Step | Movement::SlideForward => &[(0, 1)],
            Movement::BackStep => &[(0, -1)],
            Movement::SideStep | Movement::SlideHorizontal => &[(-1, 0), (1, 0)],
            Movement::FrontEdge => &[(-1, 1), (1, 1)],
            Movement::BackEdge => &[(-1, -1), (1, -1)],
            Movement::KnightJump => &[(-1, 2), (1, 2)],
            Movement::SlideVertical => &[(0, 1), (0, -1)],
            Movement::SlideDiagonal => &[(-1, 1), (1, 1), (-1, -1), (1, -1)],
        }
    }

    /// Direction vectors for a piece of `color`.
    pub fn directions_for(self, color: Color) -> impl Iterator<Item = (i8, i8)> {
        let forward = color.forward();
        self.directions()
            .iter()
            .map(move |&(file, rank)| (file, rank * forward))
    }
}

const GOLD: &[Movement] = &[
    Movement::Step,
    Movement::BackStep,
    Movement::SideStep,
    Movement::FrontEdge,
];

const KING: &[Movement] = &[
    Movement::Step,
    Movement::BackStep,
    Movement::SideStep,
    Movement::FrontEdge,
    Movement::BackEdge,
];

/// Returns the movement modes of a piece kind.
///
/// Promoted pawn, lance, knight and silver move like gold. Horse and dragon
/// keep their slides and add a single step in every direction.
pub const fn movement_modes(kind: PieceKind) -> &'static [Movement] {
    match kind {
        PieceKind::Pawn => &[Movement::Step],
        PieceKind::Lance => &[Movement::SlideForward],
        PieceKind::Knight => &[Movement::KnightJump],
        PieceKind::Silver => &[Movement::Step, Movement::FrontEdge, Movement::BackEdge],
        PieceKind::Gold
        | PieceKind::Tokin
        | PieceKind::PromotedLance
        | PieceKind::PromotedKnight
        | PieceKind::PromotedSilver => GOLD,
        PieceKind::Bishop => &[Movement::SlideDiagonal],
        PieceKind::Rook => &[Movement::SlideVertical, Movement::SlideHorizontal],
        PieceKind::King => KING,
        PieceKind::Horse => &[
            Movement::SlideDiagonal,
            Movement::Step,
            Movement::BackStep,
            Movement::SideStep,
        ],
        PieceKind::Dragon => &[
            Movement::SlideVertical,
            Movement::SlideHorizontal,
            Movement::FrontEdge,
            Movement::BackEdge,
        ],
    }
}

/// Returns true if any movement mode of `kind` slides.
pub fn is_sliding_kind(kind: PieceKind) -> bool {
    movement_modes(kind).iter().any(|m| m.is_sliding())
}
