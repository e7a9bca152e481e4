//! Move type and notation encoding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use super::square_set::SquareSet;

/// The kind of a half-move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// A move to an empty square.
    Quiet,
    /// A capture, including en passant.
    Attack,
    /// A castling move (emitted for both the king and rook halves).
    Castle,
}

/// A single half-move.
///
/// `from` and `to` are square-sets; a fully specified move has exactly one
/// square in each. A partially specified move, used only as an input to
/// notation matching, may carry several candidate squares in `from` — see
/// [`Move::subsumes`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    piece: Piece,
    color: Color,
    from: SquareSet,
    to: SquareSet,
    kind: MoveKind,
    promotion: Option<Piece>,
}

impl Move {
    /// Create a move with no promotion.
    #[inline]
    #[must_use]
    pub const fn new(
        piece: Piece,
        color: Color,
        from: SquareSet,
        to: SquareSet,
        kind: MoveKind,
    ) -> Self {
        Move {
            piece,
            color,
            from,
            to,
            kind,
            promotion: None,
        }
    }

    /// Attach a promotion kind (or clear it with `None`).
    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, promotion: Option<Piece>) -> Self {
        self.promotion = promotion;
        self
    }

    /// The kind of piece moving.
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// The color of the piece moving.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The departure square-set.
    #[inline]
    #[must_use]
    pub const fn from(self) -> SquareSet {
        self.from
    }

    /// The target square-set.
    #[inline]
    #[must_use]
    pub const fn to(self) -> SquareSet {
        self.to
    }

    /// The kind of move.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// The promotion kind, if this move promotes.
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// The departure square of a fully specified move.
    #[inline]
    #[must_use]
    pub fn from_square(self) -> Square {
        debug_assert!(!self.from.is_empty(), "move has no departure square");
        Square::from_index(self.from.0.trailing_zeros() as usize)
    }

    /// The target square of a fully specified move.
    #[inline]
    #[must_use]
    pub fn to_square(self) -> Square {
        debug_assert!(!self.to.is_empty(), "move has no target square");
        Square::from_index(self.to.0.trailing_zeros() as usize)
    }

    /// Encode the move in UCI long algebraic notation, e.g. "e2e4" or "e7e8q".
    #[must_use]
    pub fn uci(self) -> String {
        let mut out = format!("{}{}", self.from_square(), self.to_square());
        if let Some(promo) = self.promotion {
            out.push(promo.to_char());
        }
        out
    }

    /// Encode the move in fully disambiguated short algebraic notation,
    /// e.g. "Qa1c3", "exd6", "a7a8=Q", "0-0".
    #[must_use]
    pub fn pgn(self) -> String {
        if self.kind == MoveKind::Castle {
            return if self.to_square().file() > self.from_square().file() {
                "0-0".to_string()
            } else {
                "0-0-0".to_string()
            };
        }
        let mut out = String::new();
        if self.piece != Piece::Pawn {
            out.push(self.piece.to_char().to_ascii_uppercase());
        }
        out.push_str(&self.from_square().to_string());
        if self.kind == MoveKind::Attack {
            out.push('x');
        }
        out.push_str(&self.to_square().to_string());
        if let Some(promo) = self.promotion {
            out.push('=');
            out.push(promo.to_char().to_ascii_uppercase());
        }
        out
    }

    /// Partial-match primitive for notation resolution.
    ///
    /// Returns true iff every field except `from` equals the concrete move's,
    /// and this move's `from` set intersects the concrete move's `from` set.
    #[inline]
    #[must_use]
    pub fn subsumes(self, concrete: &Move) -> bool {
        self.piece == concrete.piece
            && self.color == concrete.color
            && self.to == concrete.to
            && self.kind == concrete.kind
            && self.promotion == concrete.promotion
            && self.from.intersects(concrete.from)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RANKS, SQUARES};

    #[test]
    fn test_uci_encoding() {
        let mv = Move::new(
            Piece::Pawn,
            Color::White,
            SQUARES[12],
            SQUARES[28],
            MoveKind::Quiet,
        );
        assert_eq!(mv.uci(), "e2e4");

        let promo = Move::new(
            Piece::Pawn,
            Color::White,
            SQUARES[52],
            SQUARES[60],
            MoveKind::Quiet,
        )
        .with_promotion(Some(Piece::Queen));
        assert_eq!(promo.uci(), "e7e8q");
    }

    #[test]
    fn test_pgn_encoding() {
        let mv = Move::new(
            Piece::Queen,
            Color::White,
            SQUARES[0],
            SQUARES[18],
            MoveKind::Quiet,
        );
        assert_eq!(mv.pgn(), "Qa1c3");

        let capture = Move::new(
            Piece::Pawn,
            Color::White,
            SQUARES[35],
            SQUARES[44],
            MoveKind::Attack,
        );
        assert_eq!(capture.pgn(), "d5xe6");

        let promo = Move::new(
            Piece::Pawn,
            Color::White,
            SQUARES[48],
            SQUARES[57],
            MoveKind::Attack,
        )
        .with_promotion(Some(Piece::Queen));
        assert_eq!(promo.pgn(), "a7xb8=Q");
    }

    #[test]
    fn test_pgn_castles() {
        let kingside = Move::new(
            Piece::King,
            Color::White,
            SQUARES[4],
            SQUARES[6],
            MoveKind::Castle,
        );
        assert_eq!(kingside.pgn(), "0-0");

        let queenside = Move::new(
            Piece::King,
            Color::Black,
            SQUARES[60],
            SQUARES[58],
            MoveKind::Castle,
        );
        assert_eq!(queenside.pgn(), "0-0-0");
    }

    #[test]
    fn test_subsumes_matches_on_intersecting_from() {
        let concrete = Move::new(
            Piece::Queen,
            Color::White,
            SQUARES[0],
            SQUARES[1],
            MoveKind::Quiet,
        );
        let partial = Move::new(
            Piece::Queen,
            Color::White,
            RANKS[0],
            SQUARES[1],
            MoveKind::Quiet,
        );
        assert!(partial.subsumes(&concrete));
    }

    #[test]
    fn test_subsumes_rejects_disjoint_from() {
        let concrete = Move::new(
            Piece::Queen,
            Color::White,
            SQUARES[0],
            SQUARES[1],
            MoveKind::Quiet,
        );
        let partial = Move::new(
            Piece::Queen,
            Color::White,
            RANKS[7],
            SQUARES[1],
            MoveKind::Quiet,
        );
        assert!(!partial.subsumes(&concrete));
    }

    #[test]
    fn test_subsumes_rejects_other_field_mismatch() {
        let concrete = Move::new(
            Piece::Queen,
            Color::White,
            SQUARES[0],
            SQUARES[1],
            MoveKind::Quiet,
        );
        let wrong_piece = Move::new(
            Piece::Rook,
            Color::White,
            RANKS[0],
            SQUARES[1],
            MoveKind::Quiet,
        );
        let wrong_kind = Move::new(
            Piece::Queen,
            Color::White,
            RANKS[0],
            SQUARES[1],
            MoveKind::Attack,
        );
        let wrong_promo = Move::new(
            Piece::Queen,
            Color::White,
            RANKS[0],
            SQUARES[1],
            MoveKind::Quiet,
        )
        .with_promotion(Some(Piece::Queen));
        assert!(!wrong_piece.subsumes(&concrete));
        assert!(!wrong_kind.subsumes(&concrete));
        assert!(!wrong_promo.subsumes(&concrete));
    }

    #[test]
    fn test_move_equality_is_bit_identical() {
        let a = Move::new(
            Piece::Knight,
            Color::Black,
            SQUARES[57],
            SQUARES[42],
            MoveKind::Quiet,
        );
        let b = Move::new(
            Piece::Knight,
            Color::Black,
            SQUARES[57],
            SQUARES[42],
            MoveKind::Quiet,
        );
        assert_eq!(a, b);
        assert_ne!(a, b.with_promotion(Some(Piece::Knight)));
    }
}
