//! Position representation and the rules machinery built on it.
//!
//! A [`Board`] is a piece placement plus castling rights and an en-passant
//! target; it knows nothing about the side to move, clocks, or history (those
//! belong to [`crate::game::Game`]). Boards are plain values with O(1) copies,
//! so move generation can cheaply simulate candidate moves on scratch copies.

mod fen;
mod make_move;
mod movegen;

#[cfg(debug_assertions)]
mod debug;

#[cfg(test)]
mod tests;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{CastlingRights, Color, Piece, Square, SquareSet, PIECE_KINDS};

pub use fen::START_FEN;
pub use movegen::LegalMoves;

/// A chess position: piece placement, castling rights, en-passant target.
///
/// Equality compares the piece-kind sets, the color sets, and the castling
/// rights. The en-passant target is deliberately ignored so that threefold
/// repetition treats positions differing only in en-passant availability as
/// equal.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    /// Piece locations by kind, regardless of color.
    pieces: [SquareSet; 6],
    /// Piece locations by color, regardless of kind.
    colors: [SquareSet; 2],
    occupied: SquareSet,
    unoccupied: SquareSet,
    /// At most one square: the square behind a pawn that just double-pushed.
    en_passant: SquareSet,
    castling: CastlingRights,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.place_piece(
                SquareSet::from_square(Square::new(0, file)),
                *piece,
                Color::White,
            );
            board.place_piece(
                SquareSet::from_square(Square::new(1, file)),
                Piece::Pawn,
                Color::White,
            );
            board.place_piece(
                SquareSet::from_square(Square::new(7, file)),
                *piece,
                Color::Black,
            );
            board.place_piece(
                SquareSet::from_square(Square::new(6, file)),
                Piece::Pawn,
                Color::Black,
            );
        }
        board.castling = CastlingRights::all();
        board
    }

    /// A board with no pieces, no castling rights, no en-passant target.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [SquareSet::EMPTY; 6],
            colors: [SquareSet::EMPTY; 2],
            occupied: SquareSet::EMPTY,
            unoccupied: SquareSet::UNIVERSE,
            en_passant: SquareSet::EMPTY,
            castling: CastlingRights::none(),
        }
    }

    /// All squares holding a piece of the given kind, either color.
    #[inline]
    #[must_use]
    pub const fn pieces(&self, piece: Piece) -> SquareSet {
        self.pieces[piece.index()]
    }

    /// All squares holding a piece of the given color.
    #[inline]
    #[must_use]
    pub const fn by_color(&self, color: Color) -> SquareSet {
        self.colors[color.index()]
    }

    /// All occupied squares.
    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> SquareSet {
        self.occupied
    }

    /// All empty squares.
    #[inline]
    #[must_use]
    pub const fn unoccupied(&self) -> SquareSet {
        self.unoccupied
    }

    /// The en-passant target square-set (empty or a single square).
    #[inline]
    #[must_use]
    pub const fn en_passant(&self) -> SquareSet {
        self.en_passant
    }

    /// The castling rights of both colors.
    #[inline]
    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// The king squares of the given color.
    #[inline]
    #[must_use]
    pub fn king(&self, color: Color) -> SquareSet {
        self.pieces[Piece::King.index()] & self.colors[color.index()]
    }

    /// The piece kind and color on a square, or `None` if it is empty.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let mask = SquareSet::from_square(sq);
        if !self.occupied.intersects(mask) {
            return None;
        }
        let color = if self.colors[Color::White.index()].intersects(mask) {
            Color::White
        } else {
            Color::Black
        };
        PIECE_KINDS
            .iter()
            .find(|p| self.pieces[p.index()].intersects(mask))
            .map(|p| (*p, color))
    }

    /// Sum of material points for the given color.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        let own = self.colors[color.index()];
        PIECE_KINDS
            .iter()
            .map(|p| (self.pieces[p.index()] & own).count() as i32 * p.points())
            .sum()
    }

    /// Place a piece of `piece`/`color` on every square of `mask`, overwriting
    /// whatever sits there. Keeps all derived sets in sync.
    pub(crate) fn place_piece(&mut self, mask: SquareSet, piece: Piece, color: Color) {
        let not_mask = !mask;
        self.occupied |= mask;
        self.unoccupied &= not_mask;
        self.colors[color.index()] |= mask;
        self.colors[color.opponent().index()] &= not_mask;
        for p in PIECE_KINDS {
            if p == piece {
                self.pieces[p.index()] |= mask;
            } else {
                self.pieces[p.index()] &= not_mask;
            }
        }
    }

    /// Remove any pieces on the squares of `mask`.
    pub(crate) fn remove_piece(&mut self, mask: SquareSet) {
        let not_mask = !mask;
        self.occupied &= not_mask;
        self.unoccupied |= mask;
        self.colors[Color::White.index()] &= not_mask;
        self.colors[Color::Black.index()] &= not_mask;
        for p in PIECE_KINDS {
            self.pieces[p.index()] &= not_mask;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.colors == other.colors
            && self.castling == other.castling
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((piece, color)) => write!(f, "{} ", piece.to_fen_char(color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
