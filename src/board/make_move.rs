//! Applying a move to a board.

use crate::types::{Color, Move, Piece, SquareSet};

use super::Board;

impl Board {
    /// Apply a single move, updating every square-set accordingly.
    ///
    /// The move must be fully specified (one square in each of `from` and
    /// `to`). Castling is applied as two consecutive calls, king first, then
    /// rook.
    pub fn make_move(&mut self, mv: &Move) {
        self.place_piece(mv.to(), mv.piece(), mv.color());
        self.remove_piece(mv.from());

        if let Some(promotion) = mv.promotion() {
            // replaces the pawn just placed
            self.place_piece(mv.to(), promotion, mv.color());
        }

        if mv.piece() == Piece::Pawn {
            if self.en_passant == mv.to() {
                // the captured pawn sits one step behind the target square
                let captured = match mv.color() {
                    Color::White => mv.to().shift_south(),
                    Color::Black => mv.to().shift_north(),
                };
                self.remove_piece(captured);
                self.en_passant = SquareSet::EMPTY;
            } else if mv.to() == mv.from().shift_north().shift_north() {
                self.en_passant = mv.from().shift_north();
            } else if mv.to() == mv.from().shift_south().shift_south() {
                self.en_passant = mv.from().shift_south();
            } else {
                self.en_passant = SquareSet::EMPTY;
            }
        } else {
            self.en_passant = SquareSet::EMPTY;
        }

        match mv.piece() {
            Piece::King => self.castling.clear_color(mv.color()),
            Piece::Rook => {
                if mv.from().intersects(SquareSet::FILE_H) {
                    self.castling.remove(mv.color(), true);
                }
                if mv.from().intersects(SquareSet::FILE_A) {
                    self.castling.remove(mv.color(), false);
                }
            }
            _ => {}
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();
    }
}
