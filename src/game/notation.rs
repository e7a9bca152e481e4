//! Resolving algebraic move text against the legal-move list.

use crate::board::{Board, LegalMoves};
use crate::error::MoveError;
use crate::types::{
    file_to_index, rank_to_index, Color, Move, MoveKind, Piece, Square, SquareSet, FILES, RANKS,
    SQUARES,
};

use super::Game;

impl Game {
    /// Resolve a move in algebraic notation against the current legal moves.
    ///
    /// Accepts castling shortcuts (`0-0`, `0-0-0`, `O-O`, `O-O-O`), long or
    /// short algebraic piece moves with optional file/rank disambiguation, an
    /// optional `x` capture marker, and `=X` promotion suffixes. Check
    /// decorations (`+`, `#`) are ignored. The notation must match exactly
    /// one legal move.
    pub fn parse_move(&self, notation: &str) -> Result<(Move, Board), MoveError> {
        let legal = self.legal_moves();
        self.resolve_move(notation, &legal)
    }

    pub(super) fn resolve_move(
        &self,
        notation: &str,
        legal: &LegalMoves,
    ) -> Result<(Move, Board), MoveError> {
        let candidate = self.candidate_from_text(notation)?;
        let mut matches = legal.iter().filter(|(mv, _)| candidate.subsumes(mv));

        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(*found),
            (None, _) => {
                #[cfg(feature = "logging")]
                log::trace!("no legal move matches '{notation}'");
                Err(MoveError::NoMatch {
                    notation: notation.to_string(),
                })
            }
            (Some(_), Some(_)) => Err(MoveError::Ambiguous {
                notation: notation.to_string(),
            }),
        }
    }

    /// Build the (possibly partially specified) move a notation string
    /// describes for the side to move.
    fn candidate_from_text(&self, notation: &str) -> Result<Move, MoveError> {
        let invalid = || MoveError::InvalidNotation {
            notation: notation.to_string(),
        };

        let text = notation.trim().trim_end_matches(['+', '#']);
        if text.is_empty() {
            return Err(invalid());
        }

        // castling shortcuts resolve to the king's travel
        if text == "0-0" || text == "O-O" {
            return Ok(self.castle_candidate(true));
        }
        if text == "0-0-0" || text == "O-O-O" {
            return Ok(self.castle_candidate(false));
        }

        let mut chars: Vec<char> = text.chars().collect();

        // leading uppercase letter names the piece kind; absent means pawn
        let piece = match chars.first() {
            Some(c) if c.is_ascii_uppercase() => {
                let piece = Piece::from_char(*c).ok_or_else(invalid)?;
                chars.remove(0);
                piece
            }
            _ => Piece::Pawn,
        };

        // trailing "=X" names the promotion kind
        let promotion = if chars.len() >= 2 && chars[chars.len() - 2] == '=' {
            let promo = Piece::from_char(chars[chars.len() - 1]).ok_or_else(invalid)?;
            chars.truncate(chars.len() - 2);
            Some(promo)
        } else {
            None
        };

        // the last two characters are always the destination square
        if chars.len() < 2 {
            return Err(invalid());
        }
        let dest: String = chars.split_off(chars.len() - 2).into_iter().collect();
        let dest: Square = dest.parse().map_err(|_| invalid())?;
        let to = SQUARES[dest.index()];

        // "x" just before the destination marks an attack
        let kind = if chars.last() == Some(&'x') {
            chars.pop();
            MoveKind::Attack
        } else {
            MoveKind::Quiet
        };

        // whatever remains restricts the departure square
        let mut from = SquareSet::UNIVERSE;
        for c in chars {
            match c {
                'a'..='h' => from &= FILES[file_to_index(c)],
                '1'..='8' => from &= RANKS[rank_to_index(c)],
                _ => return Err(invalid()),
            }
        }

        Ok(Move::new(piece, self.to_move, from, to, kind).with_promotion(promotion))
    }

    /// The concrete king move a castling shortcut names for the side to move.
    fn castle_candidate(&self, kingside: bool) -> Move {
        let back_rank = match self.to_move {
            Color::White => 0,
            Color::Black => 7,
        };
        let from = SQUARES[Square::new(back_rank, 4).index()];
        let to_file = if kingside { 6 } else { 2 };
        let to = SQUARES[Square::new(back_rank, to_file).index()];
        Move::new(Piece::King, self.to_move, from, to, MoveKind::Castle)
    }
}
