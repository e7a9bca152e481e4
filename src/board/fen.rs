//! FEN parsing and emission for the position portion of a board.

use std::str::FromStr;

use crate::error::FenError;
use crate::types::{file_to_index, rank_to_index, Color, Piece, Square, SquareSet};

use super::Board;

/// The FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are validated when present (at least the first four are
    /// required), but only the placement, castling, and en-passant fields are
    /// stored here; the side to move and the clocks belong to
    /// [`crate::game::Game`].
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let fields: Vec<&str> = fen.split_whitespace().collect();

        if fields.len() < 4 {
            return Err(FenError::TooFewFields {
                found: fields.len(),
            });
        }

        // Piece placement, rank 8 down to rank 1
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidRunLength { char: c });
                    }
                    file += run as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.place_piece(
                        SquareSet::from_square(Square::new(7 - rank_idx, file)),
                        piece,
                        color,
                    );
                    file += 1;
                }
            }
            // every rank run must account for exactly 8 squares
            if file != 8 {
                return Err(FenError::InvalidRankWidth {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Side to move (validated; stored by Game)
        match fields[1] {
            "w" | "b" => {}
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        // Castling rights
        for c in fields[2].chars() {
            match c {
                'K' => board.castling.set(Color::White, true),
                'Q' => board.castling.set(Color::White, false),
                'k' => board.castling.set(Color::Black, true),
                'q' => board.castling.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // En passant target
        if fields[3] != "-" {
            let chars: Vec<char> = fields[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                let sq = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
                board.en_passant = SquareSet::from_square(sq);
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                });
            }
        }

        // Clocks (validated here, parsed again by Game)
        for field in fields.iter().skip(4).take(2) {
            if field.parse::<u32>().is_err() {
                return Err(FenError::InvalidClock {
                    found: (*field).to_string(),
                });
            }
        }

        Ok(board)
    }

    /// Emit the placement field of FEN notation (rank 8 down to rank 1).
    #[must_use]
    pub fn fen_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((piece, color)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
