//! Error types for position and notation handling.

use std::fmt;

/// Error type for square construction and algebraic-square parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Square index outside 0-63.
    IndexOutOfRange { index: usize },
    /// Algebraic notation is not a valid square (e.g. "j9").
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4).
    TooFewFields { found: usize },
    /// Invalid piece character in the placement field.
    InvalidPiece { char: char },
    /// Wrong number of ranks in the placement field (needs 8).
    InvalidRankCount { found: usize },
    /// Empty-square run digit outside 1-8 in the placement field.
    InvalidRunLength { char: char },
    /// A rank run does not total 8 squares.
    InvalidRankWidth { rank: usize, files: usize },
    /// Too many files in a rank of the placement field.
    TooManyFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b').
    InvalidSideToMove { found: String },
    /// Invalid castling character.
    InvalidCastling { char: char },
    /// Invalid en passant square.
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move counter is not an integer.
    InvalidClock { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewFields { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidRunLength { char } => {
                write!(f, "Empty-square run '{char}' in FEN must be 1-8")
            }
            FenError::InvalidRankWidth { rank, files } => {
                write!(f, "Rank {rank} covers {files} files, expected 8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { found } => {
                write!(f, "Invalid clock value '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for textual-move parsing and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move text is syntactically unparseable.
    InvalidNotation { notation: String },
    /// No legal move matches the notation.
    NoMatch { notation: String },
    /// More than one legal move matches the notation.
    Ambiguous { notation: String },
    /// The game has ended; no further moves are accepted.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            MoveError::NoMatch { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
            MoveError::Ambiguous { notation } => {
                write!(f, "Ambiguous move '{notation}'")
            }
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}
