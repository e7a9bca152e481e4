//! A bitboard chess position engine.
//!
//! Positions are held as 64-bit square-sets in LERF mapping (a1 = bit 0).
//! Sliding-piece attacks ride Kogge-Stone directional fills, move generation
//! runs pseudo-legal-then-filter, and a [`Game`] tracks history, clocks, and
//! terminal status (checkmate, stalemate, threefold repetition, fifty-move
//! rule). Positions parse from and emit FEN; moves resolve from short
//! algebraic notation.
//!
//! # Example
//! ```
//! use chess_core::Game;
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//! game.play_move("e4").unwrap();
//! game.play_move("e5").unwrap();
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod targets;
pub mod types;

pub use board::{Board, LegalMoves};
pub use error::{FenError, MoveError, SquareError};
pub use game::{choose_random, Game, Status};
pub use types::{CastlingRights, Color, Move, MoveKind, Piece, Square, SquareSet};

pub use board::START_FEN;
