//! Game state: board history, clocks, terminal status, and the play loop.

mod notation;


use std::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, LegalMoves};
use crate::error::{FenError, MoveError};
use crate::types::{Color, Move, MoveKind, Piece};

/// Terminal-status bitset. An empty status means the game may continue.
///
/// Checkmate and stalemate are mutually exclusive per position; threefold and
/// fifty-move can co-occur with either.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Status(u8);

impl Status {
    /// The game may continue.
    pub const NONE: Status = Status(0);
    pub const CHECKMATE: Status = Status(1);
    pub const STALEMATE: Status = Status(1 << 1);
    pub const THREEFOLD: Status = Status(1 << 2);
    pub const FIFTY_MOVE: Status = Status(1 << 3);

    /// Returns true if no status bit is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Status) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Status {
    type Output = Status;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Status(self.0 | rhs.0)
    }
}

impl BitOrAssign for Status {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A game of chess: the current board, the boards and moves that led to it,
/// the side to move, the clocks, and the terminal status.
#[derive(Clone, Debug)]
pub struct Game {
    current: Board,
    /// Prior boards, deepest first (the starting position at index 0).
    boards: Vec<Board>,
    /// Moves applied, parallel to `boards`.
    moves: Vec<Move>,
    to_move: Color,
    /// Plies since the last pawn move or non-quiet move.
    halfmove_clock: u32,
    /// Increments after each of Black's moves.
    fullmove_number: u32,
    status: Status,
}

impl Game {
    /// Start a game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut game = Game {
            current: Board::new(),
            boards: Vec::new(),
            moves: Vec::new(),
            to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            status: Status::NONE,
        };
        game.status = game.initial_status();
        game
    }

    /// Start a game from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let current = Board::from_fen(fen)?;
        let fields: Vec<&str> = fen.split_whitespace().collect();
        // field presence and syntax were validated by Board::from_fen
        let to_move = if fields[1] == "w" {
            Color::White
        } else {
            Color::Black
        };
        let halfmove_clock = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove_number = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        let mut game = Game {
            current,
            boards: Vec::new(),
            moves: Vec::new(),
            to_move,
            halfmove_clock,
            fullmove_number,
            status: Status::NONE,
        };
        game.status = game.initial_status();
        #[cfg(feature = "logging")]
        log::trace!("game constructed from FEN, status {:?}", game.status);
        Ok(game)
    }

    /// Status checks run at construction: a checkmate of either color, a
    /// stalemate of the side to move, or an exhausted fifty-move clock makes
    /// the game start ended.
    fn initial_status(&self) -> Status {
        let mut status = Status::NONE;
        if self.current.is_checkmate(self.to_move)
            || self.current.is_checkmate(self.to_move.opponent())
        {
            status |= Status::CHECKMATE;
        }
        if self.current.is_stalemate(self.to_move) {
            status |= Status::STALEMATE;
        }
        if self.halfmove_clock >= 100 {
            status |= Status::FIFTY_MOVE;
        }
        status
    }

    /// The current board.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.current
    }

    /// The prior boards, deepest first.
    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.boards
    }

    /// The moves applied so far.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The color to move.
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Color {
        self.to_move
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// The full-move number, incremented after each of Black's moves.
    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The terminal-status bitset.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns true if any terminal status is set.
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !self.status.is_empty()
    }

    /// The legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        self.current.legal_moves(self.to_move)
    }

    /// Play a game to completion.
    ///
    /// While no terminal status is set, the legal moves of the side to move
    /// are handed to that side's chooser, which returns the selected
    /// move/board pair; the pair is applied and the turn flips. Returns the
    /// final status.
    pub fn play<W, B>(&mut self, mut white: W, mut black: B) -> Status
    where
        W: FnMut(&[(Move, Board)]) -> (Move, Board),
        B: FnMut(&[(Move, Board)]) -> (Move, Board),
    {
        while self.status.is_empty() {
            let legal = self.legal_moves();
            let (mv, board) = match self.to_move {
                Color::White => white(&legal),
                Color::Black => black(&legal),
            };
            self.push(mv, board);
        }
        self.status
    }

    /// Resolve a move in algebraic notation against the current legal moves
    /// and apply it.
    pub fn play_move(&mut self, notation: &str) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let legal = self.legal_moves();
        let (mv, board) = self.resolve_move(notation, &legal)?;
        self.push(mv, board);
        Ok(mv)
    }

    /// Apply a move/board pair obtained from [`Game::legal_moves`].
    ///
    /// Pushes the previous board and the move onto their stacks, installs the
    /// new board, updates the clocks, recomputes the terminal status for the
    /// next side to move, and flips the turn.
    pub fn push(&mut self, mv: Move, board: Board) {
        self.boards.push(self.current);
        self.moves.push(mv);
        self.current = board;

        if mv.piece() == Piece::Pawn || mv.kind() != MoveKind::Quiet {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.to_move == Color::Black {
            self.fullmove_number += 1;
        }

        self.update_status();
        self.to_move = self.to_move.opponent();
    }

    /// Recompute the status bitset for the side about to move.
    fn update_status(&mut self) {
        let next = self.to_move.opponent();
        let mut status = Status::NONE;
        let in_check = self.current.is_check(next);
        if self.current.is_checkmate_with(next, in_check) {
            status |= Status::CHECKMATE;
        }
        if self.current.is_stalemate_with(next, in_check) {
            status |= Status::STALEMATE;
        }
        if self.halfmove_clock >= 100 {
            status |= Status::FIFTY_MOVE;
        }
        if self.is_threefold_repetition() {
            status |= Status::THREEFOLD;
        }
        self.status = status;
        #[cfg(feature = "logging")]
        if !status.is_empty() {
            log::debug!(
                "game over after {} half-moves: {:?}",
                self.moves.len(),
                status
            );
        }
    }

    /// Returns true if the current position has occurred at least three times.
    ///
    /// Board equality ignores the en-passant target, so positions differing
    /// only in en-passant availability count as repetitions.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let repeats = self
            .boards
            .iter()
            .filter(|board| **board == self.current)
            .count();
        repeats >= 2
    }

    /// Returns true if the fifty-move rule has been hit: no pawn move or
    /// capture in the last fifty full moves.
    #[must_use]
    pub const fn is_fifty_move_rule(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// White's material minus Black's.
    ///
    /// If the status is exactly checkmate, returns the signed-infinity
    /// sentinel for the side to move (`i32::MAX` for White, `i32::MIN` for
    /// Black). Any other terminal status returns 0.
    #[must_use]
    pub fn material_advantage(&self) -> i32 {
        if self.status.is_empty() {
            self.current.material(Color::White) - self.current.material(Color::Black)
        } else if self.status == Status::CHECKMATE {
            match self.to_move {
                Color::White => i32::MAX,
                Color::Black => i32::MIN,
            }
        } else {
            0
        }
    }

    /// Emit the six-field FEN of the current game state.
    #[must_use]
    pub fn fen(&self) -> String {
        let side = match self.to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = self
            .current
            .en_passant()
            .first_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} {} {}",
            self.current.fen_placement(),
            side,
            self.current.castling().fen_fragment(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Chooser that picks a uniformly random element of the legal-move list.
///
/// Panics if the list is empty; [`Game::play`] never calls a chooser with an
/// empty list.
#[must_use]
pub fn choose_random(moves: &[(Move, Board)]) -> (Move, Board) {
    use rand::Rng;
    let idx = rand::thread_rng().gen_range(0..moves.len());
    moves[idx]
}
