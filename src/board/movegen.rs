//! Pseudo-legal and legal move generation, and the check predicates.

use crate::targets;
use crate::types::{
    pop_lsb, Color, Move, MoveKind, Piece, SquareSet, PIECE_KINDS, PROMOTION_KINDS, SQUARES,
};

use super::Board;

/// The legal moves of a position, each paired with the board it produces.
pub type LegalMoves = Vec<(Move, Board)>;

impl Board {
    /// Enumerate the pseudo-legal moves for `color`.
    ///
    /// Pseudo-legal moves respect piece geometry, blocking, and capture rules
    /// but may leave the mover's own king attacked. Castling is not included;
    /// it has no pseudo-legal stage. The ordering is deterministic: piece
    /// kinds pawn through king, sources and targets low index to high.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let own = self.colors[color.index()];
        let opponent = self.colors[color.opponent().index()];
        let mut moves = Vec::new();

        for piece in PIECE_KINDS {
            // pawn captures must see the en-passant square as an enemy
            let enemy = if piece == Piece::Pawn {
                opponent | self.en_passant
            } else {
                opponent
            };
            let mut sources = self.pieces[piece.index()] & own;
            while !sources.is_empty() {
                let from = SQUARES[pop_lsb(&mut sources).index()];
                let targets = match piece {
                    Piece::Pawn => targets::pawn_targets(from, enemy, self.unoccupied, color),
                    Piece::Knight => targets::knight_targets(from, enemy, self.unoccupied),
                    Piece::Bishop => targets::bishop_targets(from, enemy, self.unoccupied),
                    Piece::Rook => targets::rook_targets(from, enemy, self.unoccupied),
                    Piece::Queen => targets::queen_targets(from, enemy, self.unoccupied),
                    Piece::King => targets::king_targets(from, enemy, self.unoccupied),
                };
                push_moves(&mut moves, piece, color, from, targets, enemy);
            }
        }
        moves
    }

    /// Enumerate the legal moves for `color`, each paired with the resulting
    /// board.
    ///
    /// A pseudo-legal move survives if applying it does not leave the mover's
    /// king attacked; legal castling moves are appended afterwards.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> LegalMoves {
        let mut out = Vec::new();
        for mv in self.pseudo_legal_moves(color) {
            let mut board = *self;
            board.make_move(&mv);
            if !board.is_check(color) {
                out.push((mv, board));
            }
        }
        out.extend(self.castling_moves(color));
        out
    }

    /// Available castling moves for `color`, each paired with the resulting
    /// board.
    ///
    /// A castle requires the right to be intact, the rook present on its home
    /// file, both squares the king crosses to be empty, and the king to be
    /// safe on its start, crossed, and final squares. The safety test places
    /// a tentative king on both crossed squares at once so a single check
    /// scan covers all three.
    fn castling_moves(&self, color: Color) -> LegalMoves {
        let mut out = Vec::new();
        let king = self.king(color);
        let rooks = self.pieces[Piece::Rook.index()] & self.colors[color.index()];

        if self.castling.has(color, true) {
            let rook = rooks & SquareSet::FILE_H;
            let crossed = king.shift_east() | king.shift_east().shift_east();
            if !rook.is_empty() && (crossed & self.occupied).is_empty() {
                let king_move = Move::new(
                    Piece::King,
                    color,
                    king,
                    king.shift_east().shift_east(),
                    MoveKind::Castle,
                );
                let rook_move = Move::new(
                    Piece::Rook,
                    color,
                    rook,
                    rook.shift_west().shift_west(),
                    MoveKind::Castle,
                );
                if let Some(board) = self.complete_castle(color, crossed, &king_move, &rook_move) {
                    out.push((king_move, board));
                }
            }
        }
        if self.castling.has(color, false) {
            let rook = rooks & SquareSet::FILE_A;
            let crossed = king.shift_west() | king.shift_west().shift_west();
            if !rook.is_empty() && (crossed & self.occupied).is_empty() {
                let king_move = Move::new(
                    Piece::King,
                    color,
                    king,
                    king.shift_west().shift_west(),
                    MoveKind::Castle,
                );
                let rook_move = Move::new(
                    Piece::Rook,
                    color,
                    rook,
                    rook.shift_east().shift_east().shift_east(),
                    MoveKind::Castle,
                );
                if let Some(board) = self.complete_castle(color, crossed, &king_move, &rook_move) {
                    out.push((king_move, board));
                }
            }
        }
        out
    }

    /// Verify king safety across the castle path and produce the castled
    /// board, or `None` if the path is attacked.
    fn complete_castle(
        &self,
        color: Color,
        crossed: SquareSet,
        king_move: &Move,
        rook_move: &Move,
    ) -> Option<Board> {
        let mut probe = *self;
        probe.place_piece(crossed, Piece::King, color);
        if probe.is_check(color) {
            return None;
        }
        let mut board = *self;
        board.make_move(king_move);
        board.make_move(rook_move);
        Some(board)
    }

    /// Returns true if `color`'s king is attacked in the current position.
    ///
    /// Scans the opponent's pseudo-legal moves for an attack landing on the
    /// king set.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        let king = self.king(color);
        self.pseudo_legal_moves(color.opponent())
            .iter()
            .any(|m| m.kind() == MoveKind::Attack && m.to().intersects(king))
    }

    /// Returns true if `color` is checkmated.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_checkmate_with(color, self.is_check(color))
    }

    /// Checkmate test with a precomputed check flag.
    #[must_use]
    pub fn is_checkmate_with(&self, color: Color, in_check: bool) -> bool {
        in_check && self.legal_moves(color).is_empty()
    }

    /// Returns true if `color` is stalemated.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.is_stalemate_with(color, self.is_check(color))
    }

    /// Stalemate test with a precomputed check flag.
    #[must_use]
    pub fn is_stalemate_with(&self, color: Color, in_check: bool) -> bool {
        !in_check && self.legal_moves(color).is_empty()
    }

    /// Count the legal move paths of the given depth starting with `color`.
    ///
    /// Test tooling for the move generator; not part of the rules machinery.
    #[must_use]
    pub fn perft(&self, depth: u32, color: Color) -> u64 {
        if depth == 0 {
            return 1;
        }
        self.legal_moves(color)
            .iter()
            .map(|(_, board)| board.perft(depth - 1, color.opponent()))
            .sum()
    }
}

/// Convert a target set into move records, expanding pawn moves onto the end
/// ranks into one move per promotion kind.
fn push_moves(
    moves: &mut Vec<Move>,
    piece: Piece,
    color: Color,
    from: SquareSet,
    targets: SquareSet,
    enemy: SquareSet,
) {
    let mut remaining = targets;
    while !remaining.is_empty() {
        let to = SQUARES[pop_lsb(&mut remaining).index()];
        let kind = if to.intersects(enemy) {
            MoveKind::Attack
        } else {
            MoveKind::Quiet
        };
        if piece == Piece::Pawn && to.intersects(SquareSet::END_RANKS) {
            for promotion in PROMOTION_KINDS {
                moves.push(Move::new(piece, color, from, to, kind).with_promotion(Some(promotion)));
            }
        } else {
            moves.push(Move::new(piece, color, from, to, kind));
        }
    }
}
