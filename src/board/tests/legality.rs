//! Legal filtering, castling, and check-predicate tests.

use crate::board::{Board, LegalMoves};
use crate::types::{Color, Move, MoveKind, Piece, SQUARES};

fn find_board(legal: &LegalMoves, mv: &Move) -> Option<Board> {
    legal
        .iter()
        .find(|(candidate, _)| candidate == mv)
        .map(|(_, board)| *board)
}

fn is_legal(board: &Board, color: Color, mv: &Move) -> bool {
    board.legal_moves(color).iter().any(|(m, _)| m == mv)
}

#[test]
fn test_pinned_pawn_cannot_push() {
    // the d2 pawn shields the king from the h2 rook
    let board = Board::from_fen("7k/8/8/8/8/8/2KP3r/8 w - - 0 3").unwrap();
    let mv = Move::new(
        Piece::Pawn,
        Color::White,
        SQUARES[11],
        SQUARES[19],
        MoveKind::Quiet,
    );
    assert!(!is_legal(&board, Color::White, &mv));
}

#[test]
fn test_legal_moves_never_leave_own_king_attacked() {
    let board = Board::from_fen("7k/8/8/8/8/8/2KP3r/8 w - - 0 3").unwrap();
    for (_, result) in board.legal_moves(Color::White) {
        assert!(!result.is_check(Color::White));
    }
}

#[test]
fn test_kingside_castle_white() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::White,
        SQUARES[4],
        SQUARES[6],
        MoveKind::Castle,
    );
    assert!(is_legal(&board, Color::White, &mv));
}

#[test]
fn test_kingside_castle_white_board() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let expected = Board::from_fen("r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::White,
        SQUARES[4],
        SQUARES[6],
        MoveKind::Castle,
    );
    let result = find_board(&board.legal_moves(Color::White), &mv).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_queenside_castle_white() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::White,
        SQUARES[4],
        SQUARES[2],
        MoveKind::Castle,
    );
    assert!(is_legal(&board, Color::White, &mv));
}

#[test]
fn test_queenside_castle_white_board() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let expected = Board::from_fen("r3k2r/8/8/8/8/8/8/2KR3R b kq - 1 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::White,
        SQUARES[4],
        SQUARES[2],
        MoveKind::Castle,
    );
    let result = find_board(&board.legal_moves(Color::White), &mv).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_kingside_castle_black_board() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let expected = Board::from_fen("r4rk1/8/8/8/8/8/8/R3K2R w KQ - 1 2").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::Black,
        SQUARES[60],
        SQUARES[62],
        MoveKind::Castle,
    );
    let result = find_board(&board.legal_moves(Color::Black), &mv).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_queenside_castle_black_board() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let expected = Board::from_fen("2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::Black,
        SQUARES[60],
        SQUARES[58],
        MoveKind::Castle,
    );
    let result = find_board(&board.legal_moves(Color::Black), &mv).unwrap();
    assert_eq!(result, expected);
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    // the g2 pawn attacks f1
    let board = Board::from_fen("4k3/8/8/8/8/8/6p1/4K2R w K - 0 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::White,
        SQUARES[4],
        SQUARES[6],
        MoveKind::Castle,
    );
    assert!(!is_legal(&board, Color::White, &mv));
}

#[test]
fn test_cannot_castle_out_of_check() {
    // the e2 rook checks the king on e1
    let board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::White,
        SQUARES[4],
        SQUARES[6],
        MoveKind::Castle,
    );
    assert!(!is_legal(&board, Color::White, &mv));
}

#[test]
fn test_cannot_castle_over_enemy_piece() {
    // a knight on f8 blocks the black kingside castle
    let board = Board::from_fen("4kN1r/8/8/8/8/8/8/4K3 b k - 0 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::Black,
        SQUARES[60],
        SQUARES[62],
        MoveKind::Castle,
    );
    assert!(!is_legal(&board, Color::Black, &mv));
}

#[test]
fn test_cannot_castle_over_friendly_piece() {
    // a bishop on f8 blocks the black kingside castle
    let board = Board::from_fen("4kb1r/8/8/8/8/8/8/4K3 b k - 0 1").unwrap();
    let mv = Move::new(
        Piece::King,
        Color::Black,
        SQUARES[60],
        SQUARES[62],
        MoveKind::Castle,
    );
    assert!(!is_legal(&board, Color::Black, &mv));
}

#[test]
fn test_no_castle_without_right() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    let castles: Vec<Move> = board
        .legal_moves(Color::White)
        .into_iter()
        .map(|(m, _)| m)
        .filter(|m| m.kind() == MoveKind::Castle)
        .collect();
    assert!(castles.is_empty());
}

#[test]
fn test_is_check() {
    let board = Board::from_fen("4k2r/8/8/8/8/8/4R3/4K3 b k - 0 1").unwrap();
    assert!(board.is_check(Color::Black));
    assert!(!board.is_check(Color::White));
}

#[test]
fn test_is_not_check() {
    let board = Board::from_fen("4k2r/8/8/8/8/8/3R4/4K3 w k - 0 1").unwrap();
    assert!(!board.is_check(Color::Black));
}

#[test]
fn test_is_checkmate() {
    let board =
        Board::from_fen("rnbqkbnr/ppppp2p/5p2/6pQ/4P3/3P4/PPP2PPP/RNB1KBNR w KQkq - 0 1").unwrap();
    assert!(board.is_checkmate(Color::Black));
    assert!(!board.is_checkmate(Color::White));
}

#[test]
fn test_start_position_is_not_checkmate() {
    let board = Board::new();
    assert!(!board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
}

#[test]
fn test_is_stalemate() {
    let board = Board::from_fen("8/8/8/8/8/5n1p/5k2/7K w - - 0 1").unwrap();
    assert!(board.is_stalemate(Color::White));
    assert!(!board.is_checkmate(Color::White));
}

#[test]
fn test_check_predicates_are_pure() {
    let board =
        Board::from_fen("rnbqkbnr/ppppp2p/5p2/6pQ/4P3/3P4/PPP2PPP/RNB1KBNR w KQkq - 0 1").unwrap();
    assert_eq!(board.is_check(Color::Black), board.is_check(Color::Black));
    assert_eq!(
        board.is_checkmate(Color::Black),
        board.is_checkmate(Color::Black)
    );
    assert_eq!(
        board.is_stalemate(Color::Black),
        board.is_stalemate(Color::Black)
    );
}

#[test]
fn test_legal_move_count_startpos() {
    let board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
}
