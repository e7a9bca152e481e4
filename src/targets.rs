//! Per-piece target generation.
//!
//! Each routine takes a source square (a singleton [`SquareSet`]) together
//! with the enemy and unoccupied sets and returns every square the piece can
//! move to under standard chess geometry. Sliding pieces ride Kogge-Stone
//! fills over the unoccupied set; knight and king steps come from tables
//! precomputed once at first use.
//!
//! `enemy` never contains own pieces, so self-capture is impossible by
//! construction. For pawn capture generation the caller must fold the
//! en-passant square into `enemy`.

use once_cell::sync::Lazy;

use crate::types::{Color, SquareSet, SQUARES};

/// Knight step sets indexed by source square.
static KNIGHT_STEPS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    let mut steps = [SquareSet::EMPTY; 64];
    for (sq, slot) in steps.iter_mut().enumerate() {
        let origin = SQUARES[sq];
        let east_one = origin.shift_east();
        let west_one = origin.shift_west();
        // one file over, two ranks up or down
        let one_shift = east_one | west_one;
        // two files over, one rank up or down
        let two_shift = east_one.shift_east() | west_one.shift_west();
        *slot = one_shift.shift_north().shift_north()
            | one_shift.shift_south().shift_south()
            | two_shift.shift_north()
            | two_shift.shift_south();
    }
    steps
});

/// King step sets indexed by source square.
static KING_STEPS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    let mut steps = [SquareSet::EMPTY; 64];
    for (sq, slot) in steps.iter_mut().enumerate() {
        let origin = SQUARES[sq];
        *slot = origin.shift_north()
            | origin.shift_northeast()
            | origin.shift_east()
            | origin.shift_southeast()
            | origin.shift_south()
            | origin.shift_southwest()
            | origin.shift_west()
            | origin.shift_northwest();
    }
    steps
});

/// Squares a knight on `origin` can move to.
#[must_use]
pub fn knight_targets(origin: SquareSet, enemy: SquareSet, unoccupied: SquareSet) -> SquareSet {
    let Some(sq) = origin.first_square() else {
        return SquareSet::EMPTY;
    };
    KNIGHT_STEPS[sq.index()] & (enemy | unoccupied)
}

/// Squares a king on `origin` can move to (castling excluded).
#[must_use]
pub fn king_targets(origin: SquareSet, enemy: SquareSet, unoccupied: SquareSet) -> SquareSet {
    let Some(sq) = origin.first_square() else {
        return SquareSet::EMPTY;
    };
    KING_STEPS[sq.index()] & (enemy | unoccupied)
}

/// Squares a bishop on `origin` can move to.
///
/// Each diagonal fill runs over the unoccupied set and is then extended one
/// further step onto a blocking enemy piece.
#[must_use]
pub fn bishop_targets(origin: SquareSet, enemy: SquareSet, unoccupied: SquareSet) -> SquareSet {
    let mut northeast = origin.fill_northeast(unoccupied);
    northeast |= northeast.shift_northeast() & enemy;
    let mut southeast = origin.fill_southeast(unoccupied);
    southeast |= southeast.shift_southeast() & enemy;
    let mut northwest = origin.fill_northwest(unoccupied);
    northwest |= northwest.shift_northwest() & enemy;
    let mut southwest = origin.fill_southwest(unoccupied);
    southwest |= southwest.shift_southwest() & enemy;
    // fills include the origin square
    (northeast | southeast | northwest | southwest) ^ origin
}

/// Squares a rook on `origin` can move to.
#[must_use]
pub fn rook_targets(origin: SquareSet, enemy: SquareSet, unoccupied: SquareSet) -> SquareSet {
    let mut north = origin.fill_north(unoccupied);
    north |= north.shift_north() & enemy;
    let mut east = origin.fill_east(unoccupied);
    east |= east.shift_east() & enemy;
    let mut south = origin.fill_south(unoccupied);
    south |= south.shift_south() & enemy;
    let mut west = origin.fill_west(unoccupied);
    west |= west.shift_west() & enemy;
    (north | east | south | west) ^ origin
}

/// Squares a queen on `origin` can move to.
#[must_use]
pub fn queen_targets(origin: SquareSet, enemy: SquareSet, unoccupied: SquareSet) -> SquareSet {
    rook_targets(origin, enemy, unoccupied) | bishop_targets(origin, enemy, unoccupied)
}

/// Squares a pawn of `color` on `origin` can move to.
///
/// `enemy` must already include the en-passant square, if any.
#[must_use]
pub fn pawn_targets(
    origin: SquareSet,
    enemy: SquareSet,
    unoccupied: SquareSet,
    color: Color,
) -> SquareSet {
    match color {
        Color::White => {
            let single_push = origin.shift_north() & unoccupied;
            // the rank gate restricts double pushes to pawns off their home rank
            let double_push = single_push.shift_north() & unoccupied & SquareSet::RANK_4;
            let attack_east = origin.shift_northeast() & enemy;
            let attack_west = origin.shift_northwest() & enemy;
            single_push | double_push | attack_east | attack_west
        }
        Color::Black => {
            let single_push = origin.shift_south() & unoccupied;
            let double_push = single_push.shift_south() & unoccupied & SquareSet::RANK_5;
            let attack_east = origin.shift_southeast() & enemy;
            let attack_west = origin.shift_southwest() & enemy;
            single_push | double_push | attack_east | attack_west
        }
    }
}
