//! Debug-build invariant checks.

use crate::types::{Color, SquareSet, PIECE_KINDS};

use super::Board;

impl Board {
    /// Verify the structural invariants of the position. Debug builds run
    /// this after every applied move.
    pub(crate) fn assert_invariants(&self) {
        // piece-kind sets are pairwise disjoint
        for (i, a) in PIECE_KINDS.iter().enumerate() {
            for b in &PIECE_KINDS[i + 1..] {
                debug_assert!(
                    !self.pieces[a.index()].intersects(self.pieces[b.index()]),
                    "piece sets {a:?} and {b:?} overlap"
                );
            }
        }

        // colors partition the occupancy
        let white = self.colors[Color::White.index()];
        let black = self.colors[Color::Black.index()];
        debug_assert!(!white.intersects(black), "color sets overlap");
        debug_assert_eq!(white | black, self.occupied, "colors do not cover occupied");

        // the union of the piece sets is the occupancy
        let mut union = SquareSet::EMPTY;
        for p in PIECE_KINDS {
            union |= self.pieces[p.index()];
        }
        debug_assert_eq!(union, self.occupied, "piece sets do not cover occupied");

        // occupied and unoccupied partition the universe
        debug_assert_eq!(self.occupied | self.unoccupied, SquareSet::UNIVERSE);
        debug_assert!(!self.occupied.intersects(self.unoccupied));

        // en passant holds at most one square, on rank 3 or rank 6
        debug_assert!(self.en_passant.count() <= 1, "multiple en-passant squares");
        debug_assert_eq!(
            self.en_passant & !(SquareSet::RANK_3 | SquareSet::RANK_6),
            SquareSet::EMPTY,
            "en-passant square off ranks 3 and 6"
        );
    }
}
