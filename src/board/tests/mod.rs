//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - FEN parsing and emission
//! - `movegen.rs` - Pseudo-legal move generation
//! - `legality.rs` - Legal filtering, castling, check predicates
//! - `make_move.rs` - Move application
//! - `perft.rs` - Move-path counts for known positions
//! - `proptest.rs` - Property-based invariant tests

mod legality;
