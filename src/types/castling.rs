//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const WHITE_KINGSIDE: u8 = 1 << 0;
const WHITE_QUEENSIDE: u8 = 1 << 1;
const BLACK_KINGSIDE: u8 = 1 << 2;
const BLACK_QUEENSIDE: u8 = 1 << 3;

const ALL_RIGHTS: u8 = WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE;

/// Castling rights for both colors, represented as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights.
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside).
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_RIGHTS)
    }

    /// Check if a specific castling right is set.
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right.
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right.
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both castling rights for a color.
    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        self.0 &= !(Self::bit_for(color, true) | Self::bit_for(color, false));
    }

    /// Render the rights as the FEN castling field ("KQkq" subsets or "-").
    #[must_use]
    pub fn fen_fragment(self) -> String {
        let mut out = String::new();
        if self.has(Color::White, true) {
            out.push('K');
        }
        if self.has(Color::White, false) {
            out.push('Q');
        }
        if self.has(Color::Black, true) {
            out.push('k');
        }
        if self.has(Color::Black, false) {
            out.push('q');
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_KINGSIDE,
            (Color::White, false) => WHITE_QUEENSIDE,
            (Color::Black, true) => BLACK_KINGSIDE,
            (Color::Black, false) => BLACK_QUEENSIDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_lifecycle() {
        let mut rights = CastlingRights::all();
        assert!(rights.has(Color::White, true));
        assert!(rights.has(Color::Black, false));

        rights.remove(Color::White, true);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));

        rights.clear_color(Color::Black);
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));

        rights.set(Color::Black, true);
        assert!(rights.has(Color::Black, true));
    }

    #[test]
    fn test_fen_fragment() {
        assert_eq!(CastlingRights::all().fen_fragment(), "KQkq");
        assert_eq!(CastlingRights::none().fen_fragment(), "-");

        let mut rights = CastlingRights::all();
        rights.remove(Color::White, false);
        rights.remove(Color::Black, true);
        assert_eq!(rights.fen_fragment(), "Kq");
    }
}
